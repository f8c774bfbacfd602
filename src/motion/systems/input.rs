//! Motion domain: keyboard sampling into the shared input signals.

use bevy::prelude::*;

use crate::motion::{InputDirection, SharedInput};

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, input: Res<SharedInput>) {
    let signals = &input.0;

    signals.set(
        InputDirection::Up,
        keyboard.any_pressed([KeyCode::KeyW, KeyCode::ArrowUp, KeyCode::Space]),
    );
    signals.set(
        InputDirection::Down,
        keyboard.any_pressed([KeyCode::KeyS, KeyCode::ArrowDown]),
    );
    signals.set(
        InputDirection::Left,
        keyboard.any_pressed([KeyCode::KeyA, KeyCode::ArrowLeft]),
    );
    signals.set(
        InputDirection::Right,
        keyboard.any_pressed([KeyCode::KeyD, KeyCode::ArrowRight]),
    );
}
