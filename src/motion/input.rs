//! Motion domain: directional input snapshot and the providers that feed it.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use bevy::prelude::*;

/// The four directional signals read by a controller at the start of a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InputState {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputDirection {
    Up,
    Down,
    Left,
    Right,
}

/// Anything a controller can pull an [`InputState`] from once per tick.
pub trait InputSource: Send + Sync {
    fn snapshot(&self) -> InputState;
}

impl InputSource for InputState {
    fn snapshot(&self) -> InputState {
        *self
    }
}

/// Single-writer input flags shared between the input layer and controllers.
///
/// The writer flips individual directions as press/release events arrive;
/// readers only ever take a whole copy through [`InputSource::snapshot`].
#[derive(Debug, Default)]
pub struct InputSignals {
    up: AtomicBool,
    down: AtomicBool,
    left: AtomicBool,
    right: AtomicBool,
}

impl InputSignals {
    pub fn new() -> Self {
        Self::default()
    }

    fn flag(&self, direction: InputDirection) -> &AtomicBool {
        match direction {
            InputDirection::Up => &self.up,
            InputDirection::Down => &self.down,
            InputDirection::Left => &self.left,
            InputDirection::Right => &self.right,
        }
    }

    pub fn set(&self, direction: InputDirection, held: bool) {
        self.flag(direction).store(held, Ordering::Relaxed);
    }

    pub fn press(&self, direction: InputDirection) {
        self.set(direction, true);
    }

    pub fn release(&self, direction: InputDirection) {
        self.set(direction, false);
    }

    /// Release every direction.
    pub fn clear(&self) {
        for direction in [
            InputDirection::Up,
            InputDirection::Down,
            InputDirection::Left,
            InputDirection::Right,
        ] {
            self.release(direction);
        }
    }
}

impl InputSource for InputSignals {
    fn snapshot(&self) -> InputState {
        InputState {
            up: self.up.load(Ordering::Relaxed),
            down: self.down.load(Ordering::Relaxed),
            left: self.left.load(Ordering::Relaxed),
            right: self.right.load(Ordering::Relaxed),
        }
    }
}

impl<T: InputSource + ?Sized> InputSource for Arc<T> {
    fn snapshot(&self) -> InputState {
        (**self).snapshot()
    }
}

/// Handle to the process's keyboard-driven input signals.
///
/// Controllers receive a clone of the inner `Arc` at spawn.
#[derive(Resource, Debug, Clone, Default)]
pub struct SharedInput(pub Arc<InputSignals>);

impl SharedInput {
    pub fn handle(&self) -> Arc<InputSignals> {
        Arc::clone(&self.0)
    }
}
