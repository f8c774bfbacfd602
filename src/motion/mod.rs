//! Motion domain: fixed-tick platformer locomotion.
//!
//! Each tick a [`MotionController`] reads one input snapshot and runs four
//! phases over its [`MotionState`]: horizontal velocity, vertical velocity
//! (jump, coyote time, variable jump, apex hang), collision resolution from
//! four face probes, and clamped position integration.

mod collision;
mod components;
mod controller;
pub mod dev;
mod input;
mod resources;
mod state;
pub(crate) mod systems;


use bevy::input::InputSystems;
use bevy::prelude::*;

use crate::core::{GameplayPaused, gameplay_active};

pub use collision::{
    Aabb, CastHit, CollisionQuery, PROBE_DISTANCE, PROBE_INSET, PROBE_SPAN, PROBE_THICKNESS,
    ProbeBox, ProbeHits, probe, resolve_collisions,
};
pub use components::{GameLayer, Ground, Player, Wall};
pub use controller::{
    APEX_VELOCITY_THRESHOLD, JumpKind, MotionController, StepReport, VerticalReport,
    apply_horizontal, apply_vertical, integrate, move_towards,
};
pub use input::{InputDirection, InputSignals, InputSource, InputState, SharedInput};
pub use resources::{CharacterStats, MotionSettings};
pub use state::{MotionPhase, MotionState};

use systems::{read_input, step_controllers, sync_transforms};

pub struct MotionPlugin;

impl Plugin for MotionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CharacterStats>()
            .init_resource::<MotionSettings>()
            .init_resource::<SharedInput>()
            .init_resource::<GameplayPaused>();

        let tick_hz = app.world().resource::<MotionSettings>().tick_hz;
        app.insert_resource(Time::<Fixed>::from_hz(tick_hz))
            .add_systems(PreUpdate, read_input.after(InputSystems))
            .add_systems(
                FixedUpdate,
                (step_controllers, sync_transforms)
                    .chain()
                    .run_if(gameplay_active),
            );
    }
}
