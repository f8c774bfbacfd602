//! Motion domain: character tunables and simulation settings.

use bevy::prelude::*;
use serde::Deserialize;

/// Tunables for one character. Read-only to the controller once a session starts.
///
/// Vertical quantities are signed in world space: `gravity`, `apex_gravity`,
/// `fast_fall_speed` and `max_fall_speed` are negative for a downward pull.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct CharacterStats {
    pub gravity: f32,
    /// Reduced gravity applied while hanging at the top of a jump.
    pub apex_gravity: f32,
    pub horizontal_accel: f32,
    pub max_horizontal_speed: f32,
    /// Floor on vertical velocity.
    pub max_fall_speed: f32,
    pub jump_strength: f32,
    pub ground_friction: f32,
    /// Gravity used for the rest of the ascent after jump is released early.
    pub fast_fall_speed: f32,
    pub max_apex_time: f32,
    pub apex_y_vel: f32,
    pub apex_x_vel: f32,
    pub coyote_time: f32,
}

impl Default for CharacterStats {
    fn default() -> Self {
        Self {
            gravity: -100.0,
            apex_gravity: -50.0,
            horizontal_accel: 130.0,
            max_horizontal_speed: 15.0,
            max_fall_speed: -25.0,
            jump_strength: 60.0,
            ground_friction: 90.0,
            fast_fall_speed: -500.0,
            max_apex_time: 2.0,
            apex_y_vel: 10.0,
            apex_x_vel: 10.0,
            coyote_time: 5.0,
        }
    }
}

impl CharacterStats {
    /// Height gained by a held jump before the apex modifier kicks in.
    /// Uses h = v² / (2g) against base gravity.
    pub fn single_jump_height(&self) -> f32 {
        self.jump_strength * self.jump_strength / (2.0 * self.gravity.abs())
    }

    /// Seconds from take-off until vertical velocity reaches zero under base gravity.
    pub fn time_to_apex(&self) -> f32 {
        self.jump_strength / self.gravity.abs()
    }
}

/// Simulation-wide settings for the demo host.
#[derive(Resource, Debug, Clone)]
pub struct MotionSettings {
    /// Fixed simulation rate in ticks per second.
    pub tick_hz: f64,
    /// Full width and height of a character's bounding box.
    pub character_size: Vec2,
    pub spawn_point: Vec2,
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self {
            tick_hz: 64.0,
            character_size: Vec2::new(1.0, 1.0),
            spawn_point: Vec2::new(0.0, 4.0),
        }
    }
}
