//! Motion domain: per-character mutable simulation record.

use bevy::prelude::*;

/// Everything a controller mutates during a tick.
///
/// Created at spawn with zero velocity and cleared flags. The phase functions
/// take it by exclusive reference in a fixed order; nothing else writes to it.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct MotionState {
    pub velocity: Vec2,
    /// Centre of the character's bounding box.
    pub position: Vec2,
    /// True iff the downward probe hit on the last resolution.
    pub grounded: bool,
    /// Airborne timer is running; the next ground contact zeroes vertical velocity.
    pub has_grounded: bool,
    pub not_grounded_time: f32,
    pub has_jumped: bool,
    pub released_jump_early: bool,
    pub applied_gravity: f32,
    pub apex_time: f32,
    pub in_apex: bool,
    pub has_apexed: bool,
}

impl MotionState {
    pub fn at(position: Vec2) -> Self {
        Self {
            position,
            ..default()
        }
    }

    /// Coarse phase label, mostly for logs and debug overlays.
    pub fn phase(&self) -> MotionPhase {
        if self.grounded {
            MotionPhase::Grounded
        } else if self.in_apex {
            MotionPhase::Apex
        } else if self.velocity.y > 0.0 && self.released_jump_early {
            MotionPhase::FastFalling
        } else if self.velocity.y > 0.0 {
            MotionPhase::Ascending
        } else {
            MotionPhase::Falling
        }
    }

    pub fn is_finite(&self) -> bool {
        self.velocity.is_finite()
            && self.position.is_finite()
            && self.not_grounded_time.is_finite()
            && self.applied_gravity.is_finite()
            && self.apex_time.is_finite()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MotionPhase {
    Grounded,
    Ascending,
    Apex,
    FastFalling,
    Falling,
}
