//! Motion domain: the per-tick phase functions and the controller that sequences them.

use std::fmt;

use bevy::prelude::*;

use crate::motion::{
    Aabb, CharacterStats, CollisionQuery, InputSource, InputState, MotionState, ProbeHits, probe,
    resolve_collisions,
};

/// Vertical speed at or below which a rising jump enters the apex hang.
pub const APEX_VELOCITY_THRESHOLD: f32 = 1.0;

/// Step `current` toward `target` by at most `max_delta`, never overshooting.
pub fn move_towards(current: f32, target: f32, max_delta: f32) -> f32 {
    let delta = target - current;
    if delta.abs() <= max_delta {
        target
    } else {
        current + delta.signum() * max_delta
    }
}

/// Horizontal phase. Friction only opposes motion; speed is capped later in [`integrate`].
pub fn apply_horizontal(
    stats: &CharacterStats,
    state: &mut MotionState,
    input: InputState,
    dt: f32,
) {
    let friction = stats.ground_friction * dt;
    let accel = stats.horizontal_accel * dt;

    match (input.left, input.right) {
        (true, true) => {}
        (true, false) => {
            // Counter-strafe drag while still moving right
            if state.velocity.x > 0.0 {
                state.velocity.x = move_towards(state.velocity.x, 0.0, friction);
            }
            state.velocity.x -= accel;
        }
        (false, true) => {
            if state.velocity.x < 0.0 {
                state.velocity.x = move_towards(state.velocity.x, 0.0, friction);
            }
            state.velocity.x += accel;
        }
        (false, false) => {
            state.velocity.x = move_towards(state.velocity.x, 0.0, friction);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    Ground,
    /// Jumped during the grace window after walking off a ledge.
    Coyote,
}

/// Transitions taken by the vertical phase this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VerticalReport {
    pub jump: Option<JumpKind>,
    pub released_early: bool,
    pub apex_entered: bool,
    pub apex_expired: bool,
}

/// Vertical phase: jump trigger, grounded reset or airborne gravity selection,
/// then gravity integration.
pub fn apply_vertical(
    stats: &CharacterStats,
    state: &mut MotionState,
    input: InputState,
    dt: f32,
) -> VerticalReport {
    let mut report = VerticalReport::default();

    let can_coyote_jump = state.not_grounded_time < stats.coyote_time && !state.has_jumped;
    if input.up && (state.grounded || can_coyote_jump) {
        report.jump = Some(if state.grounded {
            JumpKind::Ground
        } else {
            JumpKind::Coyote
        });
        jump(stats, state);
    }

    if state.grounded {
        state.has_jumped = false;
        state.applied_gravity = 0.0;
        state.released_jump_early = false;
    } else {
        state.applied_gravity = stats.gravity;
        report.released_early = apply_variable_jump(stats, state, input);
        apply_apex_modifier(stats, state, dt, &mut report);
    }

    state.velocity.y += state.applied_gravity * dt;
    report
}

fn jump(stats: &CharacterStats, state: &mut MotionState) {
    state.grounded = false;
    state.has_jumped = true;
    state.velocity.y = stats.jump_strength;
    state.released_jump_early = false;
    state.apex_time = 0.0;
    state.in_apex = false;
    state.has_apexed = false;
}

/// Returns true on the tick the jump input is first released during the ascent.
fn apply_variable_jump(stats: &CharacterStats, state: &mut MotionState, input: InputState) -> bool {
    if state.velocity.y <= 0.0 {
        return false;
    }

    let mut released_now = false;
    if !input.up && !state.released_jump_early {
        state.released_jump_early = true;
        // A cut jump never hangs, even mid-apex.
        state.in_apex = false;
        released_now = true;
    }
    if state.released_jump_early {
        state.applied_gravity = stats.fast_fall_speed;
    }
    released_now
}

fn apply_apex_modifier(
    stats: &CharacterStats,
    state: &mut MotionState,
    dt: f32,
    report: &mut VerticalReport,
) {
    if state.released_jump_early {
        return;
    }

    if state.velocity.y <= APEX_VELOCITY_THRESHOLD && !state.has_apexed {
        state.in_apex = true;
        state.has_apexed = true;
        state.velocity.y = stats.apex_y_vel;
        if state.velocity.x != 0.0 {
            state.velocity.x += state.velocity.x.signum() * stats.apex_x_vel;
        }
        report.apex_entered = true;
    }

    if state.in_apex {
        // Hang gravity only for ticks that still fit inside the window.
        state.apex_time += dt;
        if state.apex_time > stats.max_apex_time {
            state.in_apex = false;
            report.apex_expired = true;
        } else {
            state.applied_gravity = stats.apex_gravity;
        }
    }
}

/// Final phase: clamp to the configured caps, then move.
pub fn integrate(stats: &CharacterStats, state: &mut MotionState, dt: f32) {
    let cap = stats.max_horizontal_speed;
    state.velocity.x = state.velocity.x.max(-cap).min(cap);
    state.velocity.y = state.velocity.y.max(stats.max_fall_speed);
    state.position += state.velocity * dt;
}

/// Everything notable that happened during one [`MotionController::step`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StepReport {
    pub jump: Option<JumpKind>,
    pub released_early: bool,
    pub apex_entered: bool,
    pub apex_expired: bool,
    /// First grounded tick after being airborne.
    pub landed: bool,
    /// First airborne tick after being grounded.
    pub left_ground: bool,
    pub hits: ProbeHits,
}

/// Drives one character through the four phases, once per fixed tick.
#[derive(Component)]
pub struct MotionController {
    stats: CharacterStats,
    input: Box<dyn InputSource>,
    size: Vec2,
    state: MotionState,
    last_hits: ProbeHits,
}

impl MotionController {
    /// `size` is the full width and height of the character's bounding box;
    /// `spawn` is its centre.
    pub fn new(
        stats: CharacterStats,
        input: impl InputSource + 'static,
        size: Vec2,
        spawn: Vec2,
    ) -> Self {
        Self {
            stats,
            input: Box::new(input),
            size,
            state: MotionState::at(spawn),
            last_hits: ProbeHits::default(),
        }
    }

    pub fn with_state(mut self, state: MotionState) -> Self {
        self.state = state;
        self
    }

    pub fn stats(&self) -> &CharacterStats {
        &self.stats
    }

    pub fn state(&self) -> &MotionState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut MotionState {
        &mut self.state
    }

    pub fn position(&self) -> Vec2 {
        self.state.position
    }

    pub fn velocity(&self) -> Vec2 {
        self.state.velocity
    }

    pub fn size(&self) -> Vec2 {
        self.size
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.state.position, self.size)
    }

    /// Probe results from the most recent tick.
    pub fn last_hits(&self) -> &ProbeHits {
        &self.last_hits
    }

    /// Run one fixed tick: horizontal, vertical, collision, integration.
    ///
    /// Input is read once up front so every phase sees the same snapshot.
    pub fn step(&mut self, world: &(impl CollisionQuery + ?Sized), dt: f32) -> StepReport {
        let input = self.input.snapshot();

        apply_horizontal(&self.stats, &mut self.state, input, dt);
        let vertical = apply_vertical(&self.stats, &mut self.state, input, dt);

        let was_airborne = self.state.has_grounded;
        let hits = probe(world, self.bounds());
        resolve_collisions(&mut self.state, &hits, dt);
        self.last_hits = hits;

        let landed = self.state.grounded && was_airborne;

        integrate(&self.stats, &mut self.state, dt);

        StepReport {
            jump: vertical.jump,
            released_early: vertical.released_early,
            apex_entered: vertical.apex_entered,
            apex_expired: vertical.apex_expired,
            landed,
            left_ground: !self.state.grounded && !was_airborne,
            hits,
        }
    }
}

impl fmt::Debug for MotionController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MotionController")
            .field("stats", &self.stats)
            .field("size", &self.size)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
