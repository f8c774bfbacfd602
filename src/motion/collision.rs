//! Motion domain: the four face probes and how their hits constrain velocity.

use bevy::prelude::*;

use crate::motion::MotionState;

/// How far each probe sweeps past its face.
pub const PROBE_DISTANCE: f32 = 0.05;
/// Probe thickness along the cast axis, as a fraction of the box size.
pub const PROBE_THICKNESS: f32 = 0.1;
/// Probe width across the cast axis, as a fraction of the box size.
pub const PROBE_SPAN: f32 = 0.5;
/// Distance from the box centre to the probe centre, as a fraction of the box size.
pub const PROBE_INSET: f32 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CastHit {
    /// World-space contact point.
    pub point: Vec2,
    /// Distance travelled along the cast before contact. Zero when already touching.
    pub distance: f32,
}

/// Box-cast primitive supplied by whatever owns the world geometry.
pub trait CollisionQuery {
    fn cast(
        &self,
        origin: Vec2,
        half_extent: Vec2,
        direction: Dir2,
        max_distance: f32,
    ) -> Option<CastHit>;
}

impl<T: CollisionQuery + ?Sized> CollisionQuery for &T {
    fn cast(
        &self,
        origin: Vec2,
        half_extent: Vec2,
        direction: Dir2,
        max_distance: f32,
    ) -> Option<CastHit> {
        (**self).cast(origin, half_extent, direction, max_distance)
    }
}

/// Axis-aligned bounding box of a character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub center: Vec2,
    /// Full width and height.
    pub size: Vec2,
}

impl Aabb {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    pub fn half_extents(&self) -> Vec2 {
        self.size * 0.5
    }

    pub fn min(&self) -> Vec2 {
        self.center - self.half_extents()
    }

    pub fn max(&self) -> Vec2 {
        self.center + self.half_extents()
    }

    /// The four probes in cast order: down, up, left, right.
    pub fn probe_boxes(&self) -> [ProbeBox; 4] {
        let size = self.size;
        let vertical_half = Vec2::new(size.x * PROBE_SPAN, size.y * PROBE_THICKNESS) * 0.5;
        let horizontal_half = Vec2::new(size.x * PROBE_THICKNESS, size.y * PROBE_SPAN) * 0.5;
        let vertical_offset = Vec2::new(0.0, size.y * PROBE_INSET);
        let horizontal_offset = Vec2::new(size.x * PROBE_INSET, 0.0);

        [
            ProbeBox {
                origin: self.center - vertical_offset,
                half_extent: vertical_half,
                direction: Dir2::NEG_Y,
            },
            ProbeBox {
                origin: self.center + vertical_offset,
                half_extent: vertical_half,
                direction: Dir2::Y,
            },
            ProbeBox {
                origin: self.center - horizontal_offset,
                half_extent: horizontal_half,
                direction: Dir2::NEG_X,
            },
            ProbeBox {
                origin: self.center + horizontal_offset,
                half_extent: horizontal_half,
                direction: Dir2::X,
            },
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeBox {
    pub origin: Vec2,
    pub half_extent: Vec2,
    pub direction: Dir2,
}

impl ProbeBox {
    pub fn cast(&self, world: &(impl CollisionQuery + ?Sized)) -> Option<CastHit> {
        world.cast(self.origin, self.half_extent, self.direction, PROBE_DISTANCE)
    }
}

/// Result of one round of face probes.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ProbeHits {
    pub ground: Option<CastHit>,
    pub ceiling: Option<CastHit>,
    pub left: Option<CastHit>,
    pub right: Option<CastHit>,
}

/// Issue exactly four casts against `world`, one per face of `body`.
pub fn probe(world: &(impl CollisionQuery + ?Sized), body: Aabb) -> ProbeHits {
    let [down, up, left, right] = body.probe_boxes();
    ProbeHits {
        ground: down.cast(world),
        ceiling: up.cast(world),
        left: left.cast(world),
        right: right.cast(world),
    }
}

/// Apply probe hits to the motion record.
///
/// Order is fixed: ground, left, right, ceiling. Every check runs regardless of
/// the others, so a tick may be grounded and against a wall at once.
///
/// A ground hit only counts while the body is not rising, so the take-off tick
/// of a jump leaves the ground even though the floor is still under the probe.
pub fn resolve_collisions(state: &mut MotionState, hits: &ProbeHits, dt: f32) {
    if hits.ground.is_some() && state.velocity.y <= 0.0 {
        // Landing: cancel residual fall speed once, not every grounded tick.
        if state.has_grounded {
            state.velocity.y = 0.0;
            state.has_grounded = false;
        }
        state.grounded = true;
    } else {
        if !state.has_grounded {
            state.has_grounded = true;
            state.not_grounded_time = 0.0;
        } else {
            state.not_grounded_time += dt;
        }
        state.grounded = false;
    }

    if hits.left.is_some() {
        state.velocity.x = state.velocity.x.max(0.0);
    }
    if hits.right.is_some() {
        state.velocity.x = state.velocity.x.min(0.0);
    }
    if hits.ceiling.is_some() {
        state.velocity.y = state.velocity.y.min(0.0);
    }
}
