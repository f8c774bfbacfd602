//! Motion domain: entity markers and physics layers for the collision world.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for probe filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Floors and platforms
    Ground,
    /// Side walls and pillars
    Wall,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;
