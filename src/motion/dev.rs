//! Motion domain: demo room and player spawn for running the controller interactively.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::motion::{
    CharacterStats, GameLayer, Ground, MotionController, MotionSettings, Player, SharedInput, Wall,
};

pub struct TestRoomPlugin;

impl Plugin for TestRoomPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, (spawn_test_room, spawn_player));
    }
}

pub(crate) fn spawn_player(
    mut commands: Commands,
    stats: Res<CharacterStats>,
    settings: Res<MotionSettings>,
    input: Res<SharedInput>,
) {
    let controller = MotionController::new(
        *stats,
        input.handle(),
        settings.character_size,
        settings.spawn_point,
    );

    info!(
        "Spawning player at {:?}, size={:?}, jump_height={:.2}",
        settings.spawn_point,
        settings.character_size,
        stats.single_jump_height()
    );

    commands.spawn((
        Player,
        controller,
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(settings.character_size),
            ..default()
        },
        Transform::from_translation(settings.spawn_point.extend(1.0)),
    ));
}

/// Static block on one of the probe layers.
fn spawn_block(commands: &mut Commands, layer: GameLayer, color: Color, center: Vec2, size: Vec2) {
    let mut block = commands.spawn((
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_translation(center.extend(0.0)),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
        CollisionLayers::new(layer, LayerMask::ALL),
    ));

    match layer {
        GameLayer::Wall => {
            block.insert(Wall);
        }
        _ => {
            block.insert(Ground);
        }
    }
}

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    // Ground, top face at y = 0
    spawn_block(
        &mut commands,
        GameLayer::Ground,
        ground_color,
        Vec2::new(0.0, -1.0),
        Vec2::new(64.0, 2.0),
    );

    // Side walls
    for x in [-33.0, 33.0] {
        spawn_block(
            &mut commands,
            GameLayer::Wall,
            wall_color,
            Vec2::new(x, 18.0),
            Vec2::new(2.0, 40.0),
        );
    }

    // Stepped platforms
    for (center, width) in [
        (Vec2::new(-16.0, 6.0), 8.0),
        (Vec2::new(0.0, 12.0), 6.0),
        (Vec2::new(16.0, 18.0), 8.0),
    ] {
        spawn_block(
            &mut commands,
            GameLayer::Ground,
            platform_color,
            center,
            Vec2::new(width, 1.0),
        );
    }

    // Low ceiling for ceiling probe checks
    spawn_block(
        &mut commands,
        GameLayer::Ground,
        wall_color,
        Vec2::new(-24.0, 4.0),
        Vec2::new(6.0, 1.0),
    );

    // Pillar for wall contact
    spawn_block(
        &mut commands,
        GameLayer::Wall,
        wall_color,
        Vec2::new(8.0, 2.0),
        Vec2::new(1.0, 4.0),
    );
}
