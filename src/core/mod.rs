mod resources;

use bevy::prelude::*;

pub use resources::{GameplayPaused, gameplay_active};

use crate::motion::Player;

/// World units per screen pixel for the 2D camera.
const CAMERA_SCALE: f32 = 1.0 / 32.0;
/// Fraction of the remaining distance the camera closes each frame.
const CAMERA_FOLLOW_RATE: f32 = 0.15;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameplayPaused>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, (toggle_pause, follow_player));
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: CAMERA_SCALE,
            ..OrthographicProjection::default_2d()
        }),
        Transform::from_xyz(0.0, 6.0, 0.0),
    ));
}

fn toggle_pause(keyboard: Res<ButtonInput<KeyCode>>, mut paused: ResMut<GameplayPaused>) {
    if keyboard.just_pressed(KeyCode::KeyP) {
        let now_paused = paused.toggle("user");
        info!("Simulation {}", if now_paused { "paused" } else { "resumed" });
    }
}

fn follow_player(
    players: Query<&Transform, With<Player>>,
    mut cameras: Query<&mut Transform, (With<Camera2d>, Without<Player>)>,
) {
    let Ok(player) = players.single() else {
        return;
    };

    for mut camera in &mut cameras {
        let target = player.translation.truncate();
        let current = camera.translation.truncate();
        let next = current.lerp(target, CAMERA_FOLLOW_RATE);
        camera.translation.x = next.x;
        camera.translation.y = next.y;
    }
}
