use avian2d::prelude::*;
use bevy::prelude::*;

use hangtime::content::ContentPlugin;
use hangtime::core::CorePlugin;
use hangtime::motion::MotionPlugin;
use hangtime::motion::dev::TestRoomPlugin;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Hangtime".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    .add_plugins((
        ContentPlugin::default(),
        CorePlugin,
        MotionPlugin,
        TestRoomPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(hangtime::debug::DebugPlugin);

    app.run();
}
