mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod locomotion;
mod respawn;
mod sprites;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Wallkick".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    // The locomotion controller integrates gravity itself; the physics world
    // only supplies geometry for the probes.
    .insert_resource(Gravity(Vec2::ZERO))
    .add_plugins((
        core::CorePlugin,
        locomotion::LocomotionPlugin,
        respawn::RespawnPlugin,
        sprites::SpritesPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run();
}
