use bevy::prelude::*;

/// Simulation tick rate. All locomotion evaluation happens on this clock,
/// decoupled from the render rate.
pub const FIXED_HZ: f64 = 60.0;

/// Orthographic zoom; room geometry is authored in world units, not pixels.
const CAMERA_SCALE: f32 = 0.02;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(FIXED_HZ))
            .add_systems(Startup, setup_camera);
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: CAMERA_SCALE,
            ..OrthographicProjection::default_2d()
        }),
    ));
}
