//! Respawn collaborator: return-to-spawn on demand.
//!
//! The only externally triggered mutation of the character body: on a
//! keypress the position is overwritten with the recorded spawn point and
//! the controller state is forced back to Idle.

use bevy::prelude::*;

use crate::locomotion::{
    InputSnapshot, Locomotion, LocomotionTuning, Lockout, Player, SpawnPoint, WallJumpLockout,
};

pub struct RespawnPlugin;

impl Plugin for RespawnPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, reset_to_spawn);
    }
}

fn reset_to_spawn(
    keyboard: Res<ButtonInput<KeyCode>>,
    tuning: Res<LocomotionTuning>,
    mut snapshot: ResMut<InputSnapshot>,
    mut query: Query<
        (
            &SpawnPoint,
            &mut Transform,
            &mut Locomotion,
            &mut WallJumpLockout,
        ),
        With<Player>,
    >,
) {
    if !keyboard.just_pressed(KeyCode::KeyR) {
        return;
    }

    for (spawn, mut transform, mut loco, mut lockout) in &mut query {
        transform.translation.x = spawn.0.x;
        transform.translation.y = spawn.0.y;
        *loco = Locomotion::new(tuning.max_air_jumps);
        lockout.0 = Lockout::Inactive;
        info!("Reset to spawn at {:?}", spawn.0);
    }

    snapshot.axis_enabled = true;
}
