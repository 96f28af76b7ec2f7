//! Locomotion domain: input sampling.

use bevy::prelude::*;

use crate::locomotion::InputSnapshot;

/// Sample raw input at render rate into the snapshot the fixed step consumes.
///
/// The axis is normalized to -1/0/1 and overwritten every frame; while the
/// wall-jump lockout has sampling disabled it reads as zero no matter what is
/// held. The jump flag is only ever set here; the consuming fixed step
/// clears it, so one press yields at most one jump no matter how many frames
/// or steps pass in between.
pub(crate) fn sample_input(keyboard: Res<ButtonInput<KeyCode>>, mut snapshot: ResMut<InputSnapshot>) {
    let mut axis = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        axis -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        axis += 1.0;
    }

    snapshot.axis = if snapshot.axis_enabled { axis } else { 0.0 };

    if keyboard.just_pressed(KeyCode::Space) || keyboard.just_pressed(KeyCode::KeyK) {
        snapshot.jump = true;
    }
}
