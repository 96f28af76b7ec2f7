//! Locomotion domain: plugin wiring and public exports.
//!
//! The state machine itself lives in [`machine`]; everything else here is
//! the ECS shell that samples input at render rate and runs the probe
//! refresh and dispatch on the fixed step.

mod bootstrap;
mod components;
mod dev;
mod events;
pub mod machine;
mod resources;
mod systems;


pub use components::{
    Contacts, GameLayer, Ground, Locomotion, OneWayPlatform, Player, SpawnPoint, Wall,
    WallJumpLockout,
};
pub use events::StateChanged;
pub use machine::{BodyState, ContactSet, Facing, FrameInput, Lockout, MoveState};
pub use resources::{ConfigError, InputSnapshot, LocomotionTuning, ProbeFilters};

use bevy::prelude::*;

use crate::locomotion::bootstrap::spawn_player;
use crate::locomotion::dev::spawn_test_room;
use crate::locomotion::resources::setup_tuning;
use crate::locomotion::systems::{refresh_contacts, sample_input, step_locomotion};

pub struct LocomotionPlugin;

impl Plugin for LocomotionPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<LocomotionTuning>()
            .init_resource::<ProbeFilters>()
            .init_resource::<InputSnapshot>()
            .add_message::<StateChanged>()
            .add_systems(Startup, (setup_tuning, spawn_player, spawn_test_room).chain())
            .add_systems(Update, sample_input)
            // Probes always refresh before dispatch; state logic never sees a
            // stale contact set.
            .add_systems(FixedUpdate, (refresh_contacts, step_locomotion).chain());
    }
}
