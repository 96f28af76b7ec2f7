//! Locomotion domain: player spawn.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::locomotion::{
    Contacts, GameLayer, Locomotion, LocomotionTuning, Player, SpawnPoint, WallJumpLockout,
};
use crate::sprites::SpriteLayer;

pub const PLAYER_SIZE: Vec2 = Vec2::new(0.7, 0.9);

const SPAWN_POSITION: Vec2 = Vec2::new(0.0, 0.0);

/// Spawn the character body: Idle, at the spawn point, zero velocity, full
/// jump budget. The rigid body is kinematic: the controller writes the
/// transform directly and the physics world only serves the probes.
pub(crate) fn spawn_player(mut commands: Commands, tuning: Res<LocomotionTuning>) {
    commands.spawn((
        (
            Player,
            Locomotion::new(tuning.max_air_jumps),
            WallJumpLockout::default(),
            Contacts::default(),
            SpawnPoint(SPAWN_POSITION),
        ),
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_xyz(
            SPAWN_POSITION.x,
            SPAWN_POSITION.y,
            SpriteLayer::Character.z_index(),
        ),
        (
            RigidBody::Kinematic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            CollisionLayers::new(
                GameLayer::Player,
                [GameLayer::Ground, GameLayer::Wall, GameLayer::Platform],
            ),
        ),
    ));
}
