//! Locomotion domain: components and physics layers.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::locomotion::machine::{ContactSet, Facing, Lockout, MoveState};

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, ceilings, platform tops)
    Ground,
    /// Wall surfaces
    Wall,
    /// One-way platforms, solid only for the downward probe
    Platform,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// The controller-owned half of the Character Body: everything except
/// position, which lives in the entity's `Transform`.
#[derive(Component, Debug)]
pub struct Locomotion {
    pub state: MoveState,
    pub velocity: Vec2,
    pub facing: Facing,
    pub air_jumps: u8,
}

impl Locomotion {
    pub fn new(max_air_jumps: u8) -> Self {
        Self {
            state: MoveState::Idle,
            velocity: Vec2::ZERO,
            facing: Facing::Right,
            air_jumps: max_air_jumps,
        }
    }
}

/// Directional boundary readings, overwritten in full by the probe refresh
/// before any state logic runs each fixed step.
#[derive(Component, Debug, Default)]
pub struct Contacts(pub ContactSet);

/// Suspends horizontal input sampling for a few steps after a wall jump so
/// held input cannot immediately cancel the push-off.
#[derive(Component, Debug, Default)]
pub struct WallJumpLockout(pub Lockout);

/// Where the respawn collaborator returns the body to.
#[derive(Component, Debug)]
pub struct SpawnPoint(pub Vec2);

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

/// Marker for one-way platform colliders
#[derive(Component, Debug)]
pub struct OneWayPlatform;
