//! Locomotion domain: trace events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::locomotion::machine::MoveState;

/// Emitted on every state transition, including self-transitions from the
/// air-jump chain. Diagnostics only; the controller never reads it back.
#[derive(Debug)]
pub struct StateChanged {
    pub entity: Entity,
    pub from: MoveState,
    pub to: MoveState,
}

impl Message for StateChanged {}
