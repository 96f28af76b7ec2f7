//! Locomotion domain: fixed-step state machine dispatch.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::locomotion::machine::{self, BodyState, FrameInput};
use crate::locomotion::{Contacts, InputSnapshot, Locomotion, LocomotionTuning, Player, StateChanged, WallJumpLockout};

/// Advance every body one fixed step: tick the lockout, dispatch the current
/// state's handler against the fresh contact set, write the resulting
/// position and velocity back, and consume the jump flag.
///
/// Runs after the probe refresh; transitions only ever happen here, at step
/// boundaries.
pub(crate) fn step_locomotion(
    time: Res<Time>,
    tuning: Res<LocomotionTuning>,
    mut snapshot: ResMut<InputSnapshot>,
    mut transitions: MessageWriter<StateChanged>,
    mut query: Query<
        (
            Entity,
            &mut Transform,
            &mut Locomotion,
            &mut WallJumpLockout,
            &Contacts,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();

    for (entity, mut transform, mut loco, mut lockout, contacts) in &mut query {
        // The countdown runs on the fixed-step clock; sampling resumes on the
        // step after expiry.
        if lockout.0.tick() {
            snapshot.axis_enabled = true;
        }
        let was_locked = lockout.0.is_active();

        let mut body = BodyState {
            position: transform.translation.truncate(),
            velocity: loco.velocity,
            facing: loco.facing,
            air_jumps: loco.air_jumps,
        };
        let input = FrameInput {
            axis: snapshot.axis,
            jump: snapshot.jump,
        };

        let from = loco.state;
        let next = machine::step(
            from,
            &mut body,
            &input,
            &contacts.0,
            &mut lockout.0,
            &tuning,
            dt,
        );

        transform.translation.x = body.position.x;
        transform.translation.y = body.position.y;
        loco.velocity = body.velocity;
        loco.facing = body.facing;
        loco.air_jumps = body.air_jumps;

        if let Some(to) = next {
            loco.state = to;
            transitions.write(StateChanged { entity, from, to });
        }

        // A wall jump armed the lockout this step: drop the held axis now and
        // keep the sampler reading zero until the countdown expires.
        if !was_locked && lockout.0.is_active() {
            snapshot.axis_enabled = false;
            snapshot.axis = 0.0;
        }
    }

    // Consumed exactly once per step it was dispatched into a handler.
    snapshot.jump = false;
}
