//! Locomotion domain: the pure movement state machine.
//!
//! Everything in this module is plain data plus free functions so the whole
//! machine can be driven step-by-step in tests without an ECS world. The
//! controller system owns the only call site of [`step`]; it feeds in the
//! sampled input and the freshly probed contact set, then writes the body
//! back to the entity.

use bevy::prelude::*;

use crate::locomotion::resources::LocomotionTuning;

/// The closed set of movement modes. Exactly one is active per body.
///
/// `WallJump` and `WallDismount` are transient: their per-step behavior is a
/// single unconditional transition, so a body spends exactly one fixed step
/// in them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveState {
    #[default]
    Idle,
    Running,
    Falling,
    Jumping,
    WallSlide,
    WallJump,
    WallDismount,
}

/// Horizontal facing, mirrored into the sprite by the render glue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }

    pub fn opposite(self) -> Facing {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }

    /// Facing requested by a horizontal axis value, if any.
    pub fn from_axis(axis: f32) -> Option<Facing> {
        if axis > 0.0 {
            Some(Facing::Right)
        } else if axis < 0.0 {
            Some(Facing::Left)
        } else {
            None
        }
    }
}

/// One directional boundary reading per probe direction, recomputed from
/// scratch every fixed step. Each present value is the coordinate the body
/// center may not cross on that axis. `None` means nothing in range; a zero
/// coordinate is a legitimate boundary, never a sentinel.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContactSet {
    pub left: Option<f32>,
    pub right: Option<f32>,
    pub top: Option<f32>,
    pub bottom: Option<f32>,
}

/// The simulated body as the machine sees it for one step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyState {
    pub position: Vec2,
    pub velocity: Vec2,
    pub facing: Facing,
    pub air_jumps: u8,
}

impl BodyState {
    pub fn spawned_at(position: Vec2, max_air_jumps: u8) -> Self {
        Self {
            position,
            velocity: Vec2::ZERO,
            facing: Facing::Right,
            air_jumps: max_air_jumps,
        }
    }
}

/// Input signals dispatched into one fixed step. The jump flag is
/// edge-triggered; the caller clears it after the step consumes it.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameInput {
    pub axis: f32,
    pub jump: bool,
}

/// Wall-jump horizontal lockout, counted in fixed steps rather than
/// wall-clock time so it stays deterministic under rate changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Lockout {
    #[default]
    Inactive,
    CountingDown(u32),
}

impl Lockout {
    /// Start (or restart) the countdown. Re-arming supersedes, never stacks.
    pub fn arm(&mut self, steps: u32) {
        *self = Lockout::CountingDown(steps);
    }

    pub fn is_active(self) -> bool {
        matches!(self, Lockout::CountingDown(_))
    }

    /// Decrement once per fixed step. Returns true on the step the countdown
    /// expires, so the caller can re-enable horizontal sampling.
    pub fn tick(&mut self) -> bool {
        match *self {
            Lockout::CountingDown(1) => {
                *self = Lockout::Inactive;
                true
            }
            Lockout::CountingDown(n) if n > 1 => {
                *self = Lockout::CountingDown(n - 1);
                false
            }
            _ => {
                *self = Lockout::Inactive;
                false
            }
        }
    }
}

/// Integrate one fixed step and clamp against the active boundaries.
///
/// Each axis clamps independently; velocity is left untouched even when the
/// candidate was cut short (state handlers zero components where their rules
/// call for it).
pub fn integrate(position: Vec2, velocity: Vec2, dt: f32, contacts: &ContactSet) -> Vec2 {
    let mut next = position + velocity * dt;

    if let Some(x) = contacts.left {
        next.x = next.x.max(x);
    }
    if let Some(x) = contacts.right {
        next.x = next.x.min(x);
    }
    if let Some(y) = contacts.top {
        next.y = next.y.min(y);
    }
    if let Some(y) = contacts.bottom {
        next.y = next.y.max(y);
    }

    next
}

/// Advance the machine one fixed step.
///
/// Runs the current state's per-step behavior against `body`, then evaluates
/// its transition rules in priority order. When a rule fires, the new state's
/// entry action runs immediately (exactly once) and `Some(next)` is returned;
/// the new state's per-step behavior first runs on the following step. `None`
/// means the state held.
///
/// A self-transition (the Jumping air-jump chain) re-runs the entry action.
pub fn step(
    state: MoveState,
    body: &mut BodyState,
    input: &FrameInput,
    contacts: &ContactSet,
    lockout: &mut Lockout,
    tuning: &LocomotionTuning,
    dt: f32,
) -> Option<MoveState> {
    let next = match state {
        MoveState::Idle => idle(body, input, contacts),
        MoveState::Running => running(body, input, contacts, tuning, dt),
        MoveState::Falling => falling(body, input, contacts, tuning, dt),
        MoveState::Jumping => jumping(body, input, contacts, tuning, dt),
        MoveState::WallSlide => wall_slide(body, input, contacts, tuning, dt),
        MoveState::WallJump => Some(MoveState::Jumping),
        MoveState::WallDismount => Some(MoveState::Falling),
    };

    if let Some(next) = next {
        enter(next, body, input, lockout, tuning, dt);
    }

    next
}

/// Entry actions, run exactly once at the detected transition edge.
fn enter(
    next: MoveState,
    body: &mut BodyState,
    input: &FrameInput,
    lockout: &mut Lockout,
    tuning: &LocomotionTuning,
    dt: f32,
) {
    match next {
        MoveState::Idle | MoveState::Running => {
            body.air_jumps = tuning.max_air_jumps;
        }
        MoveState::Jumping => {
            body.air_jumps = body.air_jumps.saturating_sub(1);
            body.velocity.y = tuning.jump_speed;
        }
        MoveState::WallSlide => {
            body.air_jumps = tuning.max_air_jumps;
            body.velocity.x = 0.0;
        }
        MoveState::WallJump => {
            body.facing = body.facing.opposite();
            lockout.arm(tuning.lockout_steps(dt));
            body.velocity.x = body.facing.sign() * tuning.horizontal_speed;
        }
        MoveState::WallDismount => {
            body.facing = body.facing.opposite();
            body.velocity = Vec2::new(input.axis * tuning.horizontal_speed, 0.0);
        }
        MoveState::Falling => {}
    }
}

fn idle(body: &mut BodyState, input: &FrameInput, contacts: &ContactSet) -> Option<MoveState> {
    face_held_direction(body, input);

    body.velocity = Vec2::ZERO;

    // Held input toward open space: no boundary on that side, or one that is
    // nearby but not yet contacted.
    let open_right = input.axis > 0.0 && contacts.right.is_none_or(|x| x > body.position.x);
    let open_left = input.axis < 0.0 && contacts.left.is_none_or(|x| x < body.position.x);
    if open_right || open_left {
        return Some(MoveState::Running);
    }

    if contacts.bottom.is_none_or(|y| y < body.position.y) {
        return Some(MoveState::Falling);
    }

    if input.jump {
        return Some(MoveState::Jumping);
    }

    None
}

fn running(
    body: &mut BodyState,
    input: &FrameInput,
    contacts: &ContactSet,
    tuning: &LocomotionTuning,
    dt: f32,
) -> Option<MoveState> {
    face_held_direction(body, input);

    body.velocity.x = input.axis * tuning.horizontal_speed;
    body.velocity.y = 0.0;
    body.position = integrate(body.position, body.velocity, dt, contacts);

    if input.axis == 0.0 || touching_side(body, contacts) {
        return Some(MoveState::Idle);
    }

    if contacts.bottom.is_none_or(|y| y < body.position.y) {
        return Some(MoveState::Falling);
    }

    if input.jump {
        return Some(MoveState::Jumping);
    }

    None
}

fn falling(
    body: &mut BodyState,
    input: &FrameInput,
    contacts: &ContactSet,
    tuning: &LocomotionTuning,
    dt: f32,
) -> Option<MoveState> {
    face_held_direction(body, input);

    if input.axis != 0.0 {
        body.velocity.x = input.axis * tuning.horizontal_speed;
    }
    body.velocity.y -= tuning.gravity * dt;
    body.position = integrate(body.position, body.velocity, dt, contacts);

    if body.air_jumps > 0 && input.jump {
        return Some(MoveState::Jumping);
    }

    if touching_side(body, contacts) {
        return Some(MoveState::WallSlide);
    }

    if touching_bottom(body, contacts) {
        return Some(MoveState::Running);
    }

    None
}

fn jumping(
    body: &mut BodyState,
    input: &FrameInput,
    contacts: &ContactSet,
    tuning: &LocomotionTuning,
    dt: f32,
) -> Option<MoveState> {
    if input.axis != 0.0 {
        body.velocity.x = input.axis * tuning.horizontal_speed;
    }
    face_held_direction(body, input);

    body.velocity.y -= tuning.gravity * dt;
    body.position = integrate(body.position, body.velocity, dt, contacts);

    // Another air jump chains by re-entering Jumping, which re-runs the entry
    // action and resets the vertical speed.
    if body.air_jumps > 0 && input.jump {
        return Some(MoveState::Jumping);
    }

    if touching_side(body, contacts) {
        return Some(MoveState::WallSlide);
    }

    if touching_top(body, contacts) || body.velocity.y <= 0.0 {
        body.velocity.y = 0.0;
        return Some(MoveState::Falling);
    }

    None
}

fn wall_slide(
    body: &mut BodyState,
    input: &FrameInput,
    contacts: &ContactSet,
    tuning: &LocomotionTuning,
    dt: f32,
) -> Option<MoveState> {
    // An upward slide entry decelerates under gravity; once descending, the
    // wall friction caps the fall at a slow constant speed.
    if body.velocity.y > 0.0 {
        body.velocity.y -= tuning.gravity * dt;
    } else {
        body.velocity.y = -tuning.wall_slide_speed;
    }
    body.position = integrate(body.position, body.velocity, dt, contacts);

    if input.jump {
        return Some(MoveState::WallJump);
    }

    if !touching_side(body, contacts) {
        return Some(MoveState::Falling);
    }

    if Facing::from_axis(input.axis).is_some_and(|dir| dir != body.facing) {
        return Some(MoveState::WallDismount);
    }

    if touching_bottom(body, contacts) {
        return Some(MoveState::Idle);
    }

    None
}

/// Turn toward held horizontal input. A no-op when already facing that way,
/// so repeated calls never oscillate.
fn face_held_direction(body: &mut BodyState, input: &FrameInput) {
    if let Some(dir) = Facing::from_axis(input.axis) {
        if dir != body.facing {
            body.facing = dir;
        }
    }
}

// A clamped axis lands exactly on the boundary value, so exact equality is
// the touching test: a reading that is present but unequal means the surface
// is nearby, not yet contacted this step.

fn touching_side(body: &BodyState, contacts: &ContactSet) -> bool {
    contacts.right.is_some_and(|x| x == body.position.x)
        || contacts.left.is_some_and(|x| x == body.position.x)
}

fn touching_bottom(body: &BodyState, contacts: &ContactSet) -> bool {
    contacts.bottom.is_some_and(|y| y == body.position.y)
}

fn touching_top(body: &BodyState, contacts: &ContactSet) -> bool {
    contacts.top.is_some_and(|y| y == body.position.y)
}
