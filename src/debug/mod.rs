//! Diagnostics for the locomotion controller.
//!
//! Logs every state transition, records where each fall starts and draws a
//! marker trail through them, and shows a toggleable info overlay with the
//! live controller state.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::locomotion::{Contacts, Locomotion, Player, StateChanged, WallJumpLockout};

const TRAIL_MARKER_WIDTH: f32 = 0.6;
const TRAIL_CAPACITY: usize = 64;

/// Positions where the body most recently tipped from rising to falling,
/// newest last.
#[derive(Resource, Debug, Default)]
struct FallTrail {
    apexes: Vec<Vec2>,
    previous: Vec2,
    falling: bool,
}

/// Marker for the locomotion info overlay text.
#[derive(Component, Debug)]
struct InfoOverlay;

#[derive(Resource, Debug, Default)]
struct OverlayState {
    visible: bool,
}

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<FallTrail>()
            .init_resource::<OverlayState>()
            .add_systems(
                Update,
                (
                    log_transitions,
                    record_fall_apexes,
                    draw_fall_trail,
                    toggle_overlay,
                    update_overlay,
                ),
            );
    }
}

/// Trace every transition. Side effect only; nothing reads these back.
fn log_transitions(mut transitions: MessageReader<StateChanged>) {
    for change in transitions.read() {
        debug!("Switched from {:?} to {:?}", change.from, change.to);
    }
}

/// Capture the apex of every jump or walk-off: the frame the body stops
/// rising and starts descending.
fn record_fall_apexes(mut trail: ResMut<FallTrail>, query: Query<&Transform, With<Player>>) {
    let Ok(transform) = query.single() else {
        return;
    };
    let current = transform.translation.truncate();

    if trail.previous.y > current.y && !trail.falling {
        trail.falling = true;
        trail.apexes.push(current);
        if trail.apexes.len() > TRAIL_CAPACITY {
            trail.apexes.remove(0);
        }
    } else if trail.previous.y < current.y {
        trail.falling = false;
    }

    trail.previous = current;
}

fn draw_fall_trail(mut gizmos: Gizmos, trail: Res<FallTrail>) {
    for apex in &trail.apexes {
        gizmos.line_2d(
            *apex + Vec2::new(-TRAIL_MARKER_WIDTH / 2.0, 0.0),
            *apex + Vec2::new(TRAIL_MARKER_WIDTH / 2.0, 0.0),
            Color::srgb(0.9, 0.2, 0.2),
        );
    }
}

/// Toggle the info overlay with F1.
fn toggle_overlay(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut state: ResMut<OverlayState>,
    existing: Query<Entity, With<InfoOverlay>>,
) {
    if !keyboard.just_pressed(KeyCode::F1) {
        return;
    }

    state.visible = !state.visible;

    if state.visible {
        commands.spawn((
            InfoOverlay,
            Text::new("Loading..."),
            TextFont {
                font_size: 12.0,
                ..default()
            },
            TextColor(Color::srgb(0.8, 0.9, 0.8)),
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(20.0),
                bottom: Val::Px(20.0),
                padding: UiRect::all(Val::Px(8.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
            ZIndex(500),
        ));
    } else {
        for entity in &existing {
            commands.entity(entity).despawn();
        }
    }
}

fn update_overlay(
    player: Query<(&Transform, &Locomotion, &Contacts, &WallJumpLockout), With<Player>>,
    mut overlay: Query<&mut Text, With<InfoOverlay>>,
) {
    let (Ok((transform, loco, contacts, lockout)), Ok(mut text)) =
        (player.single(), overlay.single_mut())
    else {
        return;
    };

    let pos = transform.translation;
    **text = format!(
        "State: {:?}\nPos: ({:.2}, {:.2})\nVel: ({:.2}, {:.2})\nAir jumps: {}\nLockout: {:?}\nContacts: {:?}",
        loco.state,
        pos.x,
        pos.y,
        loco.velocity.x,
        loco.velocity.y,
        loco.air_jumps,
        lockout.0,
        contacts.0
    );
}
