//! Locomotion domain: test room geometry.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::locomotion::{GameLayer, Ground, OneWayPlatform, Wall};
use crate::sprites::SpriteLayer;

pub(crate) fn spawn_test_room(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);
    let platform_layers = CollisionLayers::new(GameLayer::Platform, [GameLayer::Player]);

    // Floor. The player spawns at the origin resting on it.
    commands.spawn((
        Ground,
        Sprite {
            color: ground_color,
            custom_size: Some(Vec2::new(24.0, 1.0)),
            ..default()
        },
        Transform::from_xyz(0.0, -0.95, SpriteLayer::Geometry.z_index()),
        RigidBody::Static,
        Collider::rectangle(24.0, 1.0),
        ground_layers,
    ));

    // Left wall
    commands.spawn((
        Wall,
        Sprite {
            color: wall_color,
            custom_size: Some(Vec2::new(1.0, 12.0)),
            ..default()
        },
        Transform::from_xyz(-12.0, 4.5, SpriteLayer::Geometry.z_index()),
        RigidBody::Static,
        Collider::rectangle(1.0, 12.0),
        wall_layers,
    ));

    // Right wall
    commands.spawn((
        Wall,
        Sprite {
            color: wall_color,
            custom_size: Some(Vec2::new(1.0, 12.0)),
            ..default()
        },
        Transform::from_xyz(12.0, 4.5, SpriteLayer::Geometry.z_index()),
        RigidBody::Static,
        Collider::rectangle(1.0, 12.0),
        wall_layers,
    ));

    // Ledge on the left side
    commands.spawn((
        Ground,
        Sprite {
            color: platform_color,
            custom_size: Some(Vec2::new(4.0, 0.5)),
            ..default()
        },
        Transform::from_xyz(-7.0, 1.5, SpriteLayer::Geometry.z_index()),
        RigidBody::Static,
        Collider::rectangle(4.0, 0.5),
        ground_layers,
    ));

    // One-way platform on the right: jump up through it, land on top.
    commands.spawn((
        OneWayPlatform,
        Sprite {
            color: platform_color.with_alpha(0.8),
            custom_size: Some(Vec2::new(4.0, 0.25)),
            ..default()
        },
        Transform::from_xyz(7.0, 2.5, SpriteLayer::Geometry.z_index()),
        RigidBody::Static,
        Collider::rectangle(4.0, 0.25),
        platform_layers,
    ));

    // Pillar for wall jump practice
    commands.spawn((
        Wall,
        Sprite {
            color: wall_color,
            custom_size: Some(Vec2::new(1.0, 5.0)),
            ..default()
        },
        Transform::from_xyz(-2.5, 2.05, SpriteLayer::Geometry.z_index()),
        RigidBody::Static,
        Collider::rectangle(1.0, 5.0),
        wall_layers,
    ));
}
