//! Render glue: Z-layer assignment and facing mirror.

use bevy::prelude::*;

use crate::locomotion::{Facing, Locomotion, Player};

/// Defines the render order for world sprites.
/// Lower values render behind higher values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SpriteLayer {
    Backdrop = 0,
    Geometry = 10,
    Character = 20,
    Overlay = 30,
}

impl SpriteLayer {
    /// Convert to Z coordinate for 2D ordering.
    pub fn z_index(&self) -> f32 {
        (*self as i32) as f32 * 0.01
    }
}

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, sync_facing);
    }
}

/// Mirror the sprite horizontally from the controller's facing. Writing the
/// same facing twice leaves the sprite untouched.
fn sync_facing(mut query: Query<(&Locomotion, &mut Sprite), With<Player>>) {
    for (loco, mut sprite) in &mut query {
        sprite.flip_x = loco.facing == Facing::Left;
    }
}
