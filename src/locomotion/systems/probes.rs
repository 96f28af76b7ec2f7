//! Locomotion domain: directional contact probing.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::locomotion::machine::ContactSet;
use crate::locomotion::{Contacts, Player, ProbeFilters};

/// Probe shape relative to the body. Slightly undersized so a body resting
/// flush on a floor does not register the floor on its side probes.
const PROBE_SCALE: f32 = 0.95;

/// Fallback half-extents if the player collider is not a cuboid.
const FALLBACK_HALF_EXTENTS: Vec2 = Vec2::new(0.35, 0.45);

/// Refresh the four directional boundary readings, first thing every fixed
/// step. Each direction sweeps a body-sized cuboid (not a ray, so corners
/// cannot tunnel) one body-extent outward, filtered by that direction's
/// layer mask. A hit is reduced to the single coordinate the body center may
/// not cross: the contacted surface's near edge offset by the body's
/// half-extent. No direction's reading depends on another's.
pub(crate) fn refresh_contacts(
    spatial_query: SpatialQuery,
    filters: Res<ProbeFilters>,
    aabbs: Query<&ColliderAabb>,
    mut query: Query<(&Transform, &Collider, &mut Contacts), With<Player>>,
) {
    for (transform, collider, mut contacts) in &mut query {
        let half = match collider.shape_scaled().as_cuboid() {
            Some(c) => Vec2::new(c.half_extents.x, c.half_extents.y),
            None => FALLBACK_HALF_EXTENTS,
        };

        let origin = transform.translation.truncate();
        let probe = Collider::rectangle(half.x * 2.0 * PROBE_SCALE, half.y * 2.0 * PROBE_SCALE);

        let hit_aabb = |dir: Dir2, reach: f32, mask: LayerMask| -> Option<ColliderAabb> {
            let config = ShapeCastConfig {
                max_distance: reach,
                // A body passing up through a one-way platform overlaps it at
                // the origin; such overlaps must not read as floor contact.
                ignore_origin_penetration: true,
                ..default()
            };
            let hit = spatial_query.cast_shape(
                &probe,
                origin,
                0.0,
                dir,
                &config,
                &SpatialQueryFilter::from_mask(mask),
            )?;
            aabbs.get(hit.entity).ok().copied()
        };

        contacts.0 = ContactSet {
            left: hit_aabb(Dir2::NEG_X, half.x * 2.0, filters.left).map(|a| a.max.x + half.x),
            right: hit_aabb(Dir2::X, half.x * 2.0, filters.right).map(|a| a.min.x - half.x),
            top: hit_aabb(Dir2::Y, half.y * 2.0, filters.top).map(|a| a.min.y - half.y),
            bottom: hit_aabb(Dir2::NEG_Y, half.y * 2.0, filters.bottom).map(|a| a.max.y + half.y),
        };
    }
}
