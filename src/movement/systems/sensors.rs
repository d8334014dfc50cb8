//! Movement domain: ground detection.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{Character, GameLayer, MovementState};

/// Short downward ray from the character's feet against the Ground layer.
/// No hit (or no ground geometry at all) resolves to not-grounded.
pub(crate) fn detect_ground(
    spatial_query: SpatialQuery,
    mut query: Query<(&Transform, &Collider, &mut MovementState), With<Character>>,
) {
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);

    for (transform, collider, mut state) in &mut query {
        let was_on_ground = state.on_ground;

        let half_height = match collider.shape_scaled().as_cuboid() {
            Some(c) => c.half_extents.y,
            None => 24.0,
        };

        let ray_origin = transform.translation.truncate() - Vec2::new(0.0, half_height);
        let hit = spatial_query.cast_ray(ray_origin, Dir2::NEG_Y, 4.0, true, &ground_filter);

        state.on_ground = hit.is_some();

        if state.on_ground != was_on_ground {
            debug!("ground contact changed: on_ground={}", state.on_ground);
        }
    }
}
