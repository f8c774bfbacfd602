//! Motion domain: box casts against the avian2d collision world.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::motion::{CastHit, CollisionQuery, GameLayer};

/// [`CollisionQuery`] backed by avian's spatial query pipeline.
///
/// Only Ground and Wall colliders are considered, so characters never probe
/// each other.
pub(crate) struct AvianWorld<'a, 'w, 's> {
    spatial_query: &'a SpatialQuery<'w, 's>,
    filter: SpatialQueryFilter,
}

impl<'a, 'w, 's> AvianWorld<'a, 'w, 's> {
    pub(crate) fn new(spatial_query: &'a SpatialQuery<'w, 's>) -> Self {
        Self {
            spatial_query,
            filter: SpatialQueryFilter::from_mask([GameLayer::Ground, GameLayer::Wall]),
        }
    }
}

impl CollisionQuery for AvianWorld<'_, '_, '_> {
    fn cast(
        &self,
        origin: Vec2,
        half_extent: Vec2,
        direction: Dir2,
        max_distance: f32,
    ) -> Option<CastHit> {
        let shape = Collider::rectangle(half_extent.x * 2.0, half_extent.y * 2.0);

        self.spatial_query
            .cast_shape(
                &shape,
                origin,
                0.0,
                direction,
                &ShapeCastConfig::from_max_distance(max_distance),
                &self.filter,
            )
            .map(|hit| CastHit {
                point: hit.point1,
                distance: hit.distance,
            })
    }
}
