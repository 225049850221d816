use glam::Vec3;

use crate::math::Ray;
use crate::types::ObjectId;

/// Single intersection reported by a raycast
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RaycastHit {
    pub object: ObjectId,
    pub distance: f32,
    pub point: Vec3,
}

/// Physics raycasting
pub trait RayCaster {
    /// Every object the ray intersects within `max_distance`, not just the nearest
    fn raycast_all(&self, ray: &Ray, max_distance: f32) -> Vec<RaycastHit>;
}
