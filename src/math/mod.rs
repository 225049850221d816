mod aabb;
mod ray;
mod rotation;

pub use aabb::AABB;
pub use ray::{intersect_aabb, Ray};
pub use rotation::{angle_between, lerp_clamped, look_rotation, rotate_towards};
