use glam::Vec3;

use crate::material::Material;
use crate::types::ObjectId;

/// Registry lookups by object id
///
/// Lookups of despawned objects return `None`.
pub trait SceneQuery {
    /// World position of an object
    fn position(&self, id: ObjectId) -> Option<Vec3>;

    /// Material of the object's renderable surface, if it has one
    fn material_mut(&mut self, id: ObjectId) -> Option<&mut Material>;
}
