use glam::Vec3;
use std::collections::BTreeMap;

use crate::material::Material;
use crate::math::{intersect_aabb, Ray, AABB};
use crate::traits::{RayCaster, RaycastHit, SceneQuery};
use crate::types::ObjectId;

/// Object stored in the scene registry
#[derive(Debug, Clone, PartialEq)]
pub struct SceneObject {
    pub name: String,
    pub position: Vec3,
    /// Collider relative to `position`
    pub collider: Option<AABB>,
    /// Renderable surface
    pub material: Option<Material>,
}

impl SceneObject {
    pub fn new(name: impl Into<String>, position: Vec3) -> Self {
        Self {
            name: name.into(),
            position,
            collider: None,
            material: None,
        }
    }

    /// Box collider of the given full size centered on the object
    pub fn with_box_collider(mut self, size: Vec3) -> Self {
        self.collider = Some(AABB::from_center_size(Vec3::ZERO, size));
        self
    }

    pub fn with_material(mut self, material: Material) -> Self {
        self.material = Some(material);
        self
    }

    /// Collider in world space
    pub fn world_bounds(&self) -> Option<AABB> {
        self.collider.map(|c| c.translated(self.position))
    }
}

/// Registry of scene objects addressed by stable ids
///
/// Ids are handed out monotonically and never reused after a despawn.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    objects: BTreeMap<ObjectId, SceneObject>,
    next_id: u32,
}

impl Scene {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, object: SceneObject) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        log::debug!("Spawned {} as {}", object.name, id);
        self.objects.insert(id, object);
        id
    }

    pub fn despawn(&mut self, id: ObjectId) -> Option<SceneObject> {
        let removed = self.objects.remove(&id);
        if let Some(object) = &removed {
            log::debug!("Despawned {} ({})", object.name, id);
        }
        removed
    }

    pub fn get(&self, id: ObjectId) -> Option<&SceneObject> {
        self.objects.get(&id)
    }

    pub fn get_mut(&mut self, id: ObjectId) -> Option<&mut SceneObject> {
        self.objects.get_mut(&id)
    }

    pub fn material(&self, id: ObjectId) -> Option<&Material> {
        self.get(id).and_then(|object| object.material.as_ref())
    }

    /// Returns false when the object no longer exists
    pub fn set_position(&mut self, id: ObjectId, position: Vec3) -> bool {
        match self.objects.get_mut(&id) {
            Some(object) => {
                object.position = position;
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ObjectId, &SceneObject)> {
        self.objects.iter().map(|(id, object)| (*id, object))
    }
}

impl RayCaster for Scene {
    fn raycast_all(&self, ray: &Ray, max_distance: f32) -> Vec<RaycastHit> {
        if ray.is_degenerate() {
            return Vec::new();
        }

        let mut hits: Vec<RaycastHit> = self
            .objects
            .iter()
            .filter_map(|(id, object)| {
                let bounds = object.world_bounds()?;
                // Colliders enclosing the origin are not reported
                if bounds.contains(ray.origin) {
                    return None;
                }
                let t = intersect_aabb(ray.origin, ray.direction, bounds.min, bounds.max)?;
                (t <= max_distance).then(|| RaycastHit {
                    object: *id,
                    distance: t,
                    point: ray.at(t),
                })
            })
            .collect();

        hits.sort_by(|a, b| a.distance.total_cmp(&b.distance).then(a.object.cmp(&b.object)));
        hits
    }
}

impl SceneQuery for Scene {
    fn position(&self, id: ObjectId) -> Option<Vec3> {
        self.get(id).map(|object| object.position)
    }

    fn material_mut(&mut self, id: ObjectId) -> Option<&mut Material> {
        self.objects.get_mut(&id).and_then(|object| object.material.as_mut())
    }
}
