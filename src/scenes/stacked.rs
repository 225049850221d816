use glam::Vec3;

use crate::material::Material;
use crate::scene::{Scene, SceneObject};

/// Two crates on the sight line from `(0, 15, -15)` down to the origin,
/// one above and behind the other.
pub fn create_stacked_scene() -> Scene {
    let mut scene = Scene::new();

    scene.spawn(
        SceneObject::new("crate-low", Vec3::new(0.0, 4.0, -4.0))
            .with_box_collider(Vec3::splat(2.0))
            .with_material(Material::opaque([0.6, 0.4, 0.2])),
    );
    scene.spawn(
        SceneObject::new("crate-high", Vec3::new(0.0, 8.0, -8.0))
            .with_box_collider(Vec3::splat(2.0))
            .with_material(Material::opaque([0.5, 0.35, 0.2])),
    );

    scene
}
