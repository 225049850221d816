use glam::Vec3;

use crate::material::Material;
use crate::scene::{Scene, SceneObject};

const HEDGE_HEIGHT: f32 = 4.0;
const HEDGE_WIDTH: f32 = 12.0;
const HEDGE_SPACING: f32 = 15.0;

/// Rows of hedges across the +Z walkway, with a bare post between each pair.
///
/// A player walking +Z from the origin passes each hedge, which then sits
/// between it and a camera trailing behind and above.
pub fn create_courtyard_scene(rows: usize) -> Scene {
    let mut scene = Scene::new();

    for row in 0..rows {
        let z = 10.0 + row as f32 * HEDGE_SPACING;
        let shade = 0.3 + 0.5 * (row as f32 / rows as f32);

        scene.spawn(
            SceneObject::new(format!("hedge-{}", row), Vec3::new(0.0, HEDGE_HEIGHT * 0.5, z))
                .with_box_collider(Vec3::new(HEDGE_WIDTH, HEDGE_HEIGHT, 1.0))
                .with_material(Material::opaque([0.1, shade, 0.15])),
        );

        // Collider only, no renderable surface
        scene.spawn(
            SceneObject::new(format!("post-{}", row), Vec3::new(0.0, 1.0, z + HEDGE_SPACING * 0.5))
                .with_box_collider(Vec3::new(0.3, 2.0, 0.3)),
        );
    }

    log::info!("Courtyard scene created: {} objects", scene.len());
    scene
}
