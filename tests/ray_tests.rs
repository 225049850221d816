use glam::Vec3;
use topdown::material::Material;
use topdown::math::{intersect_aabb, Ray};
use topdown::traits::RayCaster;
use topdown::{Scene, SceneObject};

#[cfg(test)]
mod ray_intersection_tests {
    use super::*;

    #[test]
    fn test_ray_hits_aabb_from_outside() {
        let ray_origin = Vec3::new(0.0, 0.0, 0.0);
        let ray_dir = Vec3::new(1.0, 0.0, 0.0);
        let box_min = Vec3::new(5.0, -1.0, -1.0);
        let box_max = Vec3::new(10.0, 1.0, 1.0);

        let t = intersect_aabb(ray_origin, ray_dir, box_min, box_max).expect("Ray should hit AABB");

        assert!((t - 5.0).abs() < 0.001, "Hit distance should be ~5.0, got {}", t);
    }

    #[test]
    fn test_ray_pointing_away_from_aabb() {
        let ray_origin = Vec3::new(0.0, 0.0, 0.0);
        let ray_dir = Vec3::new(-1.0, 0.0, 0.0);
        let box_min = Vec3::new(5.0, -1.0, -1.0);
        let box_max = Vec3::new(10.0, 1.0, 1.0);

        assert_eq!(intersect_aabb(ray_origin, ray_dir, box_min, box_max), None, "Ray pointing away should not hit AABB");
    }

    #[test]
    fn test_ray_parallel_to_aabb_face() {
        let ray_origin = Vec3::new(0.0, 0.0, 0.0);
        let ray_dir = Vec3::new(1.0, 0.0, 0.0);
        let box_min = Vec3::new(5.0, 1.0, -1.0);
        let box_max = Vec3::new(10.0, 2.0, 1.0);

        assert_eq!(intersect_aabb(ray_origin, ray_dir, box_min, box_max), None, "Ray parallel to and outside AABB should miss");
    }

    #[test]
    fn test_downward_diagonal_enters_near_face() {
        // Camera-style ray: from above and behind, pitched 45 degrees down
        let ray_origin = Vec3::new(0.0, 15.0, -15.0);
        let ray_dir = Vec3::new(0.0, -1.0, 1.0).normalize();
        let box_min = Vec3::new(-1.0, 0.0, -6.0);
        let box_max = Vec3::new(1.0, 10.0, -4.0);

        let t = intersect_aabb(ray_origin, ray_dir, box_min, box_max).expect("Ray should hit the box");
        let hit_point = ray_origin + ray_dir * t;

        assert!((hit_point - Vec3::new(0.0, 6.0, -6.0)).length() < 0.001, "got {:?}", hit_point);
    }

    #[test]
    fn test_ray_hits_corner_max_max_max() {
        let box_min = Vec3::new(0.0, 0.0, 0.0);
        let box_max = Vec3::new(1.0, 1.0, 1.0);

        let ray_origin = Vec3::new(5.0, 5.0, 5.0);
        let ray_dir = (box_max - ray_origin).normalize();

        let t = intersect_aabb(ray_origin, ray_dir, box_min, box_max).expect("Ray should hit corner (1,1,1)");
        let hit_point = ray_origin + ray_dir * t;

        assert!((hit_point - box_max).length() < 0.001, "Hit point should be at corner (1,1,1), got {:?}", hit_point);
    }

    #[test]
    fn test_ray_with_two_zero_components() {
        let ray_origin = Vec3::new(0.5, 0.5, -5.0);
        let ray_dir = Vec3::new(0.0, 0.0, 1.0);
        let box_min = Vec3::new(0.0, 0.0, 0.0);
        let box_max = Vec3::new(1.0, 1.0, 1.0);

        let t = intersect_aabb(ray_origin, ray_dir, box_min, box_max).expect("Axis-aligned ray should hit");
        assert!((t - 5.0).abs() < 0.001);
    }

    #[test]
    fn test_ray_starts_on_box_surface_pointing_out() {
        let ray_origin = Vec3::new(1.0, 0.5, 0.5);
        let ray_dir = Vec3::new(1.0, 0.0, 0.0);
        let box_min = Vec3::new(0.0, 0.0, 0.0);
        let box_max = Vec3::new(1.0, 1.0, 1.0);

        assert_eq!(intersect_aabb(ray_origin, ray_dir, box_min, box_max), None);
    }
}

#[cfg(test)]
mod scene_raycast_tests {
    use super::*;

    fn wall(position: Vec3) -> SceneObject {
        SceneObject::new("wall", position)
            .with_box_collider(Vec3::new(6.0, 2.0, 0.5))
            .with_material(Material::default())
    }

    #[test]
    fn test_ray_between_points_collects_every_wall() {
        let mut scene = Scene::new();
        let near = scene.spawn(wall(Vec3::new(0.0, 12.0, -12.0)));
        let mid = scene.spawn(wall(Vec3::new(0.0, 7.0, -7.0)));
        let far = scene.spawn(wall(Vec3::new(0.0, 2.0, -2.0)));

        let ray = Ray::towards(Vec3::new(0.0, 15.0, -15.0), Vec3::ZERO);
        let hits = scene.raycast_all(&ray, 100.0);

        let ids: Vec<_> = hits.iter().map(|hit| hit.object).collect();
        assert_eq!(ids, vec![near, mid, far]);
        for pair in hits.windows(2) {
            assert!(pair[0].distance <= pair[1].distance);
        }
    }

    #[test]
    fn test_ray_continues_past_the_target() {
        let mut scene = Scene::new();
        let behind = scene.spawn(wall(Vec3::new(0.0, -3.0, 3.0)));

        let ray = Ray::towards(Vec3::new(0.0, 15.0, -15.0), Vec3::ZERO);
        let hits = scene.raycast_all(&ray, 100.0);

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].object, behind);
    }

    #[test]
    fn test_hit_points_lie_on_the_ray() {
        let mut scene = Scene::new();
        scene.spawn(wall(Vec3::new(0.0, 7.0, -7.0)));

        let ray = Ray::towards(Vec3::new(0.0, 15.0, -15.0), Vec3::ZERO);
        let hit = scene.raycast_all(&ray, 100.0)[0];

        assert!((hit.point - ray.at(hit.distance)).length() < 1e-5);
        assert!((hit.point.y + hit.point.z).abs() < 1e-3, "point {:?} off the sight line", hit.point);
    }
}
