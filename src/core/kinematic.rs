use glam::Vec3;

use crate::traits::CharacterMotor;

/// Character body that slides freely and rests on a flat ground plane
///
/// Downward motion stops at `ground_height`, so a constant gravity bias leaves
/// a grounded, idle body with zero velocity.
#[derive(Debug, Clone, PartialEq)]
pub struct KinematicBody {
    position: Vec3,
    velocity: Vec3,
    ground_height: f32,
}

impl KinematicBody {
    pub fn new(position: Vec3, ground_height: f32) -> Self {
        Self {
            position: Vec3::new(position.x, position.y.max(ground_height), position.z),
            velocity: Vec3::ZERO,
            ground_height,
        }
    }

    pub fn is_grounded(&self) -> bool {
        self.position.y <= self.ground_height
    }
}

impl CharacterMotor for KinematicBody {
    fn move_by(&mut self, displacement: Vec3, dt: f32) -> Vec3 {
        let previous = self.position;
        let mut next = previous + displacement;
        next.y = next.y.max(self.ground_height);
        self.position = next;

        self.velocity = if dt > 0.0 {
            (next - previous) / dt
        } else {
            Vec3::ZERO
        };
        self.velocity
    }

    fn velocity(&self) -> Vec3 {
        self.velocity
    }

    fn position(&self) -> Vec3 {
        self.position
    }
}
