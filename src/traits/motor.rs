use glam::Vec3;

/// Collision-aware movement of a character body
pub trait CharacterMotor {
    /// Move by `displacement`, resolving collisions, and return the resulting
    /// velocity. `dt` is the frame time the displacement covers.
    fn move_by(&mut self, displacement: Vec3, dt: f32) -> Vec3;

    /// Velocity produced by the last move
    fn velocity(&self) -> Vec3;

    /// Current world position
    fn position(&self) -> Vec3;
}
