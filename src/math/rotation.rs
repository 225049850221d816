use glam::{Mat3, Quat, Vec3};

/// Rotation whose +Z axis points along `forward` with +Y kept as up.
///
/// Returns `None` for a zero vector or one parallel to the up axis.
pub fn look_rotation(forward: Vec3) -> Option<Quat> {
    let forward = forward.try_normalize()?;
    let right = Vec3::Y.cross(forward).try_normalize()?;
    let up = forward.cross(right);
    Some(Quat::from_mat3(&Mat3::from_cols(right, up, forward)).normalize())
}

/// Turn `from` toward `to` by at most `max_degrees`, never overshooting.
pub fn rotate_towards(from: Quat, to: Quat, max_degrees: f32) -> Quat {
    let angle = angle_between(from, to);
    if angle <= f32::EPSILON {
        return to;
    }
    let step = max_degrees.max(0.0).to_radians();
    from.slerp(to, (step / angle).min(1.0))
}

/// Angle in radians separating two rotations
///
/// Uses atan2 on the relative rotation, which stays accurate for tiny angles
/// where `acos` of the dot product does not.
pub fn angle_between(a: Quat, b: Quat) -> f32 {
    let delta = a.conjugate() * b;
    2.0 * delta.xyz().length().atan2(delta.w.abs())
}

/// Linear interpolation with `t` clamped to [0, 1]
pub fn lerp_clamped(a: Vec3, b: Vec3, t: f32) -> Vec3 {
    a.lerp(b, t.clamp(0.0, 1.0))
}
