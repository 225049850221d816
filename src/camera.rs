use glam::{EulerRot, Quat, Vec3};

use crate::config::CameraSettings;
use crate::error::InitError;
use crate::math::{lerp_clamped, Ray};
use crate::traits::{RayCaster, SceneQuery};
use crate::types::ObjectId;

/// Outcome of one camera tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CameraFrame {
    pub position: Vec3,
    /// Objects from the previous frame switched back to opaque
    pub restored: usize,
    /// Objects faded this frame, in hit order
    pub faded: Vec<ObjectId>,
    /// False when the target could not be resolved; follow and scan were skipped
    pub target_found: bool,
}

/// Camera that trails a target from above and fades whatever blocks the view
///
/// Per tick: lerp toward `target + offset`, restore last frame's faded objects,
/// cast a ray at the target and fade every renderable hit.
#[derive(Debug, Clone)]
pub struct TopDownCamera {
    settings: CameraSettings,
    target: ObjectId,
    offset: Vec3,
    position: Vec3,
    rotation: Quat,
    /// Faded last frame, restored before the next scan
    previous_hits: Vec<ObjectId>,
}

impl TopDownCamera {
    /// Place the camera at its offset from `target`
    pub fn start<S: SceneQuery>(settings: CameraSettings, target: ObjectId, scene: &S) -> Result<Self, InitError> {
        settings.validate()?;
        let target_position = scene.position(target).ok_or(InitError::MissingTarget(target))?;

        let offset = Vec3::new(0.0, settings.distance, -settings.distance);
        let rotation = Quat::from_euler(EulerRot::YXZ, 0.0, settings.rotation.to_radians(), 0.0);

        log::info!(
            "Top-down camera following {} (distance {}, pitch {}°, fade {})",
            target,
            settings.distance,
            settings.rotation,
            settings.fade_objects
        );

        Ok(Self {
            settings,
            target,
            offset,
            position: target_position + offset,
            rotation,
            previous_hits: Vec::new(),
        })
    }

    /// Advance one frame
    pub fn tick<W>(&mut self, dt: f32, world: &mut W) -> CameraFrame
    where
        W: RayCaster + SceneQuery,
    {
        let Some(target_position) = world.position(self.target) else {
            log::warn!("Camera target {} is gone, skipping follow and scan", self.target);
            // Faded objects must not stay transparent while the target is missing
            let restored = if self.settings.fade_objects {
                self.restore_previous(world)
            } else {
                0
            };
            return CameraFrame {
                position: self.position,
                restored,
                faded: Vec::new(),
                target_found: false,
            };
        };

        self.position = lerp_clamped(self.position, target_position + self.offset, self.settings.speed * dt);

        let (restored, faded) = if self.settings.fade_objects {
            let restored = self.restore_previous(world);
            let faded = self.fade_occluders(target_position, world);
            (restored, faded)
        } else {
            (0, Vec::new())
        };

        CameraFrame {
            position: self.position,
            restored,
            faded,
            target_found: true,
        }
    }

    fn restore_previous<W: SceneQuery>(&mut self, world: &mut W) -> usize {
        let mut restored = 0;
        for id in self.previous_hits.drain(..) {
            match world.material_mut(id) {
                Some(material) => {
                    material.to_opaque_mode();
                    restored += 1;
                }
                None => log::debug!("Faded object {} no longer resolves, dropping it", id),
            }
        }
        restored
    }

    fn fade_occluders<W>(&mut self, target_position: Vec3, world: &mut W) -> Vec<ObjectId>
    where
        W: RayCaster + SceneQuery,
    {
        let ray = Ray::towards(self.position, target_position);
        let hits = world.raycast_all(&ray, self.settings.max_distance);

        for hit in &hits {
            // Objects without a renderable surface are ignored
            let Some(material) = world.material_mut(hit.object) else {
                continue;
            };
            material.to_fade_mode();
            material.set_alpha(self.settings.alpha);
            self.previous_hits.push(hit.object);
        }

        if !self.previous_hits.is_empty() {
            log::debug!("Faded {} occluder(s): {:?}", self.previous_hits.len(), self.previous_hits);
        }
        self.previous_hits.clone()
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    pub fn offset(&self) -> Vec3 {
        self.offset
    }

    pub fn target(&self) -> ObjectId {
        self.target
    }

    /// Objects currently faded, restored on the next tick
    pub fn faded_objects(&self) -> &[ObjectId] {
        &self.previous_hits
    }

    pub fn settings(&self) -> &CameraSettings {
        &self.settings
    }

    /// Unit view direction
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }
}
