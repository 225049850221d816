use glam::{Quat, Vec3};

use crate::config::PlayerSettings;
use crate::error::InitError;
use crate::math::{look_rotation, rotate_towards};
use crate::traits::{Animator, Axis, CharacterMotor, Controller};
use crate::types::{PARAM_IS_RUNNING, PARAM_IS_WALKING};

/// Values computed by one movement tick
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MovementFrame {
    pub horizontal: f32,
    pub vertical: f32,
    /// `(horizontal, -gravity * dt, vertical)` before speed scaling
    pub movement: Vec3,
    pub is_walking: bool,
    pub is_running: bool,
    pub effective_speed: f32,
    /// Velocity the motor resolved for this frame's move
    pub velocity: Vec3,
}

/// Player movement and animation controller
///
/// Each tick reads the input axes, moves the body through its
/// [`CharacterMotor`], turns toward the heading at a bounded rate and
/// publishes the walking/running flags to the [`Animator`].
#[derive(Debug)]
pub struct PlayerController<M, A> {
    settings: PlayerSettings,
    motor: M,
    animator: A,
    rotation: Quat,
    last_frame: MovementFrame,
}

impl<M: CharacterMotor, A: Animator> PlayerController<M, A> {
    pub fn builder(settings: PlayerSettings) -> PlayerControllerBuilder<M, A> {
        PlayerControllerBuilder::new(settings)
    }

    /// Advance one frame
    pub fn tick(&mut self, input: &dyn Controller, dt: f32) -> MovementFrame {
        let horizontal = input.axis(Axis::Horizontal);
        let vertical = input.axis(Axis::Vertical);
        let movement = Vec3::new(horizontal, -self.settings.gravity * dt, vertical);

        // Flags come from the velocity of the previous move
        let is_walking = self.motor.velocity().length() > 0.0;
        let is_running = is_walking && input.is_down(self.settings.run_button);
        let effective_speed = if is_running {
            self.settings.speed * 2.0
        } else {
            self.settings.speed
        };

        let velocity = self.motor.move_by(movement * effective_speed * dt, dt);

        if is_walking {
            let heading = Vec3::new(movement.x, 0.0, movement.z);
            // A zero heading has no direction to face, keep the current one
            if let Some(target) = look_rotation(heading) {
                self.rotation = rotate_towards(self.rotation, target, self.settings.rotation_speed * dt);
            }
        }

        self.animator.set_bool(PARAM_IS_WALKING, is_walking);
        self.animator.set_bool(PARAM_IS_RUNNING, is_running);

        let frame = MovementFrame {
            horizontal,
            vertical,
            movement,
            is_walking,
            is_running,
            effective_speed,
            velocity,
        };
        log::trace!("player tick: {:?}", frame);
        self.last_frame = frame;
        frame
    }

    pub fn position(&self) -> Vec3 {
        self.motor.position()
    }

    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    /// Unit vector the player is facing
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::Z
    }

    pub fn last_frame(&self) -> &MovementFrame {
        &self.last_frame
    }

    pub fn settings(&self) -> &PlayerSettings {
        &self.settings
    }

    pub fn motor(&self) -> &M {
        &self.motor
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }
}

/// Collects the sibling components a [`PlayerController`] needs
#[derive(Debug)]
pub struct PlayerControllerBuilder<M, A> {
    settings: PlayerSettings,
    motor: Option<M>,
    animator: Option<A>,
    rotation: Quat,
}

impl<M: CharacterMotor, A: Animator> PlayerControllerBuilder<M, A> {
    pub fn new(settings: PlayerSettings) -> Self {
        Self {
            settings,
            motor: None,
            animator: None,
            rotation: Quat::IDENTITY,
        }
    }

    pub fn motor(mut self, motor: M) -> Self {
        self.motor = Some(motor);
        self
    }

    pub fn animator(mut self, animator: A) -> Self {
        self.animator = Some(animator);
        self
    }

    /// Initial facing
    pub fn rotation(mut self, rotation: Quat) -> Self {
        self.rotation = rotation.normalize();
        self
    }

    /// Fails when settings are out of range or a component is missing
    pub fn build(self) -> Result<PlayerController<M, A>, InitError> {
        self.settings.validate()?;
        let motor = self.motor.ok_or(InitError::MissingComponent("character motor"))?;
        let animator = self.animator.ok_or(InitError::MissingComponent("animator"))?;

        log::info!(
            "Player controller started (speed {}, gravity {}, rotation speed {})",
            self.settings.speed,
            self.settings.gravity,
            self.settings.rotation_speed
        );

        Ok(PlayerController {
            settings: self.settings,
            motor,
            animator,
            rotation: self.rotation,
            last_frame: MovementFrame::default(),
        })
    }
}
