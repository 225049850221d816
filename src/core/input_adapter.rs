use std::collections::{HashMap, HashSet};

use crate::traits::{Axis, Button, Controller};

/// Polled input state fed by the host application or a script
///
/// Axes follow the digital keys (D/A for horizontal, W/S for vertical) unless an
/// analog value has been set for them, e.g. from a gamepad stick.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    /// Currently pressed buttons
    pressed_keys: HashSet<Button>,
    /// Analog overrides, clamped to [-1, 1]
    analog: HashMap<Axis, f32>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, button: Button) {
        self.pressed_keys.insert(button);
    }

    pub fn release(&mut self, button: Button) {
        self.pressed_keys.remove(&button);
    }

    pub fn release_all(&mut self) {
        self.pressed_keys.clear();
    }

    /// Drive an axis with an analog value instead of keys
    pub fn set_axis(&mut self, axis: Axis, value: f32) {
        self.analog.insert(axis, value.clamp(-1.0, 1.0));
    }

    /// Return an axis to key-driven input
    pub fn clear_axis(&mut self, axis: Axis) {
        self.analog.remove(&axis);
    }

    fn to_direction(&self, positive: Button, negative: Button) -> f32 {
        match (self.is_down(positive), self.is_down(negative)) {
            (true, false) => 1.0,
            (false, true) => -1.0,
            _ => 0.0,
        }
    }
}

impl Controller for InputState {
    fn is_down(&self, button: Button) -> bool {
        self.pressed_keys.contains(&button)
    }

    fn axis(&self, axis: Axis) -> f32 {
        if let Some(value) = self.analog.get(&axis) {
            return *value;
        }
        match axis {
            Axis::Horizontal => self.to_direction(Button::KeyD, Button::KeyA),
            Axis::Vertical => self.to_direction(Button::KeyW, Button::KeyS),
        }
    }
}
