use serde::{Deserialize, Serialize};

/// Input button identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    KeyW,
    KeyA,
    KeyS,
    KeyD,
    Space,
    Shift,
    Escape,
}

/// Named analog input axis, valued in [-1, 1]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Controller - polled input state for the current frame
pub trait Controller {
    /// Check if button is currently down
    fn is_down(&self, button: Button) -> bool;

    /// Current value of an analog axis in [-1, 1]
    fn axis(&self, axis: Axis) -> f32;
}
