mod animator;
mod clock;
mod frame;
mod input_adapter;
mod kinematic;

pub use animator::AnimatorParameters;
pub use clock::Clock;
pub use frame::{FrameInfo, FrameIterator};
pub use input_adapter::InputState;
pub use kinematic::KinematicBody;
