pub mod animator;
pub mod controller;
pub mod motor;
pub mod physics;
pub mod scene;

pub use animator::*;
pub use controller::*;
pub use motor::*;
pub use physics::*;
pub use scene::*;
