pub mod camera;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod material;
pub mod math;
pub mod player;
pub mod scene;
pub mod scenes;
pub mod traits;
pub mod types;

pub use camera::{CameraFrame, TopDownCamera};
pub use config::{CameraSettings, PlayerSettings, Settings};
pub use error::{ConfigError, InitError};
pub use player::{MovementFrame, PlayerController, PlayerControllerBuilder};
pub use scene::{Scene, SceneObject};
pub use types::ObjectId;
