use serde::{Deserialize, Serialize};
use std::fmt;

/// Stable handle to a scene object
///
/// Ids are never reused, so a handle to a despawned object simply stops resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectId(pub u32);

impl ObjectId {
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Animator parameter driven while the player moves
pub const PARAM_IS_WALKING: &str = "isWalking";
/// Animator parameter driven while the player runs
pub const PARAM_IS_RUNNING: &str = "isRunning";
