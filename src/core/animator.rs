use std::collections::HashMap;

use crate::traits::Animator;

/// Parameter table of an animation graph
#[derive(Debug, Clone, Default)]
pub struct AnimatorParameters {
    bools: HashMap<String, bool>,
    writes: u64,
}

impl AnimatorParameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of a boolean parameter, `None` if it was never set
    pub fn get_bool(&self, name: &str) -> Option<bool> {
        self.bools.get(name).copied()
    }

    /// Number of `set_bool` calls received
    pub fn writes(&self) -> u64 {
        self.writes
    }
}

impl Animator for AnimatorParameters {
    fn set_bool(&mut self, name: &str, value: bool) {
        self.writes += 1;
        match self.bools.get_mut(name) {
            Some(current) => *current = value,
            None => {
                self.bools.insert(name.to_string(), value);
            }
        }
    }
}
