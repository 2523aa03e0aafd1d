//! Greeting lines printed at the top of every demo run.

use serde::{Deserialize, Serialize};

pub const DEFAULT_PREFIX: &str = "Hello";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeter {
    pub prefix: String,
}

impl Default for Greeter {
    fn default() -> Self {
        Self::new(DEFAULT_PREFIX)
    }
}

impl Greeter {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn greet(&self, name: &str) -> String {
        format!("{}, {}", self.prefix, name)
    }
}
