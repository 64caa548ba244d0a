use serde::{Deserialize, Serialize};

use crate::core::packet::{DEFAULT_MAX_CHARS, Task};

fn default_task() -> String {
    Task::Writing.to_string()
}

fn default_max_chars() -> usize {
    DEFAULT_MAX_CHARS
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PacketConfig {
    /// Task used when a command does not name one.
    #[serde(default = "default_task")]
    pub default_task: String,
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,
}

impl Default for PacketConfig {
    fn default() -> Self {
        Self {
            default_task: default_task(),
            max_chars: default_max_chars(),
        }
    }
}

impl PacketConfig {
    pub fn task(&self) -> Task {
        Task::parse_or_default(&self.default_task)
    }
}
