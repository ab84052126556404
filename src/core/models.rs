use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The single persisted item tracking the visitor count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterRecord {
    pub id: String,
    pub count: u64,
}

impl CounterRecord {
    pub fn new(id: impl Into<String>, count: u64) -> Self {
        Self {
            id: id.into(),
            count,
        }
    }
}

/// How `increment_counter` updates the stored count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IncrementStrategy {
    /// Get, add one, put. Concurrent increments can overwrite each other.
    #[default]
    #[serde(alias = "read_modify_write")]
    ReadModifyWrite,
    /// Single store-side atomic add.
    Atomic,
}

impl fmt::Display for IncrementStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_value(self) {
            Ok(Value::String(name)) => f.write_str(&name),
            _ => Err(fmt::Error),
        }
    }
}

impl FromStr for IncrementStrategy {
    type Err = String;

    /// Accepts the kebab-case names, case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        serde_json::from_value(Value::String(name.clone()))
            .map_err(|_| format!("unknown increment strategy '{name}'"))
    }
}
