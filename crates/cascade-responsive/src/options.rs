//! Responsive image options.

use serde::{Deserialize, Serialize};

use cascade_core::ConfigError;

/// Controls how many image variants are planned for a column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResponsiveOptions {
    /// Minimum distance in pixels between two planned widths
    pub step_size: f64,
    /// Upper limit on the number of steps; wider ranges use larger steps
    pub max_steps: u32,
}

impl Default for ResponsiveOptions {
    fn default() -> Self {
        Self {
            step_size: 50.0,
            max_steps: 12,
        }
    }
}

impl ResponsiveOptions {
    /// Load options from JSON; omitted fields keep their defaults.
    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }
}
