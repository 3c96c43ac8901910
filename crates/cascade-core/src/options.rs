//! Grid configuration.

use crate::table::BoundTable;

/// Container width tables injected into grid trees.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridOptions {
    /// Widths of ordinary containers
    pub fixed_bounds: BoundTable,
    /// Widths of fluid containers
    pub fluid_bounds: BoundTable,
}

impl Default for GridOptions {
    fn default() -> Self {
        Self {
            fixed_bounds: BoundTable::fixed(),
            fluid_bounds: BoundTable::fluid(),
        }
    }
}

impl GridOptions {
    /// The table a container with the given fluid flag is rooted in.
    pub fn bounds_for(&self, fluid: bool) -> BoundTable {
        if fluid {
            self.fluid_bounds
        } else {
            self.fixed_bounds
        }
    }

    /// Load options from JSON; omitted tables keep their defaults.
    #[cfg(feature = "serde")]
    pub fn from_json(source: &str) -> Result<Self, crate::errors::ConfigError> {
        Ok(serde_json::from_str(source)?)
    }
}
