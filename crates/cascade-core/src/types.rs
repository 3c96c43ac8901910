//! Node handles and sizing modes.

use std::fmt;

/// Number of units a Bootstrap row is divided into.
pub const GRID_UNITS: u8 = 12;

/// Unique identifier for containers in a grid tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ContainerId(pub u64);

/// Unique identifier for rows in a grid tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RowId(pub u64);

/// Unique identifier for columns in a grid tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ColumnId(pub u64);

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "container#{}", self.0)
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row#{}", self.0)
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "column#{}", self.0)
    }
}

/// Any node of a grid tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeId {
    Container(ContainerId),
    Row(RowId),
    Column(ColumnId),
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Container(id) => id.fmt(f),
            NodeId::Row(id) => id.fmt(f),
            NodeId::Column(id) => id.fmt(f),
        }
    }
}

impl From<ContainerId> for NodeId {
    fn from(id: ContainerId) -> Self {
        NodeId::Container(id)
    }
}

impl From<RowId> for NodeId {
    fn from(id: RowId) -> Self {
        NodeId::Row(id)
    }
}

impl From<ColumnId> for NodeId {
    fn from(id: ColumnId) -> Self {
        NodeId::Column(id)
    }
}

/// How a column is sized at one breakpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SizingMode {
    /// An exact fraction `n / 12` of the row width
    Fixed(u8),
    /// An equal share of the width left over by fixed columns
    Flex,
    /// Sized by content
    Auto,
}

impl SizingMode {
    /// Fixed unit count, if this is a fixed mode.
    pub fn units(&self) -> Option<u8> {
        match self {
            SizingMode::Fixed(units) => Some(*units),
            _ => None,
        }
    }

    /// Short description used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            SizingMode::Fixed(_) => "fixed",
            SizingMode::Flex => "flex",
            SizingMode::Auto => "auto",
        }
    }
}

impl Default for SizingMode {
    fn default() -> Self {
        Self::Flex
    }
}

impl fmt::Display for SizingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SizingMode::Fixed(units) => write!(f, "fixed({units})"),
            SizingMode::Flex => f.write_str("flex"),
            SizingMode::Auto => f.write_str("auto"),
        }
    }
}
