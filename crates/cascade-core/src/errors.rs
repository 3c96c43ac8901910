//! Error types for the cascade grid engine.

use thiserror::Error;

use crate::breakpoint::Breakpoint;
use crate::types::{ColumnId, NodeId, RowId};

/// Top-level error type for the cascade grid engine.
#[derive(Debug, Error)]
pub enum CascadeError {
    #[error(transparent)]
    Sizing(#[from] SizingError),

    #[error(transparent)]
    Solve(#[from] SolveError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors while deriving a column's sizing modes from its directives.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SizingError {
    #[error("Can not mix {} columns at breakpoint {breakpoint}", .modes.join(" and "))]
    MixedSizingMode {
        breakpoint: Breakpoint,
        modes: Vec<&'static str>,
    },

    #[error("Column units value {units} out of range at breakpoint {breakpoint}")]
    UnitRange { breakpoint: Breakpoint, units: u32 },
}

/// Errors while solving column bounds.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SolveError {
    /// Indicates a caller bug in tree-mutation handling.
    #[error("Bound of {column} at breakpoint {breakpoint} assigned twice")]
    DoubleAssignment {
        column: ColumnId,
        breakpoint: Breakpoint,
    },

    #[error("{row} is not attached below any container")]
    Unrooted { row: RowId },

    #[error("{column} is not attached to any row")]
    Orphan { column: ColumnId },

    #[error("Breakpoint {breakpoint} is not supported by the enclosing container")]
    BreakpointUnavailable { breakpoint: Breakpoint },

    #[error("Unknown node: {node}")]
    UnknownNode { node: NodeId },

    #[error("Column {column} can not host its own ancestor {row}")]
    CyclicNesting { column: ColumnId, row: RowId },
}

/// Errors while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown breakpoint: {name}")]
    UnknownBreakpoint { name: String },

    #[cfg(feature = "serde")]
    #[error("Invalid configuration: {0}")]
    Json(#[from] serde_json::Error),
}
