//! Responsive Bootstrap grid bounds.
//!
//! Re-exports the workspace crates under one roof:
//! - [`types`]: breakpoints, bounds and bound tables
//! - [`parser`]: column class directives
//! - [`layout`]: the grid tree and its column solver
//! - [`responsive`]: image planning and editor choices built on solved bounds

pub use cascade_core as types;
pub use cascade_layout as layout;
pub use cascade_parser as parser;
pub use cascade_responsive as responsive;

pub use cascade_core::{Bound, BoundTable, Breakpoint, CascadeError};
pub use cascade_layout::{Column, GridTree};
