//! Core types for the cascade grid engine.
//!
//! This crate provides the foundational types used across the other cascade crates:
//! - The breakpoint registry (viewport tiers, labels, media queries)
//! - The `Bound` pixel interval and its arithmetic
//! - Per-breakpoint bound tables for fixed and fluid containers
//! - Node handles and sizing modes
//! - Error types and configuration

pub mod bound;
pub mod breakpoint;
pub mod errors;
pub mod options;
pub mod table;
pub mod types;

pub use bound::*;
pub use breakpoint::*;
pub use errors::*;
pub use options::*;
pub use table::*;
pub use types::*;
