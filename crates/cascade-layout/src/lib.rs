//! Responsive column bounds for Bootstrap grids.
//!
//! This crate computes, for a tree of containers, rows and columns, how many
//! pixels each column may occupy at each breakpoint.
//!
//! # Architecture
//!
//! 1. **Breaks**: a column's grid classes become one sizing mode per breakpoint
//! 2. **Grid tree**: containers own rows, rows own columns, columns may host nested rows
//! 3. **Solver**: one row at one breakpoint; fixed columns first, then flex/auto shares
//! 4. **Envelope**: a column's bounds widened over all breakpoints
//!
//! # Example
//!
//! ```
//! use cascade_core::{Bound, BoundTable, Breakpoint};
//! use cascade_layout::{Column, GridTree};
//!
//! let mut tree = GridTree::new();
//! let container = tree.add_container(BoundTable::fixed());
//! let row = tree.add_row_to(container)?;
//! let column = tree.add_column_to(row, Column::new("col-12 col-md-6")?)?;
//! tree.add_column_to(row, Column::new("col-12 col-md-6")?)?;
//!
//! assert_eq!(tree.column_bound(column, Breakpoint::Md)?, Bound::exact(360.0));
//! assert_eq!(tree.envelope(column)?, Bound::new(320.0, 572.0));
//! # Ok::<(), cascade_core::CascadeError>(())
//! ```

mod breaks;
mod resolve;
mod solver;
mod tree;

pub use breaks::{BreakSet, ColumnBreak};
pub use resolve::ENVELOPE_SEED;
pub use solver::{fixed_bound, solve_row, RowSolution, AUTO_MIN_WIDTH};
pub use tree::{Column, GridTree, RowParent};
