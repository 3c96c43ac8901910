//! Column bound solver.
//!
//! Solves one row at one breakpoint. Fixed columns are placed first, each
//! taking `n / 12` of the full row width. Whatever is left is shared by the
//! remaining columns: evenly between flex columns, or, as soon as an auto
//! column is present, through a heuristic bound common to all flex and auto
//! columns since the width of auto columns depends on content.

use indexmap::IndexMap;

use cascade_core::{Bound, ColumnId, SizingMode, GRID_UNITS};

/// Narrowest width assumed for flex and auto columns sharing a row.
pub const AUTO_MIN_WIDTH: f64 = 30.0;

/// Result of solving one row at one breakpoint.
#[derive(Debug, Clone, Default)]
pub struct RowSolution {
    /// Column bounds in row order
    pub bounds: IndexMap<ColumnId, Bound>,
    /// Width left over after the fixed columns were placed
    pub remaining: Bound,
    /// Number of fixed columns
    pub fixed_count: usize,
    /// Number of flex columns
    pub flex_count: usize,
    /// Number of auto columns
    pub auto_count: usize,
}

impl RowSolution {
    /// Get the bound of a column.
    pub fn get(&self, column: ColumnId) -> Option<Bound> {
        self.bounds.get(&column).copied()
    }

    /// Whether the fixed columns exceed the row or any column got a negative width.
    pub fn is_oversubscribed(&self) -> bool {
        self.remaining.is_negative() || self.bounds.values().any(Bound::is_negative)
    }
}

/// Bound of a fixed column spanning `units` of the row.
pub fn fixed_bound(available: Bound, units: u8) -> Bound {
    let units = f64::from(units);
    let grid = f64::from(GRID_UNITS);
    Bound::new(units * available.min / grid, units * available.max / grid)
}

/// Solve the bounds of a row's columns given the width available to the row.
pub fn solve_row(available: Bound, columns: &[(ColumnId, SizingMode)]) -> RowSolution {
    let mut solution = RowSolution {
        remaining: available,
        ..Default::default()
    };

    for &(_, mode) in columns {
        match mode {
            SizingMode::Fixed(units) => {
                solution.remaining = solution.remaining - fixed_bound(available, units);
                solution.fixed_count += 1;
            }
            SizingMode::Flex => solution.flex_count += 1,
            SizingMode::Auto => solution.auto_count += 1,
        }
    }

    let shared_count = solution.flex_count + solution.auto_count;
    let shared = if solution.auto_count > 0 {
        Bound::new(
            AUTO_MIN_WIDTH,
            solution.remaining.max - AUTO_MIN_WIDTH * shared_count as f64,
        )
    } else {
        solution.remaining.divide(solution.flex_count.max(1) as f64)
    };

    for &(column, mode) in columns {
        let bound = match mode {
            SizingMode::Fixed(units) => fixed_bound(available, units),
            SizingMode::Flex | SizingMode::Auto => shared,
        };
        tracing::trace!(%column, %mode, %bound, "assigned column bound");
        solution.bounds.insert(column, bound);
    }

    if solution.is_oversubscribed() {
        tracing::warn!(
            %available,
            remaining = %solution.remaining,
            "row is oversubscribed"
        );
    }

    solution
}
