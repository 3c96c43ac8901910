//! Bound resolution on a grid tree.
//!
//! `GridTree::solve` computes a row's bounds without touching the tree.
//! `GridTree::column_bound` is the cached entry point: the first lookup at a
//! breakpoint solves the column's whole row and records every sibling's bound,
//! later lookups return the recorded value.

use indexmap::IndexMap;

use cascade_core::{Bound, BoundTable, Breakpoint, ColumnId, RowId, SolveError};

use crate::solver::{solve_row, RowSolution};
use crate::tree::{GridTree, RowParent};

/// Starting value of the envelope accumulator.
pub const ENVELOPE_SEED: Bound = Bound::new(999_999.0, 0.0);

impl GridTree {
    /// Solve a row at a breakpoint without caching anything.
    pub fn solve(&self, row: RowId, bp: Breakpoint) -> Result<IndexMap<ColumnId, Bound>, SolveError> {
        self.solve_detailed(row, bp).map(|solution| solution.bounds)
    }

    /// Like `solve`, also reporting the width left after fixed columns.
    pub fn solve_detailed(&self, row: RowId, bp: Breakpoint) -> Result<RowSolution, SolveError> {
        let available = self.available_width(row, bp)?;
        let modes = self.row_modes(row, bp)?;
        Ok(solve_row(available, &modes))
    }

    /// Width available to a row's columns, without caching.
    fn available_width(&self, row: RowId, bp: Breakpoint) -> Result<Bound, SolveError> {
        match self.row_parent(row)? {
            Some(RowParent::Container(container)) => self
                .container_bounds(container)?
                .get(bp)
                .ok_or(SolveError::BreakpointUnavailable { breakpoint: bp }),
            Some(RowParent::Column(column)) => {
                if let Some(bound) = self.column(column)?.get_break(bp).bound() {
                    return Ok(bound);
                }
                let parent = self.column_row(column)?.ok_or(SolveError::Unrooted { row })?;
                self.solve(parent, bp)?
                    .get(&column)
                    .copied()
                    .ok_or(SolveError::Orphan { column })
            }
            None => Err(SolveError::Unrooted { row }),
        }
    }

    /// Width available to a row's columns, solving and caching ancestors.
    fn resolve_available_width(&mut self, row: RowId, bp: Breakpoint) -> Result<Bound, SolveError> {
        match self.row_parent(row)? {
            Some(RowParent::Column(column)) => {
                if self.column_row(column)?.is_none() {
                    return Err(SolveError::Unrooted { row });
                }
                self.column_bound(column, bp)
            }
            _ => self.available_width(row, bp),
        }
    }

    /// The bound of a column at a breakpoint.
    ///
    /// Solves the column's row on first access and records the bounds of all
    /// its columns; subsequent calls return the recorded bound.
    pub fn column_bound(&mut self, column: ColumnId, bp: Breakpoint) -> Result<Bound, SolveError> {
        if let Some(bound) = self.column(column)?.get_break(bp).bound() {
            return Ok(bound);
        }
        let row = self.column_row(column)?.ok_or(SolveError::Orphan { column })?;

        let available = self.resolve_available_width(row, bp)?;
        let modes = self.row_modes(row, bp)?;
        let solution = solve_row(available, &modes);
        self.solve_count += 1;
        tracing::debug!(
            %row,
            breakpoint = %bp,
            %available,
            remaining = %solution.remaining,
            fixed = solution.fixed_count,
            flex = solution.flex_count,
            auto = solution.auto_count,
            "solved row"
        );

        for (&id, &bound) in &solution.bounds {
            self.column_mut(id)?.breaks_mut().get_mut(bp).assign(id, bound)?;
        }
        solution.get(column).ok_or(SolveError::Orphan { column })
    }

    /// The bounds of a column at every breakpoint its container supports.
    pub fn column_bounds(&mut self, column: ColumnId) -> Result<BoundTable, SolveError> {
        let row = self.column_row(column)?.ok_or(SolveError::Orphan { column })?;
        let mut table = BoundTable::empty();
        for bp in self.supported_breakpoints(row)? {
            table.insert(bp, self.column_bound(column, bp)?);
        }
        Ok(table)
    }

    /// The width table available to a row's columns.
    pub fn row_bounds(&mut self, row: RowId) -> Result<BoundTable, SolveError> {
        let mut table = BoundTable::empty();
        for bp in self.supported_breakpoints(row)? {
            table.insert(bp, self.resolve_available_width(row, bp)?);
        }
        Ok(table)
    }

    /// The widest range a column can occupy over all supported breakpoints.
    pub fn envelope(&mut self, column: ColumnId) -> Result<Bound, SolveError> {
        let bounds = self.column_bounds(column)?;
        Ok(bounds
            .iter()
            .fold(ENVELOPE_SEED, |acc, (_, bound)| acc.extended(&bound)))
    }

    /// Number of row solves performed by cached lookups so far.
    pub fn solve_count(&self) -> usize {
        self.solve_count
    }
}
