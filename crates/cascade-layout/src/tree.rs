//! Grid tree data structures.
//!
//! Containers, rows and columns live in arenas owned by `GridTree` and refer
//! to each other through handles. Every node has at most one parent; attaching
//! a node detaches it from its previous parent first. Any structural change
//! invalidates the solved bounds of the rows it affects.

use smallvec::SmallVec;

use cascade_core::{
    BoundTable, Breakpoint, ColumnId, ContainerId, NodeId, RowId, SizingError, SizingMode,
    SolveError,
};
use cascade_parser::{parse_directives, Directive};

use crate::breaks::{BreakSet, ColumnBreak};

/// The node a row is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowParent {
    Container(ContainerId),
    Column(ColumnId),
}

impl From<ContainerId> for RowParent {
    fn from(id: ContainerId) -> Self {
        RowParent::Container(id)
    }
}

impl From<ColumnId> for RowParent {
    fn from(id: ColumnId) -> Self {
        RowParent::Column(id)
    }
}

/// A column, sized by its grid classes.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    directives: Vec<Directive>,
    breaks: BreakSet,
}

impl Column {
    /// Build a column from a whitespace separated class list.
    ///
    /// Fails if the classes mix sizing modes at one breakpoint or give a unit
    /// count outside 1 to 12.
    pub fn new(classes: &str) -> Result<Column, SizingError> {
        Self::from_directives(parse_directives(classes))
    }

    /// Build a column from already parsed directives.
    pub fn from_directives(directives: Vec<Directive>) -> Result<Column, SizingError> {
        let breaks = BreakSet::derive(&directives)?;
        Ok(Column { directives, breaks })
    }

    /// The size directives this column was built from.
    pub fn directives(&self) -> &[Directive] {
        &self.directives
    }

    /// The break at a breakpoint.
    pub fn get_break(&self, bp: Breakpoint) -> &ColumnBreak {
        self.breaks.get(bp)
    }

    /// The sizing mode at a breakpoint.
    pub fn mode(&self, bp: Breakpoint) -> SizingMode {
        self.breaks.get(bp).mode()
    }

    /// All breaks, narrowest first.
    pub fn breaks(&self) -> &BreakSet {
        &self.breaks
    }

    pub(crate) fn breaks_mut(&mut self) -> &mut BreakSet {
        &mut self.breaks
    }
}

#[derive(Debug, Clone)]
struct ContainerNode {
    bounds: BoundTable,
    rows: SmallVec<[RowId; 4]>,
}

#[derive(Debug, Clone, Default)]
struct RowNode {
    parent: Option<RowParent>,
    columns: SmallVec<[ColumnId; 6]>,
}

#[derive(Debug, Clone)]
struct ColumnNode {
    column: Column,
    parent: Option<RowId>,
    rows: SmallVec<[RowId; 2]>,
}

/// A tree of containers, rows and columns.
#[derive(Debug, Clone, Default)]
pub struct GridTree {
    containers: Vec<ContainerNode>,
    rows: Vec<RowNode>,
    columns: Vec<ColumnNode>,
    /// Number of row solves performed by lazy bound lookups
    pub(crate) solve_count: usize,
}

impl GridTree {
    /// Create an empty grid tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a container rooted in the given width table.
    pub fn add_container(&mut self, bounds: BoundTable) -> ContainerId {
        let id = ContainerId(self.containers.len() as u64);
        self.containers.push(ContainerNode {
            bounds,
            rows: SmallVec::new(),
        });
        id
    }

    /// Add a detached row.
    pub fn add_row(&mut self) -> RowId {
        let id = RowId(self.rows.len() as u64);
        self.rows.push(RowNode::default());
        id
    }

    /// Add a detached column.
    pub fn add_column(&mut self, column: Column) -> ColumnId {
        let id = ColumnId(self.columns.len() as u64);
        self.columns.push(ColumnNode {
            column,
            parent: None,
            rows: SmallVec::new(),
        });
        id
    }

    /// Add a new row and attach it to `parent`.
    pub fn add_row_to(&mut self, parent: impl Into<RowParent>) -> Result<RowId, SolveError> {
        let row = self.add_row();
        self.attach_row(parent, row)?;
        Ok(row)
    }

    /// Add a column and append it to `row`.
    pub fn add_column_to(&mut self, row: RowId, column: Column) -> Result<ColumnId, SolveError> {
        self.row_node(row)?;
        let id = self.add_column(column);
        self.attach_column(row, id)?;
        Ok(id)
    }

    /// Append `row` to `parent`, detaching it from any previous parent.
    pub fn attach_row(&mut self, parent: impl Into<RowParent>, row: RowId) -> Result<(), SolveError> {
        let parent = parent.into();
        self.row_node(row)?;
        match parent {
            RowParent::Container(id) => {
                self.container_node(id)?;
            }
            RowParent::Column(id) => {
                self.column_node(id)?;
                if self.is_ancestor(row, id) {
                    return Err(SolveError::CyclicNesting { column: id, row });
                }
            }
        }

        self.detach_row(row)?;
        match parent {
            RowParent::Container(id) => self.containers[id.0 as usize].rows.push(row),
            RowParent::Column(id) => self.columns[id.0 as usize].rows.push(row),
        }
        self.rows[row.0 as usize].parent = Some(parent);
        tracing::trace!(%row, ?parent, "attached row");
        self.invalidate_row(row);
        Ok(())
    }

    /// Append `column` to `row`, detaching it from any previous row.
    pub fn attach_column(&mut self, row: RowId, column: ColumnId) -> Result<(), SolveError> {
        self.row_node(row)?;
        self.column_node(column)?;
        if self.is_ancestor_of_row(column, row) {
            return Err(SolveError::CyclicNesting { column, row });
        }

        self.detach_column(column)?;
        self.rows[row.0 as usize].columns.push(column);
        self.columns[column.0 as usize].parent = Some(row);
        tracing::trace!(%row, %column, "attached column");
        self.invalidate_row(row);
        Ok(())
    }

    /// Detach `row` from its parent, if it has one.
    pub fn detach_row(&mut self, row: RowId) -> Result<(), SolveError> {
        let parent = self.row_node(row)?.parent;
        match parent {
            Some(RowParent::Container(id)) => self.containers[id.0 as usize].rows.retain(|r| *r != row),
            Some(RowParent::Column(id)) => self.columns[id.0 as usize].rows.retain(|r| *r != row),
            None => return Ok(()),
        }
        self.rows[row.0 as usize].parent = None;
        tracing::trace!(%row, "detached row");
        self.invalidate_row(row);
        Ok(())
    }

    /// Detach `column` from its row, if it has one.
    pub fn detach_column(&mut self, column: ColumnId) -> Result<(), SolveError> {
        let Some(row) = self.column_node(column)?.parent else {
            return Ok(());
        };
        self.rows[row.0 as usize].columns.retain(|c| *c != column);
        self.columns[column.0 as usize].parent = None;
        tracing::trace!(%row, %column, "detached column");
        self.invalidate_row(row);
        self.invalidate_column(column);
        Ok(())
    }

    /// Drop the solved bounds of a row's columns and of every grid nested in them.
    pub fn invalidate_row(&mut self, row: RowId) {
        let Some(node) = self.rows.get(row.0 as usize) else {
            return;
        };
        for column in node.columns.clone() {
            self.invalidate_column(column);
        }
    }

    fn invalidate_column(&mut self, column: ColumnId) {
        let Some(node) = self.columns.get_mut(column.0 as usize) else {
            return;
        };
        if node.column.breaks().is_solved_anywhere() {
            tracing::trace!(%column, "invalidated column bounds");
        }
        node.column.breaks_mut().reset();
        for row in node.rows.clone() {
            self.invalidate_row(row);
        }
    }

    /// Check whether `row` encloses `column`, directly or through nesting.
    fn is_ancestor(&self, row: RowId, column: ColumnId) -> bool {
        let mut current = self.columns[column.0 as usize].parent;
        while let Some(r) = current {
            if r == row {
                return true;
            }
            current = match self.rows[r.0 as usize].parent {
                Some(RowParent::Column(c)) => self.columns[c.0 as usize].parent,
                _ => None,
            };
        }
        false
    }

    /// Check whether `column` encloses `row` through nested grids.
    fn is_ancestor_of_row(&self, column: ColumnId, row: RowId) -> bool {
        let mut current = self.rows[row.0 as usize].parent;
        while let Some(RowParent::Column(c)) = current {
            if c == column {
                return true;
            }
            current = self.columns[c.0 as usize]
                .parent
                .and_then(|r| self.rows[r.0 as usize].parent);
        }
        false
    }

    fn container_node(&self, id: ContainerId) -> Result<&ContainerNode, SolveError> {
        self.containers
            .get(id.0 as usize)
            .ok_or(SolveError::UnknownNode { node: NodeId::Container(id) })
    }

    fn row_node(&self, id: RowId) -> Result<&RowNode, SolveError> {
        self.rows
            .get(id.0 as usize)
            .ok_or(SolveError::UnknownNode { node: NodeId::Row(id) })
    }

    fn column_node(&self, id: ColumnId) -> Result<&ColumnNode, SolveError> {
        self.columns
            .get(id.0 as usize)
            .ok_or(SolveError::UnknownNode { node: NodeId::Column(id) })
    }

    pub(crate) fn column_mut(&mut self, id: ColumnId) -> Result<&mut Column, SolveError> {
        self.columns
            .get_mut(id.0 as usize)
            .map(|node| &mut node.column)
            .ok_or(SolveError::UnknownNode { node: NodeId::Column(id) })
    }

    /// Get a column.
    pub fn column(&self, id: ColumnId) -> Result<&Column, SolveError> {
        self.column_node(id).map(|node| &node.column)
    }

    /// The width table a container is rooted in.
    pub fn container_bounds(&self, id: ContainerId) -> Result<&BoundTable, SolveError> {
        self.container_node(id).map(|node| &node.bounds)
    }

    /// Rows of a container, in order.
    pub fn container_rows(&self, id: ContainerId) -> Result<&[RowId], SolveError> {
        self.container_node(id).map(|node| node.rows.as_slice())
    }

    /// Columns of a row, in order.
    pub fn row_columns(&self, id: RowId) -> Result<&[ColumnId], SolveError> {
        self.row_node(id).map(|node| node.columns.as_slice())
    }

    /// Rows nested in a column, in order.
    pub fn column_rows(&self, id: ColumnId) -> Result<&[RowId], SolveError> {
        self.column_node(id).map(|node| node.rows.as_slice())
    }

    /// The parent of a row.
    pub fn row_parent(&self, id: RowId) -> Result<Option<RowParent>, SolveError> {
        self.row_node(id).map(|node| node.parent)
    }

    /// The row a column belongs to.
    pub fn column_row(&self, id: ColumnId) -> Result<Option<RowId>, SolveError> {
        self.column_node(id).map(|node| node.parent)
    }

    /// The container a row is ultimately rooted in.
    pub fn root_container(&self, row: RowId) -> Result<ContainerId, SolveError> {
        let mut current = row;
        loop {
            match self.row_node(current)?.parent {
                Some(RowParent::Container(id)) => return Ok(id),
                Some(RowParent::Column(column)) => {
                    current = self
                        .column_node(column)?
                        .parent
                        .ok_or(SolveError::Unrooted { row })?;
                }
                None => return Err(SolveError::Unrooted { row }),
            }
        }
    }

    /// Breakpoints the container enclosing `row` supports.
    pub fn supported_breakpoints(
        &self,
        row: RowId,
    ) -> Result<SmallVec<[Breakpoint; Breakpoint::COUNT]>, SolveError> {
        let container = self.root_container(row)?;
        Ok(self.container_node(container)?.bounds.breakpoints())
    }

    /// Sizing modes of a row's columns at a breakpoint, in row order.
    pub(crate) fn row_modes(
        &self,
        row: RowId,
        bp: Breakpoint,
    ) -> Result<SmallVec<[(ColumnId, SizingMode); 6]>, SolveError> {
        let node = self.row_node(row)?;
        Ok(node
            .columns
            .iter()
            .map(|&id| (id, self.columns[id.0 as usize].column.mode(bp)))
            .collect())
    }

    /// Number of containers, rows and columns.
    pub fn len(&self) -> usize {
        self.containers.len() + self.rows.len() + self.columns.len()
    }

    /// Check if the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_tree() {
        let mut tree = GridTree::new();
        let container = tree.add_container(BoundTable::fixed());
        let row = tree.add_row_to(container).unwrap();
        let a = tree.add_column_to(row, Column::new("col").unwrap()).unwrap();
        let b = tree.add_column_to(row, Column::new("col-4").unwrap()).unwrap();

        assert_eq!(tree.container_rows(container).unwrap(), &[row]);
        assert_eq!(tree.row_columns(row).unwrap(), &[a, b]);
        assert_eq!(tree.column_row(b).unwrap(), Some(row));
        assert_eq!(tree.row_parent(row).unwrap(), Some(RowParent::Container(container)));
        assert_eq!(tree.root_container(row).unwrap(), container);
    }

    #[test]
    fn test_reattach_column_moves_it() {
        let mut tree = GridTree::new();
        let container = tree.add_container(BoundTable::fixed());
        let first = tree.add_row_to(container).unwrap();
        let second = tree.add_row_to(container).unwrap();
        let column = tree.add_column_to(first, Column::new("col").unwrap()).unwrap();

        tree.attach_column(second, column).unwrap();
        assert!(tree.row_columns(first).unwrap().is_empty());
        assert_eq!(tree.row_columns(second).unwrap(), &[column]);
        assert_eq!(tree.column_row(column).unwrap(), Some(second));
    }

    #[test]
    fn test_reattach_row_between_container_and_column() {
        let mut tree = GridTree::new();
        let container = tree.add_container(BoundTable::fixed());
        let outer = tree.add_row_to(container).unwrap();
        let host = tree.add_column_to(outer, Column::new("col-6").unwrap()).unwrap();
        let row = tree.add_row_to(container).unwrap();

        tree.attach_row(host, row).unwrap();
        assert_eq!(tree.container_rows(container).unwrap(), &[outer]);
        assert_eq!(tree.column_rows(host).unwrap(), &[row]);
        assert_eq!(tree.root_container(row).unwrap(), container);
    }

    #[test]
    fn test_detached_row_is_unrooted() {
        let mut tree = GridTree::new();
        let row = tree.add_row();
        assert_eq!(tree.root_container(row), Err(SolveError::Unrooted { row }));
    }

    #[test]
    fn test_rejects_cyclic_nesting() {
        let mut tree = GridTree::new();
        let container = tree.add_container(BoundTable::fixed());
        let outer = tree.add_row_to(container).unwrap();
        let host = tree.add_column_to(outer, Column::new("col").unwrap()).unwrap();
        let inner = tree.add_row_to(host).unwrap();
        let deep = tree.add_column_to(inner, Column::new("col").unwrap()).unwrap();

        assert_eq!(
            tree.attach_row(deep, outer),
            Err(SolveError::CyclicNesting { column: deep, row: outer })
        );
        assert_eq!(
            tree.attach_column(inner, host),
            Err(SolveError::CyclicNesting { column: host, row: inner })
        );
    }

    #[test]
    fn test_unknown_nodes() {
        let mut tree = GridTree::new();
        let row = tree.add_row();
        assert_eq!(
            tree.attach_row(ContainerId(7), row),
            Err(SolveError::UnknownNode { node: NodeId::Container(ContainerId(7)) })
        );
        assert!(tree.column(ColumnId(3)).is_err());
    }

    #[test]
    fn test_column_rejects_mixed_modes() {
        assert!(matches!(
            Column::new("col-6 col"),
            Err(SizingError::MixedSizingMode { .. })
        ));
    }
}
