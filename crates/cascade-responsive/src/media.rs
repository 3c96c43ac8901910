//! Media conditions derived from column bounds.

use indexmap::IndexMap;
use serde::Serialize;

use cascade_core::{Breakpoint, ColumnId, SolveError};
use cascade_layout::GridTree;

/// One `<source>` element of a `<picture>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PictureSource {
    pub breakpoint: Breakpoint,
    /// Widest width the column reaches at this breakpoint
    pub width: u32,
    pub media: &'static str,
}

/// `sizes` entries for an image filling `column`, one per breakpoint.
pub fn sizes_media_queries(
    tree: &mut GridTree,
    column: ColumnId,
) -> Result<IndexMap<Breakpoint, String>, SolveError> {
    let bounds = tree.column_bounds(column)?;
    Ok(bounds
        .iter()
        .map(|(bp, bound)| (bp, format!("{} {:.2}px", bp.media_query(), bound.max)))
        .collect())
}

/// `<picture>` sources for an image filling `column`, narrowest first.
pub fn picture_sources(tree: &mut GridTree, column: ColumnId) -> Result<Vec<PictureSource>, SolveError> {
    let bounds = tree.column_bounds(column)?;
    Ok(bounds
        .iter()
        .map(|(breakpoint, bound)| PictureSource {
            breakpoint,
            width: bound.max.round().max(0.0) as u32,
            media: breakpoint.media_query(),
        })
        .collect())
}
