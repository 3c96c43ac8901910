//! Consumers of solved grid bounds.
//!
//! This crate turns column bounds into the data responsive images and editor
//! forms need:
//! - `srcset` width steps spanning a column's envelope
//! - `sizes` media conditions and `<picture>` sources per breakpoint
//! - Breakpoint and column width choices with their labels

mod choices;
mod media;
mod options;
mod srcset;

pub use choices::{
    column_width_choices, column_width_fields, container_breakpoint_choices, device_label, Choice,
    ColumnWidthField,
};
pub use media::{picture_sources, sizes_media_queries, PictureSource};
pub use options::ResponsiveOptions;
pub use srcset::{plan_column_srcset, plan_srcset, SrcsetPlan};
