//! Planning the widths of responsive image variants.

use serde::Serialize;

use cascade_core::{Bound, ColumnId, SolveError};
use cascade_layout::GridTree;

use crate::options::ResponsiveOptions;

/// Widths to render an image at, for a `srcset` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SrcsetPlan {
    /// Distinct widths in pixels, ascending
    pub widths: Vec<u32>,
    /// Width of the fallback `src` image
    pub fallback: u32,
}

impl SrcsetPlan {
    /// Render as `srcset` descriptors, e.g. `320w`.
    pub fn descriptors(&self) -> Vec<String> {
        self.widths.iter().map(|w| format!("{w}w")).collect()
    }
}

/// Plan image widths evenly spread over `envelope`.
///
/// The range is cut into steps of at least `step_size` pixels, but never more
/// than `max_steps`. High resolution images double the upper limit.
pub fn plan_srcset(envelope: Bound, high_resolution: bool, options: &ResponsiveOptions) -> SrcsetPlan {
    let min = envelope.min;
    let max = if high_resolution {
        2.0 * envelope.max
    } else {
        envelope.max
    };
    if max <= 0.0 {
        tracing::warn!(%envelope, "image max width is zero");
        return SrcsetPlan {
            widths: Vec::new(),
            fallback: 0,
        };
    }

    let by_size = ((max - min) / options.step_size).floor().max(0.0) as u32;
    let num_steps = by_size.min(options.max_steps);

    let mut widths: Vec<u32> = if num_steps == 0 {
        vec![max.round() as u32]
    } else {
        let step_width = (max - min) / f64::from(num_steps);
        (0..=num_steps)
            .map(|step| (min + step_width * f64::from(step)).round().max(0.0) as u32)
            .collect()
    };
    widths.sort_unstable();
    widths.dedup();

    let fallback = widths.last().copied().unwrap_or(0);
    SrcsetPlan { widths, fallback }
}

/// Plan image widths for an image placed in `column`.
pub fn plan_column_srcset(
    tree: &mut GridTree,
    column: ColumnId,
    high_resolution: bool,
    options: &ResponsiveOptions,
) -> Result<SrcsetPlan, SolveError> {
    let envelope = tree.envelope(column)?;
    Ok(plan_srcset(envelope, high_resolution, options))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cascade_core::BoundTable;
    use cascade_layout::Column;

    #[test]
    fn test_steps_bounded_by_step_size() {
        let plan = plan_srcset(Bound::new(320.0, 572.0), false, &ResponsiveOptions::default());
        assert_eq!(plan.widths, vec![320, 370, 421, 471, 522, 572]);
        assert_eq!(plan.fallback, 572);
    }

    #[test]
    fn test_steps_bounded_by_max_steps() {
        let options = ResponsiveOptions {
            step_size: 10.0,
            max_steps: 4,
        };
        let plan = plan_srcset(Bound::new(100.0, 500.0), false, &options);
        assert_eq!(plan.widths, vec![100, 200, 300, 400, 500]);
    }

    #[test]
    fn test_high_resolution_doubles_max() {
        let plan = plan_srcset(Bound::new(300.0, 400.0), true, &ResponsiveOptions::default());
        assert_eq!(plan.widths.first(), Some(&300));
        assert_eq!(plan.fallback, 800);
    }

    #[test]
    fn test_narrow_range_yields_single_width() {
        let plan = plan_srcset(Bound::new(540.0, 560.0), false, &ResponsiveOptions::default());
        assert_eq!(plan.widths, vec![560]);
        assert_eq!(plan.descriptors(), vec!["560w".to_string()]);
    }

    #[test]
    fn test_zero_width() {
        let plan = plan_srcset(Bound::new(0.0, 0.0), false, &ResponsiveOptions::default());
        assert!(plan.widths.is_empty());
        assert_eq!(plan.fallback, 0);
    }

    #[test]
    fn test_plan_for_column() {
        let mut tree = GridTree::new();
        let container = tree.add_container(BoundTable::fixed());
        let row = tree.add_row_to(container).unwrap();
        let column = tree
            .add_column_to(row, Column::new("col-12 col-sm-6 col-lg-4").unwrap())
            .unwrap();

        let plan = plan_column_srcset(&mut tree, column, false, &ResponsiveOptions::default()).unwrap();
        assert_eq!(plan.widths.first(), Some(&270));
        assert_eq!(plan.fallback, 572);
        assert_eq!(plan.widths.len(), 7);
    }
}
