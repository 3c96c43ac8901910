//! Choice lists for editing containers and columns.

use serde::Serialize;

use cascade_core::{BoundTable, Breakpoint, SizingMode, GRID_UNITS};
use cascade_parser::{Directive, DirectiveKind};

/// A selectable value together with its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub value: String,
    pub label: String,
}

impl Choice {
    fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// One breakpoint choice per entry of `viewports`, labelled with its pixel range.
///
/// `viewports` is normally [`BoundTable::fluid`], whose bounds follow the
/// viewport thresholds.
pub fn container_breakpoint_choices(viewports: &BoundTable) -> Vec<Choice> {
    let last = viewports.len().saturating_sub(1);
    viewports
        .iter()
        .enumerate()
        .map(|(index, (bp, bound))| {
            let label = if index == 0 {
                format!("{} (<{:.1}px)", bp.label(), bound.max)
            } else if index == last {
                format!("{} (≥{:.1}px)", bp.label(), bound.min)
            } else {
                format!("{} (≥{:.1}px and <{:.1}px)", bp.label(), bound.min, bound.max)
            };
            Choice::new(bp.name(), label)
        })
        .collect()
}

/// Every width a column may take at `bp`: flex, 1 to 12 units, then auto.
pub fn column_width_choices(bp: Breakpoint) -> Vec<Choice> {
    let mut choices = Vec::with_capacity(usize::from(GRID_UNITS) + 2);
    choices.push(Choice::new(
        Directive::new(bp, DirectiveKind::Flex).class_name(),
        "Flex column",
    ));
    for units in 1..=u32::from(GRID_UNITS) {
        let label = if units == 1 {
            "1 unit fixed column".to_string()
        } else {
            format!("{units} units fixed column")
        };
        choices.push(Choice::new(
            Directive::new(bp, DirectiveKind::Fixed(units)).class_name(),
            label,
        ));
    }
    choices.push(Choice::new(
        Directive::new(bp, DirectiveKind::Auto).class_name(),
        "Auto column",
    ));
    choices
}

/// Comma separated device labels for `first` through `last`.
pub fn device_label(first: Breakpoint, last: Option<Breakpoint>) -> String {
    Breakpoint::range(first, last)
        .map(Breakpoint::label)
        .collect::<Vec<_>>()
        .join(", ")
}

/// An editor field selecting a column's width from one breakpoint on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnWidthField {
    pub breakpoint: Breakpoint,
    pub name: String,
    pub label: String,
    pub choices: Vec<Choice>,
    pub initial: String,
    pub help_text: String,
}

/// Column width fields for a container offering the breakpoints of `container`.
///
/// Each field covers its breakpoint up to the next offered one. Only the
/// first field is mandatory; the others inherit from the narrower field
/// unless overridden.
pub fn column_width_fields(container: &BoundTable) -> Vec<ColumnWidthField> {
    let offered = container.breakpoints();
    let Some(&first) = offered.first() else {
        return Vec::new();
    };

    offered
        .iter()
        .enumerate()
        .map(|(index, &bp)| {
            let next = offered.get(index + 1).copied();
            let devices = device_label(bp, next.and_then(Breakpoint::narrower));

            let help_text = if let Some(next) = next {
                let threshold = container.get(next).map_or(0.0, |bound| bound.min);
                format!("devices narrower than {threshold:.1} pixels.")
            } else if offered.len() > 1 {
                let threshold = container.get(bp).map_or(0.0, |bound| bound.min);
                format!("devices wider than {threshold:.1} pixels.")
            } else {
                "all devices.".to_string()
            };

            let mut choices = column_width_choices(bp);
            let (initial, help_text) = if bp == first {
                (
                    Directive::for_mode(bp, SizingMode::Fixed(GRID_UNITS)).class_name(),
                    format!("Column width for {help_text}"),
                )
            } else {
                choices.insert(0, Choice::new("", "Inherit from above"));
                (String::new(), format!("Override column width for {help_text}"))
            };

            ColumnWidthField {
                breakpoint: bp,
                name: format!("{bp}-column-width"),
                label: format!("Column width for {devices}"),
                choices,
                initial,
                help_text,
            }
        })
        .collect()
}
