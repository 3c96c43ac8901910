//! Per-breakpoint sizing modes of a column.
//!
//! A column's grid classes are turned into one `ColumnBreak` per breakpoint.
//! A breakpoint without any class inherits the sizing mode (never the bound)
//! of the next narrower breakpoint; the narrowest breakpoint defaults to flex.

use cascade_core::{Bound, Breakpoint, ColumnId, SizingError, SizingMode, SolveError, GRID_UNITS};
use cascade_parser::{Directive, DirectiveKind};

/// Sizing state of one column at one breakpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnBreak {
    breakpoint: Breakpoint,
    mode: SizingMode,
    /// Whether the mode came from a directive at this breakpoint
    explicit: bool,
    bound: Option<Bound>,
}

impl ColumnBreak {
    /// Derive the break at `breakpoint` from a column's directives.
    ///
    /// `narrower` is the already derived break of the same column at the next
    /// narrower breakpoint; it is ignored at the narrowest breakpoint.
    pub fn derive(
        breakpoint: Breakpoint,
        directives: &[Directive],
        narrower: Option<&ColumnBreak>,
    ) -> Result<ColumnBreak, SizingError> {
        let mut flex = false;
        let mut auto = false;
        let mut fixed = None;

        for directive in directives.iter().filter(|d| d.breakpoint == breakpoint) {
            match directive.kind {
                DirectiveKind::Flex => flex = true,
                DirectiveKind::Auto => auto = true,
                DirectiveKind::Fixed(units) => fixed = Some(units),
            }
        }

        let mut modes = Vec::new();
        if fixed.is_some() {
            modes.push("fixed");
        }
        if flex {
            modes.push("flex");
        }
        if auto {
            modes.push("auto");
        }
        if modes.len() > 1 {
            return Err(SizingError::MixedSizingMode { breakpoint, modes });
        }

        let explicit = match (fixed, flex, auto) {
            (Some(units), _, _) => Some(SizingMode::Fixed(check_units(breakpoint, units)?)),
            (None, true, _) => Some(SizingMode::Flex),
            (None, false, true) => Some(SizingMode::Auto),
            (None, false, false) => None,
        };

        let mode = match (explicit, narrower) {
            (Some(mode), _) => mode,
            (None, Some(narrower)) if !breakpoint.is_narrowest() => narrower.mode,
            (None, _) => SizingMode::Flex,
        };

        Ok(ColumnBreak {
            breakpoint,
            mode,
            explicit: explicit.is_some(),
            bound: None,
        })
    }

    /// The breakpoint this break applies at.
    pub fn breakpoint(&self) -> Breakpoint {
        self.breakpoint
    }

    /// The sizing mode in effect at this breakpoint.
    pub fn mode(&self) -> SizingMode {
        self.mode
    }

    /// Whether the mode was given at this breakpoint rather than inherited.
    pub fn is_explicit(&self) -> bool {
        self.explicit
    }

    /// The solved bound, if the row has been solved at this breakpoint.
    pub fn bound(&self) -> Option<Bound> {
        self.bound
    }

    /// A fresh, unsolved copy of this break.
    pub fn unsolved(&self) -> ColumnBreak {
        ColumnBreak {
            bound: None,
            ..self.clone()
        }
    }

    /// Record the solved bound. A bound is written at most once.
    pub(crate) fn assign(&mut self, column: ColumnId, bound: Bound) -> Result<(), SolveError> {
        if self.bound.is_some() {
            return Err(SolveError::DoubleAssignment {
                column,
                breakpoint: self.breakpoint,
            });
        }
        self.bound = Some(bound);
        Ok(())
    }
}

fn check_units(breakpoint: Breakpoint, units: u32) -> Result<u8, SizingError> {
    match u8::try_from(units) {
        Ok(n) if (1..=GRID_UNITS).contains(&n) => Ok(n),
        _ => Err(SizingError::UnitRange { breakpoint, units }),
    }
}

/// The breaks of one column, one per breakpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct BreakSet {
    breaks: Vec<ColumnBreak>,
}

impl BreakSet {
    /// Derive all breaks, narrowest first, so that each can inherit.
    pub fn derive(directives: &[Directive]) -> Result<BreakSet, SizingError> {
        let mut breaks: Vec<ColumnBreak> = Vec::with_capacity(Breakpoint::COUNT);
        for bp in Breakpoint::all() {
            let derived = ColumnBreak::derive(bp, directives, breaks.last())?;
            breaks.push(derived);
        }
        Ok(BreakSet { breaks })
    }

    /// Get the break at a breakpoint.
    pub fn get(&self, bp: Breakpoint) -> &ColumnBreak {
        &self.breaks[bp.index()]
    }

    pub(crate) fn get_mut(&mut self, bp: Breakpoint) -> &mut ColumnBreak {
        &mut self.breaks[bp.index()]
    }

    /// Iterate over all breaks, narrowest first.
    pub fn iter(&self) -> impl Iterator<Item = &ColumnBreak> {
        self.breaks.iter()
    }

    /// Replace every break by an unsolved copy.
    pub(crate) fn reset(&mut self) {
        self.breaks = self.breaks.iter().map(ColumnBreak::unsolved).collect();
    }

    /// Check whether any bound has been solved.
    pub fn is_solved_anywhere(&self) -> bool {
        self.breaks.iter().any(|b| b.bound.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cascade_parser::parse_directives;

    fn derive(classes: &str) -> Result<BreakSet, SizingError> {
        BreakSet::derive(&parse_directives(classes))
    }

    fn modes(classes: &str) -> Vec<SizingMode> {
        derive(classes).unwrap().iter().map(|b| b.mode()).collect()
    }

    #[test]
    fn test_narrowest_defaults_to_flex() {
        assert_eq!(modes(""), vec![SizingMode::Flex; 5]);
    }

    #[test]
    fn test_inherits_mode_from_narrower() {
        let set = derive("col-4").unwrap();
        assert_eq!(set.get(Breakpoint::Sm).mode(), SizingMode::Fixed(4));
        assert!(!set.get(Breakpoint::Sm).is_explicit());
        assert!(set.get(Breakpoint::Xs).is_explicit());
    }

    #[test]
    fn test_growing_columns() {
        assert_eq!(
            modes("col-12 col-sm-6 col-lg-4"),
            vec![
                SizingMode::Fixed(12),
                SizingMode::Fixed(6),
                SizingMode::Fixed(6),
                SizingMode::Fixed(4),
                SizingMode::Fixed(4),
            ]
        );
    }

    #[test]
    fn test_wider_directive_overrides_inherited() {
        assert_eq!(
            modes("col-6 col-md-auto col-xl"),
            vec![
                SizingMode::Fixed(6),
                SizingMode::Fixed(6),
                SizingMode::Auto,
                SizingMode::Auto,
                SizingMode::Flex,
            ]
        );
    }

    #[test]
    fn test_mix_flex_with_fixed() {
        let err = derive("col col-1").unwrap_err();
        assert_eq!(
            err,
            SizingError::MixedSizingMode {
                breakpoint: Breakpoint::Xs,
                modes: vec!["fixed", "flex"],
            }
        );
    }

    #[test]
    fn test_mix_flex_with_auto() {
        assert!(matches!(derive("col col-auto"), Err(SizingError::MixedSizingMode { .. })));
    }

    #[test]
    fn test_mix_fixed_with_auto_at_wider_breakpoint() {
        let err = derive("col-12 col-md-1 col-md-auto").unwrap_err();
        assert!(matches!(
            err,
            SizingError::MixedSizingMode { breakpoint: Breakpoint::Md, .. }
        ));
    }

    #[test]
    fn test_unit_range() {
        assert_eq!(
            derive("col-0").unwrap_err(),
            SizingError::UnitRange { breakpoint: Breakpoint::Xs, units: 0 }
        );
        assert_eq!(
            derive("col col-lg-13").unwrap_err(),
            SizingError::UnitRange { breakpoint: Breakpoint::Lg, units: 13 }
        );
    }

    #[test]
    fn test_overflowing_unit_range() {
        assert_eq!(
            derive("col-99999999999").unwrap_err(),
            SizingError::UnitRange { breakpoint: Breakpoint::Xs, units: u32::MAX }
        );
        assert_eq!(
            derive("col-4 col-md-4294967296").unwrap_err(),
            SizingError::UnitRange { breakpoint: Breakpoint::Md, units: u32::MAX }
        );
    }

    #[test]
    fn test_bound_is_write_once() {
        let mut set = derive("col").unwrap();
        let column = ColumnId(0);
        let brk = set.get_mut(Breakpoint::Md);
        brk.assign(column, Bound::exact(100.0)).unwrap();
        assert_eq!(
            brk.assign(column, Bound::exact(100.0)),
            Err(SolveError::DoubleAssignment { column, breakpoint: Breakpoint::Md })
        );
    }

    #[test]
    fn test_reset_clears_bounds_but_keeps_modes() {
        let mut set = derive("col-3").unwrap();
        set.get_mut(Breakpoint::Xs).assign(ColumnId(1), Bound::new(80.0, 143.0)).unwrap();
        assert!(set.is_solved_anywhere());
        set.reset();
        assert!(!set.is_solved_anywhere());
        assert_eq!(set.get(Breakpoint::Xs).mode(), SizingMode::Fixed(3));
    }
}
