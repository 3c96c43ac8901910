//! Parsed column size directives.

use std::fmt;

use cascade_core::{Breakpoint, SizingMode};

/// The width a directive asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DirectiveKind {
    /// `col` / `col-md`
    Flex,
    /// `col-6` / `col-md-6`; the unit count is not range checked here
    Fixed(u32),
    /// `col-auto` / `col-md-auto`
    Auto,
}

/// A single column width class, bound to the breakpoint it applies at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Directive {
    pub breakpoint: Breakpoint,
    pub kind: DirectiveKind,
}

impl Directive {
    pub fn new(breakpoint: Breakpoint, kind: DirectiveKind) -> Self {
        Self { breakpoint, kind }
    }

    /// Build the directive for a sizing mode.
    pub fn for_mode(breakpoint: Breakpoint, mode: SizingMode) -> Self {
        let kind = match mode {
            SizingMode::Fixed(units) => DirectiveKind::Fixed(u32::from(units)),
            SizingMode::Flex => DirectiveKind::Flex,
            SizingMode::Auto => DirectiveKind::Auto,
        };
        Self { breakpoint, kind }
    }

    /// Render the directive as the class name it was parsed from.
    pub fn class_name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("col")?;
        if !self.breakpoint.is_narrowest() {
            write!(f, "-{}", self.breakpoint.name())?;
        }
        match self.kind {
            DirectiveKind::Flex => Ok(()),
            DirectiveKind::Fixed(units) => write!(f, "-{units}"),
            DirectiveKind::Auto => f.write_str("-auto"),
        }
    }
}
