//! The breakpoint registry.
//!
//! Breakpoints are a fixed, ordered set of viewport tiers. They compare by
//! ordinal only, and iteration always runs from the narrowest to the widest.

use std::fmt;
use std::str::FromStr;

use crate::errors::ConfigError;

/// A viewport-width tier of the Bootstrap grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Breakpoint {
    /// Portrait phones, below 576px
    Xs = 0,
    /// Landscape phones, 576px and up
    Sm = 1,
    /// Tablets, 768px and up
    Md = 2,
    /// Laptops, 992px and up
    Lg = 3,
    /// Large desktops, 1200px and up
    Xl = 4,
}

impl Breakpoint {
    /// Number of breakpoints in the registry.
    pub const COUNT: usize = 5;

    /// All breakpoints in ordinal order.
    pub const ALL: [Breakpoint; Self::COUNT] = [
        Breakpoint::Xs,
        Breakpoint::Sm,
        Breakpoint::Md,
        Breakpoint::Lg,
        Breakpoint::Xl,
    ];

    /// The narrowest breakpoint, whose directives are unqualified.
    pub const NARROWEST: Breakpoint = Breakpoint::Xs;

    /// The widest breakpoint.
    pub const WIDEST: Breakpoint = Breakpoint::Xl;

    /// Iterate over all breakpoints, narrowest first.
    pub fn all() -> impl DoubleEndedIterator<Item = Breakpoint> + Clone {
        Self::ALL.into_iter()
    }

    /// Iterate from `first` to `last` inclusive.
    ///
    /// `None` for `last` runs through the widest breakpoint. An inverted range
    /// yields nothing.
    pub fn range(
        first: Breakpoint,
        last: Option<Breakpoint>,
    ) -> impl DoubleEndedIterator<Item = Breakpoint> + Clone {
        let last = last.unwrap_or(Self::WIDEST);
        Self::ALL
            .into_iter()
            .filter(move |bp| *bp >= first && *bp <= last)
    }

    /// Position of this breakpoint in ordinal order.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up a breakpoint by its ordinal.
    pub fn from_index(index: usize) -> Option<Breakpoint> {
        Self::ALL.get(index).copied()
    }

    /// Short name, as used in qualified grid class names.
    pub const fn name(self) -> &'static str {
        match self {
            Breakpoint::Xs => "xs",
            Breakpoint::Sm => "sm",
            Breakpoint::Md => "md",
            Breakpoint::Lg => "lg",
            Breakpoint::Xl => "xl",
        }
    }

    /// Human readable device label.
    pub const fn label(self) -> &'static str {
        match self {
            Breakpoint::Xs => "Portrait Phones",
            Breakpoint::Sm => "Landscape Phones",
            Breakpoint::Md => "Tablets",
            Breakpoint::Lg => "Laptops",
            Breakpoint::Xl => "Large Desktops",
        }
    }

    /// CSS media condition matching viewports of this tier.
    pub const fn media_query(self) -> &'static str {
        match self {
            Breakpoint::Xs => "(max-width: 575.98px)",
            Breakpoint::Sm => "(min-width: 576px) and (max-width: 767.98px)",
            Breakpoint::Md => "(min-width: 768px) and (max-width: 991.98px)",
            Breakpoint::Lg => "(min-width: 992px) and (max-width: 1199.98px)",
            Breakpoint::Xl => "(min-width: 1200px)",
        }
    }

    /// Whether this is the narrowest breakpoint.
    pub const fn is_narrowest(self) -> bool {
        matches!(self, Breakpoint::Xs)
    }

    /// The next narrower breakpoint, if any.
    pub fn narrower(self) -> Option<Breakpoint> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }

    /// The next wider breakpoint, if any.
    pub fn wider(self) -> Option<Breakpoint> {
        Self::from_index(self.index() + 1)
    }
}

impl fmt::Display for Breakpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Breakpoint {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .find(|bp| bp.name() == s)
            .ok_or_else(|| ConfigError::UnknownBreakpoint { name: s.to_string() })
    }
}
