//! Per-breakpoint container width tables.

use smallvec::SmallVec;

use crate::bound::Bound;
use crate::breakpoint::Breakpoint;

/// Container widths for ordinary (`.container`) grids.
pub const FIXED_BOUNDS: [Bound; Breakpoint::COUNT] = [
    Bound::new(320.0, 572.0),
    Bound::exact(540.0),
    Bound::exact(720.0),
    Bound::exact(960.0),
    Bound::exact(1140.0),
];

/// Container widths for fluid (`.container-fluid`) grids.
pub const FLUID_BOUNDS: [Bound; Breakpoint::COUNT] = [
    Bound::new(320.0, 576.0),
    Bound::new(576.0, 768.0),
    Bound::new(768.0, 992.0),
    Bound::new(992.0, 1200.0),
    Bound::new(1200.0, 1980.0),
];

/// A mapping from breakpoint to the width envelope available at it.
///
/// A table may cover only a subset of the breakpoints, for containers
/// restricted to some devices.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        from = "indexmap::IndexMap<Breakpoint, Bound>",
        into = "indexmap::IndexMap<Breakpoint, Bound>"
    )
)]
pub struct BoundTable {
    bounds: [Option<Bound>; Breakpoint::COUNT],
}

impl Default for BoundTable {
    fn default() -> Self {
        Self::fixed()
    }
}

impl BoundTable {
    /// Build a table covering every breakpoint.
    pub const fn from_array(bounds: [Bound; Breakpoint::COUNT]) -> Self {
        let [xs, sm, md, lg, xl] = bounds;
        Self {
            bounds: [Some(xs), Some(sm), Some(md), Some(lg), Some(xl)],
        }
    }

    /// A table covering no breakpoint at all.
    pub const fn empty() -> Self {
        Self {
            bounds: [None; Breakpoint::COUNT],
        }
    }

    /// The canonical table for ordinary containers.
    pub const fn fixed() -> Self {
        Self::from_array(FIXED_BOUNDS)
    }

    /// The canonical table for fluid containers.
    pub const fn fluid() -> Self {
        Self::from_array(FLUID_BOUNDS)
    }

    /// The canonical table chosen by a container's fluid flag.
    pub const fn for_container(fluid: bool) -> Self {
        if fluid {
            Self::fluid()
        } else {
            Self::fixed()
        }
    }

    /// Get the bound at a breakpoint, if the table covers it.
    pub fn get(&self, bp: Breakpoint) -> Option<Bound> {
        self.bounds[bp.index()]
    }

    /// Set the bound at a breakpoint.
    pub fn insert(&mut self, bp: Breakpoint, bound: Bound) {
        self.bounds[bp.index()] = Some(bound);
    }

    /// Keep only the given breakpoints.
    pub fn restrict(&self, breakpoints: &[Breakpoint]) -> BoundTable {
        let mut restricted = BoundTable::empty();
        for &bp in breakpoints {
            restricted.bounds[bp.index()] = self.get(bp);
        }
        restricted
    }

    /// Check whether the table covers a breakpoint.
    pub fn contains(&self, bp: Breakpoint) -> bool {
        self.bounds[bp.index()].is_some()
    }

    /// Covered breakpoints in ordinal order.
    pub fn breakpoints(&self) -> SmallVec<[Breakpoint; Breakpoint::COUNT]> {
        Breakpoint::all().filter(|bp| self.contains(*bp)).collect()
    }

    /// Iterate over covered breakpoints with their bounds.
    pub fn iter(&self) -> impl Iterator<Item = (Breakpoint, Bound)> + '_ {
        Breakpoint::all().filter_map(move |bp| self.get(bp).map(|bound| (bp, bound)))
    }

    /// Number of covered breakpoints.
    pub fn len(&self) -> usize {
        self.bounds.iter().filter(|b| b.is_some()).count()
    }

    /// Check if the table covers no breakpoint.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl FromIterator<(Breakpoint, Bound)> for BoundTable {
    fn from_iter<I: IntoIterator<Item = (Breakpoint, Bound)>>(iter: I) -> Self {
        let mut table = BoundTable::empty();
        for (bp, bound) in iter {
            table.insert(bp, bound);
        }
        table
    }
}

impl From<indexmap::IndexMap<Breakpoint, Bound>> for BoundTable {
    fn from(map: indexmap::IndexMap<Breakpoint, Bound>) -> Self {
        map.into_iter().collect()
    }
}

impl From<BoundTable> for indexmap::IndexMap<Breakpoint, Bound> {
    fn from(table: BoundTable) -> Self {
        table.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_tables_are_ordered() {
        for table in [BoundTable::fixed(), BoundTable::fluid()] {
            assert_eq!(table.len(), Breakpoint::COUNT);
            for (_, bound) in table.iter() {
                assert!(bound.min <= bound.max);
            }
        }
    }

    #[test]
    fn test_canonical_values() {
        let fixed = BoundTable::fixed();
        assert_eq!(fixed.get(Breakpoint::Xs), Some(Bound::new(320.0, 572.0)));
        assert_eq!(fixed.get(Breakpoint::Lg), Some(Bound::exact(960.0)));

        let fluid = BoundTable::for_container(true);
        assert_eq!(fluid.get(Breakpoint::Sm), Some(Bound::new(576.0, 768.0)));
        assert_eq!(fluid.get(Breakpoint::Xl), Some(Bound::new(1200.0, 1980.0)));
    }

    #[test]
    fn test_restrict() {
        let table = BoundTable::fixed().restrict(&[Breakpoint::Md, Breakpoint::Xl]);
        assert_eq!(table.len(), 2);
        assert!(!table.contains(Breakpoint::Xs));
        assert_eq!(table.get(Breakpoint::Md), Some(Bound::exact(720.0)));
        assert_eq!(table.breakpoints().as_slice(), &[Breakpoint::Md, Breakpoint::Xl]);
    }

    #[test]
    fn test_indexmap_conversion_keeps_order() {
        let map: indexmap::IndexMap<Breakpoint, Bound> = BoundTable::fluid().into();
        let keys: Vec<_> = map.keys().copied().collect();
        assert_eq!(keys, Breakpoint::ALL);
        assert_eq!(BoundTable::from(map), BoundTable::fluid());
    }
}
