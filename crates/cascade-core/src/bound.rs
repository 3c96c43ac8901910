//! The `Bound` pixel interval.

use std::fmt;
use std::ops::{Add, Sub};

/// Number of decimal places two bounds are compared at.
pub const BOUND_EQ_DIGITS: i32 = 1;

/// An inclusive pixel-width interval `[min, max]`.
///
/// `Bound` is a plain `Copy` value, so a working copy never aliases the
/// bound it was taken from. No ordering between `min` and `max` is enforced
/// and subtraction does not clamp, so implausible bounds (negative widths,
/// `min > max`) propagate unchanged.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bound {
    /// Narrowest width in pixels
    pub min: f64,
    /// Widest width in pixels
    pub max: f64,
}

impl Bound {
    /// Create a bound from its two limits.
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// A bound of exactly `width` pixels.
    pub const fn exact(width: f64) -> Self {
        Self { min: width, max: width }
    }

    /// Multiply both limits by `factor`.
    pub fn scale(&self, factor: f64) -> Bound {
        Bound::new(self.min * factor, self.max * factor)
    }

    /// Divide both limits by `divisor`.
    pub fn divide(&self, divisor: f64) -> Bound {
        Bound::new(self.min / divisor, self.max / divisor)
    }

    /// Widen this bound so that it also covers `other`.
    pub fn extend(&mut self, other: &Bound) {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
    }

    /// Return a copy of this bound widened to cover `other`.
    pub fn extended(mut self, other: &Bound) -> Bound {
        self.extend(other);
        self
    }

    /// Distance between the two limits.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    /// Check whether either limit is negative.
    pub fn is_negative(&self) -> bool {
        self.min < 0.0 || self.max < 0.0
    }

    /// Compare both limits after rounding to `digits` decimal places.
    pub fn approx_eq(&self, other: &Bound, digits: i32) -> bool {
        let scale = 10f64.powi(digits);
        let round = |v: f64| (v * scale).round();
        round(self.min) == round(other.min) && round(self.max) == round(other.max)
    }
}

impl PartialEq for Bound {
    fn eq(&self, other: &Self) -> bool {
        self.approx_eq(other, BOUND_EQ_DIGITS)
    }
}

impl Add for Bound {
    type Output = Bound;

    fn add(self, other: Bound) -> Bound {
        Bound::new(self.min + other.min, self.max + other.max)
    }
}

impl Sub for Bound {
    type Output = Bound;

    fn sub(self, other: Bound) -> Bound {
        Bound::new(self.min - other.min, self.max - other.max)
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.2}px, {:.2}px]", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_arithmetic() {
        let a = Bound::new(320.0, 572.0);
        let b = Bound::new(80.0, 143.0);
        assert_eq!(a - b, Bound::new(240.0, 429.0));
        assert_eq!(a + b, Bound::new(400.0, 715.0));
        assert_eq!(a.scale(0.5), Bound::new(160.0, 286.0));
        assert_eq!(a.divide(4.0), Bound::new(80.0, 143.0));
    }

    #[test]
    fn test_subtract_does_not_clamp() {
        let remaining = Bound::exact(540.0) - Bound::exact(600.0);
        assert!(remaining.is_negative());
        assert!((remaining.min + 60.0).abs() < 1e-9);
    }

    #[test]
    fn test_inverted_bound_is_accepted() {
        let b = Bound::new(10.0, 5.0);
        assert_eq!(b.min, 10.0);
        assert_eq!(b.max, 5.0);
    }

    #[test]
    fn test_extend() {
        let mut acc = Bound::new(100.0, 200.0);
        acc.extend(&Bound::exact(150.0));
        acc.extend(&Bound::exact(80.0));
        assert_eq!(acc, Bound::new(80.0, 200.0));
    }

    #[test]
    fn test_equality_tolerance() {
        assert_eq!(Bound::new(106.666_666, 190.666_666), Bound::new(106.67, 190.67));
        assert_ne!(Bound::new(106.6, 190.6), Bound::new(106.8, 190.6));
        assert!(Bound::new(1.234, 1.0).approx_eq(&Bound::new(1.23, 1.0), 2));
    }

    #[test]
    fn test_copies_are_independent() {
        let original = Bound::new(320.0, 572.0);
        let mut working = original;
        working = working - Bound::new(20.0, 72.0);
        assert_eq!(original, Bound::new(320.0, 572.0));
        assert_eq!(working, Bound::new(300.0, 500.0));
    }

    proptest! {
        #[test]
        fn prop_add_then_subtract_restores(
            min in -1e4f64..1e4, max in -1e4f64..1e4,
            dmin in -1e4f64..1e4, dmax in -1e4f64..1e4,
        ) {
            let a = Bound::new(min, max);
            let d = Bound::new(dmin, dmax);
            prop_assert!(((a + d) - d).approx_eq(&a, 3));
        }

        #[test]
        fn prop_extend_covers_both(
            a_min in 0f64..2000.0, a_span in 0f64..2000.0,
            b_min in 0f64..2000.0, b_span in 0f64..2000.0,
        ) {
            let a = Bound::new(a_min, a_min + a_span);
            let b = Bound::new(b_min, b_min + b_span);
            let env = a.extended(&b);
            prop_assert!(env.min <= a.min && env.min <= b.min);
            prop_assert!(env.max >= a.max && env.max >= b.max);
            prop_assert!(env.min == a.min || env.min == b.min);
            prop_assert!(env.max == a.max || env.max == b.max);
        }
    }
}
