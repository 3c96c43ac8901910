//! Tokenizer for grid class names.

use nom::{
    branch::alt,
    bytes::complete::tag,
    character::complete::{char, digit1},
    combinator::{all_consuming, map, opt, value},
    sequence::{preceded, tuple},
    IResult,
};

use cascade_core::Breakpoint;

use crate::directive::{Directive, DirectiveKind};

/// Parse a breakpoint qualifier. The narrowest breakpoint is never spelled out.
fn qualifier(input: &str) -> IResult<&str, Breakpoint> {
    alt((
        value(Breakpoint::Sm, tag("sm")),
        value(Breakpoint::Md, tag("md")),
        value(Breakpoint::Lg, tag("lg")),
        value(Breakpoint::Xl, tag("xl")),
    ))(input)
}

/// Parse the width suffix: a unit count or `auto`.
///
/// Unit counts too large for `u32` saturate, so they still surface as an
/// out of range fixed width.
fn width(input: &str) -> IResult<&str, DirectiveKind> {
    alt((
        value(DirectiveKind::Auto, tag("auto")),
        map(digit1, |digits: &str| {
            DirectiveKind::Fixed(digits.parse().unwrap_or(u32::MAX))
        }),
    ))(input)
}

/// Parse `col[-<bp>][-<units>|-auto]`.
fn column_class(input: &str) -> IResult<&str, Directive> {
    map(
        tuple((
            tag("col"),
            opt(preceded(char('-'), qualifier)),
            opt(preceded(char('-'), width)),
        )),
        |(_, breakpoint, kind)| Directive {
            breakpoint: breakpoint.unwrap_or(Breakpoint::NARROWEST),
            kind: kind.unwrap_or(DirectiveKind::Flex),
        },
    )(input)
}

/// Parse a whole token as a column directive.
pub fn directive(token: &str) -> Option<Directive> {
    all_consuming(column_class)(token)
        .ok()
        .map(|(_, directive)| directive)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parsed(token: &str) -> Option<(Breakpoint, DirectiveKind)> {
        directive(token).map(|d| (d.breakpoint, d.kind))
    }

    #[test]
    fn test_unqualified() {
        assert_eq!(parsed("col"), Some((Breakpoint::Xs, DirectiveKind::Flex)));
        assert_eq!(parsed("col-3"), Some((Breakpoint::Xs, DirectiveKind::Fixed(3))));
        assert_eq!(parsed("col-auto"), Some((Breakpoint::Xs, DirectiveKind::Auto)));
    }

    #[test]
    fn test_qualified() {
        assert_eq!(parsed("col-sm"), Some((Breakpoint::Sm, DirectiveKind::Flex)));
        assert_eq!(parsed("col-lg-12"), Some((Breakpoint::Lg, DirectiveKind::Fixed(12))));
        assert_eq!(parsed("col-xl-auto"), Some((Breakpoint::Xl, DirectiveKind::Auto)));
    }

    #[test]
    fn test_out_of_range_units_still_parse() {
        assert_eq!(parsed("col-0"), Some((Breakpoint::Xs, DirectiveKind::Fixed(0))));
        assert_eq!(parsed("col-md-13"), Some((Breakpoint::Md, DirectiveKind::Fixed(13))));
    }

    #[test]
    fn test_overflowing_units_saturate() {
        assert_eq!(
            parsed("col-99999999999"),
            Some((Breakpoint::Xs, DirectiveKind::Fixed(u32::MAX)))
        );
        assert_eq!(
            parsed("col-md-4294967296"),
            Some((Breakpoint::Md, DirectiveKind::Fixed(u32::MAX)))
        );
        assert_eq!(
            parsed("col-lg-4294967295"),
            Some((Breakpoint::Lg, DirectiveKind::Fixed(u32::MAX)))
        );
    }

    #[test]
    fn test_rejects_other_classes() {
        assert_eq!(parsed("column"), None);
        assert_eq!(parsed("col-xs-6"), None);
        assert_eq!(parsed("col-md-"), None);
        assert_eq!(parsed("offset-md-2"), None);
        assert_eq!(parsed("col-md-6-extra"), None);
        assert_eq!(parsed(""), None);
    }
}
