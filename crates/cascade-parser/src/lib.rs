//! Parser for column size directives.
//!
//! Columns are sized by Bootstrap grid classes. At the narrowest breakpoint
//! the classes are unqualified (`col`, `col-6`, `col-auto`); at wider
//! breakpoints they carry the breakpoint name (`col-md`, `col-md-6`,
//! `col-md-auto`). Built on `nom`; tokens that are not column width classes
//! (offsets, ordering, utilities) are ignored.

mod directive;
mod lexer;

pub use directive::{Directive, DirectiveKind};

/// Parse a single class token.
///
/// # Example
///
/// ```
/// use cascade_core::Breakpoint;
/// use cascade_parser::{parse_directive, DirectiveKind};
///
/// let directive = parse_directive("col-md-4").unwrap();
/// assert_eq!(directive.breakpoint, Breakpoint::Md);
/// assert_eq!(directive.kind, DirectiveKind::Fixed(4));
/// assert!(parse_directive("offset-md-2").is_none());
/// ```
pub fn parse_directive(token: &str) -> Option<Directive> {
    lexer::directive(token.trim())
}

/// Parse a whitespace separated class list, keeping only size directives.
pub fn parse_directives(classes: &str) -> Vec<Directive> {
    classes.split_whitespace().filter_map(parse_directive).collect()
}
