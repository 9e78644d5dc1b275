//! Block-level constructs and the single-pass parser.
//!
//! The parser is line-start driven and handles:
//! - ATX headings
//! - Blockquotes
//! - Ordered and unordered lists (nested, quote-aware)
//! - Plain text with line and paragraph breaks
//!
//! There is no event list or tree: each routine writes HTML as it scans,
//! and nesting lives in the call stack of the list parser.

mod heading;
mod list;
mod parser;
mod quote;

pub use list::ListMarker;
pub(crate) use parser::Parser;

/// List flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// `1.` style, rendered as `<ol>`.
    Ordered,
    /// `- ` style, rendered as `<ul>`.
    Unordered,
}

impl ListKind {
    /// HTML tag name.
    #[inline]
    pub fn tag(self) -> &'static str {
        match self {
            ListKind::Ordered => "ol",
            ListKind::Unordered => "ul",
        }
    }
}
