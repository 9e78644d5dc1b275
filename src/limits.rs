//! Nesting limits and fixed constants.
//!
//! These limits keep pathological inputs from driving unbounded
//! recursion through the list parser.

/// Maximum number of nested list parses active at once.
///
/// The outermost list counts as one; opening one more nested list
/// than this is a fatal error rather than a silent truncation.
pub const MAX_LIST_NESTING: usize = 127;

/// Default number of spaces equivalent to one tab of indentation.
pub const DEFAULT_SPACES_PER_TAB: usize = 4;

/// Opening tag of the single raw-HTML passthrough element.
pub const OUTPUT_OPEN: &[u8] = b"<output>";

/// Closing tag of the single raw-HTML passthrough element.
pub const OUTPUT_CLOSE: &[u8] = b"</output>";

/// Deepest heading level HTML provides.
pub const MAX_HEADING_LEVEL: usize = 6;
