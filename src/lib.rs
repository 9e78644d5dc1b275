//! safemark: safe Markdown subset to HTML
//!
//! Converts a small Markdown dialect (headings, `*`/`**` emphasis,
//! blockquotes, ordered and unordered lists) to an HTML fragment where
//! user input can never inject markup.
//!
//! # Design Principles
//! - No AST: HTML is written while scanning
//! - Single pass over the input; list nesting lives in the call stack
//! - Every byte not consumed as syntax goes through entity substitution
//! - One raw-HTML escape hatch: the `<output>` element
//! - Malformed structure is an error, never silently repaired
//!
//! # Example
//! ```
//! let html = safemark::render("# Title\n**bold** and *italic*").unwrap();
//! assert_eq!(html, "<h1>Title</h1>\n<b>bold</b> and <i>italic</i>");
//! ```

pub mod block;
pub mod clean;
pub mod cursor;
pub mod error;
pub mod escape;
pub mod inline;
pub mod limits;
pub mod render;

// Re-export primary types
pub use block::ListKind;
pub use clean::strip_empty_elements;
pub use cursor::Cursor;
pub use error::{ErrorKind, RenderError, Result};
pub use render::HtmlWriter;

use block::Parser;

/// Parsing options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Options {
    /// How many spaces make up one level of list indentation. A tab is
    /// always one level. Must be positive.
    pub spaces_per_tab: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            spaces_per_tab: limits::DEFAULT_SPACES_PER_TAB,
        }
    }
}

/// Convert Markdown to HTML with default options.
///
/// # Errors
/// Any structural violation aborts the conversion; see [`RenderError`].
///
/// # Example
/// ```
/// assert_eq!(safemark::render("1. a\n2. b\n").unwrap(), "<ol>\n<li>a</li>\n<li>b</li></ol>\n");
/// assert!(safemark::render("</output>").is_err());
/// ```
pub fn render(input: &str) -> Result<String> {
    render_with_options(input, &Options::default())
}

/// Convert Markdown to HTML with options.
///
/// # Errors
/// [`RenderError::InvalidSpacesPerTab`] for a zero `spaces_per_tab`, and
/// every structural error [`render`] reports.
pub fn render_with_options(input: &str, options: &Options) -> Result<String> {
    let writer = HtmlWriter::with_capacity_for(input.len());
    let (writer, result) = render_to_writer(input.as_bytes(), writer, options);
    result.map(|()| writer.into_string())
}

/// Convert Markdown to HTML into a provided buffer.
///
/// The buffer is cleared first and its capacity reused. On error it is
/// left empty, keeping its capacity: partial HTML is never returned.
///
/// # Errors
/// Same as [`render_with_options`].
pub fn render_into(input: &str, out: &mut Vec<u8>, options: &Options) -> Result<()> {
    let mut writer = HtmlWriter::from_vec(std::mem::take(out));
    writer.reserve_for(input.len());
    let (writer, result) = render_to_writer(input.as_bytes(), writer, options);
    *out = writer.into_vec();
    if result.is_err() {
        out.clear();
    }
    result
}

/// Run one parse, handing the writer back whether or not it failed.
fn render_to_writer(
    input: &[u8],
    writer: HtmlWriter,
    options: &Options,
) -> (HtmlWriter, Result<()>) {
    if options.spaces_per_tab == 0 {
        return (writer, Err(RenderError::InvalidSpacesPerTab));
    }
    let mut parser = Parser::new(input, writer, options);
    let result = parser.parse();
    (parser.into_writer(), result)
}
