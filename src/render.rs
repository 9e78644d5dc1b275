//! HTML output writer.
//!
//! Append-only: the parser streams tags and text straight into the
//! buffer, there is no intermediate tree.

use crate::block::ListKind;
use crate::escape;

/// HTML output writer with a pre-allocated buffer.
///
/// # Example
/// ```
/// use safemark::HtmlWriter;
///
/// let mut writer = HtmlWriter::with_capacity_for(16);
/// writer.heading_start(1);
/// writer.write_special(b'#');
/// writer.heading_end(1);
///
/// assert_eq!(writer.into_string(), "<h1>&#35;</h1>\n");
/// ```
#[derive(Debug, Default)]
pub struct HtmlWriter {
    out: Vec<u8>,
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self {
            out: Vec::with_capacity(1024),
        }
    }

    /// Create with pre-allocated capacity based on expected input size.
    ///
    /// Entities and tags make the output ~1.25x the input on typical text.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self {
            out: Vec::with_capacity(input_len + input_len / 4),
        }
    }

    /// Wrap an existing buffer, keeping its capacity.
    #[inline]
    pub fn from_vec(mut out: Vec<u8>) -> Self {
        out.clear();
        Self { out }
    }

    /// Reserve room for the output of an `input_len`-byte input.
    #[inline]
    pub fn reserve_for(&mut self, input_len: usize) {
        self.out.reserve(input_len + input_len / 4);
    }

    /// Write raw bytes without escaping.
    #[inline]
    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.out.extend_from_slice(bytes);
    }

    /// Write a static string.
    #[inline]
    pub fn write_str(&mut self, s: &'static str) {
        self.out.extend_from_slice(s.as_bytes());
    }

    /// Write a single byte.
    #[inline]
    pub fn write_byte(&mut self, b: u8) {
        self.out.push(b);
    }

    /// Write a byte, replacing markup characters with their entity.
    #[inline]
    pub fn write_special(&mut self, b: u8) {
        escape::escape_byte_into(&mut self.out, b);
    }

    /// Write `count` spaces.
    #[inline]
    pub fn write_spaces(&mut self, count: usize) {
        self.out.resize(self.out.len() + count, b' ');
    }

    /// Current output length.
    #[inline]
    pub fn len(&self) -> usize {
        self.out.len()
    }

    /// Check if output is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.out.is_empty()
    }

    /// Get output as byte slice.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.out
    }

    /// Take ownership of output buffer.
    #[inline]
    pub fn into_vec(self) -> Vec<u8> {
        self.out
    }

    /// Take ownership as String.
    ///
    /// Input bytes are copied in order and every inserted byte is ASCII,
    /// so valid UTF-8 input gives valid UTF-8 output.
    pub fn into_string(self) -> String {
        match String::from_utf8(self.out) {
            Ok(s) => s,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        }
    }

    // --- HTML Tag Helpers ---

    /// Write opening tag: `<tagname>`
    #[inline]
    pub fn open_tag(&mut self, tag: &'static str) {
        self.write_byte(b'<');
        self.write_str(tag);
        self.write_byte(b'>');
    }

    /// Write closing tag: `</tagname>`
    #[inline]
    pub fn close_tag(&mut self, tag: &'static str) {
        self.write_str("</");
        self.write_str(tag);
        self.write_byte(b'>');
    }

    // --- Elements ---

    /// Write heading start: `<hN>`
    #[inline]
    pub fn heading_start(&mut self, level: u8) {
        debug_assert!((1..=6).contains(&level));
        self.write_str("<h");
        self.write_byte(b'0' + level);
        self.write_byte(b'>');
    }

    /// Write heading end: `</hN>\n`
    #[inline]
    pub fn heading_end(&mut self, level: u8) {
        debug_assert!((1..=6).contains(&level));
        self.write_str("</h");
        self.write_byte(b'0' + level);
        self.write_str(">\n");
    }

    /// Write blockquote start: `<blockquote>`
    #[inline]
    pub fn blockquote_start(&mut self) {
        self.open_tag("blockquote");
    }

    /// Close `count` blockquotes, one `</blockquote>\n` each.
    #[inline]
    pub fn close_blockquotes(&mut self, count: usize) {
        for _ in 0..count {
            self.write_str("</blockquote>\n");
        }
    }

    /// Write a line break: `<br />\n`
    #[inline]
    pub fn line_break(&mut self) {
        self.write_str("<br />\n");
    }

    /// Write a paragraph break: `<br />\n<br />`
    #[inline]
    pub fn paragraph_break(&mut self) {
        self.write_str("<br />\n<br />");
    }

    /// Open a list and its first item: `<ol>\n<li>`
    #[inline]
    pub fn list_start(&mut self, kind: ListKind) {
        self.open_tag(kind.tag());
        self.write_byte(b'\n');
        self.open_tag("li");
    }

    /// Close the current item and open the next: `</li>\n<li>`
    #[inline]
    pub fn list_item_next(&mut self) {
        self.write_str("</li>\n<li>");
    }

    /// Close the last item and the list: `</li></ol>\n`
    #[inline]
    pub fn list_end(&mut self, kind: ListKind) {
        self.close_tag("li");
        self.close_tag(kind.tag());
        self.write_byte(b'\n');
    }
}
