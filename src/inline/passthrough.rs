//! The `<output>` passthrough gate.
//!
//! `<output>` and `</output>` are the only raw tags that survive
//! sanitization. The open count is global to one render call, so the
//! element may span headings, lists and blockquotes.

use crate::cursor::Cursor;
use crate::error::{RenderError, Result};
use crate::limits::{OUTPUT_CLOSE, OUTPUT_OPEN};
use crate::render::HtmlWriter;

/// Count of open passthrough elements.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Passthrough {
    open: usize,
}

impl Passthrough {
    /// Number of `<output>` elements currently open.
    #[inline]
    pub fn open_count(&self) -> usize {
        self.open
    }

    /// Consume a passthrough tag at the cursor and write it verbatim.
    ///
    /// Returns `Ok(false)` without moving if no tag starts here.
    ///
    /// # Errors
    /// [`RenderError::UnbalancedPassthrough`] for a close tag with none open.
    pub fn try_consume(&mut self, cursor: &mut Cursor<'_>, out: &mut HtmlWriter) -> Result<bool> {
        let offset = cursor.offset();
        if cursor.eat_bytes(OUTPUT_OPEN) {
            self.open += 1;
            out.write_bytes(OUTPUT_OPEN);
            return Ok(true);
        }
        if cursor.remaining_slice().starts_with(OUTPUT_CLOSE) {
            if self.open == 0 {
                return Err(RenderError::UnbalancedPassthrough { offset });
            }
            cursor.advance(OUTPUT_CLOSE.len());
            self.open -= 1;
            out.write_bytes(OUTPUT_CLOSE);
            return Ok(true);
        }
        Ok(false)
    }
}
