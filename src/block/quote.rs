//! Blockquote nesting.
//!
//! Depth is re-evaluated from the `>` run at the start of each quoted
//! line and may grow by at most one level per line.

use crate::error::{RenderError, Result};

use super::parser::Parser;

impl Parser<'_> {
    /// Read the `>` run at the cursor and move the quote state machine.
    ///
    /// Returns `Ok(true)` for a well-formed marker; the position after its
    /// space is then a line start. A run not followed by a space closes
    /// every open level and is written back as `&gt;` text.
    ///
    /// # Errors
    /// [`RenderError::QuoteJump`] when the run is more than one level
    /// deeper than the current depth.
    pub(super) fn parse_quote_marker(&mut self) -> Result<bool> {
        let offset = self.cursor.offset();
        let depth = self.quote_depth;
        let run = self.cursor.skip_while(|b| b == b'>');

        if run > depth + 1 {
            return Err(RenderError::QuoteJump {
                offset,
                from: depth,
                to: run,
            });
        }

        if !self.cursor.at(b' ') {
            log::warn!("no space after `>` at offset {offset}, ending the blockquote");
            self.close_quotes();
            for _ in 0..run {
                self.out.write_special(b'>');
            }
            return Ok(false);
        }
        self.cursor.bump();

        if run == depth + 1 {
            self.out.blockquote_start();
        } else if run < depth {
            self.out.close_blockquotes(depth - run);
        } else {
            // same level: continuation line
            self.out.line_break();
        }
        self.quote_depth = run;
        self.quoted_line = true;
        Ok(true)
    }

    /// Close every open blockquote.
    pub(super) fn close_quotes(&mut self) {
        self.out.close_blockquotes(self.quote_depth);
        self.quote_depth = 0;
    }
}
