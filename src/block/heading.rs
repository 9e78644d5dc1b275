//! ATX headings.

use crate::error::{Context, RenderError, Result};
use crate::limits::MAX_HEADING_LEVEL;

use super::parser::{Flow, Parser};

impl Parser<'_> {
    /// Parse a heading at line start.
    ///
    /// Returns `Ok(false)` without moving when the `#` run is not followed
    /// by a space; the caller then writes the `#`s as text. Content runs
    /// to the end of the line with emphasis and escapes applied.
    ///
    /// # Errors
    /// [`RenderError::RawHtml`] for an unescaped `<` or `>` in the content.
    pub(super) fn parse_heading(&mut self) -> Result<bool> {
        let start = self.cursor.offset();
        let run = self.cursor.run_length(b'#');
        if self.cursor.peek_ahead(run) != Some(b' ') {
            return Ok(false);
        }

        let level = if run > MAX_HEADING_LEVEL {
            log::warn!("{run} `#` for a heading at offset {start}, writing an <h6>");
            MAX_HEADING_LEVEL
        } else {
            run
        };
        // at most 6
        let level = level as u8;

        self.cursor.seek(start + run + 1)?;
        let end = self.cursor.line_end();
        self.out.heading_start(level);

        while self.cursor.offset() < end {
            let offset = self.cursor.offset();
            let Some(b) = self.cursor.peek() else {
                break;
            };
            match b {
                b'\\' => {
                    if self.parse_escape(true) == Flow::Stop {
                        break;
                    }
                }
                b'<' | b'>' => {
                    return Err(RenderError::RawHtml {
                        offset,
                        byte: b,
                        context: Context::Heading,
                    });
                }
                _ => {
                    if !self.parse_style() {
                        self.out.write_special(b);
                        self.cursor.bump();
                    }
                }
            }
        }

        self.out.heading_end(level);
        if self.cursor.at(b'\n') {
            self.cursor.bump();
        }
        Ok(true)
    }
}
