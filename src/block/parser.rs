//! Parser state and the top-level dispatcher.

use crate::cursor::Cursor;
use crate::error::Result;
use crate::escape::plain_run_len;
use crate::inline::{Emphasis, Passthrough, Style};
use crate::render::HtmlWriter;
use crate::Options;

use super::list::ListMarker;

/// Whether scanning goes on after an escape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Flow {
    Continue,
    /// A trailing backslash ended the input.
    Stop,
}

/// What a run of plain text ended with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Text {
    Inline,
    /// Two or more consecutive newlines.
    ParagraphBreak,
}

/// State of one render call.
///
/// Built fresh per call and turned back into its writer with
/// [`Parser::into_writer`], so no state leaks between calls.
pub(crate) struct Parser<'a> {
    pub(super) cursor: Cursor<'a>,
    pub(super) out: HtmlWriter,
    pub(super) spaces_per_tab: usize,
    pub(super) emphasis: Emphasis,
    pub(super) passthrough: Passthrough,
    /// Number of open `<blockquote>` elements.
    pub(super) quote_depth: usize,
    /// The cursor sits at a line start whose `>` prefix was already read.
    pub(super) quoted_line: bool,
}

impl<'a> Parser<'a> {
    /// Create a parser writing into `out`.
    pub(crate) fn new(input: &'a [u8], out: HtmlWriter, options: &Options) -> Self {
        Self {
            cursor: Cursor::new(input),
            out,
            spaces_per_tab: options.spaces_per_tab,
            emphasis: Emphasis::default(),
            passthrough: Passthrough::default(),
            quote_depth: 0,
            quoted_line: false,
        }
    }

    /// Scan the whole input once, writing HTML.
    ///
    /// Open blockquotes are closed at the end. Open emphasis and open
    /// passthrough elements are left as they are. On error the writer
    /// holds partial output.
    pub(crate) fn parse(&mut self) -> Result<()> {
        while let Some(b) = self.cursor.peek() {
            let quoted = std::mem::take(&mut self.quoted_line);
            let line_start = quoted || self.cursor.at_line_start();

            if b == b'\\' {
                if self.parse_escape(false) == Flow::Stop {
                    break;
                }
                continue;
            }

            if line_start && b == b'>' {
                self.parse_quote_marker()?;
                continue;
            }
            if line_start && !quoted && self.quote_depth > 0 {
                log::info!(
                    "closing {} blockquote(s) at offset {}",
                    self.quote_depth,
                    self.cursor.offset()
                );
                self.close_quotes();
            }

            // Raw HTML is only let through as the passthrough element.
            if b == b'<' && self.passthrough.try_consume(&mut self.cursor, &mut self.out)? {
                continue;
            }

            if line_start && b == b'#' && self.parse_heading()? {
                continue;
            }

            if line_start {
                if let Some(marker) = ListMarker::at(self.cursor.remaining_slice()) {
                    self.cursor.advance(marker.len);
                    self.parse_list(marker.kind, 0, self.quote_depth)?;
                    continue;
                }
            }

            if self.parse_style() {
                continue;
            }

            if self.parse_text() == Text::ParagraphBreak {
                self.out.paragraph_break();
            }
        }

        self.close_quotes();
        Ok(())
    }

    /// Give back the output buffer.
    pub(crate) fn into_writer(self) -> HtmlWriter {
        self.out
    }

    /// Handle `\` at the cursor.
    ///
    /// The escaped byte goes through entity substitution. A trailing
    /// backslash is written literally and stops the scan. With
    /// `line_bound`, a backslash right before `\n` is literal too and the
    /// newline is left for the caller.
    pub(super) fn parse_escape(&mut self, line_bound: bool) -> Flow {
        match self.cursor.peek_ahead(1) {
            Some(b'\n') if line_bound => {
                self.out.write_byte(b'\\');
                self.cursor.bump();
                Flow::Continue
            }
            Some(next) => {
                self.out.write_special(next);
                self.cursor.advance(2);
                Flow::Continue
            }
            None => {
                self.out.write_byte(b'\\');
                self.cursor.bump();
                Flow::Stop
            }
        }
    }

    /// Toggle emphasis if a `*` or `**` marker is at the cursor.
    pub(super) fn parse_style(&mut self) -> bool {
        match Style::at(self.cursor.remaining_slice()) {
            Some(style) => {
                self.emphasis.toggle(style, &mut self.out);
                self.cursor.advance(style.marker_len());
                true
            }
            None => false,
        }
    }

    /// Plain text: spaces, newlines, or a run of ordinary bytes.
    ///
    /// Two or more spaces right before a newline become `<br />` and eat
    /// the newline. A single newline is dropped.
    pub(super) fn parse_text(&mut self) -> Text {
        match self.cursor.peek() {
            Some(b' ') => {
                let spaces = self.cursor.skip_spaces();
                match self.cursor.next() {
                    Some(b'\n') if spaces > 1 => self.out.line_break(),
                    Some(_) => {
                        self.cursor.retreat();
                        self.out.write_spaces(spaces);
                    }
                    None => self.out.write_spaces(spaces),
                }
                Text::Inline
            }
            Some(b'\n') => {
                let newlines = self.cursor.skip_while(|b| b == b'\n');
                if newlines > 1 {
                    Text::ParagraphBreak
                } else {
                    Text::Inline
                }
            }
            Some(b) => {
                let rest = self.cursor.remaining_slice();
                let run = plain_run_len(rest);
                if run > 0 {
                    self.out.write_bytes(&rest[..run]);
                    self.cursor.advance(run);
                } else {
                    self.out.write_special(b);
                    self.cursor.bump();
                }
                Text::Inline
            }
            None => Text::Inline,
        }
    }
}
