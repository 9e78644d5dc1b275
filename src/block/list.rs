//! Ordered and unordered lists.
//!
//! One routine serves both kinds and recurses for nested lists, one call
//! per indentation level. Lines may carry `>` prefixes; the quote depth
//! inside a list never drops below the depth the list started at.

use crate::error::{Context, RenderError, Result};
use crate::limits::MAX_LIST_NESTING;

use super::parser::{Flow, Parser, Text};
use super::ListKind;

/// A list marker found at a line start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMarker {
    /// Which list the marker opens or continues.
    pub kind: ListKind,
    /// Bytes the marker occupies, including its trailing space.
    pub len: usize,
}

impl ListMarker {
    /// Detect a marker at the start of `input`.
    ///
    /// Digits followed by `.` (and an optional space) are an ordered
    /// marker; `- ` is an unordered one. Ordered is checked first.
    ///
    /// # Example
    /// ```
    /// use safemark::block::{ListKind, ListMarker};
    ///
    /// let marker = ListMarker::at(b"12. twelve").unwrap();
    /// assert_eq!(marker.kind, ListKind::Ordered);
    /// assert_eq!(marker.len, 4);
    /// assert_eq!(ListMarker::at(b"-nope"), None);
    /// ```
    pub fn at(input: &[u8]) -> Option<Self> {
        let digits = input.iter().take_while(|b| b.is_ascii_digit()).count();
        if digits > 0 && input.get(digits) == Some(&b'.') {
            let space = usize::from(input.get(digits + 1) == Some(&b' '));
            return Some(Self {
                kind: ListKind::Ordered,
                len: digits + 1 + space,
            });
        }
        if input.starts_with(b"- ") {
            return Some(Self {
                kind: ListKind::Unordered,
                len: 2,
            });
        }
        None
    }
}

/// How a list parse ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ListExit {
    /// A line that does not belong to the list, or end of input.
    Line,
    /// A blank line; it ends every enclosing list too.
    ParagraphBreak,
}

/// Outcome of looking at a line start inside a list.
enum LineStart {
    /// Same level, same marker: next item.
    Item,
    /// One level deeper with a marker: nested list.
    Nested(ListMarker),
    /// The line is not part of this list.
    End,
}

impl Parser<'_> {
    /// Parse a list whose first marker was just consumed.
    ///
    /// On return the cursor is at the first byte that is not part of the
    /// list; nothing of that line's content has been written.
    ///
    /// # Errors
    /// Raw `<`/`>` in item text, indentation growing by more than one
    /// level, indentation with no marker, quotes dropping below
    /// `quote_floor`, or nesting past [`MAX_LIST_NESTING`].
    pub(super) fn parse_list(
        &mut self,
        kind: ListKind,
        level: usize,
        quote_floor: usize,
    ) -> Result<ListExit> {
        if level >= MAX_LIST_NESTING {
            return Err(RenderError::NestingTooDeep {
                offset: self.cursor.offset(),
                limit: MAX_LIST_NESTING,
            });
        }
        log::trace!(
            "{kind:?} list at level {level}, offset {}",
            self.cursor.offset()
        );
        self.out.list_start(kind);

        let mut exit = ListExit::Line;
        while let Some(b) = self.cursor.peek() {
            let quoted = std::mem::take(&mut self.quoted_line);
            if quoted || self.cursor.at_line_start() {
                match self.list_line_start(kind, level, quote_floor, quoted)? {
                    LineStart::Item => {
                        self.out.list_item_next();
                        continue;
                    }
                    LineStart::Nested(marker) => {
                        if self.parse_list(marker.kind, level + 1, quote_floor)?
                            == ListExit::ParagraphBreak
                        {
                            exit = ListExit::ParagraphBreak;
                            break;
                        }
                        continue;
                    }
                    LineStart::End => break,
                }
            }

            let offset = self.cursor.offset();
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
                        context: Context::List,
                    });
                }
                _ => {
                    if !self.parse_style() && self.parse_text() == Text::ParagraphBreak {
                        exit = ListExit::ParagraphBreak;
                        break;
                    }
                }
            }
        }

        self.out.list_end(kind);
        log::trace!("{kind:?} list at level {level} ended ({exit:?})");
        Ok(exit)
    }

    /// Decide what a line start means for the list at `level`.
    ///
    /// Only consumes input when the line continues the list. When the
    /// list ends after this line's `>` prefix was read, `quoted_line` is
    /// set so the caller does not read the prefix twice.
    fn list_line_start(
        &mut self,
        kind: ListKind,
        level: usize,
        quote_floor: usize,
        quoted: bool,
    ) -> Result<LineStart> {
        let mut prefix_read = quoted;
        if !quoted && self.cursor.at(b'>') {
            let offset = self.cursor.offset();
            prefix_read = self.parse_quote_marker()?;
            self.quoted_line = false;
            if self.quote_depth < quote_floor {
                return Err(RenderError::QuoteDedentInList {
                    offset,
                    floor: quote_floor,
                    found: self.quote_depth,
                });
            }
        }

        let mut probe = self.cursor;
        let indent = probe.count_indentation(self.spaces_per_tab);
        let marker = ListMarker::at(probe.remaining_slice());

        if indent == level + 1 {
            let Some(marker) = marker else {
                return Err(RenderError::UnexpectedIndentation {
                    offset: probe.offset(),
                });
            };
            probe.advance(marker.len);
            self.cursor = probe;
            return Ok(LineStart::Nested(marker));
        }
        if indent > level + 1 {
            return Err(RenderError::IndentJump {
                offset: probe.offset(),
                from: level,
                to: indent,
            });
        }

        match marker {
            Some(marker) if indent == level && marker.kind == kind => {
                probe.advance(marker.len);
                self.cursor = probe;
                Ok(LineStart::Item)
            }
            _ => {
                self.quoted_line = prefix_read;
                Ok(LineStart::End)
            }
        }
    }
}
