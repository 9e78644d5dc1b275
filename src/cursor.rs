//! Index-based cursor for byte scanning.
//!
//! Lookaround is computed from the immutable input and the current
//! offset on every call, so there are no cached characters to go stale.

use crate::error::{RenderError, Result};

/// A cursor for byte-by-byte scanning.
///
/// `Cursor` is `Copy`: callers probe ahead on a copy and commit by
/// assigning it back, instead of seeking backward.
///
/// # Example
/// ```
/// use safemark::Cursor;
///
/// let input = b"Hello, World!";
/// let mut cursor = Cursor::new(input);
///
/// assert_eq!(cursor.peek(), Some(b'H'));
/// cursor.advance(7);
/// assert_eq!(cursor.peek(), Some(b'W'));
/// assert_eq!(cursor.prev(), Some(b' '));
/// ```
#[derive(Clone, Copy)]
pub struct Cursor<'a> {
    input: &'a [u8],
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor over a byte slice.
    #[inline]
    pub fn new(input: &'a [u8]) -> Self {
        Self { input, pos: 0 }
    }

    /// Current offset from the start of input.
    #[inline]
    pub fn offset(&self) -> usize {
        self.pos
    }

    /// Number of bytes remaining.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.input.len() - self.pos
    }

    /// Check if cursor is at end of input.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// Peek the current byte without advancing.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// Peek at byte n positions ahead.
    #[inline]
    pub fn peek_ahead(&self, n: usize) -> Option<u8> {
        self.input.get(self.pos + n).copied()
    }

    /// The byte just before the cursor.
    #[inline]
    pub fn prev(&self) -> Option<u8> {
        self.pos.checked_sub(1).and_then(|p| self.input.get(p).copied())
    }

    /// True at the start of input or right after a newline.
    #[inline]
    pub fn at_line_start(&self) -> bool {
        self.pos == 0 || self.prev() == Some(b'\n')
    }

    /// Advance by n bytes, stopping at end of input.
    #[inline]
    pub fn advance(&mut self, n: usize) {
        debug_assert!(n <= self.remaining());
        self.pos = (self.pos + n).min(self.input.len());
    }

    /// Advance by 1 byte.
    #[inline]
    pub fn bump(&mut self) {
        self.advance(1);
    }

    /// Move to `index` and return the byte there.
    ///
    /// Seeking backward is refused; use a copied cursor to look ahead.
    pub fn seek(&mut self, index: usize) -> Result<Option<u8>> {
        if index < self.pos {
            return Err(RenderError::BackwardSeek {
                from: self.pos,
                to: index,
            });
        }
        self.advance(index - self.pos);
        Ok(self.peek())
    }

    /// Step back exactly one byte.
    ///
    /// Only meant to undo a single over-read.
    #[inline]
    pub fn retreat(&mut self) {
        debug_assert!(self.pos > 0);
        self.pos = self.pos.saturating_sub(1);
    }

    /// Consume and return current byte.
    #[inline]
    pub fn next(&mut self) -> Option<u8> {
        let b = self.peek()?;
        self.pos += 1;
        Some(b)
    }

    /// Check if current position matches a byte.
    #[inline]
    pub fn at(&self, b: u8) -> bool {
        self.peek() == Some(b)
    }

    /// Skip while predicate is true.
    #[inline]
    pub fn skip_while<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(u8) -> bool,
    {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if !predicate(b) {
                break;
            }
            self.pos += 1;
        }
        self.pos - start
    }

    /// Skip spaces only.
    #[inline]
    pub fn skip_spaces(&mut self) -> usize {
        self.skip_while(|b| b == b' ')
    }

    /// Count how many times `b` repeats starting at the cursor, without moving.
    #[inline]
    pub fn run_length(&self, b: u8) -> usize {
        self.remaining_slice().iter().take_while(|&&c| c == b).count()
    }

    /// Consume a specific byte sequence if present.
    #[inline]
    pub fn eat_bytes(&mut self, bytes: &[u8]) -> bool {
        if self.remaining_slice().starts_with(bytes) {
            self.pos += bytes.len();
            true
        } else {
            false
        }
    }

    /// Consume leading tabs and spaces, returning the indentation level.
    ///
    /// A tab counts as one level and a space as `1 / spaces_per_tab` of
    /// one; the total is floored. Three spaces at four per tab is level
    /// 0, while a single tab is always at least level 1.
    pub fn count_indentation(&mut self, spaces_per_tab: usize) -> usize {
        debug_assert!(spaces_per_tab > 0);
        let mut tabs = 0;
        let mut spaces = 0;
        while let Some(b) = self.peek() {
            match b {
                b'\t' => tabs += 1,
                b' ' => spaces += 1,
                _ => break,
            }
            self.pos += 1;
        }
        tabs + spaces / spaces_per_tab
    }

    /// Get the remaining bytes as a slice.
    #[inline]
    pub fn remaining_slice(&self) -> &'a [u8] {
        &self.input[self.pos..]
    }

    /// Find the next occurrence of a byte using memchr.
    #[inline]
    pub fn find(&self, needle: u8) -> Option<usize> {
        memchr::memchr(needle, self.remaining_slice())
    }

    /// Absolute offset of the end of the current line (the next `\n`, or
    /// end of input).
    #[inline]
    pub fn line_end(&self) -> usize {
        self.find(b'\n')
            .map_or(self.input.len(), |rel| self.pos + rel)
    }
}

impl std::fmt::Debug for Cursor<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Cursor")
            .field("offset", &self.offset())
            .field("remaining", &self.remaining())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_new() {
        let cursor = Cursor::new(b"Hello");
        assert_eq!(cursor.offset(), 0);
        assert_eq!(cursor.remaining(), 5);
        assert!(!cursor.is_eof());
        assert!(cursor.at_line_start());
    }

    #[test]
    fn test_cursor_empty() {
        let cursor = Cursor::new(b"");
        assert!(cursor.is_eof());
        assert_eq!(cursor.peek(), None);
        assert_eq!(cursor.prev(), None);
    }

    #[test]
    fn test_cursor_lookaround() {
        let mut cursor = Cursor::new(b"abc");
        assert_eq!(cursor.peek_ahead(1), Some(b'b'));
        assert_eq!(cursor.peek_ahead(3), None);
        cursor.bump();
        assert_eq!(cursor.prev(), Some(b'a'));
        assert_eq!(cursor.peek(), Some(b'b'));
    }

    #[test]
    fn test_cursor_line_start() {
        let mut cursor = Cursor::new(b"a\nb");
        cursor.bump();
        assert!(!cursor.at_line_start());
        cursor.bump();
        assert!(cursor.at_line_start());
    }

    #[test]
    fn test_cursor_next_and_retreat() {
        let mut cursor = Cursor::new(b"ab");
        assert_eq!(cursor.next(), Some(b'a'));
        assert_eq!(cursor.next(), Some(b'b'));
        assert_eq!(cursor.next(), None);
        cursor.retreat();
        assert_eq!(cursor.peek(), Some(b'b'));
    }

    #[test]
    fn test_cursor_seek_forward() {
        let mut cursor = Cursor::new(b"hello world");
        assert_eq!(cursor.seek(6), Ok(Some(b'w')));
        assert_eq!(cursor.seek(6), Ok(Some(b'w')));
        assert_eq!(cursor.seek(11), Ok(None));
        assert!(cursor.is_eof());
    }

    #[test]
    fn test_cursor_seek_backward_fails() {
        let mut cursor = Cursor::new(b"hello");
        cursor.advance(3);
        assert_eq!(
            cursor.seek(1),
            Err(RenderError::BackwardSeek { from: 3, to: 1 })
        );
        assert_eq!(cursor.offset(), 3);
    }

    #[test]
    fn test_cursor_skip_spaces() {
        let mut cursor = Cursor::new(b"   abc");
        assert_eq!(cursor.skip_spaces(), 3);
        assert_eq!(cursor.peek(), Some(b'a'));
    }

    #[test]
    fn test_cursor_run_length() {
        let cursor = Cursor::new(b"###x");
        assert_eq!(cursor.run_length(b'#'), 3);
        assert_eq!(cursor.run_length(b'x'), 0);
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn test_cursor_eat_bytes() {
        let mut cursor = Cursor::new(b"hello world");
        assert!(cursor.eat_bytes(b"hello"));
        assert!(!cursor.eat_bytes(b"hello"));
        assert!(cursor.eat_bytes(b" world"));
        assert!(cursor.is_eof());
        assert!(!cursor.eat_bytes(b"x"));
    }

    #[test]
    fn test_indentation_tabs() {
        let mut cursor = Cursor::new(b"\t\tx");
        assert_eq!(cursor.count_indentation(4), 2);
        assert_eq!(cursor.peek(), Some(b'x'));
    }

    #[test]
    fn test_indentation_spaces_floor() {
        let mut cursor = Cursor::new(b"   x");
        assert_eq!(cursor.count_indentation(4), 0);
        assert_eq!(cursor.peek(), Some(b'x'));

        let mut cursor = Cursor::new(b"     x");
        assert_eq!(cursor.count_indentation(4), 1);
    }

    #[test]
    fn test_indentation_mixed() {
        // one tab plus six spaces at four per tab is 2.5, floored to 2
        let mut cursor = Cursor::new(b"\t      x");
        assert_eq!(cursor.count_indentation(4), 2);

        let mut cursor = Cursor::new(b"  x");
        assert_eq!(cursor.count_indentation(2), 1);
    }

    #[test]
    fn test_indentation_huge_spaces_per_tab() {
        let mut cursor = Cursor::new(b"\t\t   x");
        assert_eq!(cursor.count_indentation(usize::MAX), 2);
    }

    #[test]
    fn test_line_end() {
        let mut cursor = Cursor::new(b"ab\ncd");
        assert_eq!(cursor.line_end(), 2);
        cursor.advance(3);
        assert_eq!(cursor.line_end(), 5);
    }
}
