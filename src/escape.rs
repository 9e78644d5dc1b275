//! Entity substitution for characters that could be read as markup.
//!
//! This is the only sanitization boundary for text outside the
//! passthrough element: every byte the parser does not consume as
//! syntax goes through [`special_char_of`].

/// Entity for a special byte, or `None` if it passes through unchanged.
///
/// `_` maps to `&#45;`, matching the fixed table the renderer has always
/// emitted.
///
/// # Example
/// ```
/// use safemark::escape::special_char_of;
///
/// assert_eq!(special_char_of(b'<'), Some("&lt;"));
/// assert_eq!(special_char_of(b'a'), None);
/// ```
#[inline]
pub fn special_char_of(b: u8) -> Option<&'static str> {
    match b {
        b'<' => Some("&lt;"),
        b'>' => Some("&gt;"),
        b'#' => Some("&#35;"),
        b'*' => Some("&#42;"),
        b'_' => Some("&#45;"),
        _ => None,
    }
}

/// Write `b`, substituting its entity if it is special.
#[inline]
pub fn escape_byte_into(out: &mut Vec<u8>, b: u8) {
    match special_char_of(b) {
        Some(entity) => out.extend_from_slice(entity.as_bytes()),
        None => out.push(b),
    }
}

/// Lookup table for bytes that stop a run of plain text.
/// Index by byte value, true if the dispatcher has to look at it.
const STOP_TABLE: [bool; 256] = {
    let mut table = [false; 256];
    table[b'\\' as usize] = true;
    table[b'<' as usize] = true;
    table[b'>' as usize] = true;
    table[b'#' as usize] = true;
    table[b'*' as usize] = true;
    table[b'_' as usize] = true;
    table[b' ' as usize] = true;
    table[b'\n' as usize] = true;
    table
};

/// Length of the leading run of bytes that are copied verbatim.
#[inline]
pub fn plain_run_len(input: &[u8]) -> usize {
    input
        .iter()
        .position(|&b| STOP_TABLE[b as usize])
        .unwrap_or(input.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_chars() {
        assert_eq!(special_char_of(b'<'), Some("&lt;"));
        assert_eq!(special_char_of(b'>'), Some("&gt;"));
        assert_eq!(special_char_of(b'#'), Some("&#35;"));
        assert_eq!(special_char_of(b'*'), Some("&#42;"));
        assert_eq!(special_char_of(b'_'), Some("&#45;"));
    }

    #[test]
    fn test_identity_outside_set() {
        for b in [b'a', b'&', b'"', b'\\', b'-', b'\n', 0xC3] {
            assert_eq!(special_char_of(b), None);
        }
    }

    #[test]
    fn test_escape_byte_into() {
        let mut out = Vec::new();
        for &b in b"a<b>" {
            escape_byte_into(&mut out, b);
        }
        assert_eq!(out, b"a&lt;b&gt;");
    }

    #[test]
    fn test_plain_run_len() {
        assert_eq!(plain_run_len(b"hello world"), 5);
        assert_eq!(plain_run_len(b"abc"), 3);
        assert_eq!(plain_run_len(b"*x"), 0);
        assert_eq!(plain_run_len(b"ab\ncd"), 2);
        assert_eq!(plain_run_len("héllo<".as_bytes()), 6);
    }
}
