//! Optional post-pass that strips empty top-level elements.
//!
//! Works on the rendered HTML without a DOM: tags are matched with a
//! small stack, and an element counts as empty when its text content
//! (everything outside tags) is whitespace only.

use memchr::memchr;
use smallvec::SmallVec;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TagKind {
    Open,
    Close,
    Void,
}

#[derive(Debug, Clone, Copy)]
struct Tag<'a> {
    name: &'a str,
    kind: TagKind,
    /// Length of the tag in bytes, `<` through `>`.
    len: usize,
}

const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "wbr"];

/// Parse a tag at the start of `s`.
fn parse_tag(s: &str) -> Option<Tag<'_>> {
    let rest = s.strip_prefix('<')?;
    let end = memchr(b'>', rest.as_bytes())?;
    let inner = &rest[..end];

    let (kind, body) = if let Some(body) = inner.strip_prefix('/') {
        (TagKind::Close, body)
    } else if let Some(body) = inner.strip_suffix('/') {
        (TagKind::Void, body)
    } else {
        (TagKind::Open, inner)
    };
    let name = body.split_ascii_whitespace().next()?;
    if !name.bytes().all(|b| b.is_ascii_alphanumeric()) {
        return None;
    }
    let kind = if kind == TagKind::Open && VOID_ELEMENTS.contains(&name) {
        TagKind::Void
    } else {
        kind
    };
    Some(Tag {
        name,
        kind,
        len: end + 2,
    })
}

/// Find the end of the element opening at `start`.
///
/// Returns the offset after its closing tag and whether it has text, or
/// `None` if the nesting is unbalanced.
fn element_span(html: &str, start: usize) -> Option<(usize, bool)> {
    let mut stack: SmallVec<[&str; 8]> = SmallVec::new();
    let mut has_text = false;
    let mut pos = start;

    while pos < html.len() {
        let rest = &html[pos..];
        if let Some(tag) = parse_tag(rest) {
            match tag.kind {
                TagKind::Open => stack.push(tag.name),
                TagKind::Close => {
                    if stack.pop() != Some(tag.name) {
                        return None;
                    }
                    if stack.is_empty() {
                        return Some((pos + tag.len, has_text));
                    }
                }
                TagKind::Void => {}
            }
            pos += tag.len;
        } else {
            let ch = rest.chars().next()?;
            if !ch.is_whitespace() {
                has_text = true;
            }
            pos += ch.len_utf8();
        }
    }
    None
}

/// Remove top-level elements with no text content.
///
/// A removed element also takes one directly following newline with it.
/// Void elements and unbalanced markup are kept verbatim.
///
/// # Example
/// ```
/// use safemark::strip_empty_elements;
///
/// let html = "<h1></h1>\nText<blockquote> </blockquote>\n";
/// assert_eq!(strip_empty_elements(html), "Text");
/// ```
pub fn strip_empty_elements(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut pos = 0;

    while pos < html.len() {
        let rest = &html[pos..];
        let Some(lt) = memchr(b'<', rest.as_bytes()) else {
            out.push_str(rest);
            break;
        };
        out.push_str(&rest[..lt]);
        pos += lt;

        let rest = &html[pos..];
        match parse_tag(rest) {
            Some(tag) if tag.kind == TagKind::Open => match element_span(html, pos) {
                Some((end, false)) => {
                    pos = end;
                    if html[pos..].starts_with('\n') {
                        pos += 1;
                    }
                }
                Some((end, true)) => {
                    out.push_str(&html[pos..end]);
                    pos = end;
                }
                None => {
                    out.push_str(rest);
                    break;
                }
            },
            Some(tag) => {
                out.push_str(&rest[..tag.len]);
                pos += tag.len;
            }
            None => {
                out.push('<');
                pos += 1;
            }
        }
    }
    out
}
