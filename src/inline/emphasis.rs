//! Toggle-based emphasis.
//!
//! Each style is a single open/closed flag; there is no delimiter stack.
//! Input with crossed or unclosed markers produces unbalanced tags.

use crate::render::HtmlWriter;

/// An emphasis style and its marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// `*` renders as `<i>`.
    Italic,
    /// `**` renders as `<b>`.
    Bold,
}

impl Style {
    /// Recognize a marker at the start of `input`. `**` wins over `*`.
    #[inline]
    pub fn at(input: &[u8]) -> Option<Self> {
        match input {
            [b'*', b'*', ..] => Some(Style::Bold),
            [b'*', ..] => Some(Style::Italic),
            _ => None,
        }
    }

    /// HTML tag name.
    #[inline]
    pub fn tag(self) -> &'static str {
        match self {
            Style::Italic => "i",
            Style::Bold => "b",
        }
    }

    /// Number of marker bytes.
    #[inline]
    pub fn marker_len(self) -> usize {
        match self {
            Style::Italic => 1,
            Style::Bold => 2,
        }
    }
}

/// Open/closed state of each style, owned by one render call.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Emphasis {
    italic: bool,
    bold: bool,
}

impl Emphasis {
    /// Whether `style` is currently open.
    #[inline]
    pub fn is_open(&self, style: Style) -> bool {
        match style {
            Style::Italic => self.italic,
            Style::Bold => self.bold,
        }
    }

    /// Flip `style` and write the matching opening or closing tag.
    pub fn toggle(&mut self, style: Style, out: &mut HtmlWriter) {
        let flag = match style {
            Style::Italic => &mut self.italic,
            Style::Bold => &mut self.bold,
        };
        if *flag {
            out.close_tag(style.tag());
        } else {
            out.open_tag(style.tag());
        }
        *flag = !*flag;
    }
}
