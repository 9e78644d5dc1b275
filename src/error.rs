//! Error types for rendering.
//!
//! Every error is fatal: the render call unwinds and returns no HTML.
//! Offsets are byte offsets into the input.

use std::fmt;

use thiserror::Error;

/// Where a raw `<` or `>` was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    /// Inside a heading line.
    Heading,
    /// Inside a list item.
    List,
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Context::Heading => f.write_str("heading"),
            Context::List => f.write_str("list"),
        }
    }
}

/// Broad category of a [`RenderError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Raw HTML where it is not allowed.
    Structural,
    /// `</output>` with no passthrough element open.
    UnbalancedPassthrough,
    /// Quote or list nesting jumping by more than one level.
    IllegalNesting,
    /// A quote inside a list dropping below the list's starting depth.
    QuoteDedent,
    /// Too many nested lists.
    NestingOverflow,
    /// Bad option or cursor misuse.
    InvalidArgument,
}

/// Main error type for rendering.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    #[error("unescaped `{}` at offset {offset} in {context}; HTML is disabled there, escape it with `\\`", char::from(*byte))]
    RawHtml {
        offset: usize,
        byte: u8,
        context: Context,
    },

    #[error("`</output>` at offset {offset} closes a passthrough element that was never opened")]
    UnbalancedPassthrough { offset: usize },

    #[error("can't quote at depth {to} at offset {offset} when the previous depth was {from}")]
    QuoteJump { offset: usize, from: usize, to: usize },

    #[error("can't nest a list at level {to} at offset {offset} when the current level is {from}")]
    IndentJump { offset: usize, from: usize, to: usize },

    #[error("unexpected indentation at offset {offset}: no list marker follows")]
    UnexpectedIndentation { offset: usize },

    #[error("quote depth {found} at offset {offset} is below the depth {floor} the list started at")]
    QuoteDedentInList {
        offset: usize,
        floor: usize,
        found: usize,
    },

    #[error("list nesting at offset {offset} exceeds the limit of {limit}")]
    NestingTooDeep { offset: usize, limit: usize },

    #[error("can't seek backward from offset {from} to {to}")]
    BackwardSeek { from: usize, to: usize },

    #[error("spaces per tab must be positive")]
    InvalidSpacesPerTab,
}

/// Convenience alias for results in this crate.
pub type Result<T> = std::result::Result<T, RenderError>;

impl RenderError {
    /// The category this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RenderError::RawHtml { .. } => ErrorKind::Structural,
            RenderError::UnbalancedPassthrough { .. } => ErrorKind::UnbalancedPassthrough,
            RenderError::QuoteJump { .. }
            | RenderError::IndentJump { .. }
            | RenderError::UnexpectedIndentation { .. } => ErrorKind::IllegalNesting,
            RenderError::QuoteDedentInList { .. } => ErrorKind::QuoteDedent,
            RenderError::NestingTooDeep { .. } => ErrorKind::NestingOverflow,
            RenderError::BackwardSeek { .. } | RenderError::InvalidSpacesPerTab => {
                ErrorKind::InvalidArgument
            }
        }
    }

    /// Byte offset of the offending input, if the error has one.
    pub fn offset(&self) -> Option<usize> {
        match *self {
            RenderError::RawHtml { offset, .. }
            | RenderError::UnbalancedPassthrough { offset }
            | RenderError::QuoteJump { offset, .. }
            | RenderError::IndentJump { offset, .. }
            | RenderError::UnexpectedIndentation { offset }
            | RenderError::QuoteDedentInList { offset, .. }
            | RenderError::NestingTooDeep { offset, .. } => Some(offset),
            RenderError::BackwardSeek { to, .. } => Some(to),
            RenderError::InvalidSpacesPerTab => None,
        }
    }
}
