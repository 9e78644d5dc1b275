//! Inline constructs.
//!
//! Both pieces of inline state live in the parser value of one render
//! call; nothing is shared between calls.

mod emphasis;
mod passthrough;

pub use emphasis::{Emphasis, Style};
pub use passthrough::Passthrough;
