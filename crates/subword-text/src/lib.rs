//! # subword-text: the host side of subword navigation
//!
//! Everything the navigation core reads, and nothing it computes:
//!
//! - **[`position`]**: `Position` (line, col) and `Range`, 0-indexed
//! - **[`line`]**: `Line`, an owned snapshot of one line's characters
//! - **[`document`]**: the `TextDocument` trait the core is generic over
//! - **[`word`]**: the host's coarse word ranges (letters, digits, `_`)
//! - **[`buffer`]**: `Buffer`, a rope-backed `TextDocument`

pub mod buffer;
pub mod document;
pub mod line;
pub mod position;
pub mod word;

pub use buffer::Buffer;
pub use document::TextDocument;
pub use line::Line;
pub use position::{Position, Range};
