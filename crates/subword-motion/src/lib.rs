//! # subword-motion: subword boundaries and navigation
//!
//! Finds the stops a cursor should make inside identifiers like
//! `myVariableName`, `MAX_ITEM_99` or `XMLParser`, and falls back to plain
//! word navigation between words and across lines.
//!
//! - **[`classify`]**: `CharClass` of a single character
//! - **[`boundary`]**: the boundary rule and the left/right scans
//! - **[`selection`]**: move/select/delete actions over selections
//! - **[`error`]**: `NavError` for positions outside the document
//!
//! Everything is generic over [`subword_text::TextDocument`], so any host that
//! can produce lines and word ranges can be navigated.
//!
//! ```
//! use subword_motion::{next_boundary_left, next_boundary_right};
//! use subword_text::{Buffer, Position};
//!
//! let buf = Buffer::from_text("let parseHttpHeader = 1;");
//! let pos = Position::new(0, 4);
//! assert_eq!(next_boundary_right(&buf, pos)?, Position::new(0, 9));
//! assert_eq!(next_boundary_left(&buf, Position::new(0, 13))?, Position::new(0, 9));
//! # Ok::<(), subword_motion::NavError>(())
//! ```

pub mod boundary;
pub mod classify;
pub mod error;
pub mod selection;

pub use boundary::{
    boundaries_in_line, is_boundary, line_stops, next_boundary_left, next_boundary_right,
};
pub use classify::{CharClass, classify};
pub use error::NavError;
pub use selection::{Direction, Selection, SubwordAction, apply_all};
