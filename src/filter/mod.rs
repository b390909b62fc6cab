//! Range filtering
//!
//! Everything between "which versions did the viewer pick" and "what styles
//! land in the output":
//!
//! - [`selection`]: the `[oldest, newest]` range plus the show-deleted flag,
//!   derived from the document's controls, restored from query parameters,
//!   or bracketed for diff mode
//! - [`policy`]: per-category styling rules
//! - [`sweep`]: the full pass applying policy decisions as byte edits

pub mod policy;
pub mod selection;
pub mod sweep;

pub use policy::{ElementStyle, style_for};
pub use selection::{Selection, SelectionError};
pub use sweep::sweep;
