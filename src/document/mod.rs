//! Document extraction layer
//!
//! Parses the annotated HTML document and extracts everything the filter
//! needs: the annotated elements (classified into [`types::ElementKind`]
//! variants), the selection controls (version radios and the show-deleted
//! checkbox), and byte-accurate slots for patching `style` and `checked`
//! attributes in place.
//!
//! - `html.rs`: tree-sitter based extraction from HTML source
//! - `types.rs`: extracted element and control types
//! - `traits.rs`: `SelectionSource` seam for the filter layer

pub mod html;
pub mod traits;
pub mod types;

pub use html::HtmlDocument;
pub use traits::SelectionSource;
pub use types::{AnnotatedElement, AttrSlot, Control, ControlKind, ElementKind};

use thiserror::Error;

/// Error type for document extraction
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Tree-sitter could not be set up or produced no tree
    #[error("Failed to parse HTML: {0}")]
    ParseFailed(String),

    /// A selection control carries a value that is not a version
    #[error("Invalid value {value:?} on input[name={name}]: {source}")]
    InvalidControlValue {
        name: String,
        value: String,
        source: crate::version::VersionError,
    },
}
