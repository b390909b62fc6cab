//! Per-category styling rules
//!
//! One policy function over the [`ElementKind`] variants keeps every
//! category's rule in one place. Each rule relates the element's version
//! tag to the `[oldest, newest]` range:
//!
//! - at or before `oldest`: the change is part of the visible baseline
//! - after `newest`: the change has not happened yet in the visible range
//! - otherwise: the change falls within the range and is highlighted

use crate::document::ElementKind;
use crate::filter::selection::Selection;

/// Display state of an annotated element under a given selection.
///
/// The CSS strings are exactly what the page script writes inline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementStyle {
    /// No inline style; the stylesheet's highlighting applies
    Default,
    Hidden,
    /// Insertion or table rendered as ordinary baseline text
    Flattened,
    /// Version button at or before the baseline
    PlainButton,
    /// Version button newer than the visible range
    OutOfRangeButton,
    /// Deletion that has not happened yet, rendered undeleted
    NoStrikethrough,
}

impl ElementStyle {
    /// Inline CSS for this state; `None` means the style attribute is
    /// removed entirely.
    pub fn css(&self) -> Option<&'static str> {
        match self {
            Self::Default => None,
            Self::Hidden => Some("display:none"),
            Self::Flattened => Some("color:black;text-decoration:none;background-color:white;"),
            Self::PlainButton => Some("color:black;background:white;"),
            Self::OutOfRangeButton => Some("color:black;background:white;border:dashed"),
            Self::NoStrikethrough => Some("text-decoration:none"),
        }
    }
}

/// Compute the display state of one element under `selection`.
pub fn style_for(kind: &ElementKind, selection: &Selection) -> ElementStyle {
    let oldest = &selection.oldest;
    let newest = &selection.newest;

    match kind {
        ElementKind::Button { version } => {
            if version.older_or_equal(oldest) {
                ElementStyle::PlainButton
            } else if newest.older(version) {
                ElementStyle::OutOfRangeButton
            } else {
                ElementStyle::Default
            }
        }
        ElementKind::Insertion { version } | ElementKind::ChangeTable { version } => {
            if version.older_or_equal(oldest) {
                ElementStyle::Flattened
            } else if newest.older(version) {
                ElementStyle::Hidden
            } else {
                ElementStyle::Default
            }
        }
        ElementKind::Deletion {
            version,
            paragraph_number,
        } => {
            if version.older_or_equal(oldest) {
                // Deletion predates the baseline; nothing to show
                ElementStyle::Hidden
            } else if newest.older(version) {
                ElementStyle::NoStrikethrough
            } else if *paragraph_number {
                // Numbering markers for in-range deletions are suppressed
                ElementStyle::Hidden
            } else {
                ElementStyle::Default
            }
        }
        ElementKind::Paragraph {
            added_in,
            removed_in,
        } => {
            if added_in.as_ref().is_some_and(|added| newest.older(added)) {
                ElementStyle::Hidden
            } else if removed_in
                .as_ref()
                .is_some_and(|removed| removed.older_or_equal(oldest))
            {
                if selection.show_deleted {
                    ElementStyle::Default
                } else {
                    ElementStyle::Hidden
                }
            } else {
                ElementStyle::Default
            }
        }
        ElementKind::Comment { changed_in } => {
            if changed_in.older_or_equal(oldest) {
                ElementStyle::Hidden
            } else {
                ElementStyle::Default
            }
        }
        ElementKind::Untagged => ElementStyle::Default,
    }
}
