//! Extracted element and control types

use std::ops::Range;

use crate::version::Version;

/// Category of an annotated element, carrying its version tag(s).
///
/// One variant per styling rule; classification happens once during
/// extraction so the sweep is a single traversal with a per-variant policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElementKind {
    /// Per-version jump control (`<button class="...-1-2-3">`)
    Button { version: Version },
    /// Insertion marker (`<ins class="...-1-2-3">`)
    Insertion { version: Version },
    /// Changed table (`<table class="changed-in-1-2-3">`)
    ChangeTable { version: Version },
    /// Deletion marker (`<del class="...-1-2-3">`); `paragraph_number` is
    /// set when the class list contains `paranum`
    Deletion {
        version: Version,
        paragraph_number: bool,
    },
    /// Paragraph container (`<div class="paragraph added-in-… removed-in-…">`)
    Paragraph {
        added_in: Option<Version>,
        removed_in: Option<Version>,
    },
    /// Review comment (`class="diff-comment changed-in-…"`); when several
    /// `changed-in-` classes are present the last one wins
    Comment { changed_in: Version },
    /// Element in a versioned category whose class carries no parseable
    /// version; rendered unstyled, clearing any stale inline style
    Untagged,
}

/// Where an attribute can be written within a tag.
///
/// `Existing` ranges include the whitespace preceding the attribute, so
/// replacing with an empty string removes the attribute cleanly and every
/// non-empty replacement starts with a space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrSlot {
    /// Byte range of an existing attribute (leading whitespace included)
    Existing(Range<usize>),
    /// Byte offset just before the tag's closing `>` (or `/>`)
    InsertAt(usize),
}

/// An element whose display state depends on the selected range
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatedElement {
    pub kind: ElementKind,
    /// Slot for the `style` attribute
    pub style: AttrSlot,
}

/// Which selection control an input element is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    /// Radio `input[name=oldest]`
    Oldest,
    /// Radio `input[name=newest]`
    Newest,
    /// Checkbox `input[name=show-deleted]`
    ShowDeleted,
}

/// A selection control extracted from the document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Control {
    pub kind: ControlKind,
    /// Hyphenated `value` parsed to a version; `None` for the checkbox
    pub version: Option<Version>,
    pub checked: bool,
    /// Slot for the bare `checked` attribute
    pub checked_slot: AttrSlot,
}
