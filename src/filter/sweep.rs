//! The sweep: apply a selection to a document
//!
//! Recomputes the display state of every annotated element as a pure
//! function of (category, version tags, selection) and applies the result as
//! byte edits on the source text. Also patches the `checked` attributes of
//! the selection controls so the output document carries the selection it
//! was rendered with.

use std::ops::Range;

use crate::document::{AttrSlot, Control, ControlKind, HtmlDocument};
use crate::filter::policy::style_for;
use crate::filter::selection::Selection;

/// Render the document under `selection`, returning the restyled HTML.
///
/// Idempotent: sweeping the output again with the same selection reproduces
/// it byte for byte.
pub fn sweep(document: &HtmlDocument, selection: &Selection) -> String {
    let mut edits = Vec::new();

    for element in document.elements() {
        let style = style_for(&element.kind, selection);
        let text = style.css().map(|css| format!(" style=\"{css}\""));
        push_attr_edit(&mut edits, &element.style, text);
    }

    for control in document.controls() {
        let checked = control_checked(control, selection);
        let text = checked.then(|| " checked".to_string());
        push_attr_edit(&mut edits, &control.checked_slot, text);
    }

    apply_edits(document.source(), edits)
}

struct Edit {
    span: Range<usize>,
    replacement: String,
}

/// Queue one attribute write: replace, insert, or remove.
fn push_attr_edit(edits: &mut Vec<Edit>, slot: &AttrSlot, text: Option<String>) {
    match (slot, text) {
        (AttrSlot::Existing(span), Some(text)) => edits.push(Edit {
            span: span.clone(),
            replacement: text,
        }),
        (AttrSlot::Existing(span), None) => edits.push(Edit {
            span: span.clone(),
            replacement: String::new(),
        }),
        (AttrSlot::InsertAt(at), Some(text)) => edits.push(Edit {
            span: *at..*at,
            replacement: text,
        }),
        // Nothing to write and nothing present
        (AttrSlot::InsertAt(_), None) => {}
    }
}

fn control_checked(control: &Control, selection: &Selection) -> bool {
    match control.kind {
        ControlKind::Oldest => control.version == Some(selection.oldest),
        ControlKind::Newest => control.version == Some(selection.newest),
        ControlKind::ShowDeleted => selection.show_deleted,
    }
}

/// Apply edits back to front so earlier spans stay valid.
fn apply_edits(source: &str, mut edits: Vec<Edit>) -> String {
    edits.sort_by(|a, b| b.span.start.cmp(&a.span.start));
    let mut output = source.to_string();
    for edit in edits {
        output.replace_range(edit.span, &edit.replacement);
    }
    output
}
