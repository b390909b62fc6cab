//! HTML extraction of annotated elements and selection controls
//!
//! The annotation scheme lives entirely in class attributes:
//!
//! - trailing `-major-minor-patch` on buttons, `<ins>`, `<del>` and
//!   `changed-in-` tables
//! - `added-in-` / `removed-in-` tokens on `div.paragraph`
//! - `changed-in-` tokens on `.diff-comment`
//!
//! Selection state lives in `input[name=oldest]`, `input[name=newest]` and
//! `input[name=show-deleted]`. Elements and controls are extracted with the
//! byte slots needed to patch `style` and `checked` attributes in place.

use regex::Regex;
use tracing::warn;

use crate::document::DocumentError;
use crate::document::traits::SelectionSource;
use crate::document::types::{AnnotatedElement, AttrSlot, Control, ControlKind, ElementKind};
use crate::version::Version;

/// An annotated document parsed from HTML source.
#[derive(Debug)]
pub struct HtmlDocument {
    source: String,
    elements: Vec<AnnotatedElement>,
    controls: Vec<Control>,
}

impl HtmlDocument {
    /// Parse HTML source and extract annotated elements and controls.
    ///
    /// Elements of a versioned category with a missing or malformed version
    /// tag are extracted as untagged (their inline style gets cleared) with
    /// a warning; a malformed `value` on a selection control is an error.
    pub fn parse(source: &str) -> Result<Self, DocumentError> {
        let mut parser = tree_sitter::Parser::new();
        let language = tree_sitter_html::LANGUAGE;
        parser
            .set_language(&language.into())
            .map_err(|e| DocumentError::ParseFailed(e.to_string()))?;

        let tree = parser
            .parse(source, None)
            .ok_or_else(|| DocumentError::ParseFailed("no tree produced".to_string()))?;

        let extractor = Extractor::new();
        let mut elements = Vec::new();
        let mut controls = Vec::new();
        extractor.walk(tree.root_node(), source, &mut elements, &mut controls)?;

        Ok(Self {
            source: source.to_string(),
            elements,
            controls,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn elements(&self) -> &[AnnotatedElement] {
        &self.elements
    }

    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    fn checked_version(&self, kind: ControlKind) -> Option<Version> {
        self.controls
            .iter()
            .find(|c| c.kind == kind && c.checked)
            .and_then(|c| c.version)
    }

    fn candidates(&self, kind: ControlKind) -> Vec<Version> {
        self.controls
            .iter()
            .filter(|c| c.kind == kind)
            .filter_map(|c| c.version)
            .collect()
    }
}

impl SelectionSource for HtmlDocument {
    fn checked_oldest(&self) -> Option<Version> {
        self.checked_version(ControlKind::Oldest)
    }

    fn checked_newest(&self) -> Option<Version> {
        self.checked_version(ControlKind::Newest)
    }

    fn show_deleted(&self) -> bool {
        self.controls
            .iter()
            .any(|c| c.kind == ControlKind::ShowDeleted && c.checked)
    }

    fn oldest_candidates(&self) -> Vec<Version> {
        self.candidates(ControlKind::Oldest)
    }

    fn newest_candidates(&self) -> Vec<Version> {
        self.candidates(ControlKind::Newest)
    }
}

/// Walks the syntax tree and classifies tags
struct Extractor {
    /// Trailing `-major-minor-patch` on a class attribute value
    suffix_re: Regex,
    /// A full `added-in-` / `removed-in-` / `changed-in-` class token
    tag_re: Regex,
    /// Loose prefix check used to warn about malformed version tags
    tag_prefix_re: Regex,
}

/// One attribute of a start tag, with its patchable span
struct RawAttr {
    name: String,
    value: Option<String>,
    /// Byte range including leading whitespace
    span: std::ops::Range<usize>,
}

impl Extractor {
    fn new() -> Self {
        Self {
            suffix_re: Regex::new(r"(\d+)-(\d+)-(\d+)$").unwrap(),
            tag_re: Regex::new(r"^(added|removed|changed)-in-(\d+)-(\d+)-(\d+)$").unwrap(),
            tag_prefix_re: Regex::new(r"^(added|removed|changed)-in-").unwrap(),
        }
    }

    fn walk(
        &self,
        node: tree_sitter::Node,
        source: &str,
        elements: &mut Vec<AnnotatedElement>,
        controls: &mut Vec<Control>,
    ) -> Result<(), DocumentError> {
        if matches!(node.kind(), "start_tag" | "self_closing_tag") {
            self.classify_tag(node, source, elements, controls)?;
            return Ok(());
        }

        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            self.walk(child, source, elements, controls)?;
        }
        Ok(())
    }

    fn classify_tag(
        &self,
        tag: tree_sitter::Node,
        source: &str,
        elements: &mut Vec<AnnotatedElement>,
        controls: &mut Vec<Control>,
    ) -> Result<(), DocumentError> {
        let Some(tag_name) = tag
            .children(&mut tag.walk())
            .find(|c| c.kind() == "tag_name")
            .map(|c| source[c.byte_range()].to_ascii_lowercase())
        else {
            return Ok(());
        };

        let attrs = attributes(tag, source);

        if tag_name == "input" {
            if let Some(control) = self.classify_input(tag, source, &attrs)? {
                controls.push(control);
            }
            return Ok(());
        }

        let class_value = attr_value(&attrs, "class");
        let tokens: Vec<&str> = class_value
            .as_deref()
            .map(|v| v.split_whitespace().collect())
            .unwrap_or_default();

        // The comment class is decisive even on a tag that would otherwise
        // match a tag-based category.
        let kind = if tokens.contains(&"diff-comment") {
            self.comment_kind(&tokens)
        } else {
            // A suffix-carrying category without a parseable version still
            // gets an element, so a stale inline style is cleared.
            match tag_name.as_str() {
                "button" => Some(
                    self.suffix_version(class_value.as_deref(), "button")
                        .map_or(ElementKind::Untagged, |version| ElementKind::Button {
                            version,
                        }),
                ),
                "ins" => Some(
                    self.suffix_version(class_value.as_deref(), "ins")
                        .map_or(ElementKind::Untagged, |version| ElementKind::Insertion {
                            version,
                        }),
                ),
                "del" => Some(
                    self.suffix_version(class_value.as_deref(), "del")
                        .map_or(ElementKind::Untagged, |version| ElementKind::Deletion {
                            version,
                            paragraph_number: tokens.contains(&"paranum"),
                        }),
                ),
                "table" if class_value.as_deref().is_some_and(|v| v.starts_with("changed-in-")) => {
                    Some(
                        self.suffix_version(class_value.as_deref(), "table")
                            .map_or(ElementKind::Untagged, |version| ElementKind::ChangeTable {
                                version,
                            }),
                    )
                }
                "div" if tokens.contains(&"paragraph") => Some(self.paragraph_kind(&tokens)),
                _ => None,
            }
        };

        if let Some(kind) = kind {
            elements.push(AnnotatedElement {
                kind,
                style: attr_slot(&attrs, "style", tag, source),
            });
        }
        Ok(())
    }

    /// Parse the trailing `-major-minor-patch` of a class attribute value
    fn suffix_version(&self, class_value: Option<&str>, tag_name: &str) -> Option<Version> {
        let class_value = class_value?.trim_end();
        let caps = self.suffix_re.captures(class_value).or_else(|| {
            warn!(
                "No version suffix in class {:?} on <{}>",
                class_value, tag_name
            );
            None
        })?;
        // The regex only admits decimal digits; overflow is the one way a
        // capture can still fail to parse.
        match Version::parse_hyphenated(&caps[0]) {
            Ok(version) => Some(version),
            Err(e) => {
                warn!("Bad version suffix on <{}>: {}", tag_name, e);
                None
            }
        }
    }

    /// Scan class tokens of a `div.paragraph` for lifecycle tags
    fn paragraph_kind(&self, tokens: &[&str]) -> ElementKind {
        let mut added_in = None;
        let mut removed_in = None;
        for token in tokens {
            if let Some(caps) = self.tag_re.captures(token) {
                let version = Version::new(
                    caps[2].parse().unwrap_or(0),
                    caps[3].parse().unwrap_or(0),
                    caps[4].parse().unwrap_or(0),
                );
                match &caps[1] {
                    "added" => added_in = Some(version),
                    "removed" => removed_in = Some(version),
                    _ => {}
                }
            } else if self.tag_prefix_re.is_match(token) {
                warn!("Ignoring malformed version tag {:?} on paragraph", token);
            }
        }
        ElementKind::Paragraph {
            added_in,
            removed_in,
        }
    }

    /// Classify a `.diff-comment`; the last `changed-in-` token wins
    fn comment_kind(&self, tokens: &[&str]) -> Option<ElementKind> {
        let mut changed_in = None;
        for token in tokens {
            if let Some(caps) = self.tag_re.captures(token) {
                if &caps[1] == "changed" {
                    changed_in = Some(Version::new(
                        caps[2].parse().unwrap_or(0),
                        caps[3].parse().unwrap_or(0),
                        caps[4].parse().unwrap_or(0),
                    ));
                }
            } else if self.tag_prefix_re.is_match(token) {
                warn!("Ignoring malformed version tag {:?} on comment", token);
            }
        }
        match changed_in {
            Some(changed_in) => Some(ElementKind::Comment { changed_in }),
            None => {
                warn!("Skipping diff-comment without a changed-in tag");
                None
            }
        }
    }

    fn classify_input(
        &self,
        tag: tree_sitter::Node,
        source: &str,
        attrs: &[RawAttr],
    ) -> Result<Option<Control>, DocumentError> {
        let kind = match attr_value(attrs, "name").as_deref() {
            Some("oldest") => ControlKind::Oldest,
            Some("newest") => ControlKind::Newest,
            Some("show-deleted") => ControlKind::ShowDeleted,
            _ => return Ok(None),
        };

        let version = if kind == ControlKind::ShowDeleted {
            None
        } else {
            let name = if kind == ControlKind::Oldest {
                "oldest"
            } else {
                "newest"
            };
            let value = attr_value(attrs, "value").unwrap_or_default();
            let version = Version::parse_hyphenated(&value).map_err(|source| {
                DocumentError::InvalidControlValue {
                    name: name.to_string(),
                    value: value.clone(),
                    source,
                }
            })?;
            Some(version)
        };

        Ok(Some(Control {
            kind,
            version,
            checked: attrs.iter().any(|a| a.name == "checked"),
            checked_slot: attr_slot(attrs, "checked", tag, source),
        }))
    }
}

/// Collect a tag's attributes with patchable spans.
///
/// Spans are extended backwards over whitespace so that deleting the span
/// removes the attribute cleanly.
fn attributes(tag: tree_sitter::Node, source: &str) -> Vec<RawAttr> {
    let mut attrs = Vec::new();
    let mut cursor = tag.walk();
    for child in tag.children(&mut cursor) {
        if child.kind() != "attribute" {
            continue;
        }
        let mut name = None;
        let mut value = None;
        let mut inner = child.walk();
        for part in child.children(&mut inner) {
            match part.kind() {
                "attribute_name" => {
                    name = Some(source[part.byte_range()].to_ascii_lowercase());
                }
                "attribute_value" => {
                    value = Some(source[part.byte_range()].to_string());
                }
                "quoted_attribute_value" => {
                    let mut quoted = part.walk();
                    value = Some(
                        part.children(&mut quoted)
                            .find(|n| n.kind() == "attribute_value")
                            .map(|n| source[n.byte_range()].to_string())
                            .unwrap_or_default(),
                    );
                }
                _ => {}
            }
        }
        let Some(name) = name else { continue };

        let mut start = child.start_byte();
        while start > 0 && source.as_bytes()[start - 1].is_ascii_whitespace() {
            start -= 1;
        }
        attrs.push(RawAttr {
            name,
            value,
            span: start..child.end_byte(),
        });
    }
    attrs
}

fn attr_value(attrs: &[RawAttr], name: &str) -> Option<String> {
    attrs
        .iter()
        .find(|a| a.name == name)
        .map(|a| a.value.clone().unwrap_or_default())
}

/// Slot for writing attribute `name` on `tag`: the existing attribute's
/// span, or the byte just before the tag's closing `>`/`/>`.
fn attr_slot(attrs: &[RawAttr], name: &str, tag: tree_sitter::Node, source: &str) -> AttrSlot {
    if let Some(attr) = attrs.iter().find(|a| a.name == name) {
        return AttrSlot::Existing(attr.span.clone());
    }
    let end = tag.end_byte();
    let insert_at = if source[..end].ends_with("/>") {
        end - 2
    } else {
        end - 1
    };
    AttrSlot::InsertAt(insert_at)
}
