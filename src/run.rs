//! Application layer: one invocation is one selection-change event
//!
//! Resolves the effective selection (restored query beats document state,
//! which beats configured defaults), runs the sweep, and decides whether the
//! canonical query gets published.

use anyhow::Context;
use tracing::{debug, info};

use crate::config::RenderConfig;
use crate::document::{HtmlDocument, SelectionSource};
use crate::filter::selection::Selection;
use crate::filter::sweep::sweep;
use crate::query;
use crate::version::Version;

/// Result of one invocation: the restyled document and, for user-driven
/// changes, the canonical query to publish.
#[derive(Debug, PartialEq, Eq)]
pub struct Rendered {
    pub html: String,
    pub query: Option<String>,
}

/// Restyle `source` for the selected range.
///
/// With `query`, the selection is restored from it (the load/popstate path:
/// nothing is published). Without it, the selection comes from the
/// document's checked controls, falling back to `config`.
pub fn render(source: &str, query: Option<&str>, config: &RenderConfig) -> anyhow::Result<Rendered> {
    let document = HtmlDocument::parse(source)?;

    let (selection, restored) = match query {
        Some(query) => {
            let params = query::parse_query(query)?;
            let selection = match Selection::restore(&params, &document)? {
                Some(selection) => selection,
                // No v parameter: the document's own state stands, but a
                // show_deleted parameter still applies to the checkbox
                None => {
                    let mut selection = derive_selection(&document, config)?;
                    if let Some(show_deleted) = params.show_deleted {
                        selection.show_deleted = show_deleted;
                    }
                    selection
                }
            };
            (selection, true)
        }
        None => (derive_selection(&document, config)?, false),
    };
    debug!(?selection, restored, "sweeping");

    Ok(Rendered {
        html: sweep(&document, &selection),
        query: query::push_query(&selection, restored),
    })
}

/// Diff mode: bracket `version` to [previous shown version, version] and
/// render the result. Always user-driven, so the query is published.
pub fn diff(source: &str, version: &str, config: &RenderConfig) -> anyhow::Result<Rendered> {
    let document = HtmlDocument::parse(source)?;
    let target = Version::parse_lenient(version)
        .with_context(|| format!("invalid version {version:?}"))?;

    let mut selection = Selection::for_diff(target, &document)?;
    if !selection.show_deleted {
        selection.show_deleted = config.show_deleted;
    }
    info!(%selection.oldest, %selection.newest, "diff range");

    Ok(Rendered {
        html: sweep(&document, &selection),
        query: query::push_query(&selection, false),
    })
}

/// Selection from the document's checked controls, with config fallbacks.
fn derive_selection(document: &HtmlDocument, config: &RenderConfig) -> anyhow::Result<Selection> {
    if let (Some(oldest), Some(newest)) = (document.checked_oldest(), document.checked_newest()) {
        return Ok(Selection {
            oldest,
            newest,
            show_deleted: document.show_deleted(),
        });
    }

    let newest = match config.default_version.as_deref() {
        Some(version) => Version::parse_lenient(version)
            .with_context(|| format!("invalid defaultVersion {version:?} in config"))?,
        None => document
            .newest_candidates()
            .into_iter()
            .max()
            .context("document has no checked selection, no newest radios, and no defaultVersion configured")?,
    };

    Ok(Selection {
        oldest: document.checked_oldest().unwrap_or(newest),
        newest,
        show_deleted: document.show_deleted() || config.show_deleted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = concat!(
        r#"<input name="oldest" value="1-0-0" checked>"#,
        r#"<input name="oldest" value="1-5-0">"#,
        r#"<input name="newest" value="1-5-0">"#,
        r#"<input name="newest" value="2-0-0" checked>"#,
        r#"<input name="show-deleted" type="checkbox">"#,
        r#"<ins class="added-1-5-0">kept</ins>"#,
    );

    #[test]
    fn render_from_document_state_publishes_the_query() {
        let rendered = render(DOC, None, &RenderConfig::default()).unwrap();
        assert_eq!(rendered.query.as_deref(), Some("v=2.0.0&base=1.0.0"));
        assert!(rendered.html.contains(r#"<ins class="added-1-5-0">kept</ins>"#));
    }

    #[test]
    fn render_from_query_does_not_publish() {
        let rendered = render(DOC, Some("v=1.5.0&base=1.0.0"), &RenderConfig::default()).unwrap();
        assert_eq!(rendered.query, None);
        // the restored selection is patched onto the controls
        assert!(rendered.html.contains(r#"<input name="newest" value="1-5-0" checked>"#));
    }

    #[test]
    fn render_with_unrestorable_query_keeps_document_state() {
        let rendered = render(DOC, Some("show_deleted=true"), &RenderConfig::default()).unwrap();
        assert_eq!(rendered.query, None);
        assert!(rendered.html.contains(r#"<input name="newest" value="2-0-0" checked>"#));
        // the lone show_deleted parameter still reaches the checkbox
        assert!(rendered
            .html
            .contains(r#"<input name="show-deleted" type="checkbox" checked>"#));
    }

    #[test]
    fn render_for_unknown_query_version_fails_fast() {
        assert!(render(DOC, Some("v=9.9.9"), &RenderConfig::default()).is_err());
    }

    #[test]
    fn config_default_version_applies_without_checked_radios() {
        let doc = concat!(
            r#"<input name="oldest" value="1-0-0">"#,
            r#"<input name="newest" value="1-0-0">"#,
        );
        let config = RenderConfig {
            show_deleted: true,
            default_version: Some("1.0.0".to_string()),
        };
        let rendered = render(doc, None, &config).unwrap();
        assert_eq!(rendered.query.as_deref(), Some("v=1.0.0&show_deleted=true"));
    }

    #[test]
    fn diff_brackets_and_publishes() {
        let rendered = diff(DOC, "2-0-0", &RenderConfig::default()).unwrap();
        assert_eq!(rendered.query.as_deref(), Some("v=2.0.0&base=1.5.0"));
        assert!(rendered.html.contains(r#"<input name="oldest" value="1-5-0" checked>"#));
    }
}
