//! Query-string synchronization
//!
//! A selection serializes to the shareable query `v=<newest>` plus
//! `base=<oldest>` when the range spans more than one version and
//! `show_deleted=true` when the flag is set, all in dot form. Parsing
//! accepts the parameters in any order and ignores unknown keys.
//!
//! A canonical query is published only for user-driven selection changes,
//! never when the selection was itself restored from a query; restoring a
//! shared link must not republish it.

use indexmap::IndexMap;
use thiserror::Error;

use crate::filter::selection::Selection;
use crate::version::{Version, VersionError};

pub const VERSION_PARAM: &str = "v";
pub const BASE_PARAM: &str = "base";
pub const SHOW_DELETED_PARAM: &str = "show_deleted";

/// Raw selection parameters as they appear in a query string.
///
/// All fields optional: `version` absent means there is nothing to restore,
/// `base` absent collapses the range, `show_deleted` absent leaves the
/// checkbox alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QueryParams {
    pub version: Option<Version>,
    pub base: Option<Version>,
    pub show_deleted: Option<bool>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("Invalid version in query parameter {name}: {source}")]
    InvalidVersion {
        name: &'static str,
        source: VersionError,
    },
}

/// Parse a query string (with or without the leading `?`).
///
/// The first occurrence of a duplicated key wins, as with
/// `URLSearchParams.get`.
pub fn parse_query(query: &str) -> Result<QueryParams, QueryError> {
    let query = query.strip_prefix('?').unwrap_or(query);

    let mut pairs: IndexMap<&str, &str> = IndexMap::new();
    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        pairs.entry(key).or_insert(value);
    }

    let version_param = |name: &'static str| {
        pairs
            .get(name)
            .map(|value| {
                Version::parse_dotted(value)
                    .map_err(|source| QueryError::InvalidVersion { name, source })
            })
            .transpose()
    };

    Ok(QueryParams {
        version: version_param(VERSION_PARAM)?,
        base: version_param(BASE_PARAM)?,
        show_deleted: pairs.get(SHOW_DELETED_PARAM).map(|value| *value == "true"),
    })
}

/// Serialize a selection to its canonical query string.
pub fn to_query(selection: &Selection) -> String {
    let mut parts = vec![format!("{}={}", VERSION_PARAM, selection.newest)];
    if selection.oldest.older(&selection.newest) {
        parts.push(format!("{}={}", BASE_PARAM, selection.oldest));
    }
    if selection.show_deleted {
        parts.push(format!("{}=true", SHOW_DELETED_PARAM));
    }
    parts.join("&")
}

/// The canonical query to publish after a selection change, or `None` when
/// the change came from a restored query (no push on popstate/load).
pub fn push_query(selection: &Selection, restored: bool) -> Option<String> {
    if restored {
        None
    } else {
        Some(to_query(selection))
    }
}
