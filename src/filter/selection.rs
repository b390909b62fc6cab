//! The viewer's selection and how it is derived
//!
//! A `Selection` has no identity beyond one invocation: it is computed fresh
//! from the checked controls, from restored query parameters, or from a
//! diff-mode target, and threaded through the sweep as a plain value.

use thiserror::Error;

use crate::document::SelectionSource;
use crate::query::QueryParams;
use crate::version::Version;

/// The closed version interval selected for display.
///
/// `oldest <= newest` is assumed, not enforced; a reversed range simply
/// yields whatever the comparisons yield.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub oldest: Version,
    pub newest: Version,
    pub show_deleted: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("No checked input[name={0}] in the document")]
    NoCheckedRadio(&'static str),

    #[error("No input[name={name}] radio with value {version}")]
    UnknownVersion { name: &'static str, version: Version },
}

impl Selection {
    /// A range collapsed to a single version.
    pub fn single(version: Version, show_deleted: bool) -> Self {
        Self {
            oldest: version,
            newest: version,
            show_deleted,
        }
    }

    /// Derive the selection from the document's checked controls.
    pub fn from_source(source: &dyn SelectionSource) -> Result<Self, SelectionError> {
        let oldest = source
            .checked_oldest()
            .ok_or(SelectionError::NoCheckedRadio("oldest"))?;
        let newest = source
            .checked_newest()
            .ok_or(SelectionError::NoCheckedRadio("newest"))?;
        Ok(Self {
            oldest,
            newest,
            show_deleted: source.show_deleted(),
        })
    }

    /// Restore a selection from query parameters.
    ///
    /// A missing `base` collapses the range to `v` alone; a missing
    /// `show_deleted` keeps the checkbox state. A version with no matching
    /// radio fails fast rather than silently selecting nothing.
    pub fn restore(
        params: &QueryParams,
        source: &dyn SelectionSource,
    ) -> Result<Option<Self>, SelectionError> {
        let Some(newest) = params.version else {
            return Ok(None);
        };
        require(source.newest_candidates(), "newest", newest)?;
        let oldest = params.base.unwrap_or(newest);
        require(source.oldest_candidates(), "oldest", oldest)?;
        Ok(Some(Self {
            oldest,
            newest,
            show_deleted: params.show_deleted.unwrap_or_else(|| source.show_deleted()),
        }))
    }

    /// Bracket `target` for diff mode: oldest becomes the greatest candidate
    /// strictly older than `target` (the tightest lower bound), falling back
    /// to `target` itself; newest is exactly `target`.
    pub fn for_diff(
        target: Version,
        source: &dyn SelectionSource,
    ) -> Result<Self, SelectionError> {
        require(source.newest_candidates(), "newest", target)?;

        let mut chosen: Option<Version> = None;
        for candidate in source.oldest_candidates() {
            if candidate.older(&target) && chosen.is_none_or(|best| best.older(&candidate)) {
                chosen = Some(candidate);
            }
        }
        let oldest = match chosen {
            Some(oldest) => oldest,
            None => {
                require(source.oldest_candidates(), "oldest", target)?;
                target
            }
        };
        Ok(Self {
            oldest,
            newest: target,
            show_deleted: source.show_deleted(),
        })
    }
}

fn require(
    candidates: Vec<Version>,
    name: &'static str,
    version: Version,
) -> Result<(), SelectionError> {
    if candidates.contains(&version) {
        Ok(())
    } else {
        Err(SelectionError::UnknownVersion { name, version })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::traits::MockSelectionSource;

    fn source_with(
        oldest: Vec<Version>,
        newest: Vec<Version>,
        checked: Option<(Version, Version)>,
        show_deleted: bool,
    ) -> MockSelectionSource {
        let mut source = MockSelectionSource::new();
        source.expect_oldest_candidates().return_const(oldest);
        source.expect_newest_candidates().return_const(newest);
        source
            .expect_checked_oldest()
            .return_const(checked.map(|(o, _)| o));
        source
            .expect_checked_newest()
            .return_const(checked.map(|(_, n)| n));
        source.expect_show_deleted().return_const(show_deleted);
        source
    }

    #[test]
    fn from_source_reads_checked_controls() {
        let source = source_with(
            vec![Version::new(1, 0, 0)],
            vec![Version::new(2, 0, 0)],
            Some((Version::new(1, 0, 0), Version::new(2, 0, 0))),
            true,
        );
        let selection = Selection::from_source(&source).unwrap();
        assert_eq!(
            selection,
            Selection {
                oldest: Version::new(1, 0, 0),
                newest: Version::new(2, 0, 0),
                show_deleted: true,
            }
        );
    }

    #[test]
    fn from_source_requires_checked_radios() {
        let source = source_with(
            vec![Version::new(1, 0, 0)],
            vec![Version::new(2, 0, 0)],
            None,
            false,
        );
        assert_eq!(
            Selection::from_source(&source),
            Err(SelectionError::NoCheckedRadio("oldest"))
        );
    }

    #[test]
    fn for_diff_picks_the_tightest_lower_bound() {
        let source = source_with(
            vec![Version::new(1, 0, 0), Version::new(1, 5, 0)],
            vec![Version::new(2, 0, 0)],
            None,
            false,
        );
        let selection = Selection::for_diff(Version::new(2, 0, 0), &source).unwrap();
        assert_eq!(selection.oldest, Version::new(1, 5, 0));
        assert_eq!(selection.newest, Version::new(2, 0, 0));
    }

    #[test]
    fn for_diff_ignores_candidate_order() {
        let source = source_with(
            vec![
                Version::new(1, 5, 0),
                Version::new(1, 0, 0),
                Version::new(3, 0, 0), // newer than the target, not a bound
            ],
            vec![Version::new(2, 0, 0)],
            None,
            false,
        );
        let selection = Selection::for_diff(Version::new(2, 0, 0), &source).unwrap();
        assert_eq!(selection.oldest, Version::new(1, 5, 0));
    }

    #[test]
    fn for_diff_falls_back_to_the_target_itself() {
        let source = source_with(
            vec![Version::new(1, 0, 0)],
            vec![Version::new(1, 0, 0)],
            None,
            false,
        );
        let selection = Selection::for_diff(Version::new(1, 0, 0), &source).unwrap();
        assert_eq!(selection, Selection::single(Version::new(1, 0, 0), false));
    }

    #[test]
    fn for_diff_rejects_a_version_without_a_newest_radio() {
        let source = source_with(vec![], vec![Version::new(1, 0, 0)], None, false);
        assert_eq!(
            Selection::for_diff(Version::new(9, 9, 9), &source),
            Err(SelectionError::UnknownVersion {
                name: "newest",
                version: Version::new(9, 9, 9)
            })
        );
    }

    #[test]
    fn restore_collapses_to_single_version_without_base() {
        let v = Version::new(3, 2, 1);
        let source = source_with(vec![v], vec![v], None, false);
        let params = QueryParams {
            version: Some(v),
            base: None,
            show_deleted: None,
        };
        let selection = Selection::restore(&params, &source).unwrap().unwrap();
        assert_eq!(selection, Selection::single(v, false));
    }

    #[test]
    fn restore_keeps_checkbox_state_when_param_absent() {
        let v = Version::new(1, 0, 0);
        let source = source_with(vec![v], vec![v], None, true);
        let params = QueryParams {
            version: Some(v),
            base: None,
            show_deleted: None,
        };
        let selection = Selection::restore(&params, &source).unwrap().unwrap();
        assert!(selection.show_deleted);
    }

    #[test]
    fn restore_without_version_param_restores_nothing() {
        let source = source_with(vec![], vec![], None, false);
        let params = QueryParams {
            version: None,
            base: Some(Version::new(1, 0, 0)),
            show_deleted: Some(true),
        };
        assert_eq!(Selection::restore(&params, &source), Ok(None));
    }
}
