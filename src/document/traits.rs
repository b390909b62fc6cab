//! `SelectionSource` trait definition

#[cfg(test)]
use mockall::automock;

use crate::version::Version;

/// Typed lookups over the document's selection controls.
///
/// The filter layer derives its `Selection` through this trait instead of
/// querying the document directly, so the range logic can be tested against
/// a mock without any HTML.
#[cfg_attr(test, automock)]
pub trait SelectionSource {
    /// Version of the checked `oldest` radio, if any is checked
    fn checked_oldest(&self) -> Option<Version>;

    /// Version of the checked `newest` radio, if any is checked
    fn checked_newest(&self) -> Option<Version>;

    /// State of the `show-deleted` checkbox (false when absent)
    fn show_deleted(&self) -> bool;

    /// Versions of all `oldest` radios, in document order
    fn oldest_candidates(&self) -> Vec<Version>;

    /// Versions of all `newest` radios, in document order
    fn newest_candidates(&self) -> Vec<Version>;
}
