//! Document revision versions
//!
//! A revision is identified by a (major, minor, patch) triple. Two textual
//! forms exist on the wire:
//!
//! - hyphen-separated (`1-2-3`): class names and radio input values
//! - dot-separated (`1.2.3`): query-string values
//!
//! # Modules
//!
//! - [`revision`]: the `Version` triple, parsing and ordering
//! - [`error`]: error type for version parsing

pub mod error;
pub mod revision;

pub use error::VersionError;
pub use revision::Version;
