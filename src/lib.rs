//! verdiff renders version-range highlighting over static HTML documents
//! that carry per-paragraph change annotations.
//!
//! Given an annotated document and a selected `[oldest, newest]` range, it
//! rewrites inline styles so that insertions, deletions, changed tables and
//! paragraph containers reflect their relationship to the range, and keeps
//! the selection in sync with a shareable query string.
//!
//! # Modules
//!
//! - [`version`]: the revision triple and its ordering
//! - [`document`]: HTML extraction of annotated elements and controls
//! - [`filter`]: selection, styling policy and the sweep
//! - [`query`]: query-string serialization and the push rule
//! - [`config`]: CLI fallback configuration
//! - [`run`]: the application layer driven by the CLI

pub mod config;
pub mod document;
pub mod filter;
pub mod query;
pub mod run;
pub mod version;
