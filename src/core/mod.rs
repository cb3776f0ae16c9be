//! Query, filter, aggregation and status core
//!
//! Every operation here is synchronous and reads its inputs without
//! modifying them, so any number of views may share one snapshot.
//!
//! - [`indexer`] - distinct option sets for selection controls
//! - [`query`] - search and exact-match filtering
//! - [`aggregate`] - per-status, per-patient and per-doctor summaries
//! - [`status`] - appointment status transitions
//! - [`diagnostics`] - reporting of unresolved references
//! - [`snapshot`] - the complete record set and its integrity checks

pub mod aggregate;
pub mod diagnostics;
pub mod indexer;
pub mod query;
pub mod snapshot;
pub mod status;
