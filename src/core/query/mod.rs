//! Predicate engine
//!
//! A record is visible when it satisfies the free-text search clause AND
//! every active exact-match clause of its typed query:
//!
//! - [`search`] - case-insensitive substring search over per-record field sets
//! - [`filter`] - typed queries per record kind and the combined predicate

pub mod filter;
pub mod search;

pub use filter::{
    filter, filter_reporting, matches, AppointmentQuery, DoctorQuery, PatientQuery, Query,
    RecordQuery,
};
pub use search::{matches_search, Searchable};
