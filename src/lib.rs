// Clinicboard - Clinic Dashboard Query Tool
// Copyright (c) 2025 Clinicboard Contributors
// Licensed under the MIT License

//! # Clinicboard - clinic dashboard query core
//!
//! Clinicboard is the shared query, filter, aggregation and status-transition
//! logic behind the admin, doctor and patient views of a clinic management
//! dashboard. It works on an in-memory snapshot of patients, doctors and
//! appointments and never mutates it.
//!
//! ## Architecture
//!
//! - [`domain`] - Patients, doctors, appointments, ids and errors
//! - [`core`] - Option indexing, search and filtering, aggregation, status machine
//! - [`adapters`] - Snapshot sources
//! - [`config`] - Configuration management for the command-line host
//! - [`logging`] - Structured logging and observability
//! - [`cli`] - Command-line interface and argument parsing
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use clinicboard::adapters::snapshot::{JsonFileSource, SnapshotSource};
//! use clinicboard::core::diagnostics::TracingSink;
//! use clinicboard::core::query::{filter, AppointmentQuery};
//! use clinicboard::domain::AppointmentStatus;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let snapshot = JsonFileSource::new("clinic.json")
//!         .load()
//!         .await?
//!         .with_resolved_references(&mut TracingSink::new());
//!
//!     let query = AppointmentQuery::new()
//!         .with_search("jane")
//!         .with_status(AppointmentStatus::Pending);
//!     let visible = filter(&snapshot.appointments, &query);
//!
//!     println!("{} pending appointments for jane", visible.len());
//!     Ok(())
//! }
//! ```
//!
//! ## Status Transitions
//!
//! `completed`, `cancelled` and `rejected` are terminal. The status machine
//! returns a new appointment and leaves persistence to the caller:
//!
//! ```rust,no_run
//! use clinicboard::core::status::transition;
//! use clinicboard::domain::{Appointment, AppointmentStatus};
//!
//! # fn example(appointment: &Appointment) -> Result<(), Box<dyn std::error::Error>> {
//! let confirmed = transition(appointment, AppointmentStatus::Confirmed)?;
//! assert_eq!(confirmed.id, appointment.id);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Fallible operations return [`domain::ClinicError`] or one of the narrower
//! error types it wraps, converted with the `?` operator.
//!
//! ## Logging
//!
//! Clinicboard uses structured logging with the `tracing` crate. Unresolved
//! references found while filtering are reported through a
//! [`core::diagnostics::DiagnosticSink`] instead of failing the query.

pub mod adapters;
pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
