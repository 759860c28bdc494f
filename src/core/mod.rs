//! Core module for `UniChart`
//!
//! Holds the domain model, the eligibility engine, the progress store, and
//! the adapters (catalog, session storage, import/export, reports) shared by
//! every front end.

pub mod catalog;
pub mod config;
pub mod eligibility;
pub mod models;
pub mod report;
pub mod session;
pub mod store;
pub mod transfer;

/// Returns the current version of the `UniChart` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
