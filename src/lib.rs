//! Shared library for `UniChart`
//! Contains core functionality used by the CLI and integration tests

pub mod core;

pub use self::core::{catalog, config, eligibility, models, report, session, store, transfer};
