//! CLI command handlers for `UniChart`.
//!
//! This module provides handlers for various CLI subcommands.
//! Each command is implemented in its own submodule. The shared helpers here
//! form the composition root: they rehydrate the store from durable session
//! state and persist it back after mutations.

pub mod config;
pub mod progress;
pub mod report;
pub mod status;
pub mod template;

use logger::{debug, error};
use unichart::catalog::DirCatalog;
use unichart::config::Config;
use unichart::session::SessionStore;
use unichart::store::CurriculumStore;

/// Rehydrate the store from session state and restore the current template.
///
/// The current template is not durable; it is re-resolved from the progress
/// record's template id through the custom list and catalog. A template that
/// can no longer be resolved leaves the store without one, which commands
/// must detect.
pub fn open_store(cfg: &Config) -> (CurriculumStore, DirCatalog, SessionStore) {
    let session = SessionStore::new(SessionStore::default_path());
    let catalog = DirCatalog::new(&cfg.paths.templates_dir);
    let mut store = CurriculumStore::from_session(session.load());

    let template_id = store.user_progress().template_id.clone();
    if !template_id.is_empty() && !store.load_template(&template_id, &catalog) {
        debug!("Template '{template_id}' could not be restored at startup");
    }

    (store, catalog, session)
}

/// Persist the store's durable state, exiting on write failure.
pub fn persist(store: &CurriculumStore, session: &SessionStore) {
    if let Err(e) = session.save(&store.session_state()) {
        error!("Failed to persist session state: {e}");
        eprintln!("✗ Failed to save session state: {e}");
        std::process::exit(1);
    }
}
