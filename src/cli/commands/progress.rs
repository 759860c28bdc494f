//! Progress command handler

use crate::args::ProgressSubcommand;
use crate::commands::{open_store, persist};
use chrono::Local;
use logger::error;
use std::fs;
use std::path::{Path, PathBuf};
use unichart::config::Config;
use unichart::transfer;

/// Dispatch progress subcommands
pub fn run(subcommand: ProgressSubcommand, config: &Config) {
    match subcommand {
        ProgressSubcommand::Toggle { course_id, term } => toggle(&course_id, term, config),
        ProgressSubcommand::Reset => reset(config),
        ProgressSubcommand::Import { file } => import(&file, config),
        ProgressSubcommand::Export { output } => export(output, config),
    }
}

/// Toggle a course's passed state
fn toggle(course_id: &str, term: u32, config: &Config) {
    let (mut store, _catalog, session) = open_store(config);

    store.toggle_course(course_id, term);
    persist(&store, &session);

    let title = store
        .template()
        .and_then(|t| t.find_course(course_id))
        .map_or_else(|| course_id.to_string(), |c| c.title.clone());

    if store.user_progress().is_passed(course_id) {
        println!("✓ Marked '{title}' as passed (term {term})");
    } else {
        println!("✓ Unmarked '{title}'");
    }
}

/// Clear all passed courses
fn reset(config: &Config) {
    let (mut store, _catalog, session) = open_store(config);

    store.reset_progress();
    persist(&store, &session);

    println!("✓ Progress reset");
}

/// Import a progress file targeting the loaded template
fn import(file: &Path, config: &Config) {
    let (mut store, _catalog, session) = open_store(config);

    let Some(template_id) = store.template().map(|t| t.id.clone()) else {
        eprintln!("✗ No template loaded; load one before importing progress");
        std::process::exit(1);
    };

    let content = match fs::read_to_string(file) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("✗ Failed to read {}: {e}", file.display());
            std::process::exit(1);
        }
    };

    match transfer::parse_progress(&content, &template_id) {
        Ok(progress) => {
            let count = progress.passed_courses.len();
            store.replace_progress(progress);
            persist(&store, &session);
            println!("✓ Imported progress ({count} passed courses)");
        }
        Err(e) => {
            error!("Progress import rejected for {}: {e}", file.display());
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    }
}

/// Export the current progress as indented JSON
fn export(output: Option<PathBuf>, config: &Config) {
    let (store, _catalog, _session) = open_store(config);

    let dir = output.unwrap_or_else(|| PathBuf::from(&config.paths.exports_dir));
    if let Err(e) = fs::create_dir_all(&dir) {
        eprintln!("✗ Failed to create export directory {}: {e}", dir.display());
        std::process::exit(1);
    }

    let path = dir.join(transfer::progress_filename(Local::now().date_naive()));
    let json = match transfer::to_pretty_json(store.user_progress()) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("✗ Failed to serialize progress: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = fs::write(&path, json) {
        eprintln!("✗ Failed to write {}: {e}", path.display());
        std::process::exit(1);
    }

    println!("✓ Progress exported: {}", path.display());
}
