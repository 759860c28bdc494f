//! Template command handler

use crate::args::TemplateSubcommand;
use crate::commands::{open_store, persist};
use logger::{error, info};
use std::fs;
use std::path::{Path, PathBuf};
use unichart::catalog::TemplateCatalog;
use unichart::config::Config;
use unichart::models::CurriculumTemplate;
use unichart::transfer;

/// Dispatch template subcommands
pub fn run(subcommand: TemplateSubcommand, config: &Config) {
    match subcommand {
        TemplateSubcommand::List => list(config),
        TemplateSubcommand::Load { id } => load(&id, config),
        TemplateSubcommand::Import { file } => import(&file, config),
        TemplateSubcommand::Save { file } => save(&file, config),
        TemplateSubcommand::Export { id, output } => export(id.as_deref(), output, config),
        TemplateSubcommand::Delete { id } => delete(&id, config),
    }
}

/// List catalog registry entries and stored custom templates
fn list(config: &Config) {
    let (store, catalog, _session) = open_store(config);
    let current_id = store.template().map(|t| t.id.clone());

    println!("Official templates:");
    match catalog.registry() {
        Ok(entries) if entries.is_empty() => println!("  (none)"),
        Ok(entries) => {
            for entry in entries {
                let marker = if current_id.as_deref() == Some(entry.id.as_str()) {
                    "*"
                } else {
                    " "
                };
                println!(
                    "{marker} {} - {} ({})",
                    entry.id,
                    entry.title,
                    entry.university.as_deref().unwrap_or("-")
                );
            }
        }
        Err(e) => {
            error!("Failed to read template registry: {e}");
            eprintln!("✗ Failed to read template registry: {e}");
        }
    }

    println!("\nCustom templates:");
    if store.custom_templates().is_empty() {
        println!("  (none)");
    } else {
        for template in store.custom_templates() {
            let marker = if current_id.as_deref() == Some(template.id.as_str()) {
                "*"
            } else {
                " "
            };
            println!(
                "{marker} {} - {} ({})",
                template.id, template.title, template.university
            );
        }
    }
}

/// Load a template by id and make it current
fn load(id: &str, config: &Config) {
    let (mut store, catalog, session) = open_store(config);

    if store.load_template(id, &catalog) {
        persist(&store, &session);
        let title = store.template().map_or_else(String::new, |t| t.title.clone());
        println!("✓ Loaded template '{id}' ({title})");
    } else {
        eprintln!("✗ Template '{id}' could not be loaded");
        std::process::exit(1);
    }
}

/// Read and validate a template file, exiting with a message on failure
fn read_template_file(file: &Path) -> CurriculumTemplate {
    let content = match fs::read_to_string(file) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("✗ Failed to read {}: {e}", file.display());
            std::process::exit(1);
        }
    };

    match transfer::parse_template(&content) {
        Ok(template) => template,
        Err(e) => {
            error!("Template import rejected for {}: {e}", file.display());
            eprintln!("✗ Not a valid template file: {e}");
            std::process::exit(1);
        }
    }
}

/// Import a template file into the custom list
fn import(file: &Path, config: &Config) {
    let template = read_template_file(file);
    let id = template.id.clone();

    let (mut store, _catalog, session) = open_store(config);
    store.import_template(template);
    persist(&store, &session);

    println!("✓ Imported template '{id}'");
}

/// Save an edited template file as the next version of its lineage
fn save(file: &Path, config: &Config) {
    let template = read_template_file(file);

    // Uniqueness must hold before the store is touched
    if let Err(errors) = template.validate_courses() {
        eprintln!("✗ Template '{}' cannot be saved:", template.id);
        for e in errors {
            eprintln!("  - {e}");
        }
        std::process::exit(1);
    }

    let (mut store, _catalog, session) = open_store(config);
    let new_id = store.save_template_version(template);
    persist(&store, &session);

    info!("Saved template version '{new_id}'");
    println!("✓ Saved as version '{new_id}'");
}

/// Export a template as indented JSON
fn export(id: Option<&str>, output: Option<PathBuf>, config: &Config) {
    let (store, catalog, _session) = open_store(config);

    let template = match id {
        Some(id) => store
            .custom_templates()
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .or_else(|| catalog.fetch(id).ok()),
        None => store.template().cloned(),
    };

    let Some(template) = template else {
        eprintln!("✗ No template to export");
        std::process::exit(1);
    };

    let dir = output.unwrap_or_else(|| PathBuf::from(&config.paths.exports_dir));
    if let Err(e) = fs::create_dir_all(&dir) {
        eprintln!("✗ Failed to create export directory {}: {e}", dir.display());
        std::process::exit(1);
    }

    let path = dir.join(transfer::template_filename(&template));
    let json = match transfer::to_pretty_json(&template) {
        Ok(json) => json,
        Err(e) => {
            eprintln!("✗ Failed to serialize template: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = fs::write(&path, json) {
        eprintln!("✗ Failed to write {}: {e}", path.display());
        std::process::exit(1);
    }

    println!("✓ Template exported: {}", path.display());
}

/// Delete a custom template by id
fn delete(id: &str, config: &Config) {
    let (mut store, _catalog, session) = open_store(config);

    if store.delete_custom_template(id) {
        persist(&store, &session);
        println!("✓ Deleted custom template '{id}'");
    } else {
        eprintln!("✗ No custom template with id '{id}'");
        std::process::exit(1);
    }
}
