//! Status command handler

use crate::commands::open_store;
use unichart::config::Config;
use unichart::eligibility;
use unichart::models::{Course, CurriculumTemplate};
use unichart::store::CurriculumStore;

/// Show overall and per-group progress for the loaded template
pub fn run(show_available: bool, show_blocked: bool, config: &Config) {
    let (store, _catalog, _session) = open_store(config);

    let Some(template) = store.template() else {
        println!("No template loaded. Run 'unichart template load <id>' first.");
        return;
    };

    println!("{} ({})", template.title, template.id);
    println!("{}", template.university);

    let total = store.total_units_completed();
    let percent = eligibility::completion_percent(total, template.total_units_required);
    println!(
        "\n{total} / {} units passed ({percent:.0}%)",
        template.total_units_required
    );

    println!("\nGroups:");
    for group in &template.groups {
        let progress = store.group_progress(&group.id);
        let group_percent = eligibility::completion_percent(progress.passed, progress.required);

        let overflow_note = match (&group.overflow_target_group_id, progress.overflow) {
            (Some(target), overflow) if overflow > 0 => {
                format!(" ({overflow} units overflow to '{target}')")
            }
            _ => String::new(),
        };

        println!(
            "  {}: {} / {} units ({group_percent:.0}%){overflow_note}",
            group.title, progress.passed, progress.required
        );
    }

    let by_category = store.units_by_category();
    if !by_category.is_empty() {
        let mut entries: Vec<_> = by_category.into_iter().collect();
        entries.sort_by_key(|(category, _)| category.label());

        println!("\nUnits by category:");
        for (category, units) in entries {
            println!("  {category}: {units}");
        }
    }

    if show_available {
        print_available(&store.fully_available());
    }

    if show_blocked {
        print_blocked(template, &store);
    }
}

/// Print courses that can be taken right now
fn print_available(available: &[Course]) {
    println!("\nAvailable now:");
    if available.is_empty() {
        println!("  (none)");
        return;
    }
    for course in available {
        println!("  {} - {} ({} units)", course.id, course.title, course.units);
    }
}

/// Print courses blocked by unmet prerequisites, naming what is missing
fn print_blocked(template: &CurriculumTemplate, store: &CurriculumStore) {
    println!("\nBlocked:");

    let passed = store.user_progress().passed_ids();
    let blocked: Vec<_> = store
        .available()
        .into_iter()
        .filter(|a| a.missing_prerequisites.is_some() && !passed.contains(a.course.id.as_str()))
        .collect();

    if blocked.is_empty() {
        println!("  (none)");
        return;
    }

    for annotated in blocked {
        let missing = annotated.missing_prerequisites.unwrap_or_default();
        // Join missing ids against the template for display names; dangling
        // references fall back to the raw id
        let names: Vec<String> = missing
            .iter()
            .map(|id| {
                template
                    .find_course(id)
                    .map_or_else(|| id.clone(), |c| c.title.clone())
            })
            .collect();

        println!(
            "  {} - {}: needs {}",
            annotated.course.id,
            annotated.course.title,
            names.join(", ")
        );
    }
}
