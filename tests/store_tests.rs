//! End-to-end tests for the store, catalog, session storage and transfer layer

use std::fs;
use tempfile::TempDir;
use unichart::catalog::{DirCatalog, TemplateCatalog};
use unichart::session::SessionStore;
use unichart::store::CurriculumStore;
use unichart::transfer;

/// The worked example curriculum: a 12-unit core group and a 6-unit elective
/// group that overflows into it, plus a prerequisite chain.
const SAMPLE_TEMPLATE: &str = r#"{
  "id": "cs",
  "title": "Computer Science",
  "university": "Test University",
  "totalUnitsRequired": 18,
  "groups": [
    {
      "id": "core",
      "title": "Core Courses",
      "requiredUnits": 12,
      "courses": [
        { "id": "a", "title": "Course A", "units": 4 },
        { "id": "b", "title": "Course B", "units": 4, "prerequisites": ["a"] },
        { "id": "c", "title": "Course C", "units": 4, "prerequisites": ["a", "b"] }
      ]
    },
    {
      "id": "elective",
      "title": "Electives",
      "requiredUnits": 6,
      "overflowTargetGroupId": "core",
      "courses": [
        { "id": "d", "title": "Course D", "units": 4 },
        { "id": "e", "title": "Course E", "units": 4 }
      ]
    }
  ]
}"#;

/// Set up a templates directory with the sample curriculum and a registry
fn setup_catalog(dir: &TempDir) -> DirCatalog {
    let templates = dir.path().join("templates");
    fs::create_dir_all(&templates).expect("create templates dir");
    fs::write(templates.join("cs.json"), SAMPLE_TEMPLATE).expect("write template");
    fs::write(
        templates.join("registry.json"),
        r#"[{ "id": "cs", "title": "Computer Science", "university": "Test University" }]"#,
    )
    .expect("write registry");
    DirCatalog::new(templates)
}

fn setup_session(dir: &TempDir) -> SessionStore {
    SessionStore::new(dir.path().join("state").join("unichart-storage.json"))
}

#[test]
fn full_session_cycle_survives_restart() {
    let dir = TempDir::new().expect("temp dir");
    let catalog = setup_catalog(&dir);
    let session = setup_session(&dir);

    // First run: load a template, pass a course, persist
    let mut store = CurriculumStore::from_session(session.load());
    assert!(store.load_template("cs", &catalog));
    store.toggle_course("a", 1);
    session.save(&store.session_state()).expect("save session");

    // Second run: rehydrate and restore the template from the progress record
    let mut restored = CurriculumStore::from_session(session.load());
    let template_id = restored.user_progress().template_id.clone();
    assert_eq!(template_id, "cs");
    assert!(restored.load_template(&template_id, &catalog));

    assert!(restored.user_progress().is_passed("a"));
    assert_eq!(restored.total_units_completed(), 4);
}

#[test]
fn overflow_scenario_matches_expected_group_progress() {
    let dir = TempDir::new().expect("temp dir");
    let catalog = setup_catalog(&dir);

    let mut store = CurriculumStore::new();
    assert!(store.load_template("cs", &catalog));

    // Pass both electives: 8 units against a 6-unit requirement
    store.toggle_course("d", 1);
    store.toggle_course("e", 1);

    let elective = store.group_progress("elective");
    assert_eq!(elective.passed, 8);
    assert_eq!(elective.required, 6);
    assert_eq!(elective.overflow, 2);

    let core = store.group_progress("core");
    assert_eq!(core.passed, 2);
    assert_eq!(core.required, 12);
    assert_eq!(core.overflow, 0);
}

#[test]
fn availability_follows_the_prerequisite_chain() {
    let dir = TempDir::new().expect("temp dir");
    let catalog = setup_catalog(&dir);

    let mut store = CurriculumStore::new();
    assert!(store.load_template("cs", &catalog));

    let ids = |store: &CurriculumStore| -> Vec<String> {
        store.fully_available().iter().map(|c| c.id.clone()).collect()
    };

    // Only courses without prerequisites are available initially
    assert_eq!(ids(&store), vec!["a", "d", "e"]);

    store.toggle_course("a", 1);
    assert_eq!(ids(&store), vec!["b", "d", "e"]);

    store.toggle_course("b", 2);
    assert_eq!(ids(&store), vec!["c", "d", "e"]);
}

#[test]
fn progress_file_round_trip_through_the_transfer_layer() {
    let dir = TempDir::new().expect("temp dir");
    let catalog = setup_catalog(&dir);

    let mut store = CurriculumStore::new();
    assert!(store.load_template("cs", &catalog));
    store.toggle_course("a", 1);
    store.toggle_course("d", 2);

    // Export, then re-import into a fresh store with the same template
    let exported = transfer::to_pretty_json(store.user_progress()).expect("serialize");

    let mut other = CurriculumStore::new();
    assert!(other.load_template("cs", &catalog));
    let imported = transfer::parse_progress(&exported, "cs").expect("import progress");
    other.replace_progress(imported);

    assert_eq!(other.user_progress(), store.user_progress());
}

#[test]
fn mismatched_progress_import_changes_nothing() {
    let dir = TempDir::new().expect("temp dir");
    let catalog = setup_catalog(&dir);

    let mut store = CurriculumStore::new();
    assert!(store.load_template("cs", &catalog));
    store.toggle_course("a", 1);
    let before = store.user_progress().clone();

    let foreign = r#"{ "templateId": "physics", "passedCourses": [] }"#;
    let result = transfer::parse_progress(foreign, "cs");

    assert!(result.is_err());
    // The store was never touched; the rejected record is dropped
    assert_eq!(store.user_progress(), &before);
}

#[test]
fn template_import_and_version_lineage_persist() {
    let dir = TempDir::new().expect("temp dir");
    let session = setup_session(&dir);

    let mut store = CurriculumStore::from_session(session.load());

    // Import an external template, then save two edited versions of it
    let template = transfer::parse_template(SAMPLE_TEMPLATE).expect("parse template");
    store.import_template(template.clone());

    let v1 = store.save_template_version(template);
    assert_eq!(v1, "cs.v1");

    let mut edited = store.template().cloned().expect("current template");
    edited.title = "Computer Science (revised)".to_string();
    let v2 = store.save_template_version(edited);
    assert_eq!(v2, "cs.v2");

    session.save(&store.session_state()).expect("save session");

    // All versions survive a restart, newest last
    let restored = CurriculumStore::from_session(session.load());
    let ids: Vec<&str> = restored
        .custom_templates()
        .iter()
        .map(|t| t.id.as_str())
        .collect();
    assert_eq!(ids, vec!["cs", "cs.v1", "cs.v2"]);
    assert_eq!(restored.user_progress().template_id, "cs.v2");
}

#[test]
fn registry_lists_the_sample_template() {
    let dir = TempDir::new().expect("temp dir");
    let catalog = setup_catalog(&dir);

    let entries = catalog
        .registry()
        .expect("registry should parse");
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, "cs");
}
