//! File import/export boundary.
//!
//! Validates user-supplied JSON before any state changes and renders state
//! for export with deterministic filenames. Parse and validation failures
//! are typed values for the caller to report; nothing here mutates state, so
//! a failed import is always a no-op.

use crate::core::models::{CurriculumTemplate, UserProgress};
use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

/// Failures while importing a template or progress file
#[derive(Debug, Error)]
pub enum ImportError {
    /// The file is not valid JSON, or does not match the expected shape
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// A required template field is absent
    #[error("missing required field '{0}'")]
    MissingField(&'static str),
    /// The `totalUnitsRequired` field is present but not numeric
    #[error("field 'totalUnitsRequired' must be a number")]
    TotalUnitsNotNumeric,
    /// The progress file belongs to a different template than the one loaded
    #[error("progress file targets template '{found}', but template '{expected}' is loaded")]
    TemplateMismatch {
        /// Id of the currently loaded template
        expected: String,
        /// Id the progress file referenced
        found: String,
    },
}

/// Parse a user-supplied template file.
///
/// The shape check (`id`, `title`, `groups` present; `totalUnitsRequired`
/// numeric) runs before deserialization so the caller gets a precise message
/// for hand-edited files.
///
/// # Errors
/// Returns an [`ImportError`] describing the first problem found.
pub fn parse_template(json: &str) -> Result<CurriculumTemplate, ImportError> {
    let value: serde_json::Value = serde_json::from_str(json)?;

    for field in ["id", "title", "groups"] {
        if value.get(field).is_none() {
            return Err(ImportError::MissingField(field));
        }
    }
    match value.get("totalUnitsRequired") {
        None => return Err(ImportError::MissingField("totalUnitsRequired")),
        Some(v) if !v.is_number() => return Err(ImportError::TotalUnitsNotNumeric),
        Some(_) => {}
    }

    Ok(serde_json::from_value(value)?)
}

/// Parse a user-supplied progress file and check it targets the loaded template.
///
/// # Errors
/// Returns [`ImportError::TemplateMismatch`] when the file references a
/// different template id, or a JSON error for malformed input.
pub fn parse_progress(json: &str, active_template_id: &str) -> Result<UserProgress, ImportError> {
    let progress: UserProgress = serde_json::from_str(json)?;

    if progress.template_id != active_template_id {
        return Err(ImportError::TemplateMismatch {
            expected: active_template_id.to_string(),
            found: progress.template_id,
        });
    }

    Ok(progress)
}

/// Render a value as indented JSON for export.
///
/// # Errors
/// Returns an error if serialization fails.
pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Date-stamped filename for a progress export (e.g. `progress-2026-08-06.json`)
#[must_use]
pub fn progress_filename(date: NaiveDate) -> String {
    format!("progress-{}.json", date.format("%Y-%m-%d"))
}

/// Id-stamped filename for a template export (e.g. `cs.v2.json`)
#[must_use]
pub fn template_filename(template: &CurriculumTemplate) -> String {
    format!("{}.json", template.id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::PassedCourse;

    const VALID_TEMPLATE: &str = r#"{
        "id": "cs",
        "title": "Computer Science",
        "university": "Test U",
        "totalUnitsRequired": 140,
        "groups": []
    }"#;

    #[test]
    fn parses_a_valid_template() {
        let template = parse_template(VALID_TEMPLATE).expect("parse template");

        assert_eq!(template.id, "cs");
        assert_eq!(template.total_units_required, 140);
    }

    #[test]
    fn rejects_missing_fields() {
        let err = parse_template(r#"{"title":"CS","groups":[],"totalUnitsRequired":1}"#)
            .unwrap_err();
        assert!(matches!(err, ImportError::MissingField("id")));

        let err = parse_template(r#"{"id":"cs","title":"CS","groups":[]}"#).unwrap_err();
        assert!(matches!(err, ImportError::MissingField("totalUnitsRequired")));
    }

    #[test]
    fn rejects_non_numeric_total_units() {
        let err = parse_template(
            r#"{"id":"cs","title":"CS","groups":[],"totalUnitsRequired":"140"}"#,
        )
        .unwrap_err();
        assert!(matches!(err, ImportError::TotalUnitsNotNumeric));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            parse_template("not json at all"),
            Err(ImportError::Json(_))
        ));
    }

    #[test]
    fn progress_import_requires_matching_template() {
        let json = r#"{"templateId":"cs","passedCourses":[{"courseId":"a","term":1}]}"#;

        let progress = parse_progress(json, "cs").expect("matching import");
        assert_eq!(progress.passed_courses.len(), 1);

        let err = parse_progress(json, "physics").unwrap_err();
        match err {
            ImportError::TemplateMismatch { expected, found } => {
                assert_eq!(expected, "physics");
                assert_eq!(found, "cs");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn export_filenames_are_deterministic() {
        let date = NaiveDate::from_ymd_opt(2026, 8, 6).expect("valid date");
        assert_eq!(progress_filename(date), "progress-2026-08-06.json");

        let template = CurriculumTemplate::new(
            "cs.v2".to_string(),
            "CS".to_string(),
            "Test U".to_string(),
            140,
        );
        assert_eq!(template_filename(&template), "cs.v2.json");
    }

    #[test]
    fn pretty_export_is_indented() {
        let mut progress = UserProgress::new("cs".to_string());
        progress
            .passed_courses
            .push(PassedCourse::new("a".to_string(), 1));

        let json = to_pretty_json(&progress).expect("serialize");
        assert!(json.contains('\n'));
        assert!(json.contains("\"templateId\": \"cs\""));
    }
}
