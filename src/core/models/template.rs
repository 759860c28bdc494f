//! Curriculum template model

use super::{Course, CourseGroup};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation problems found in a template's course list.
///
/// The builder uses course titles and ids as cross-reference keys, so both
/// must stay unique across every group of a template.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TemplateError {
    /// Two courses share the same id
    #[error("duplicate course id '{0}'")]
    DuplicateId(String),
    /// Two courses share the same title
    #[error("duplicate course title '{0}'")]
    DuplicateTitle(String),
    /// A course lists itself as a prerequisite or corequisite
    #[error("course '{0}' references itself as a requisite")]
    SelfReference(String),
}

/// The catalog definition of a curriculum: groups, courses and requirements,
/// independent of any individual student's progress.
///
/// Templates are immutable once stored; edits are saved as new versions
/// (`base` -> `base.v1` -> `base.v2`, ...) so prior versions stay available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurriculumTemplate {
    /// Template identifier, optionally carrying a `.v{N}` version suffix
    pub id: String,

    /// Display title (e.g., "Computer Science 2023")
    pub title: String,

    /// Institution the curriculum belongs to
    pub university: String,

    /// Units required to graduate
    pub total_units_required: u32,

    /// Course groups making up the curriculum
    #[serde(default)]
    pub groups: Vec<CourseGroup>,
}

impl CurriculumTemplate {
    /// Create a new empty template
    #[must_use]
    pub const fn new(id: String, title: String, university: String, total_units_required: u32) -> Self {
        Self {
            id,
            title,
            university,
            total_units_required,
            groups: Vec::new(),
        }
    }

    /// Iterate all courses across all groups, in group order
    pub fn all_courses(&self) -> impl Iterator<Item = &Course> {
        self.groups.iter().flat_map(|g| g.courses.iter())
    }

    /// Get a group by id
    #[must_use]
    pub fn find_group(&self, group_id: &str) -> Option<&CourseGroup> {
        self.groups.iter().find(|g| g.id == group_id)
    }

    /// Get a course by id, searching every group
    #[must_use]
    pub fn find_course(&self, course_id: &str) -> Option<&Course> {
        self.all_courses().find(|c| c.id == course_id)
    }

    /// Validate course uniqueness and self-reference invariants.
    ///
    /// # Errors
    /// Returns every violation found: duplicate ids, duplicate titles, and
    /// courses listing themselves as a requisite.
    pub fn validate_courses(&self) -> Result<(), Vec<TemplateError>> {
        let mut errors = Vec::new();
        let mut seen_ids: Vec<&str> = Vec::new();
        let mut seen_titles: Vec<&str> = Vec::new();

        for course in self.all_courses() {
            if seen_ids.contains(&course.id.as_str()) {
                errors.push(TemplateError::DuplicateId(course.id.clone()));
            } else {
                seen_ids.push(&course.id);
            }

            if seen_titles.contains(&course.title.as_str()) {
                errors.push(TemplateError::DuplicateTitle(course.title.clone()));
            } else {
                seen_titles.push(&course.title);
            }

            if course.references_self() {
                errors.push(TemplateError::SelfReference(course.id.clone()));
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// The id with any `.v{N}` suffix stripped
    #[must_use]
    pub fn base_id(&self) -> &str {
        Self::base_of(&self.id)
    }

    /// Compute the id for the next saved version of this template.
    ///
    /// Scans `existing_ids` for versions sharing this template's base id and
    /// produces `base.v{max + 1}`; a base with no stored versions yields
    /// `base.v1`.
    #[must_use]
    pub fn next_version_id(&self, existing_ids: &[&str]) -> String {
        let base = self.base_id();
        let max_version = existing_ids
            .iter()
            .filter(|id| Self::base_of(id) == base)
            .filter_map(|id| Self::version_of(id))
            .max()
            .unwrap_or(0);

        format!("{base}.v{}", max_version + 1)
    }

    /// Strip a well-formed `.v{N}` suffix from an id
    fn base_of(id: &str) -> &str {
        match id.rsplit_once(".v") {
            Some((base, digits))
                if !base.is_empty()
                    && !digits.is_empty()
                    && digits.bytes().all(|b| b.is_ascii_digit()) =>
            {
                base
            }
            _ => id,
        }
    }

    /// Parse the version number from a `base.v{N}` id
    fn version_of(id: &str) -> Option<u32> {
        let (base, digits) = id.rsplit_once(".v")?;
        if base.is_empty() {
            return None;
        }
        digits.parse().ok()
    }
}
