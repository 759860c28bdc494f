//! Student progress model

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

const fn default_term() -> u32 {
    1
}

/// A course the student has passed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassedCourse {
    /// Id of the passed course
    pub course_id: String,

    /// Term the course was passed in (defaults to 1)
    #[serde(default = "default_term")]
    pub term: u32,

    /// Optional grade
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grade: Option<f32>,
}

impl PassedCourse {
    /// Create a passed-course record without a grade
    #[must_use]
    pub const fn new(course_id: String, term: u32) -> Self {
        Self {
            course_id,
            term,
            grade: None,
        }
    }
}

/// A student's progress against one curriculum template.
///
/// `template_id` weakly references a template by id; `passed_courses` holds
/// at most one entry per course id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProgress {
    /// Id of the template this progress belongs to (empty when none loaded)
    #[serde(default)]
    pub template_id: String,

    /// Courses passed so far, deduplicated by course id
    #[serde(default)]
    pub passed_courses: Vec<PassedCourse>,
}

impl UserProgress {
    /// Create progress for a template with nothing passed yet
    #[must_use]
    pub const fn new(template_id: String) -> Self {
        Self {
            template_id,
            passed_courses: Vec::new(),
        }
    }

    /// The set of passed course ids
    #[must_use]
    pub fn passed_ids(&self) -> HashSet<&str> {
        self.passed_courses
            .iter()
            .map(|p| p.course_id.as_str())
            .collect()
    }

    /// Whether a course id is in the passed set
    #[must_use]
    pub fn is_passed(&self, course_id: &str) -> bool {
        self.passed_courses.iter().any(|p| p.course_id == course_id)
    }

    /// Clear all passed courses, keeping the template reference
    pub fn reset(&mut self) {
        self.passed_courses.clear();
    }
}
