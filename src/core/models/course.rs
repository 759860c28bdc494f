//! Course model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category a course belongs to within a curriculum.
///
/// Categories drive the per-category unit breakdown; courses without a
/// category are simply left out of that breakdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// General education courses
    General,
    /// Required foundational courses
    RequiredBasic,
    /// Required shared-core courses
    RequiredCore,
    /// Required major-specific courses
    RequiredMajor,
    /// Free-choice elective courses
    ElectiveSelection,
    /// Guided elective / minor courses
    ElectiveGuided,
}

impl Category {
    /// Human-readable label for display output
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::RequiredBasic => "required-basic",
            Self::RequiredCore => "required-core",
            Self::RequiredMajor => "required-major",
            Self::ElectiveSelection => "elective-selection",
            Self::ElectiveGuided => "elective-guided",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Represents a course in a curriculum template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    /// Stable identifier, unique within a template
    pub id: String,

    /// Display title (e.g., "Data Structures")
    pub title: String,

    /// Unit (credit) count
    pub units: u32,

    /// Ids of courses that must be passed before this one becomes available.
    /// Absent and empty lists are equivalent.
    #[serde(default)]
    pub prerequisites: Vec<String>,

    /// Ids of companion courses; informational only, never gate availability
    #[serde(default)]
    pub corequisites: Vec<String>,

    /// Optional category for per-category unit breakdowns
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,

    /// Optional suggested semester
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semester: Option<u32>,

    /// Optional free-form description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Course {
    /// Create a new course with no requisites
    ///
    /// # Arguments
    /// * `id` - Stable identifier
    /// * `title` - Display title
    /// * `units` - Unit count
    #[must_use]
    pub const fn new(id: String, title: String, units: u32) -> Self {
        Self {
            id,
            title,
            units,
            prerequisites: Vec::new(),
            corequisites: Vec::new(),
            category: None,
            semester: None,
            description: None,
        }
    }

    /// Add a prerequisite by course id (no duplicates)
    pub fn add_prerequisite(&mut self, prereq_id: String) {
        if !self.prerequisites.contains(&prereq_id) {
            self.prerequisites.push(prereq_id);
        }
    }

    /// Add a corequisite by course id (no duplicates)
    pub fn add_corequisite(&mut self, coreq_id: String) {
        if !self.corequisites.contains(&coreq_id) {
            self.corequisites.push(coreq_id);
        }
    }

    /// Whether this course lists itself as a prerequisite or corequisite
    #[must_use]
    pub fn references_self(&self) -> bool {
        self.prerequisites.contains(&self.id) || self.corequisites.contains(&self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_creation() {
        let course = Course::new("ds".to_string(), "Data Structures".to_string(), 4);

        assert_eq!(course.id, "ds");
        assert_eq!(course.title, "Data Structures");
        assert_eq!(course.units, 4);
        assert!(course.prerequisites.is_empty());
        assert!(course.corequisites.is_empty());
        assert!(course.category.is_none());
        assert!(course.semester.is_none());
    }

    #[test]
    fn test_add_prerequisite() {
        let mut course = Course::new("ds".to_string(), "Data Structures".to_string(), 4);

        course.add_prerequisite("intro".to_string());
        assert_eq!(course.prerequisites.len(), 1);
        assert_eq!(course.prerequisites[0], "intro");

        // Adding duplicate should not duplicate
        course.add_prerequisite("intro".to_string());
        assert_eq!(course.prerequisites.len(), 1);
    }

    #[test]
    fn test_add_corequisite() {
        let mut course = Course::new("phys1".to_string(), "Physics I".to_string(), 4);

        course.add_corequisite("phys1-lab".to_string());
        assert_eq!(course.corequisites.len(), 1);
        assert_eq!(course.corequisites[0], "phys1-lab");
    }

    #[test]
    fn test_references_self() {
        let mut course = Course::new("ds".to_string(), "Data Structures".to_string(), 4);
        assert!(!course.references_self());

        course.add_prerequisite("ds".to_string());
        assert!(course.references_self());
    }

    #[test]
    fn deserializes_without_requisite_lists() {
        // Absent prerequisites/corequisites behave like empty lists
        let json = r#"{"id":"c1","title":"Calculus I","units":3}"#;
        let course: Course = serde_json::from_str(json).expect("parse course");

        assert!(course.prerequisites.is_empty());
        assert!(course.corequisites.is_empty());
    }

    #[test]
    fn category_uses_kebab_case_on_the_wire() {
        let json = r#"{"id":"c1","title":"Calculus I","units":3,"category":"required-basic"}"#;
        let course: Course = serde_json::from_str(json).expect("parse course");

        assert_eq!(course.category, Some(Category::RequiredBasic));
        assert_eq!(Category::RequiredBasic.to_string(), "required-basic");
    }
}
