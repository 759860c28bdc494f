//! Course group model

use super::Course;
use serde::{Deserialize, Serialize};

/// A titled block of courses with its own unit requirement.
///
/// Units earned beyond `required_units` may be credited to another group via
/// `overflow_target_group_id` (single hop only; a group never re-exports
/// units it received as overflow).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseGroup {
    /// Group identifier, unique within a template
    pub id: String,

    /// Display title (e.g., "Core Courses")
    pub title: String,

    /// Units required to complete this group
    pub required_units: u32,

    /// Id of the group that receives this group's excess units, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overflow_target_group_id: Option<String>,

    /// Ordered list of courses belonging to this group
    #[serde(default)]
    pub courses: Vec<Course>,
}

impl CourseGroup {
    /// Create a new empty group
    ///
    /// # Arguments
    /// * `id` - Group identifier
    /// * `title` - Display title
    /// * `required_units` - Units required to complete the group
    #[must_use]
    pub const fn new(id: String, title: String, required_units: u32) -> Self {
        Self {
            id,
            title,
            required_units,
            overflow_target_group_id: None,
            courses: Vec::new(),
        }
    }

    /// Add a course to the group
    ///
    /// # Returns
    /// `true` if the course was added, `false` if a course with that id already exists
    pub fn add_course(&mut self, course: Course) -> bool {
        if self.courses.iter().any(|c| c.id == course.id) {
            return false;
        }
        self.courses.push(course);
        true
    }

    /// Get a course by id
    #[must_use]
    pub fn find_course(&self, course_id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == course_id)
    }

    /// Total units offered by this group's courses
    #[must_use]
    pub fn total_units(&self) -> u32 {
        self.courses.iter().map(|c| c.units).sum()
    }
}
