//! Data models for `UniChart`

pub mod course;
pub mod group;
pub mod progress;
pub mod template;

pub use course::{Category, Course};
pub use group::CourseGroup;
pub use progress::{PassedCourse, UserProgress};
pub use template::{CurriculumTemplate, TemplateError};
