//! Progress report generation
//!
//! Renders a student's progress against the loaded template as a shareable
//! document: overall units, per-group completion with overflow credit, and
//! the courses that just became available.

pub mod formats;

use crate::core::eligibility::{self, GroupProgress};
use crate::core::models::{Course, CurriculumTemplate, UserProgress};
use std::error::Error;
use std::path::Path;

pub use formats::{HtmlReporter, MarkdownReporter, ReportFormat};

/// Per-group line of the report
#[derive(Debug, Clone, PartialEq)]
pub struct GroupRow {
    /// Group id
    pub id: String,
    /// Group display title
    pub title: String,
    /// Computed unit progress
    pub progress: GroupProgress,
    /// Completion percentage, clamped to `[0, 100]`
    pub percent: f32,
}

/// Data context for report generation
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Template the report is rendered against
    pub template: &'a CurriculumTemplate,
    /// The student's progress
    pub progress: &'a UserProgress,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(template: &'a CurriculumTemplate, progress: &'a UserProgress) -> Self {
        Self { template, progress }
    }

    /// Total units passed against the template
    #[must_use]
    pub fn total_units_completed(&self) -> u32 {
        let courses: Vec<Course> = self.template.all_courses().cloned().collect();
        eligibility::units_completed(&courses, &self.progress.passed_courses)
    }

    /// Overall completion percentage, clamped to `[0, 100]`
    #[must_use]
    pub fn completion_percent(&self) -> f32 {
        eligibility::completion_percent(
            self.total_units_completed(),
            self.template.total_units_required,
        )
    }

    /// One row per group, in template order
    #[must_use]
    pub fn group_rows(&self) -> Vec<GroupRow> {
        self.template
            .groups
            .iter()
            .map(|group| {
                let progress = eligibility::group_progress(self.template, self.progress, &group.id);
                GroupRow {
                    id: group.id.clone(),
                    title: group.title.clone(),
                    percent: eligibility::completion_percent(progress.passed, progress.required),
                    progress,
                }
            })
            .collect()
    }

    /// Courses the student can take right now
    #[must_use]
    pub fn available_now(&self) -> Vec<Course> {
        let courses: Vec<Course> = self.template.all_courses().cloned().collect();
        eligibility::fully_available_courses(&courses, &self.progress.passed_courses)
            .into_iter()
            .cloned()
            .collect()
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if report generation fails
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>>;

    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if report generation or file writing fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<(), Box<dyn Error>> {
        let content = self.render(ctx)?;
        std::fs::write(output_path, content)?;
        Ok(())
    }
}
