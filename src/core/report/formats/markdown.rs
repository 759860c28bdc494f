//! Markdown report generator
//!
//! Generates progress reports in Markdown format. These render well in
//! GitHub, GitLab, and VS Code.

use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = MARKDOWN_TEMPLATE.to_string();

        output = output.replace("{{template_title}}", &ctx.template.title);
        output = output.replace("{{template_id}}", &ctx.template.id);
        output = output.replace("{{university}}", &ctx.template.university);
        output = output.replace(
            "{{total_passed}}",
            &ctx.total_units_completed().to_string(),
        );
        output = output.replace(
            "{{total_required}}",
            &ctx.template.total_units_required.to_string(),
        );
        output = output.replace(
            "{{percent}}",
            &format!("{:.0}", ctx.completion_percent()),
        );

        let group_table = Self::generate_group_table(ctx);
        output = output.replace("{{group_table}}", &group_table);

        let available_list = Self::generate_available_list(ctx);
        output = output.replace("{{available_courses}}", &available_list);

        output
    }

    /// Build the per-group progress table
    fn generate_group_table(ctx: &ReportContext) -> String {
        let mut table = String::new();
        let _ = writeln!(table, "| Group | Passed | Required | Overflow | Progress |");
        let _ = writeln!(table, "|-------|--------|----------|----------|----------|");

        for row in ctx.group_rows() {
            let _ = writeln!(
                table,
                "| {} | {} | {} | {} | {:.0}% |",
                row.title, row.progress.passed, row.progress.required, row.progress.overflow,
                row.percent
            );
        }

        table
    }

    /// Build the list of courses that can be taken now
    fn generate_available_list(ctx: &ReportContext) -> String {
        let available = ctx.available_now();
        if available.is_empty() {
            return "_No courses are currently available._\n".to_string();
        }

        let mut list = String::new();
        for course in available {
            let _ = writeln!(list, "- **{}** ({} units)", course.title, course.units);
        }
        list
    }
}

impl Default for MarkdownReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Course, CourseGroup, CurriculumTemplate, PassedCourse, UserProgress};

    fn context_data() -> (CurriculumTemplate, UserProgress) {
        let mut group = CourseGroup::new("core".to_string(), "Core".to_string(), 8);
        group
            .courses
            .push(Course::new("a".to_string(), "Course A".to_string(), 4));
        group
            .courses
            .push(Course::new("b".to_string(), "Course B".to_string(), 4));

        let mut template = CurriculumTemplate::new(
            "cs".to_string(),
            "Computer Science".to_string(),
            "Test University".to_string(),
            8,
        );
        template.groups.push(group);

        let mut progress = UserProgress::new("cs".to_string());
        progress
            .passed_courses
            .push(PassedCourse::new("a".to_string(), 1));

        (template, progress)
    }

    #[test]
    fn renders_summary_and_tables() {
        let (template, progress) = context_data();
        let ctx = ReportContext::new(&template, &progress);

        let output = MarkdownReporter::new().render(&ctx).expect("render");

        assert!(output.contains("Computer Science"));
        assert!(output.contains("4"));
        assert!(output.contains("| Core | 4 | 8 | 0 | 50% |"));
        assert!(output.contains("**Course B** (4 units)"));
        // No leftover placeholders
        assert!(!output.contains("{{"));
    }
}
