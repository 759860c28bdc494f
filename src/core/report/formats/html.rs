//! HTML report generator
//!
//! Generates self-contained progress reports in HTML format with embedded CSS.

use crate::core::report::{ReportContext, ReportGenerator};
use std::error::Error;
use std::fmt::Write;

/// Embedded HTML report template
const HTML_TEMPLATE: &str = include_str!("../templates/report.html");

/// HTML report generator
pub struct HtmlReporter;

impl HtmlReporter {
    /// Create a new HTML reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Escape text for safe embedding in HTML
    fn escape(text: &str) -> String {
        text.replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;")
    }

    /// Render the report using template substitution
    #[allow(clippy::unused_self)]
    fn render_template(&self, ctx: &ReportContext) -> String {
        let mut output = HTML_TEMPLATE.to_string();

        output = output.replace("{{template_title}}", &Self::escape(&ctx.template.title));
        output = output.replace("{{template_id}}", &Self::escape(&ctx.template.id));
        output = output.replace("{{university}}", &Self::escape(&ctx.template.university));
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

        let group_rows = Self::generate_group_rows(ctx);
        output = output.replace("{{group_rows}}", &group_rows);

        let available_items = Self::generate_available_items(ctx);
        output = output.replace("{{available_items}}", &available_items);

        output
    }

    /// Build the per-group table rows
    fn generate_group_rows(ctx: &ReportContext) -> String {
        let mut rows = String::new();

        for row in ctx.group_rows() {
            let _ = writeln!(
                rows,
                "      <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{:.0}%</td></tr>",
                Self::escape(&row.title),
                row.progress.passed,
                row.progress.required,
                row.progress.overflow,
                row.percent
            );
        }

        rows
    }

    /// Build the list items for currently available courses
    fn generate_available_items(ctx: &ReportContext) -> String {
        let available = ctx.available_now();
        if available.is_empty() {
            return "      <li class=\"empty\">No courses are currently available.</li>\n"
                .to_string();
        }

        let mut items = String::new();
        for course in available {
            let _ = writeln!(
                items,
                "      <li><strong>{}</strong> ({} units)</li>",
                Self::escape(&course.title),
                course.units
            );
        }
        items
    }
}

impl Default for HtmlReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for HtmlReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String, Box<dyn Error>> {
        Ok(self.render_template(ctx))
    }
}
