//! Report command handler

use crate::commands::open_store;
use logger::error;
use std::fs;
use std::path::PathBuf;
use unichart::config::Config;
use unichart::report::{HtmlReporter, MarkdownReporter, ReportContext, ReportFormat, ReportGenerator};

/// Generate a progress report in the requested format
pub fn run(format: &str, output: Option<PathBuf>, config: &Config) {
    let (store, _catalog, _session) = open_store(config);

    let Some(template) = store.template() else {
        eprintln!("✗ No template loaded; nothing to report on");
        std::process::exit(1);
    };

    let format: ReportFormat = match format.parse() {
        Ok(format) => format,
        Err(e) => {
            eprintln!("✗ {e}");
            std::process::exit(1);
        }
    };

    let reporter: Box<dyn ReportGenerator> = match format {
        ReportFormat::Markdown => Box::new(MarkdownReporter::new()),
        ReportFormat::Html => Box::new(HtmlReporter::new()),
    };

    let path = output.unwrap_or_else(|| {
        PathBuf::from(&config.paths.exports_dir)
            .join(format!("progress-report.{}", format.extension()))
    });

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            eprintln!("✗ Failed to create report directory {}: {e}", parent.display());
            std::process::exit(1);
        }
    }

    let ctx = ReportContext::new(template, store.user_progress());
    match reporter.generate(&ctx, &path) {
        Ok(()) => println!("✓ Report generated: {}", path.display()),
        Err(e) => {
            error!("Report generation failed: {e}");
            eprintln!("✗ Failed to generate report: {e}");
            std::process::exit(1);
        }
    }
}
