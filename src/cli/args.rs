//! CLI argument definitions for `UniChart`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use logger::Level;
use unichart::config::ConfigOverrides;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to lowercase
/// strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `templates_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum TemplateSubcommand {
    /// List catalog and custom templates.
    List,
    /// Load a template by id and make it current.
    ///
    /// Custom templates take precedence over catalog templates with the same id.
    Load {
        /// Template id to load
        #[arg(value_name = "ID")]
        id: String,
    },
    /// Import a template JSON file into the custom list.
    ///
    /// Replaces any existing custom template with the same id.
    Import {
        /// Path to the template JSON file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Save an edited template file as the next version of its lineage.
    ///
    /// Prior versions stay stored; the new version becomes current.
    Save {
        /// Path to the edited template JSON file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Export a template as indented JSON.
    Export {
        /// Template id to export (defaults to the current template)
        #[arg(value_name = "ID")]
        id: Option<String>,
        /// Output directory (defaults to config `exports_dir`)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },
    /// Delete a custom template by id.
    Delete {
        /// Custom template id to delete
        #[arg(value_name = "ID")]
        id: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum ProgressSubcommand {
    /// Toggle a course's passed state.
    Toggle {
        /// Course id to toggle
        #[arg(value_name = "COURSE_ID")]
        course_id: String,
        /// Term the course was passed in
        #[arg(long, value_name = "TERM", default_value_t = 1)]
        term: u32,
    },
    /// Clear all passed courses, keeping the loaded template.
    Reset,
    /// Import a progress JSON file.
    ///
    /// The file must target the currently loaded template.
    Import {
        /// Path to the progress JSON file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },
    /// Export the current progress as indented JSON.
    Export {
        /// Output directory (defaults to config `exports_dir`)
        #[arg(short, long, value_name = "DIR")]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Manage curriculum templates.
    Template {
        #[command(subcommand)]
        subcommand: TemplateSubcommand,
    },
    /// Record and transfer course progress.
    Progress {
        #[command(subcommand)]
        subcommand: ProgressSubcommand,
    },
    /// Show progress against the loaded template.
    Status {
        /// List courses that can be taken right now
        #[arg(long)]
        available: bool,
        /// List blocked courses with their missing prerequisites
        #[arg(long)]
        blocked: bool,
    },
    /// Generate a progress report.
    Report {
        /// Report format: markdown (md) or html
        #[arg(short, long, value_name = "FORMAT", default_value = "md")]
        format: String,
        /// Output file path (defaults to `exports_dir/progress-report.{ext}`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "unichart",
    about = "UniChart command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config templates directory
    #[arg(long = "config-templates-dir", value_name = "DIR")]
    pub config_templates_dir: Option<PathBuf>,

    /// Override config templates directory (short form)
    #[arg(long = "templates-dir", value_name = "DIR")]
    pub templates_dir: Option<PathBuf>,

    /// Override config exports directory
    #[arg(long = "config-exports-dir", value_name = "DIR")]
    pub config_exports_dir: Option<PathBuf>,

    /// Override config exports directory (short form)
    #[arg(long = "exports-dir", value_name = "DIR")]
    pub exports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--templates-dir`) take precedence over
    /// long-form flags (e.g., `--config-templates-dir`) when both are provided.
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string().to_lowercase()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            templates_dir: self
                .templates_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_templates_dir
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
            exports_dir: self
                .exports_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_exports_dir
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
        }
    }
}
