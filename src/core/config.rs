//! Configuration module for `UniChart`

use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory holding built-in template JSON files and the registry
    #[serde(default)]
    pub templates_dir: String,
    /// Directory progress and template exports are written to
    #[serde(default)]
    pub exports_dir: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override templates directory
    pub templates_dir: Option<String>,
    /// Override exports directory
    pub exports_dir: Option<String>,
}

impl Config {
    /// Get the `$UNICHART` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/unichart`
    /// - macOS: `~/Library/Application Support/unichart`
    /// - Windows: `%APPDATA%\unichart`
    #[must_use]
    pub fn get_unichart_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("unichart")
    }

    /// Get the user config file path (`config.toml`, or `dconfig.toml` in
    /// debug builds)
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_unichart_dir().join(CONFIG_FILE_NAME)
    }

    /// Merge missing fields from defaults into this config.
    ///
    /// Only fields that are empty in the current config and non-empty in the
    /// defaults are updated, so upgrading the application adds new config
    /// fields while preserving existing user settings.
    ///
    /// # Returns
    /// `true` if any fields were added/changed, `false` otherwise
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        if self.paths.templates_dir.is_empty() && !defaults.paths.templates_dir.is_empty() {
            self.paths
                .templates_dir
                .clone_from(&defaults.paths.templates_dir);
            changed = true;
        }
        if self.paths.exports_dir.is_empty() && !defaults.paths.exports_dir.is_empty() {
            self.paths
                .exports_dir
                .clone_from(&defaults.paths.exports_dir);
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration.
    ///
    /// Only non-`None` values in the overrides struct replace config values;
    /// the persistent configuration file is not modified.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }

        if let Some(templates_dir) = &overrides.templates_dir {
            self.paths.templates_dir.clone_from(templates_dir);
        }
        if let Some(exports_dir) = &overrides.exports_dir {
            self.paths.exports_dir.clone_from(exports_dir);
        }
    }

    /// Expand `$UNICHART` in a string to the actual config directory path
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains("$UNICHART") {
            let unichart_dir = Self::get_unichart_dir();
            value.replace("$UNICHART", unichart_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string, expanding `$UNICHART` variables.
    ///
    /// # Errors
    /// Returns an error if the TOML cannot be parsed or doesn't match the
    /// expected schema.
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.templates_dir = Self::expand_variables(&config.paths.templates_dir);
        config.paths.exports_dir = Self::expand_variables(&config.paths.exports_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults.
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. This
    /// cannot happen in practice since the defaults are compiled into the
    /// binary.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create from defaults if not found.
    ///
    /// If the file exists it is loaded and missing fields are merged in from
    /// defaults (and saved back); on first run the config directory and file
    /// are created from defaults. Falls back to defaults on any error.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save configuration to the platform config file.
    ///
    /// # Errors
    /// Returns an error if serialization, directory creation, or the file
    /// write fails.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key.
    ///
    /// Supported keys: `level`, `file`, `verbose`, `templates_dir`,
    /// `exports_dir`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "templates_dir" | "templates-dir" => Some(self.paths.templates_dir.clone()),
            "exports_dir" | "exports-dir" => Some(self.paths.exports_dir.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key (in memory; call
    /// [`save()`](Config::save) to persist).
    ///
    /// # Errors
    /// Returns an error if the key is not recognized or the value cannot be
    /// parsed.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "templates_dir" | "templates-dir" => self.paths.templates_dir = value.to_string(),
            "exports_dir" | "exports-dir" => self.paths.exports_dir = value.to_string(),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset a single configuration value to its default (in memory).
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "templates_dir" | "templates-dir" => self
                .paths
                .templates_dir
                .clone_from(&defaults.paths.templates_dir),
            "exports_dir" | "exports-dir" => self
                .paths
                .exports_dir
                .clone_from(&defaults.paths.exports_dir),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults by deleting the config file.
    ///
    /// The next [`load()`](Config::load) call recreates it from defaults. The
    /// CLI requires user confirmation before calling this.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  templates_dir = \"{}\"", self.paths.templates_dir)?;
        writeln!(f, "  exports_dir = \"{}\"", self.paths.exports_dir)?;

        Ok(())
    }
}
