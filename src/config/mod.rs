// modscan: Fabric mod inventory scanner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for modscan.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. modscan.toml (cwd, unless --no-default-inis)
//! 3. --ini files
//! 4. MODSCAN_* env vars
//! 5. --set overrides
//! 6. CLI flags
//! ```
//!
//! # Environment Variable Mapping
//!
//! ```text
//! MODSCAN_SCAN__MODS_DIRECTORY=/srv/mods  → scan.mods_directory
//! MODSCAN_SCAN__FIELDS=id,version         → scan.fields = ["id", "version"]
//! MODSCAN_OUTPUT__FORMAT=json             → output.format
//! ```

pub mod loader;
pub mod types;


use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::error::{ConfigError, Result};
use crate::logging::LogConfig;
use crate::scan::Scanner;
use crate::utility::fs::walk::{WalkOptions, compile_pattern};

use loader::ConfigLoader;
use types::{GlobalConfig, OutputConfig, ScanConfig};

/// Default configuration file looked up in the current directory.
pub const DEFAULT_CONFIG_FILE: &str = "modscan.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "MODSCAN";

/// Complete application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Global options.
    pub global: GlobalConfig,
    /// Scan options.
    pub scan: ScanConfig,
    /// Output options.
    pub output: OutputConfig,
}

impl Config {
    /// Create a new configuration builder.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use modscan::config::Config;
    ///
    /// let config = Config::builder()
    ///     .add_toml_file_optional("modscan.toml")
    ///     .with_env_prefix("MODSCAN")
    ///     .build()?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    #[must_use]
    pub fn builder() -> ConfigLoader {
        ConfigLoader::new()
    }

    /// Load configuration from a single TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, contains invalid TOML, or
    /// does not match the `Config` structure.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::builder().add_toml_file(path).build()
    }

    /// Load configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match the
    /// `Config` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Checks values that deserialize fine but cannot be scanned with.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the descriptor path or pattern is empty, or
    /// the pattern is not a valid glob.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.scan.descriptor.trim().is_empty() {
            return Err(ConfigError::MissingKey {
                section: "scan".to_string(),
                key: "descriptor".to_string(),
            });
        }
        if self.scan.pattern.trim().is_empty() {
            return Err(ConfigError::MissingKey {
                section: "scan".to_string(),
                key: "pattern".to_string(),
            });
        }
        compile_pattern(&self.scan.pattern)?;
        Ok(())
    }

    /// Builds the scanner described by the `[scan]` section.
    #[must_use]
    pub fn scanner(&self) -> Scanner {
        Scanner::builder()
            .with_fields(self.scan.fields.clone())
            .with_descriptor(self.scan.descriptor.clone())
            .with_pattern(self.scan.pattern.clone())
            .with_walk_options(
                WalkOptions::builder()
                    .with_include_hidden(self.scan.include_hidden)
                    .with_follow_links(self.scan.follow_links)
                    .build(),
            )
            .build()
    }

    /// Builds the logging configuration described by the `[global]` section.
    #[must_use]
    pub fn log_config(&self) -> LogConfig {
        LogConfig::builder()
            .with_console_level(self.global.output_log_level)
            .with_file_level(self.global.file_log_level)
            .maybe_with_log_file(self.global.log_file.clone())
            .build()
    }

    /// Format configuration options for display.
    ///
    /// Output is deterministically ordered using `BTreeMap`.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let mut options = BTreeMap::new();
        self.format_global_options(&mut options);
        self.format_scan_options(&mut options);
        options.insert("output.format".into(), self.output.format.to_string());

        let max_key_len = options.keys().map(String::len).max().unwrap_or(0);

        options
            .into_iter()
            .map(|(key, value)| format!("{key:<max_key_len$} = {value}"))
            .collect()
    }

    fn format_global_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "global.output_log_level".into(),
            self.global.output_log_level.as_u8().to_string(),
        );
        options.insert(
            "global.file_log_level".into(),
            self.global.file_log_level.as_u8().to_string(),
        );
        if let Some(log_file) = &self.global.log_file {
            options.insert("global.log_file".into(), log_file.display().to_string());
        }
    }

    fn format_scan_options(&self, options: &mut BTreeMap<String, String>) {
        options.insert(
            "scan.mods_directory".into(),
            self.scan.mods_directory.display().to_string(),
        );
        options.insert("scan.fields".into(), self.scan.fields.join(", "));
        options.insert("scan.descriptor".into(), self.scan.descriptor.clone());
        options.insert("scan.pattern".into(), self.scan.pattern.clone());
        options.insert(
            "scan.include_hidden".into(),
            self.scan.include_hidden.to_string(),
        );
        options.insert(
            "scan.follow_links".into(),
            self.scan.follow_links.to_string(),
        );
    }
}
