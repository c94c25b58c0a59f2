// modscan: Fabric mod inventory scanner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration section types.
//!
//! ```text
//! Config: GlobalConfig, ScanConfig, OutputConfig
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use std::path::PathBuf;

use crate::logging::LogLevel;
use crate::output::OutputFormat;
use crate::scan::{DEFAULT_FIELDS, DEFAULT_PATTERN, FABRIC_DESCRIPTOR};

/// Default mods directory of a vanilla launcher installation.
pub const DEFAULT_MODS_DIRECTORY: &str = "~/.minecraft/mods";

/// Global options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Log level for console output (0-6).
    pub output_log_level: LogLevel,
    /// Log level for file output (0-6).
    pub file_log_level: LogLevel,
    /// Path to log file; no file logging when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_file: Option<PathBuf>,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            output_log_level: LogLevel::INFO,
            file_log_level: LogLevel::TRACE,
            log_file: None,
        }
    }
}

/// What to scan and which descriptor fields to keep.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// Directory holding the mod archives; `~` and `$VAR` are expanded.
    pub mods_directory: PathBuf,
    /// Descriptor keys to project. Accepts a list or a comma-separated string.
    #[serde(deserialize_with = "string_or_list")]
    pub fields: Vec<String>,
    /// In-archive path of the descriptor.
    pub descriptor: String,
    /// Archive file-name glob.
    pub pattern: String,
    /// Also match dot-files.
    pub include_hidden: bool,
    /// Follow symbolic links to archives.
    pub follow_links: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            mods_directory: PathBuf::from(DEFAULT_MODS_DIRECTORY),
            fields: DEFAULT_FIELDS.iter().map(ToString::to_string).collect(),
            descriptor: FABRIC_DESCRIPTOR.to_string(),
            pattern: DEFAULT_PATTERN.to_string(),
            include_hidden: true,
            follow_links: true,
        }
    }
}

/// Output options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// Accepts `["a", "b"]` or `"a,b"` (environment variables and `--set` only
/// carry strings).
fn string_or_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrList {
        One(String),
        Many(Vec<String>),
    }

    Ok(match StringOrList::deserialize(deserializer)? {
        StringOrList::One(s) => s
            .split(',')
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(String::from)
            .collect(),
        StringOrList::Many(v) => v,
    })
}
