// modscan: Fabric mod inventory scanner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!   ModscanError (~16 bytes)
//!         |
//!         v
//!      Config (Box)
//!
//!   ConfigError   MissingKey, InvalidValue, InvalidOverride
//!   ArchiveError  Io, Corrupt, MissingDescriptor, Oversized, InvalidEncoding,
//!                 MalformedJson
//! ```
//!
//! `ArchiveError` values never abort a scan, so they have no `ModscanError`
//! variant: they are attached to the skipped archive in the scan report and
//! logged.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`ModscanError`].
pub type ModscanResult<T> = std::result::Result<T, ModscanError>;

/// Top-level library error type.
///
/// Sub-errors are boxed to keep this enum two words wide.
#[derive(Debug, Error)]
pub enum ModscanError {
    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),
}

macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for ModscanError {
                fn from(err: $error) -> Self {
                    ModscanError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    ConfigError => Config,
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Missing required configuration key.
    #[error("missing required config key '{key}' in section '[{section}]'")]
    MissingKey { section: String, key: String },

    /// Invalid configuration value.
    #[error("invalid value for '{key}' in section '[{section}]': {message}")]
    InvalidValue {
        section: String,
        key: String,
        message: String,
    },

    /// A `--set` override that is not of the form `section.key=value`.
    #[error("invalid override '{0}': expected 'section.key=value'")]
    InvalidOverride(String),
}

// --- Archive Errors ---

/// Reasons a single mod archive produced no record.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// The file could not be opened or read.
    #[error("failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a readable zip archive.
    #[error("'{path}' is not a valid archive: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    /// The archive has no descriptor entry.
    #[error("{entry} not found in {path}")]
    MissingDescriptor { path: PathBuf, entry: String },

    /// The descriptor entry is larger than the read limit.
    #[error("{entry} in {path} is {size} bytes, over the {limit} byte limit")]
    Oversized {
        path: PathBuf,
        entry: String,
        size: u64,
        limit: u64,
    },

    /// The descriptor entry is not valid UTF-8.
    #[error("{entry} in {path} is not valid UTF-8")]
    InvalidEncoding { path: PathBuf, entry: String },

    /// The descriptor is not valid JSON, even after sanitizing.
    #[error("failed to parse JSON from {path}: {source}")]
    MalformedJson {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl ArchiveError {
    /// Path of the archive this error refers to.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Io { path, .. }
            | Self::Corrupt { path, .. }
            | Self::MissingDescriptor { path, .. }
            | Self::Oversized { path, .. }
            | Self::InvalidEncoding { path, .. }
            | Self::MalformedJson { path, .. } => path,
        }
    }

    /// Whether the descriptor was found but could not be parsed.
    ///
    /// Parse failures are reported at error level, everything else as a warning.
    #[must_use]
    pub const fn is_parse_failure(&self) -> bool {
        matches!(self, Self::MalformedJson { .. })
    }
}
