// modscan: Fabric mod inventory scanner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Record rendering, one record per line.
//!
//! ```text
//! text:  {name: "sodium", display_name: "Sodium", version: "0.5.8"}
//! json:  {"name":"sodium","display_name":"Sodium","version":"0.5.8"}
//! ```

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::scan::ModRecord;

/// Output format for scan results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable mapping with JSON-encoded values.
    #[default]
    Text,
    /// JSON lines.
    Json,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" | "jsonl" => Ok(Self::Json),
            _ => Err(ConfigError::InvalidValue {
                section: "output".to_string(),
                key: "format".to_string(),
                message: format!("expected 'text' or 'json', got '{s}'"),
            }),
        }
    }
}

/// Renders a single record as one line, without the trailing newline.
#[must_use]
pub fn render_record(record: &ModRecord, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => {
            let fields: Vec<String> = record
                .iter()
                .map(|(key, value)| format!("{key}: {value}"))
                .collect();
            format!("{{{}}}", fields.join(", "))
        }
        // Map<String, Value> serialization cannot fail
        OutputFormat::Json => serde_json::to_string(record).unwrap_or_default(),
    }
}

/// Writes every record to `out`, one per line.
///
/// # Errors
///
/// Returns an error if writing to `out` fails.
pub fn write_records<W: Write>(
    out: &mut W,
    records: &[ModRecord],
    format: OutputFormat,
) -> io::Result<()> {
    for record in records {
        writeln!(out, "{}", render_record(record, format))?;
    }
    out.flush()
}
