// modscan: Fabric mod inventory scanner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Scan command arguments.

use clap::Args;
use std::path::PathBuf;

use crate::output::OutputFormat;

/// Arguments for the `scan` command.
#[derive(Debug, Clone, Default, Args)]
pub struct ScanArgs {
    /// Descriptor field to keep. Can be repeated or comma separated;
    /// replaces scan.fields. `id` is printed as `name`, and the
    /// descriptor's own `name` as `display_name`.
    #[arg(short = 'f', long = "field", value_name = "FIELD", value_delimiter = ',')]
    pub fields: Vec<String>,

    /// Output format.
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Path of the descriptor inside each archive.
    #[arg(long, value_name = "PATH")]
    pub descriptor: Option<String>,

    /// Archive file-name pattern.
    #[arg(long, value_name = "GLOB")]
    pub pattern: Option<String>,

    /// Skip archives whose name starts with a dot.
    #[arg(long)]
    pub skip_hidden: bool,

    /// Mods directory; defaults to scan.mods_directory.
    #[arg(value_name = "DIR")]
    pub directory: Option<PathBuf>,
}

impl ScanArgs {
    /// Converts scan arguments to configuration overrides.
    #[must_use]
    pub fn to_config_overrides(&self) -> Vec<String> {
        let fields = (!self.fields.is_empty()).then(|| format!("scan.fields={}", self.fields.join(",")));

        [
            self.directory
                .as_ref()
                .map(|dir| format!("scan.mods_directory={}", dir.display())),
            fields,
            self.format.map(|format| format!("output.format={format}")),
            self.descriptor
                .as_ref()
                .map(|descriptor| format!("scan.descriptor={descriptor}")),
            self.pattern
                .as_ref()
                .map(|pattern| format!("scan.pattern={pattern}")),
            self.skip_hidden
                .then(|| "scan.include_hidden=false".to_string()),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}
