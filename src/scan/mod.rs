// modscan: Fabric mod inventory scanner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Mod inventory scanner.
//!
//! ```text
//! mods_directory (~ expanded)
//!        |
//!        v
//! find_archives(*.jar)          sorted, non-recursive
//!        |
//!        v  one archive at a time
//! load_descriptor(fabric.mod.json)
//!   |                     |
//!   v Ok                  v Err(ArchiveError)
//! ModRecord::project      warn!/error!, skipped
//!   |
//!   v
//! ScanReport { records, skipped, examined }
//! ```
//!
//! Per-archive failures never abort a scan.

pub mod descriptor;
pub mod record;


use std::path::{Path, PathBuf};

use bon::Builder;
use tracing::{debug, error, info, warn};

use crate::error::{ArchiveError, ModscanResult};
use crate::utility::fs::expand::expand_path;
use crate::utility::fs::walk::{WalkOptions, find_archives};

pub use descriptor::FABRIC_DESCRIPTOR;
pub use record::ModRecord;

/// Default archive file-name pattern.
pub const DEFAULT_PATTERN: &str = "*.jar";

/// Descriptor fields projected when none are configured.
pub const DEFAULT_FIELDS: [&str; 4] = ["id", "name", "version", "description"];

/// An archive that produced no record, and why.
#[derive(Debug)]
pub struct SkippedArchive {
    path: PathBuf,
    reason: ArchiveError,
}

impl SkippedArchive {
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub const fn reason(&self) -> &ArchiveError {
        &self.reason
    }
}

/// Outcome of one scan.
#[derive(Debug, Default)]
pub struct ScanReport {
    records: Vec<ModRecord>,
    skipped: Vec<SkippedArchive>,
    examined: usize,
}

impl ScanReport {
    /// Records in archive enumeration order.
    #[must_use]
    pub fn records(&self) -> &[ModRecord] {
        &self.records
    }

    #[must_use]
    pub fn into_records(self) -> Vec<ModRecord> {
        self.records
    }

    #[must_use]
    pub fn skipped(&self) -> &[SkippedArchive] {
        &self.skipped
    }

    /// Number of archives matched by the pattern.
    #[must_use]
    pub const fn examined(&self) -> usize {
        self.examined
    }
}

/// Scans a mods directory and projects descriptor fields into records.
///
/// # Example
///
/// ```no_run
/// use modscan::scan::Scanner;
///
/// let scanner = Scanner::builder()
///     .with_fields(vec!["id".into(), "version".into()])
///     .build();
/// let report = scanner.scan("~/.minecraft/mods")?;
/// for record in report.records() {
///     println!("{}", record.name());
/// }
/// # Ok::<(), modscan::error::ModscanError>(())
/// ```
#[derive(Debug, Clone, Builder)]
pub struct Scanner {
    /// Descriptor keys to project.
    #[builder(setters(name = with_fields), default = DEFAULT_FIELDS.iter().map(ToString::to_string).collect())]
    fields: Vec<String>,
    /// In-archive path of the descriptor.
    #[builder(setters(name = with_descriptor), into, default = FABRIC_DESCRIPTOR.to_string())]
    descriptor: String,
    /// Archive file-name glob.
    #[builder(setters(name = with_pattern), into, default = DEFAULT_PATTERN.to_string())]
    pattern: String,
    #[builder(setters(name = with_walk_options), default)]
    walk_options: WalkOptions,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Scanner {
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    #[must_use]
    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }

    #[must_use]
    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    #[must_use]
    pub const fn walk_options(&self) -> &WalkOptions {
        &self.walk_options
    }

    /// Scans `directory`, which may use `~` or `$VAR` shorthand.
    ///
    /// A directory that does not exist yields an empty report.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be expanded or the archive
    /// pattern is not a valid glob. Problems with individual archives are
    /// recorded in [`ScanReport::skipped`] instead.
    pub fn scan<P: AsRef<Path>>(&self, directory: P) -> ModscanResult<ScanReport> {
        let directory = expand_path(directory.as_ref())?;
        let archives = find_archives(&directory, &self.pattern, &self.walk_options)?;
        debug!(
            directory = %directory.display(),
            count = archives.len(),
            "found archives"
        );

        let mut report = ScanReport {
            examined: archives.len(),
            ..ScanReport::default()
        };

        for archive in archives {
            match descriptor::load_descriptor(&archive, &self.descriptor) {
                Ok(value) => {
                    if !value.is_object() {
                        debug!(archive = %archive.display(), "descriptor is not an object");
                    }
                    let record = ModRecord::project(&value, &self.fields);
                    debug!(archive = %archive.display(), name = %record.name(), "recorded");
                    report.records.push(record);
                }
                Err(reason) => {
                    if reason.is_parse_failure() {
                        error!("{reason}");
                    } else {
                        warn!("{reason}");
                    }
                    report.skipped.push(SkippedArchive {
                        path: archive,
                        reason,
                    });
                }
            }
        }

        info!(
            examined = report.examined,
            recorded = report.records.len(),
            skipped = report.skipped.len(),
            "scan complete"
        );
        Ok(report)
    }
}

/// Scans `directory` with the default descriptor and pattern, returning only
/// the records.
///
/// # Errors
///
/// See [`Scanner::scan`].
pub fn scan<P, S>(directory: P, fields: &[S]) -> ModscanResult<Vec<ModRecord>>
where
    P: AsRef<Path>,
    S: AsRef<str>,
{
    Scanner::builder()
        .with_fields(fields.iter().map(|f| f.as_ref().to_string()).collect())
        .build()
        .scan(directory)
        .map(ScanReport::into_records)
}
