// modscan: Fabric mod inventory scanner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Scan command implementation for modscan.

use std::io::Write;

use anyhow::Context;

use crate::config::Config;
use crate::error::Result;
use crate::output::write_records;
use crate::scan::ScanReport;

/// Main handler for the scan command.
///
/// Skipped archives are logged by the scanner and do not fail the command.
///
/// # Errors
///
/// Returns an error if the mods directory cannot be expanded or the records
/// cannot be written to stdout.
pub fn run_scan_command(config: &Config) -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run_scan_to(config, &mut out).map(|_| ())
}

/// Scans as configured and writes the records to `out`.
///
/// # Errors
///
/// See [`run_scan_command`].
pub fn run_scan_to<W: Write>(config: &Config, out: &mut W) -> Result<ScanReport> {
    let report = config.scanner().scan(&config.scan.mods_directory)?;
    write_records(out, report.records(), config.output.format)
        .context("failed to write scan results")?;
    Ok(report)
}
