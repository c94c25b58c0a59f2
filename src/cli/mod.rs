// modscan: Fabric mod inventory scanner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for modscan using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! modscan [global options] [command]
//! scan [DIR] [-f FIELD]... [--format text|json]   (default)
//! options
//! inis
//! version
//! ```

pub mod global;
pub mod scan;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use crate::cli::scan::ScanArgs;
use clap::{Parser, Subcommand};

/// Fabric mod inventory scanner
///
/// Lists the mods in a folder of `.jar` files using their `fabric.mod.json`.
#[derive(Debug, Parser)]
#[command(
    name = "modscan",
    author,
    version,
    about = "Fabric mod inventory scanner",
    long_about = "modscan Copyright (C) 2026 Romeo Ahmed\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Reads fabric.mod.json from every .jar in a mods folder and\n\
                  prints one record per mod. Running `modscan` without a command\n\
                  is the same as `modscan scan`.",
    after_help = "CONFIGURATION:\n\n\
                  modscan looks for `modscan.toml` in the current directory. Files\n\
                  given with --ini are loaded after it and override it, followed by\n\
                  MODSCAN_* environment variables (e.g. MODSCAN_SCAN__MODS_DIRECTORY),\n\
                  then --set options, then command-line flags. Use --no-default-inis\n\
                  to skip `modscan.toml`."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    Version,

    /// Lists all options and their effective values.
    Options,

    /// Lists the configuration files used.
    Inis,

    /// Scans a mods directory and prints one record per mod.
    Scan(ScanArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
