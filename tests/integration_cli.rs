// modscan: Fabric mod inventory scanner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for CLI parsing.
//!
//! Tests the CLI module with realistic command-line argument patterns.

use clap::Parser;
use modscan::cli::scan::ScanArgs;
use modscan::cli::{Cli, Command};

// =============================================================================
// Simple Commands
// =============================================================================

#[test]
fn cli_version_command() {
    let cli = Cli::try_parse_from(["modscan", "version"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Version)));
}

#[test]
fn cli_options_command_with_ini() {
    let cli = Cli::try_parse_from(["modscan", "--ini", "a.toml", "-i", "b.toml", "options"])
        .unwrap();
    assert!(matches!(cli.command, Some(Command::Options)));
    assert_eq!(cli.global.inis.len(), 2);
}

#[test]
fn cli_inis_no_default() {
    let cli = Cli::try_parse_from(["modscan", "inis", "--no-default-inis"]).unwrap();
    assert!(matches!(cli.command, Some(Command::Inis)));
    assert!(cli.global.no_default_inis);
}

// =============================================================================
// Scan Command
// =============================================================================

#[test]
fn cli_scan_defaults_produce_no_overrides() {
    let cli = Cli::try_parse_from(["modscan", "scan"]).unwrap();
    let Some(Command::Scan(args)) = cli.command else {
        panic!("expected scan command");
    };
    assert!(args.to_config_overrides().is_empty());
}

#[test]
fn cli_scan_descriptor_pattern_skip_hidden() {
    let cli = Cli::try_parse_from([
        "modscan",
        "scan",
        "--descriptor",
        "quilt.mod.json",
        "--pattern",
        "*.zip",
        "--skip-hidden",
    ])
    .unwrap();
    let Some(Command::Scan(args)) = cli.command else {
        panic!("expected scan command");
    };
    insta::assert_snapshot!(args.to_config_overrides().join("\n"), @r"
    scan.descriptor=quilt.mod.json
    scan.pattern=*.zip
    scan.include_hidden=false
    ");
}

#[test]
fn cli_log_file_and_file_level() {
    let cli = Cli::try_parse_from([
        "modscan",
        "--log-file",
        "out/modscan.log",
        "--file-log-level",
        "4",
        "-l",
        "2",
    ])
    .unwrap();
    insta::assert_snapshot!(cli.global.to_config_overrides().join("\n"), @r"
    global.output_log_level=2
    global.file_log_level=4
    global.log_file=out/modscan.log
    ");
}

#[test]
fn cli_scan_args_default() {
    let args = ScanArgs::default();
    assert!(args.fields.is_empty());
    assert!(args.directory.is_none());
}
