// modscan: Fabric mod inventory scanner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use crate::cli::{Cli, Command};
use crate::output::OutputFormat;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn test_parse_no_command() {
    let cli = Cli::try_parse_from(["modscan"]).unwrap();
    assert!(cli.command.is_none());
    assert!(cli.global.to_config_overrides().is_empty());
}

#[test]
fn test_parse_scan_args() {
    let cli = Cli::try_parse_from([
        "modscan",
        "scan",
        "-f",
        "id,version",
        "--field",
        "authors",
        "--format",
        "json",
        "/srv/mods",
    ])
    .unwrap();

    let Some(Command::Scan(args)) = cli.command else {
        panic!("expected scan command");
    };
    assert_eq!(args.fields, ["id", "version", "authors"]);
    assert_eq!(args.format, Some(OutputFormat::Json));
    assert_eq!(args.directory, Some(PathBuf::from("/srv/mods")));
    assert_eq!(
        args.to_config_overrides(),
        [
            "scan.mods_directory=/srv/mods",
            "scan.fields=id,version,authors",
            "output.format=json",
        ]
    );
}

#[test]
fn test_parse_global_options_after_command() {
    let cli = Cli::try_parse_from(["modscan", "scan", "-l", "5", "--set", "scan.pattern=*.zip"])
        .unwrap();
    assert_eq!(cli.global.log_level, Some(5));
    assert_eq!(
        cli.global.to_config_overrides(),
        [
            "scan.pattern=*.zip",
            "global.output_log_level=5",
            "global.file_log_level=5",
        ]
    );
}

#[test]
fn test_parse_log_level_out_of_range() {
    assert!(Cli::try_parse_from(["modscan", "-l", "7"]).is_err());
}

#[test]
fn test_parse_unknown_format_rejected() {
    assert!(Cli::try_parse_from(["modscan", "scan", "--format", "yaml"]).is_err());
}
