// modscan: Fabric mod inventory scanner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Integration tests for scanning a mods directory end to end.
//!
//! Builds real `.jar` fixtures with `zip::ZipWriter` in a temp directory and
//! runs them through config, scanner and output.

use std::io::Write;
use std::path::{Path, PathBuf};

use modscan::cmd::scan::run_scan_to;
use modscan::config::Config;
use modscan::config::loader::ConfigLoader;
use modscan::scan::{ModRecord, Scanner, scan};
use tempfile::TempDir;

const FIELDS: [&str; 4] = ["id", "name", "version", "description"];

fn write_jar(dir: &Path, name: &str, entries: &[(&str, &[u8])]) -> PathBuf {
    let path = dir.join(name);
    let file = std::fs::File::create(&path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    let options = zip::write::SimpleFileOptions::default()
        .compression_method(zip::CompressionMethod::Deflated);
    for (entry, content) in entries {
        writer.start_file(*entry, options).unwrap();
        writer.write_all(content).unwrap();
    }
    writer.finish().unwrap();
    path
}

/// A mods folder resembling a real launcher instance.
fn mods_folder() -> TempDir {
    let temp = tempfile::tempdir().unwrap();
    write_jar(
        temp.path(),
        "fabric-api-0.92.jar",
        &[(
            "fabric.mod.json",
            b"{\n\t\"schemaVersion\": 1,\n\t\"id\": \"fabric-api\",\n\t\"name\": \"Fabric API\",\n\t\"version\": \"0.92.0\",\n\t\"description\": \"Core API module\r\nproviding hooks\"\n}",
        )],
    );
    write_jar(
        temp.path(),
        "fabricloader.jar",
        &[("fabric.mod.json", br#"{"id":"fabricloader","version":"0.15.0"}"#)],
    );
    write_jar(
        temp.path(),
        "forge-only.jar",
        &[("META-INF/mods.toml", b"modLoader=\"javafml\"")],
    );
    write_jar(
        temp.path(),
        "half-written.jar",
        &[("fabric.mod.json", br#"{"id": "x", bad json"#)],
    );
    std::fs::write(temp.path().join("truncated.jar"), b"PK\x03\x04 not really").unwrap();
    write_jar(temp.path(), "nameless.jar", &[("fabric.mod.json", br#"{"version":"1"}"#)]);
    temp
}

fn config_for(dir: &Path, format: &str) -> Config {
    ConfigLoader::new()
        .apply_overrides(&[
            format!("scan.mods_directory={}", dir.display()),
            format!("output.format={format}"),
        ])
        .unwrap()
        .build()
        .unwrap()
}

#[test]
fn scan_text_output() {
    let temp = mods_folder();
    let mut out = Vec::new();

    let report = run_scan_to(&config_for(temp.path(), "text"), &mut out).unwrap();

    assert_eq!(report.examined(), 6);
    assert_eq!(report.records().len(), 3);
    assert_eq!(report.skipped().len(), 3);
    insta::assert_snapshot!(String::from_utf8(out).unwrap(), @r#"
    {name: "fabric-api", display_name: "Fabric API", version: "0.92.0", description: "Core API moduleproviding hooks"}
    {name: "fabricloader", display_name: "N/A", version: "0.15.0", description: "N/A"}
    {name: "unknown_modid", display_name: "N/A", version: "1", description: "N/A"}
    "#);
}

#[test]
fn scan_json_lines_output() {
    let temp = mods_folder();
    let mut out = Vec::new();

    run_scan_to(&config_for(temp.path(), "json"), &mut out).unwrap();

    let records: Vec<serde_json::Value> = String::from_utf8(out)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    let names: Vec<_> = records.iter().map(|r| r["name"].clone()).collect();
    assert_eq!(names, ["fabric-api", "fabricloader", "unknown_modid"]);
}

#[test]
fn scan_skip_reasons() {
    let temp = mods_folder();
    let report = Scanner::default().scan(temp.path()).unwrap();

    let skipped: Vec<(String, bool)> = report
        .skipped()
        .iter()
        .map(|s| {
            (
                s.path().file_name().unwrap().to_string_lossy().into_owned(),
                s.reason().is_parse_failure(),
            )
        })
        .collect();
    assert_eq!(
        skipped,
        [
            ("forge-only.jar".to_string(), false),
            ("half-written.jar".to_string(), true),
            ("truncated.jar".to_string(), false),
        ]
    );
}

#[test]
fn scan_example_record() {
    let temp = tempfile::tempdir().unwrap();
    write_jar(
        temp.path(),
        "a.jar",
        &[("fabric.mod.json", br#"{"id":"fabricloader","version":"0.15.0"}"#)],
    );

    let records = scan(temp.path(), &FIELDS).unwrap();

    assert_eq!(
        serde_json::to_value(&records).unwrap(),
        serde_json::json!([{
            "name": "fabricloader",
            "display_name": "N/A",
            "version": "0.15.0",
            "description": "N/A",
        }])
    );
}

#[test]
fn scan_twice_is_identical() {
    let temp = mods_folder();
    let first: Vec<ModRecord> = scan(temp.path(), &FIELDS).unwrap();
    let second: Vec<ModRecord> = scan(temp.path(), &FIELDS).unwrap();
    assert_eq!(first, second);
}

#[test]
fn scan_empty_and_missing_directories() {
    let temp = tempfile::tempdir().unwrap();
    assert!(scan(temp.path(), &FIELDS).unwrap().is_empty());
    assert!(scan(temp.path().join("nope"), &FIELDS).unwrap().is_empty());

    let mut out = Vec::new();
    let report = run_scan_to(&config_for(&temp.path().join("nope"), "text"), &mut out).unwrap();
    assert_eq!(report.examined(), 0);
    assert!(out.is_empty());
}
