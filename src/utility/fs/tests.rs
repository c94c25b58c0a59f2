// modscan: Fabric mod inventory scanner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::expand::expand_path;
use super::walk::{WalkOptions, find_archives};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn temp_dir() -> TempDir {
    tempfile::tempdir().expect("failed to create temp dir")
}

fn file_names(paths: &[PathBuf]) -> Vec<String> {
    paths
        .iter()
        .filter_map(|p| p.file_name().and_then(|n| n.to_str()).map(String::from))
        .collect()
}

#[test]
fn test_find_archives_matches_suffix_only() {
    let temp = temp_dir();
    std::fs::write(temp.path().join("b.jar"), "").unwrap();
    std::fs::write(temp.path().join("a.jar"), "").unwrap();
    std::fs::write(temp.path().join("notes.txt"), "").unwrap();
    std::fs::write(temp.path().join("c.jar.disabled"), "").unwrap();

    let found = find_archives(temp.path(), "*.jar", &WalkOptions::default()).unwrap();

    assert_eq!(file_names(&found), ["a.jar", "b.jar"]);
}

#[test]
fn test_find_archives_is_not_recursive() {
    let temp = temp_dir();
    std::fs::create_dir(temp.path().join("nested")).unwrap();
    std::fs::write(temp.path().join("nested/inner.jar"), "").unwrap();
    std::fs::create_dir(temp.path().join("folder.jar")).unwrap();
    std::fs::write(temp.path().join("top.jar"), "").unwrap();

    let found = find_archives(temp.path(), "*.jar", &WalkOptions::default()).unwrap();

    assert_eq!(file_names(&found), ["top.jar"]);
}

#[test]
fn test_find_archives_hidden_files() {
    let temp = temp_dir();
    std::fs::write(temp.path().join(".hidden.jar"), "").unwrap();
    std::fs::write(temp.path().join("shown.jar"), "").unwrap();

    let all = find_archives(temp.path(), "*.jar", &WalkOptions::default()).unwrap();
    assert_eq!(file_names(&all), [".hidden.jar", "shown.jar"]);

    let skip_hidden = WalkOptions::builder().with_include_hidden(false).build();
    let shown = find_archives(temp.path(), "*.jar", &skip_hidden).unwrap();
    assert_eq!(file_names(&shown), ["shown.jar"]);
}

#[cfg(unix)]
#[test]
fn test_find_archives_non_utf8_name() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let temp = temp_dir();
    let name = OsStr::from_bytes(b"caf\xe9.jar");
    std::fs::write(temp.path().join(name), "").unwrap();
    std::fs::write(temp.path().join("plain.jar"), "").unwrap();

    let found = find_archives(temp.path(), "*.jar", &WalkOptions::default()).unwrap();

    assert_eq!(found.len(), 2);
    assert!(found.iter().any(|p| p.file_name() == Some(name)));
}

#[cfg(unix)]
#[test]
fn test_find_archives_follow_links() {
    let temp = temp_dir();
    let store = temp.path().join("store");
    let mods = temp.path().join("mods");
    std::fs::create_dir(&store).unwrap();
    std::fs::create_dir(&mods).unwrap();
    std::fs::write(store.join("linked.jar"), "").unwrap();
    std::fs::write(mods.join("local.jar"), "").unwrap();
    std::os::unix::fs::symlink(store.join("linked.jar"), mods.join("linked.jar")).unwrap();

    let followed = find_archives(&mods, "*.jar", &WalkOptions::default()).unwrap();
    assert_eq!(file_names(&followed), ["linked.jar", "local.jar"]);

    let no_follow = WalkOptions::builder().with_follow_links(false).build();
    let local = find_archives(&mods, "*.jar", &no_follow).unwrap();
    assert_eq!(file_names(&local), ["local.jar"]);
}

#[test]
fn test_find_archives_missing_root_is_empty() {
    let temp = temp_dir();
    let missing = temp.path().join("does-not-exist");

    let found = find_archives(&missing, "*.jar", &WalkOptions::default()).unwrap();

    assert!(found.is_empty());
}

#[test]
fn test_find_archives_invalid_pattern() {
    let temp = temp_dir();
    let err = find_archives(temp.path(), "[", &WalkOptions::default()).unwrap_err();
    assert!(err.to_string().contains("invalid glob pattern '['"));
}

#[test]
fn test_expand_path_plain() {
    assert_eq!(
        expand_path(Path::new("/srv/mods")).unwrap(),
        PathBuf::from("/srv/mods")
    );
}

#[test]
fn test_expand_path_home() {
    let expanded = expand_path(Path::new("~/mods")).unwrap();
    assert!(!expanded.starts_with("~"), "tilde was not expanded: {expanded:?}");
    assert!(expanded.ends_with("mods"));
}

#[test]
fn test_expand_path_undefined_variable() {
    let err = expand_path(Path::new("$MODSCAN_SURELY_UNDEFINED_VAR/mods")).unwrap_err();
    assert!(err.to_string().contains("cannot expand"));
}
