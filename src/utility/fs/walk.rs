// modscan: Fabric mod inventory scanner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use bon::Builder;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use wax::{Glob, Program};

use crate::error::ConfigError;

/// Options for archive enumeration.
#[derive(Debug, Clone, Builder)]
pub struct WalkOptions {
    /// Match dot-files too
    #[builder(setters(name = with_include_hidden), default = true)]
    include_hidden: bool,
    /// Follow symbolic links to archives
    #[builder(setters(name = with_follow_links), default = true)]
    follow_links: bool,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl WalkOptions {
    #[must_use]
    pub const fn include_hidden(&self) -> bool {
        self.include_hidden
    }

    #[must_use]
    pub const fn follow_links(&self) -> bool {
        self.follow_links
    }
}

/// Builds a single-level, name-sorted `WalkBuilder` with ignore files disabled.
fn build_walker(root: &Path, options: &WalkOptions) -> WalkBuilder {
    let mut builder = WalkBuilder::new(root);

    builder
        .max_depth(Some(1))
        .follow_links(options.follow_links())
        .hidden(!options.include_hidden())
        .parents(false)
        .ignore(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .sort_by_file_name(|a, b| a.cmp(b));

    builder
}

/// Compiles an archive file-name pattern such as `*.jar`.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if the pattern is not a valid glob.
pub fn compile_pattern(pattern: &str) -> Result<Glob<'_>, ConfigError> {
    Glob::new(pattern).map_err(|e| ConfigError::InvalidValue {
        section: "scan".to_string(),
        key: "pattern".to_string(),
        message: format!("invalid glob pattern '{pattern}': {e}"),
    })
}

/// Finds the regular files directly inside `root` whose name matches `pattern`.
///
/// Subdirectories are not descended into. Results are sorted by file name.
/// A missing root yields an empty list rather than an error, the same way a
/// shell glob over a missing directory matches nothing.
///
/// # Errors
///
/// Returns an error if the glob pattern is invalid.
///
/// # Example
/// ```no_run
/// use modscan::utility::fs::walk::{find_archives, WalkOptions};
///
/// let jars = find_archives("/home/me/.minecraft/mods", "*.jar", &WalkOptions::default())?;
/// for jar in jars {
///     println!("{}", jar.display());
/// }
/// # Ok::<(), modscan::error::ConfigError>(())
/// ```
pub fn find_archives<P: AsRef<Path>>(
    root: P,
    pattern: &str,
    options: &WalkOptions,
) -> Result<Vec<PathBuf>, ConfigError> {
    let root = root.as_ref();
    let glob = compile_pattern(pattern)?;

    if !root.is_dir() {
        debug!(path = %root.display(), "mods directory does not exist, nothing to scan");
        return Ok(Vec::new());
    }

    let mut archives = Vec::new();
    for entry_result in build_walker(root, options).build() {
        match entry_result {
            Ok(entry) => {
                if entry.depth() == 0 || !entry.file_type().is_some_and(|ft| ft.is_file()) {
                    continue;
                }
                // non-UTF-8 names are matched lossily rather than dropped
                if glob.is_match(Path::new(entry.file_name())) {
                    archives.push(entry.into_path());
                }
            }
            Err(e) => warn!(error = %e, "walk error"),
        }
    }

    Ok(archives)
}
