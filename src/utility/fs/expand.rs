// modscan: Fabric mod inventory scanner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Expands `~` and environment variables in a configured path.
///
/// Paths that are not valid UTF-8 cannot contain shell shorthand and are
/// returned unchanged.
///
/// # Errors
///
/// Returns `ConfigError::InvalidValue` if the path references an undefined
/// environment variable.
pub fn expand_path(path: &Path) -> Result<PathBuf, ConfigError> {
    let Some(raw) = path.to_str() else {
        return Ok(path.to_path_buf());
    };

    shellexpand::full(raw)
        .map(|expanded| PathBuf::from(expanded.as_ref()))
        .map_err(|e| ConfigError::InvalidValue {
            section: "scan".to_string(),
            key: "mods_directory".to_string(),
            message: format!("cannot expand '{raw}': {e}"),
        })
}
