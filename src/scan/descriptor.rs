// modscan: Fabric mod inventory scanner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Reading the embedded descriptor out of a mod archive.
//!
//! ```text
//! File::open --> ZipArchive --> by_name(entry) --> bytes
//!   --> decode_utf8 --> strip_control --> serde_json::Value
//! ```

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde_json::Value;
use tracing::trace;
use zip::ZipArchive;
use zip::result::ZipError;

use crate::error::ArchiveError;
use crate::utility::encoding::{decode_utf8, strip_control};

/// Default in-archive path of the Fabric descriptor.
pub const FABRIC_DESCRIPTOR: &str = "fabric.mod.json";

/// Largest descriptor entry that will be read (16 MiB).
pub const MAX_DESCRIPTOR_SIZE: u64 = 16 * 1024 * 1024;

/// Reads the raw bytes of `entry` from the zip archive at `archive`.
///
/// Entries larger than [`MAX_DESCRIPTOR_SIZE`] are rejected.
///
/// # Errors
///
/// See [`read_entry_with_limit`].
pub fn read_entry(archive: &Path, entry: &str) -> Result<Vec<u8>, ArchiveError> {
    read_entry_with_limit(archive, entry, MAX_DESCRIPTOR_SIZE)
}

/// Reads at most `limit` bytes of `entry` from the zip archive at `archive`.
///
/// The size recorded in the archive header is never trusted for allocation:
/// a declared size over `limit` is rejected up front, and the read itself
/// stops one byte past `limit`. The archive handle is dropped before
/// returning, on success and on error.
///
/// # Errors
///
/// - `ArchiveError::Io` if the file cannot be opened or the entry cannot be read.
/// - `ArchiveError::Corrupt` if the file is not a zip archive.
/// - `ArchiveError::MissingDescriptor` if the archive has no such entry.
/// - `ArchiveError::Oversized` if the entry is larger than `limit`.
pub fn read_entry_with_limit(
    archive: &Path,
    entry: &str,
    limit: u64,
) -> Result<Vec<u8>, ArchiveError> {
    let io_error = |source| ArchiveError::Io {
        path: archive.to_path_buf(),
        source,
    };

    let file = File::open(archive).map_err(io_error)?;
    let mut zip = ZipArchive::new(BufReader::new(file)).map_err(|source| ArchiveError::Corrupt {
        path: archive.to_path_buf(),
        source,
    })?;

    let mut file = match zip.by_name(entry) {
        Ok(file) => file,
        Err(ZipError::FileNotFound) => {
            return Err(ArchiveError::MissingDescriptor {
                path: archive.to_path_buf(),
                entry: entry.to_string(),
            });
        }
        Err(source) => {
            return Err(ArchiveError::Corrupt {
                path: archive.to_path_buf(),
                source,
            });
        }
    };

    let oversized = |size| ArchiveError::Oversized {
        path: archive.to_path_buf(),
        entry: entry.to_string(),
        size,
        limit,
    };

    let declared = file.size();
    if declared > limit {
        return Err(oversized(declared));
    }

    let mut bytes = Vec::with_capacity(usize::try_from(declared).unwrap_or_default());
    (&mut file)
        .take(limit.saturating_add(1))
        .read_to_end(&mut bytes)
        .map_err(io_error)?;

    let read = u64::try_from(bytes.len()).unwrap_or(u64::MAX);
    if read > limit {
        return Err(oversized(read));
    }
    Ok(bytes)
}

/// Parses descriptor bytes into JSON after removing raw control characters.
///
/// # Errors
///
/// - `ArchiveError::InvalidEncoding` if the bytes are not UTF-8.
/// - `ArchiveError::MalformedJson` if the sanitized text is not JSON.
pub fn parse_descriptor(archive: &Path, entry: &str, bytes: &[u8]) -> Result<Value, ArchiveError> {
    let text = decode_utf8(bytes).ok_or_else(|| ArchiveError::InvalidEncoding {
        path: archive.to_path_buf(),
        entry: entry.to_string(),
    })?;
    let clean = strip_control(&text);
    trace!(archive = %archive.display(), descriptor = %clean, "descriptor text");

    serde_json::from_str(&clean).map_err(|source| ArchiveError::MalformedJson {
        path: archive.to_path_buf(),
        source,
    })
}

/// Reads and parses the descriptor `entry` of `archive`.
///
/// # Errors
///
/// Any [`ArchiveError`] from [`read_entry`] or [`parse_descriptor`].
pub fn load_descriptor(archive: &Path, entry: &str) -> Result<Value, ArchiveError> {
    let bytes = read_entry(archive, entry)?;
    parse_descriptor(archive, entry, &bytes)
}
