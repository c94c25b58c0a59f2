// modscan: Fabric mod inventory scanner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Text decoding for embedded descriptors.
//!
//! ```text
//! bytes --(decode_utf8)--> &str --(strip_control)--> JSON-safe &str
//! ```
//!
//! Uses `encoding_rs`. Unlike a lossy decode, malformed UTF-8 is rejected.

use encoding_rs::UTF_8;
use std::borrow::Cow;

/// Decodes UTF-8 bytes, removing a leading byte-order mark.
///
/// Returns `None` if the bytes contain malformed sequences.
///
/// # Example
/// ```
/// use modscan::utility::encoding::decode_utf8;
///
/// assert_eq!(decode_utf8(b"\xEF\xBB\xBF{}").as_deref(), Some("{}"));
/// assert_eq!(decode_utf8(b"caf\xe9"), None);
/// ```
#[must_use]
pub fn decode_utf8(bytes: &[u8]) -> Option<Cow<'_, str>> {
    let (text, had_errors) = UTF_8.decode_with_bom_removal(bytes);
    if had_errors { None } else { Some(text) }
}

/// Removes every character below U+0020 (tab, newline, carriage return and
/// the other C0 controls).
///
/// Escaped sequences such as `\n` inside JSON string literals are plain
/// printable characters and are kept as written.
#[must_use]
pub fn strip_control(text: &str) -> Cow<'_, str> {
    if text.chars().any(|c| c < ' ') {
        Cow::Owned(text.chars().filter(|&c| c >= ' ').collect())
    } else {
        Cow::Borrowed(text)
    }
}
