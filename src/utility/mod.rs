// modscan: Fabric mod inventory scanner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Utility modules.
//!
//! ```text
//! encoding
//!   decode_utf8()     strict UTF-8, BOM removed
//!   strip_control()   drop chars below U+0020
//! fs
//!   expand_path()     ~ and $VAR expansion
//!   find_archives()   non-recursive glob match, sorted
//! ```

pub mod encoding;
pub mod fs;
