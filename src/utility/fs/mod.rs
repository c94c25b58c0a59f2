// modscan: Fabric mod inventory scanner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem utilities.
//!
//! ```text
//! expand:  expand_path()    shellexpand (~, $VAR, ${VAR})
//! walk:    find_archives()  ignore::Walk depth 1 + wax glob
//!          WalkOptions      hidden, follow_links
//! ```

pub mod expand;
pub mod walk;

#[cfg(test)]
mod tests;
