// modscan: Fabric mod inventory scanner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                main.rs
//!                   |
//!        +----------+----------+
//!        v                     v
//!     cli (clap)          cmd (handlers)
//!        |              scan / options / inis
//!        +----------+----------+
//!                   v
//!      ,---------------------------,
//!      |          config           |
//!      |   TOML, env, --set        |
//!      '-------------+-------------'
//!                    v
//!                  scan ------> output
//!          archives, descriptor   text / json lines
//!                record
//!
//!   +-----------------------------------------+
//!   |  foundation   error, logging, utility   |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod scan;
pub mod utility;
