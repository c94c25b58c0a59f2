// modscan: Fabric mod inventory scanner
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Config --> Logging --> Command Dispatch
//!   Scan | Options | Inis | Version
//! ```

use std::process::ExitCode;

use modscan::cli::global::GlobalOptions;
use modscan::cli::scan::ScanArgs;
use modscan::cli::{self, Command};
use modscan::cmd::config::{run_inis_command, run_options_command};
use modscan::cmd::scan::run_scan_command;
use modscan::config::loader::ConfigLoader;
use modscan::config::{Config, DEFAULT_CONFIG_FILE, ENV_PREFIX};
use modscan::logging::init_logging;

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    if matches!(cli.command, Some(Command::Version)) {
        handle_version_command();
        return ExitCode::SUCCESS;
    }

    let scan_args = match &cli.command {
        Some(Command::Scan(args)) => args.clone(),
        _ => ScanArgs::default(),
    };

    let config = match load_config(&cli.global, &scan_args) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load config: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let _log_guard = match init_logging(&config.log_config()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli, &config)
}

fn dispatch_command(cli: &cli::Cli, config: &Config) -> ExitCode {
    let result = match &cli.command {
        // printed before config loading
        Some(Command::Version) => Ok(()),
        Some(Command::Options) => {
            run_options_command(config);
            Ok(())
        }
        Some(Command::Inis) => {
            run_inis_command(&build_config_loader(&cli.global).format_loaded_files());
            Ok(())
        }
        Some(Command::Scan(_)) | None => run_scan_command(config),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn handle_version_command() {
    println!("{}", env!("CARGO_PKG_VERSION"));
}

fn build_config_loader(global: &GlobalOptions) -> ConfigLoader {
    let mut loader = ConfigLoader::new();
    if !global.no_default_inis {
        loader = loader.add_toml_file_optional(DEFAULT_CONFIG_FILE);
    }
    for ini_path in &global.inis {
        loader = loader.add_toml_file(ini_path);
    }
    loader.with_env_prefix(ENV_PREFIX)
}

fn load_config(global: &GlobalOptions, scan: &ScanArgs) -> modscan::error::Result<Config> {
    let mut overrides = global.to_config_overrides();
    overrides.extend(scan.to_config_overrides());
    build_config_loader(global).apply_overrides(&overrides)?.build()
}
