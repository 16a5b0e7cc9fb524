// envreport: Project Environment Reporter
//
// SPDX-FileCopyrightText: 2026 envreport contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Entry point.
//!
//! ```text
//! cli::parse() --> Logging --> Command Dispatch
//!   Report (default) | Options | Configs | Version
//! ```

use std::process::ExitCode;

use envreport_rs::cli::global::GlobalOptions;
use envreport_rs::cli::report::ReportArgs;
use envreport_rs::cli::{self, Command};
use envreport_rs::cmd::config::{run_configs_command, run_options_command};
use envreport_rs::cmd::report::run_report_command;
use envreport_rs::config::Config;
use envreport_rs::config::loader::ConfigLoader;
use envreport_rs::logging::init_logging;
use envreport_rs::logging::{LogConfig, LogLevel};

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

fn main() -> ExitCode {
    let cli = cli::parse();

    let log_config = build_log_config(&cli.global);
    let _log_guard = match init_logging(&log_config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            return ExitCode::FAILURE;
        }
    };

    dispatch_command(&cli)
}

fn build_log_config(global: &GlobalOptions) -> LogConfig {
    let console_level = global
        .log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(LogLevel::INFO);

    let file_level = global
        .file_log_level
        .and_then(LogLevel::from_u8)
        .unwrap_or(console_level);

    LogConfig::builder()
        .with_console_level(console_level)
        .with_file_level(file_level)
        .maybe_with_log_file(global.log_file.as_ref().map(|p| p.display().to_string()))
        .build()
}

fn dispatch_command(cli: &cli::Cli) -> ExitCode {
    let result = match &cli.command {
        Some(Command::Version) => {
            handle_version_command();
            Ok(())
        }
        Some(Command::Options) => {
            load_config(&cli.global).map(|config| run_options_command(&config))
        }
        Some(Command::Configs) => {
            let loader = build_config_loader(&cli.global);
            run_configs_command(&loader.format_loaded_files());
            Ok(())
        }
        Some(Command::Report(args)) => {
            load_config(&cli.global).and_then(|config| {
                // The returned marker is nominal; the dispatcher only cares
                // that the run completed.
                run_report_command(args, &config).map(|_marker| ())
            })
        }
        // Bare invocation prints the report.
        None => load_config(&cli.global).and_then(|config| {
            run_report_command(&ReportArgs::default(), &config).map(|_marker| ())
        }),
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
    if !global.no_default_configs {
        loader = loader.add_toml_file_optional("envreport.toml");
    }
    for config_path in &global.configs {
        loader = loader.add_toml_file(config_path);
    }
    loader
}

fn load_config(global: &GlobalOptions) -> envreport_rs::error::Result<Config> {
    let mut loader = build_config_loader(global);
    for entry in global.to_config_overrides() {
        let Some((key, value)) = entry.split_once('=') else {
            return Err(anyhow::anyhow!("invalid --set option '{entry}', expected KEY=VALUE"));
        };
        loader = loader.set(key, value.to_string())?;
    }
    loader.build().map_err(|e| {
        eprintln!("Failed to load config: {e}");
        e
    })
}
