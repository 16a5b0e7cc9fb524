// envreport: Project Environment Reporter
//
// SPDX-FileCopyrightText: 2026 envreport contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Report command implementation for envreport.

use anyhow::Context;
use tracing::debug;

use crate::cli::report::ReportArgs;
use crate::config::Config;
use crate::env::current_env;
use crate::error::Result;
use crate::report::{EnvironmentReport, SETUP_SUCCESS};

/// Main handler for the report command.
///
/// Gathers the environment facts, renders them to stdout and returns the
/// nominal success marker. The marker is not consumed by the dispatcher;
/// it exists as the operation's nominal result.
///
/// # Errors
///
/// Returns an error if the working directory or the executable path cannot
/// be resolved. Per policy these propagate to the caller unhandled.
pub fn run_report_command(args: &ReportArgs, config: &Config) -> Result<&'static str> {
    let env = current_env();
    let working_dir =
        std::env::current_dir().context("failed to read the current working directory")?;
    let exe_path = std::env::current_exe().context("failed to resolve the executable path")?;

    let venv_override = args
        .venv
        .clone()
        .or_else(|| config.paths.resolved_venv(&working_dir));

    let report = EnvironmentReport::gather(&env, working_dir, &exe_path, venv_override.as_deref())?;
    debug!(venv_active = report.venv.active, "report gathered");

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for line in report.render() {
            println!("{line}");
        }
    }

    Ok(SETUP_SUCCESS)
}
