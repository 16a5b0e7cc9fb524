// envreport: Project Environment Reporter
//
// SPDX-FileCopyrightText: 2026 envreport contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Report command arguments.

use clap::Args;
use std::path::PathBuf;

/// Arguments for the report command.
#[derive(Debug, Clone, Default, Args)]
pub struct ReportArgs {
    /// Render the report as pretty-printed JSON instead of text.
    #[arg(long)]
    pub json: bool,

    /// Virtual-environment prefix to inspect instead of auto-detection.
    /// Takes precedence over `paths.venv` and `VIRTUAL_ENV`.
    #[arg(long = "venv", value_name = "DIR")]
    pub venv: Option<PathBuf>,
}
