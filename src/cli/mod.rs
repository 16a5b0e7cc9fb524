// envreport: Project Environment Reporter
//
// SPDX-FileCopyrightText: 2026 envreport contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for envreport using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! envreport [global options] [<command>]
//! report [--json] [--venv DIR]   (default when no command is given)
//! options
//! configs
//! version
//! ```

pub mod global;
pub mod report;


use crate::cli::global::GlobalOptions;
use crate::cli::report::ReportArgs;
use clap::{Parser, Subcommand};

/// Project Environment Reporter
///
/// Prints runtime, directory and virtual-environment facts for a project.
#[derive(Debug, Parser)]
#[command(
    name = "envreport",
    author,
    version,
    about = "Project Environment Reporter",
    long_about = "envreport Copyright (C) 2026 envreport contributors\n\
                  This program comes with ABSOLUTELY NO WARRANTY\n\
                  This is free software, and you are welcome to redistribute it\n\
                  under certain conditions; see LICENSE for details.\n\n\
                  Verifies that a project's execution environment is set up:\n\
                  runtime version, working directory, virtual-environment\n\
                  status and project root. Invoking `envreport` with no\n\
                  command prints the report. See `envreport <command> --help`\n\
                  for more information about a command.",
    after_help = "CONFIG FILES:\n\n\
                  By default, envreport will look for `envreport.toml` in the\n\
                  current directory and load it when present. Additional files\n\
                  can be specified with --config, those will be loaded after\n\
                  the default one and override it. Use --no-default-configs to\n\
                  disable auto detection and only use --config."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the version.
    #[command(visible_alias = "-v")]
    Version,

    /// Lists all options and their values from the config files.
    Options,

    /// Lists the config files used by envreport.
    Configs,

    /// Prints the environment report (the default command).
    Report(ReportArgs),
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}

/// Parses command-line arguments from an iterator.
pub fn parse_from<I, T>(iter: I) -> Cli
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::parse_from(iter)
}

/// Tries to parse command-line arguments, returning an error on failure.
///
/// # Errors
///
/// Returns a `clap::Error` if the arguments are invalid or if help/version information
/// was requested.
pub fn try_parse() -> Result<Cli, clap::Error> {
    Cli::try_parse()
}
