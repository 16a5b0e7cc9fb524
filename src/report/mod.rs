// envreport: Project Environment Reporter
//
// SPDX-FileCopyrightText: 2026 envreport contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Environment report: fact gathering and rendering.
//!
//! # Architecture
//!
//! ```text
//! EnvironmentReport::gather(env, cwd, exe, venv_override)
//!     |
//!     +-- RuntimeInfo::current()        compile-time identity
//!     +-- working_dir                   caller-provided snapshot
//!     +-- venv::detect()                prefix + isolation flag
//!     +-- project::resolve_project_root()
//!     |
//!     v
//! render() --> fixed line sequence
//! ```
//!
//! Gathering is purely observational. Every fact is read once; nothing is
//! mutated and nothing outlives the invocation.

pub mod project;
pub mod venv;

#[cfg(test)]
mod tests;

use serde::Serialize;
use std::path::{Path, PathBuf};

use crate::env::Env;
use crate::error::Result;
use venv::VenvStatus;

/// Nominal result of a completed report run. Callers discard it.
pub const SETUP_SUCCESS: &str = "Setup successful";

/// Startup banner printed before the facts.
pub const BANNER: &str = "🔎 Environment Setup Check";

/// Closing confirmation printed after the facts.
pub const ALL_GOOD: &str = "✅ Environment working correctly!";

/// Isolation line for an active virtual environment.
pub const VENV_ACTIVE: &str = "✅ Running in virtual environment";

/// Isolation line when no virtual environment is active.
pub const VENV_INACTIVE: &str = "⚠️  Not running in virtual environment";

/// Identity of the running tool, baked in at compile time.
#[derive(Debug, Clone, Serialize)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: &'static str,
}

impl RuntimeInfo {
    /// The identity of this build.
    #[must_use]
    pub const fn current() -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
        }
    }
}

impl std::fmt::Display for RuntimeInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.name, self.version)
    }
}

/// The fixed set of environment facts, gathered in one pass.
#[derive(Debug, Clone, Serialize)]
pub struct EnvironmentReport {
    /// Runtime identity.
    pub runtime: RuntimeInfo,
    /// Working directory at invocation time.
    pub working_dir: PathBuf,
    /// Virtual-environment prefix and isolation status.
    pub venv: VenvStatus,
    /// Parent directory of the resolved executable.
    pub project_root: PathBuf,
}

impl EnvironmentReport {
    /// Gathers all facts for one report.
    ///
    /// `env` and `working_dir` are snapshots taken by the caller; `exe_path`
    /// is the (possibly unresolved) executable path. `venv_override`, when
    /// given, short-circuits prefix auto-detection.
    ///
    /// # Errors
    ///
    /// Returns an error if the executable path cannot be resolved. All
    /// other facts are infallible to gather.
    pub fn gather(
        env: &Env,
        working_dir: PathBuf,
        exe_path: &Path,
        venv_override: Option<&Path>,
    ) -> Result<Self> {
        let venv = venv::detect(env, &working_dir, venv_override);
        let project_root = project::resolve_project_root(exe_path)?;

        Ok(Self {
            runtime: RuntimeInfo::current(),
            working_dir,
            venv,
            project_root,
        })
    }

    /// Renders the report as its fixed line sequence.
    ///
    /// Exactly one of the two isolation lines appears, between the prefix
    /// line and the project-root line.
    #[must_use]
    pub fn render(&self) -> Vec<String> {
        let prefix = self
            .venv
            .prefix
            .as_ref()
            .map_or_else(|| "(none)".to_string(), |p| p.display().to_string());

        vec![
            BANNER.to_string(),
            format!("Runtime version: {}", self.runtime),
            format!("Current working directory: {}", self.working_dir.display()),
            format!("Virtual environment: {prefix}"),
            if self.venv.active {
                VENV_ACTIVE.to_string()
            } else {
                VENV_INACTIVE.to_string()
            },
            format!("Project root: {}", self.project_root.display()),
            ALL_GOOD.to_string(),
        ]
    }
}
