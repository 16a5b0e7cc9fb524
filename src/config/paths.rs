// envreport: Project Environment Reporter
//
// SPDX-FileCopyrightText: 2026 envreport contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Path configuration.
//!
//! ```text
//! [paths]
//! venv = ".venv"       # relative: resolved against the working directory
//! venv = "/opt/venvs/x" # absolute: used as-is
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Paths configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PathsConfig {
    /// Virtual-environment prefix to inspect instead of auto-detection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venv: Option<PathBuf>,
}

impl PathsConfig {
    /// Resolve the venv override against a base directory.
    ///
    /// Relative overrides are joined onto `base`; absolute overrides are
    /// returned unchanged. `None` when no override is configured.
    #[must_use]
    pub fn resolved_venv(&self, base: &Path) -> Option<PathBuf> {
        self.venv.as_ref().map(|venv| {
            if venv.is_relative() {
                base.join(venv)
            } else {
                venv.clone()
            }
        })
    }
}
