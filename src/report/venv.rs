// envreport: Project Environment Reporter
//
// SPDX-FileCopyrightText: 2026 envreport contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Virtual-environment detection.
//!
//! # Detection Pipeline
//!
//! ```text
//! prefix candidate:  override > $VIRTUAL_ENV > ./.venv
//!        |
//!        v
//! marker inspection:
//!   pyvenv.cfg `home` outside prefix   (python -m venv, virtualenv >= 20)
//!   lib/python*/orig-prefix.txt        (virtualenv < 20, real-prefix era)
//!        |
//!        v
//! VenvStatus { prefix, active, python_version }
//! ```
//!
//! Inspection is read-only and never errors: an unreadable or bare prefix
//! is reported as not isolated.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::env::Env;

/// Marker file written by `python -m venv` at the prefix root.
const PYVENV_CFG: &str = "pyvenv.cfg";

/// Marker file written by pre-20 virtualenv releases under `lib/python*/`.
const LEGACY_PREFIX_FILE: &str = "orig-prefix.txt";

/// Conventional in-project environment directory, used as the last
/// detection fallback.
const DEFAULT_VENV_DIR: &str = ".venv";

/// Environment variable exported by venv activation scripts.
const VIRTUAL_ENV_VAR: &str = "VIRTUAL_ENV";

/// Outcome of virtual-environment detection.
#[derive(Debug, Clone, Default, Serialize)]
pub struct VenvStatus {
    /// Installation prefix of the environment, when a candidate was found.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<PathBuf>,
    /// True when the prefix carries an isolation marker.
    pub active: bool,
    /// Interpreter version recorded in `pyvenv.cfg`, if present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub python_version: Option<String>,
}

/// Detects the active virtual environment.
///
/// The prefix candidate is resolved in precedence order: explicit
/// `override_prefix`, the `VIRTUAL_ENV` variable from `env`, then a
/// `.venv` directory inside `working_dir`. The candidate is then inspected
/// for isolation markers. With no candidate at all, the status is inactive
/// with no prefix.
#[must_use]
pub fn detect(env: &Env, working_dir: &Path, override_prefix: Option<&Path>) -> VenvStatus {
    let candidate = override_prefix.map(Path::to_path_buf).or_else(|| {
        env.get(VIRTUAL_ENV_VAR)
            .map(PathBuf::from)
            .or_else(|| default_venv_dir(working_dir))
    });

    match candidate {
        Some(prefix) => examine(&prefix),
        None => VenvStatus::default(),
    }
}

/// Returns `working_dir/.venv` when that directory exists.
fn default_venv_dir(working_dir: &Path) -> Option<PathBuf> {
    let dir = working_dir.join(DEFAULT_VENV_DIR);
    dir.is_dir().then_some(dir)
}

/// Inspects a prefix directory for isolation markers.
fn examine(prefix: &Path) -> VenvStatus {
    let cfg = fs::read_to_string(prefix.join(PYVENV_CFG))
        .ok()
        .map(|content| PyvenvCfg::parse(&content));

    // `home` points at the base interpreter's directory; a venv always has
    // it outside its own prefix. Guard against degenerate self-references.
    let home_differs = cfg
        .as_ref()
        .and_then(PyvenvCfg::home)
        .is_some_and(|home| Path::new(home) != prefix);

    let active = home_differs || has_legacy_prefix_marker(prefix);
    let python_version = cfg.as_ref().and_then(|c| c.version().map(str::to_owned));

    VenvStatus {
        prefix: Some(prefix.to_path_buf()),
        active,
        python_version,
    }
}

/// Checks for the pre-20 virtualenv marker: `lib/python*/orig-prefix.txt`.
fn has_legacy_prefix_marker(prefix: &Path) -> bool {
    let Ok(entries) = fs::read_dir(prefix.join("lib")) else {
        return false;
    };

    entries
        .flatten()
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.starts_with("python"))
        })
        .any(|entry| entry.path().join(LEGACY_PREFIX_FILE).is_file())
}

/// Parsed contents of a `pyvenv.cfg` file.
///
/// The format is a flat list of `key = value` lines. The first `=` splits
/// key from value; both are trimmed; lines without `=` are ignored.
#[derive(Debug, Clone, Default)]
pub struct PyvenvCfg {
    entries: BTreeMap<String, String>,
}

impl PyvenvCfg {
    /// Parses `pyvenv.cfg` content.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        let entries = content
            .lines()
            .filter_map(|line| {
                let (key, value) = line.split_once('=')?;
                let key = key.trim();
                if key.is_empty() {
                    return None;
                }
                Some((key.to_owned(), value.trim().to_owned()))
            })
            .collect();
        Self { entries }
    }

    /// Looks up a raw entry.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// The base interpreter directory (`home` key).
    #[must_use]
    pub fn home(&self) -> Option<&str> {
        self.get("home")
    }

    /// The interpreter version, from `version` (venv) or `version_info`
    /// (virtualenv >= 20).
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.get("version").or_else(|| self.get("version_info"))
    }
}
