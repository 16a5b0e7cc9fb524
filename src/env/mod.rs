// envreport: Project Environment Reporter
//
// SPDX-FileCopyrightText: 2026 envreport contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Process environment snapshot.
//!
//! # Architecture
//!
//! ```text
//! Env (BTreeMap<EnvKey, String>)
//! Sources: current_env(), Env::from_map(), Env::new()
//! Ops: set/get/remove, read-only after capture in practice
//! ```
//!
//! - **Case-insensitive on Windows** (`PATH` == `Path` == `path`)
//! - **Deterministic order**: `BTreeMap` keyed by lowercased comparison
//! - **UTF-8 internal**: non-UTF-8 variables are dropped at capture

use std::collections::BTreeMap;


/// Captures the current process environment.
#[must_use]
pub fn current_env() -> Env {
    let vars = std::env::vars().collect();
    Env::from_map(vars)
}

/// A case-insensitive environment variable key (Windows-compatible).
#[derive(Debug, Clone, Eq)]
struct EnvKey(String);

impl EnvKey {
    fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for EnvKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl PartialOrd for EnvKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for EnvKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0
            .to_ascii_lowercase()
            .cmp(&other.0.to_ascii_lowercase())
    }
}

/// A set of environment variables captured at one point in time.
///
/// The reporter treats the environment as a read-only snapshot; `set` and
/// `remove` exist for building fixtures.
#[derive(Debug, Clone, Default)]
pub struct Env {
    vars: BTreeMap<EnvKey, String>,
}

impl Env {
    /// Creates an empty environment.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            vars: BTreeMap::new(),
        }
    }

    /// Creates an environment from a map of variables.
    #[must_use]
    pub fn from_map(vars: BTreeMap<String, String>) -> Self {
        Self {
            vars: vars
                .into_iter()
                .map(|(k, v)| (EnvKey::new(k), v))
                .collect(),
        }
    }

    /// Sets an environment variable, replacing any existing value.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.vars.insert(EnvKey::new(key.into()), value.into());
        self
    }

    /// Gets an environment variable value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .get(&EnvKey::new(key))
            .map(std::string::String::as_str)
    }

    /// Removes an environment variable.
    pub fn remove(&mut self, key: &str) -> &mut Self {
        self.vars.remove(&EnvKey::new(key));
        self
    }

    /// Returns an iterator over environment variables.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns all environment variables as a map.
    #[must_use]
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.vars
            .iter()
            .map(|(k, v)| (k.as_str().to_owned(), v.clone()))
            .collect()
    }

    /// Returns true if no variables are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }
}
