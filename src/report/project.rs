// envreport: Project Environment Reporter
//
// SPDX-FileCopyrightText: 2026 envreport contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Project-root resolution.
//!
//! The project root is the parent directory of the resolved executable:
//! symlinks are followed first, so the answer is independent of the
//! caller's working directory.

use std::path::{Path, PathBuf};

use crate::error::{FsError, Result, bail_out};

/// Resolves the project root from the executable path.
///
/// # Errors
///
/// Returns an error if the path cannot be canonicalized or has no parent
/// directory.
pub fn resolve_project_root(exe_path: &Path) -> Result<PathBuf> {
    let resolved = exe_path.canonicalize().map_err(|source| FsError::IoError {
        path: exe_path.display().to_string(),
        source,
    })?;

    resolved
        .parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| bail_out("executable path has no parent directory").into())
}
