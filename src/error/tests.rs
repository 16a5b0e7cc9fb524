// envreport: Project Environment Reporter
//
// SPDX-FileCopyrightText: 2026 envreport contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, FsError, ReportError, ReportResult, bail_out};

#[test]
fn test_config_error_display() {
    let err = ConfigError::MissingKey {
        section: "paths".to_string(),
        key: "venv".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"missing required config key 'venv' in section '[paths]'"
    );
}

#[test]
fn test_fs_error_display() {
    let err = FsError::NotFound("/missing/bin/envreport".to_string());
    insta::assert_snapshot!(err.to_string(), @"path not found: /missing/bin/envreport");
}

#[test]
fn test_bail_out_display() {
    let err = bail_out("executable path has no parent directory");
    insta::assert_snapshot!(
        err.to_string(),
        @"fatal error: executable path has no parent directory"
    );
}

#[test]
fn test_boxed_conversions() {
    let config_err: ReportError = ConfigError::NotFound("envreport.toml".to_string()).into();
    assert!(matches!(config_err, ReportError::Config(_)));

    let fs_err: ReportError = FsError::PermissionDenied("/root".to_string()).into();
    assert!(matches!(fs_err, ReportError::Fs(_)));

    let io_err: ReportError =
        std::io::Error::new(std::io::ErrorKind::NotFound, "missing").into();
    assert!(matches!(io_err, ReportError::Io(_)));
}

#[test]
fn test_report_error_size() {
    // ReportError should be reasonably small
    // Box<str> variants (Bailed, Other) are 16 bytes (fat pointer: ptr + len)
    // With discriminant + alignment = 24 bytes
    let size = std::mem::size_of::<ReportError>();
    assert!(size <= 24, "ReportError is {size} bytes, expected <= 24");
}

#[test]
fn test_report_result_size() {
    let size = std::mem::size_of::<ReportResult<()>>();
    assert!(size <= 24, "ReportResult<()> is {size} bytes, expected <= 24");
}
