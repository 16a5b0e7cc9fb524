// envreport: Project Environment Reporter
//
// SPDX-FileCopyrightText: 2026 envreport contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tests for fact gathering, detection and rendering.

use super::venv::{PyvenvCfg, VenvStatus, detect};
use super::{
    ALL_GOOD, BANNER, EnvironmentReport, RuntimeInfo, SETUP_SUCCESS, VENV_ACTIVE, VENV_INACTIVE,
    project::resolve_project_root,
};
use crate::env::Env;
use std::fs;
use std::path::{Path, PathBuf};

fn make_modern_venv(root: &Path) -> PathBuf {
    let prefix = root.join("venv");
    fs::create_dir_all(&prefix).unwrap();
    fs::write(
        prefix.join("pyvenv.cfg"),
        "home = /usr/bin\ninclude-system-site-packages = false\nversion = 3.11.4\n",
    )
    .unwrap();
    prefix
}

fn make_legacy_venv(root: &Path) -> PathBuf {
    let prefix = root.join("legacy-venv");
    let lib = prefix.join("lib").join("python3.6");
    fs::create_dir_all(&lib).unwrap();
    fs::write(lib.join("orig-prefix.txt"), "/usr\n").unwrap();
    prefix
}

// --- pyvenv.cfg parsing ---

#[test]
fn test_pyvenv_cfg_parse() {
    let cfg = PyvenvCfg::parse(
        "home = /usr/bin\ninclude-system-site-packages = false\nversion = 3.11.4\n",
    );
    assert_eq!(cfg.home(), Some("/usr/bin"));
    assert_eq!(cfg.get("include-system-site-packages"), Some("false"));
    assert_eq!(cfg.version(), Some("3.11.4"));
}

#[test]
fn test_pyvenv_cfg_parse_splits_on_first_equals() {
    let cfg = PyvenvCfg::parse("command = /usr/bin/python -m venv --prompt=proj /x\n");
    assert_eq!(cfg.get("command"), Some("/usr/bin/python -m venv --prompt=proj /x"));
}

#[test]
fn test_pyvenv_cfg_parse_ignores_malformed_lines() {
    let cfg = PyvenvCfg::parse("no separator here\n\n = orphan value\nhome=/usr\n");
    assert_eq!(cfg.home(), Some("/usr"));
    assert_eq!(cfg.get("no separator here"), None);
    assert_eq!(cfg.get(""), None);
}

#[test]
fn test_pyvenv_cfg_version_info_fallback() {
    let cfg = PyvenvCfg::parse("home = /usr/bin\nversion_info = 3.12.1.final.0\n");
    assert_eq!(cfg.version(), Some("3.12.1.final.0"));
}

// --- detection ---

#[test]
fn test_detect_modern_venv_is_active() {
    let dir = tempfile::tempdir().unwrap();
    let prefix = make_modern_venv(dir.path());

    let status = detect(&Env::new(), dir.path(), Some(&prefix));
    assert_eq!(status.prefix, Some(prefix));
    assert!(status.active);
    assert_eq!(status.python_version.as_deref(), Some("3.11.4"));
}

#[test]
fn test_detect_legacy_venv_is_active() {
    let dir = tempfile::tempdir().unwrap();
    let prefix = make_legacy_venv(dir.path());

    let status = detect(&Env::new(), dir.path(), Some(&prefix));
    assert!(status.active);
    assert!(status.python_version.is_none());
}

#[test]
fn test_detect_bare_directory_is_inactive() {
    let dir = tempfile::tempdir().unwrap();
    let prefix = dir.path().join("not-a-venv");
    fs::create_dir_all(&prefix).unwrap();

    let status = detect(&Env::new(), dir.path(), Some(&prefix));
    assert_eq!(status.prefix, Some(prefix));
    assert!(!status.active);
}

#[test]
fn test_detect_missing_prefix_is_inactive() {
    let dir = tempfile::tempdir().unwrap();
    let prefix = dir.path().join("gone");

    let status = detect(&Env::new(), dir.path(), Some(&prefix));
    assert_eq!(status.prefix, Some(prefix));
    assert!(!status.active);
}

#[test]
fn test_detect_self_referencing_home_is_inactive() {
    let dir = tempfile::tempdir().unwrap();
    let prefix = dir.path().join("weird");
    fs::create_dir_all(&prefix).unwrap();
    fs::write(
        prefix.join("pyvenv.cfg"),
        format!("home = {}\n", prefix.display()),
    )
    .unwrap();

    let status = detect(&Env::new(), dir.path(), Some(&prefix));
    assert!(!status.active);
}

#[test]
fn test_detect_reads_virtual_env_variable() {
    let dir = tempfile::tempdir().unwrap();
    let prefix = make_modern_venv(dir.path());

    let mut env = Env::new();
    env.set("VIRTUAL_ENV", prefix.display().to_string());

    let status = detect(&env, dir.path(), None);
    assert_eq!(status.prefix, Some(prefix));
    assert!(status.active);
}

#[test]
fn test_detect_override_beats_virtual_env() {
    let dir = tempfile::tempdir().unwrap();
    let override_prefix = make_modern_venv(dir.path());

    let mut env = Env::new();
    env.set("VIRTUAL_ENV", "/somewhere/else");

    let status = detect(&env, dir.path(), Some(&override_prefix));
    assert_eq!(status.prefix, Some(override_prefix));
}

#[test]
fn test_detect_falls_back_to_dot_venv() {
    let dir = tempfile::tempdir().unwrap();
    let prefix = dir.path().join(".venv");
    fs::create_dir_all(&prefix).unwrap();
    fs::write(prefix.join("pyvenv.cfg"), "home = /usr/bin\n").unwrap();

    let status = detect(&Env::new(), dir.path(), None);
    assert_eq!(status.prefix, Some(prefix));
    assert!(status.active);
}

#[test]
fn test_detect_no_candidate() {
    let dir = tempfile::tempdir().unwrap();

    let status = detect(&Env::new(), dir.path(), None);
    assert!(status.prefix.is_none());
    assert!(!status.active);
    assert!(status.python_version.is_none());
}

// --- project root ---

#[test]
fn test_resolve_project_root_is_exe_parent() {
    let dir = tempfile::tempdir().unwrap();
    let bin_dir = dir.path().join("bin");
    fs::create_dir_all(&bin_dir).unwrap();
    let exe = bin_dir.join("envreport");
    fs::write(&exe, b"").unwrap();

    let root = resolve_project_root(&exe).unwrap();
    assert_eq!(root, bin_dir.canonicalize().unwrap());
}

#[test]
fn test_resolve_project_root_missing_exe_errors() {
    assert!(resolve_project_root(Path::new("/no/such/binary")).is_err());
}

// --- rendering ---

#[test]
fn test_render_line_order() {
    let report = EnvironmentReport {
        runtime: RuntimeInfo {
            name: "envreport-rs",
            version: "0.1.0",
        },
        working_dir: PathBuf::from("/home/user/project"),
        venv: VenvStatus {
            prefix: Some(PathBuf::from("/home/user/project/.venv")),
            active: true,
            python_version: Some("3.11.4".to_string()),
        },
        project_root: PathBuf::from("/home/user/project"),
    };

    insta::assert_snapshot!(report.render().join("\n"), @r"
🔎 Environment Setup Check
Runtime version: envreport-rs 0.1.0
Current working directory: /home/user/project
Virtual environment: /home/user/project/.venv
✅ Running in virtual environment
Project root: /home/user/project
✅ Environment working correctly!
");
}

#[test]
fn test_render_without_venv() {
    let report = EnvironmentReport {
        runtime: RuntimeInfo::current(),
        working_dir: PathBuf::from("/tmp"),
        venv: VenvStatus::default(),
        project_root: PathBuf::from("/usr/bin"),
    };

    let lines = report.render();
    assert_eq!(lines[3], "Virtual environment: (none)");
    assert_eq!(lines[4], VENV_INACTIVE);
}

#[test]
fn test_render_exactly_one_isolation_line() {
    for active in [false, true] {
        let report = EnvironmentReport {
            runtime: RuntimeInfo::current(),
            working_dir: PathBuf::from("/tmp"),
            venv: VenvStatus {
                prefix: None,
                active,
                python_version: None,
            },
            project_root: PathBuf::from("/tmp"),
        };

        let lines = report.render();
        let isolation_lines = lines
            .iter()
            .filter(|line| *line == VENV_ACTIVE || *line == VENV_INACTIVE)
            .count();
        assert_eq!(isolation_lines, 1);
        assert_eq!(lines.first().map(String::as_str), Some(BANNER));
        assert_eq!(lines.last().map(String::as_str), Some(ALL_GOOD));
    }
}

#[test]
fn test_runtime_info_display() {
    let runtime = RuntimeInfo::current();
    assert_eq!(runtime.to_string(), format!("{} {}", runtime.name, runtime.version));
    assert_eq!(runtime.name, "envreport-rs");
}

#[test]
fn test_success_marker() {
    assert_eq!(SETUP_SUCCESS, "Setup successful");
}
