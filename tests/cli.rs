//! End-to-end tests for the bundler binary.
//!
//! Build behavior is exercised against a fake `pyinstaller` executable placed
//! on PATH, so no real PyInstaller installation is required.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn bundler_cmd(project_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("competitor_bundler").expect("binary builds");
    cmd.current_dir(project_dir);
    cmd
}

#[test]
fn clean_removes_artifacts_and_keeps_sources() {
    let project = tempfile::tempdir().expect("tempdir");
    for dir in ["build", "dist", "__pycache__"] {
        fs::create_dir_all(project.path().join(dir).join("deep")).expect("create artifact dir");
    }
    fs::write(project.path().join("CompetitorMonitor.spec"), "# spec").expect("write spec");
    fs::write(project.path().join("main.py"), "print('hi')").expect("write source");

    bundler_cmd(project.path()).arg("clean").assert().success();

    for dir in ["build", "dist", "__pycache__"] {
        assert!(!project.path().join(dir).exists(), "{dir} not removed");
    }
    assert!(!project.path().join("CompetitorMonitor.spec").exists());
    assert!(project.path().join("main.py").exists());
}

#[test]
fn clean_is_idempotent_on_an_empty_directory() {
    let project = tempfile::tempdir().expect("tempdir");

    bundler_cmd(project.path()).arg("clean").assert().success();
    bundler_cmd(project.path()).arg("clean").assert().success();
}

#[test]
fn build_fails_fast_when_pyinstaller_is_missing() {
    let project = tempfile::tempdir().expect("tempdir");
    let empty_path = tempfile::tempdir().expect("tempdir");

    bundler_cmd(project.path())
        .env("PATH", empty_path.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("pip install pyinstaller"));
}

#[cfg(unix)]
mod with_fake_pyinstaller {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    /// Writes an executable `pyinstaller` shim and returns a PATH value with
    /// its directory prepended.
    fn install_shim(tool_dir: &TempDir, body: &str) -> String {
        let shim = tool_dir.path().join("pyinstaller");
        let script = format!(
            "#!/bin/sh\nif [ \"$1\" = \"--version\" ]; then\n  echo 6.11.1\n  exit 0\nfi\n{body}\n"
        );
        fs::write(&shim, script).expect("write shim");
        let mut perms = fs::metadata(&shim).expect("shim metadata").permissions();
        perms.set_mode(0o755);
        fs::set_permissions(&shim, perms).expect("make shim executable");

        let system_path = std::env::var("PATH").unwrap_or_default();
        format!("{}:{}", tool_dir.path().display(), system_path)
    }

    #[test]
    fn successful_build_reports_bundle_path_and_size() {
        let project = tempfile::tempdir().expect("tempdir");
        let tools = tempfile::tempdir().expect("tempdir");
        let path = install_shim(
            &tools,
            "mkdir -p dist/CompetitorMonitor.app/Contents/MacOS\n\
             head -c 1048576 /dev/zero > dist/CompetitorMonitor.app/Contents/MacOS/CompetitorMonitor\n\
             head -c 2097152 /dev/zero > dist/CompetitorMonitor.app/Contents/Resources.bin\n\
             exit 0",
        );

        bundler_cmd(project.path())
            .env("PATH", path)
            .write_stdin("y\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("PyInstaller 6.11.1"))
            .stdout(predicate::str::contains("Build finished successfully"))
            .stdout(predicate::str::contains("CompetitorMonitor.app"))
            .stdout(predicate::str::contains("Size: 3.0 MB"));
    }

    #[test]
    fn failing_build_exits_nonzero_without_a_size_report() {
        let project = tempfile::tempdir().expect("tempdir");
        let tools = tempfile::tempdir().expect("tempdir");
        let path = install_shim(&tools, "exit 1");

        bundler_cmd(project.path())
            .env("PATH", path)
            .write_stdin("y\n")
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("PyInstaller build failed"))
            .stdout(predicate::str::contains("Size:").not());
    }

    #[test]
    fn successful_exit_without_a_bundle_is_an_error() {
        let project = tempfile::tempdir().expect("tempdir");
        let tools = tempfile::tempdir().expect("tempdir");
        let path = install_shim(&tools, "exit 0");

        bundler_cmd(project.path())
            .env("PATH", path)
            .write_stdin("y\n")
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("dist"));
    }

    #[cfg(not(target_os = "macos"))]
    #[test]
    fn declined_platform_prompt_aborts_before_the_build_runs() {
        let project = tempfile::tempdir().expect("tempdir");
        let tools = tempfile::tempdir().expect("tempdir");
        // A real build invocation would leave a marker in the project dir.
        let path = install_shim(&tools, "touch invoked.marker\nexit 0");

        bundler_cmd(project.path())
            .env("PATH", path)
            .write_stdin("n\n")
            .assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("build aborted"));

        assert!(
            !project.path().join("invoked.marker").exists(),
            "pyinstaller must not be invoked after a declined prompt"
        );
    }
}
