//! Integration tests for the create-rext CLI
//!
//! These run the built binary in a temporary working directory. The template
//! and installer are pointed at test fixtures through environment overrides so
//! no real package manager is needed.

use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// A scratch workspace: a template directory and an empty working directory
struct Workspace {
    _temp: TempDir,
    template: PathBuf,
    cwd: PathBuf,
}

fn workspace() -> Workspace {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let template = temp.path().join("template");
    std::fs::create_dir_all(template.join("src")).unwrap();
    std::fs::write(
        template.join("package.json"),
        r#"{"name": "template-default", "version": "1.0.0"}"#,
    )
    .unwrap();
    std::fs::write(template.join("README.md"), "# Template\n").unwrap();
    std::fs::write(template.join("src").join("index.ts"), "export {};\n").unwrap();

    let cwd = temp.path().join("work");
    std::fs::create_dir_all(&cwd).unwrap();
    Workspace {
        _temp: temp,
        template,
        cwd,
    }
}

/// Helper to run create-rext with a template and installer command
fn run_create_rext(args: &[&str], ws: &Workspace, install_cmd: &str) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_create-rext"))
        .args(args)
        .current_dir(&ws.cwd)
        .env("CREATE_REXT_TEMPLATE_DIR", &ws.template)
        .env("CREATE_REXT_INSTALL_CMD", install_cmd)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute create-rext")
}

/// Helper to get stdout as string
fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Helper to get stderr as string
fn stderr(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn read_manifest(project: &Path) -> serde_json::Value {
    let raw = std::fs::read_to_string(project.join("package.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}

// =============================================================================
// Basic Command Tests
// =============================================================================

#[test]
fn test_help_command() {
    let output = Command::new(env!("CARGO_BIN_EXE_create-rext"))
        .arg("--help")
        .output()
        .expect("Failed to execute");

    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("create-rext"));
    assert!(out.contains("--skip-install"));
}

#[test]
fn test_version_command() {
    let output = Command::new(env!("CARGO_BIN_EXE_create-rext"))
        .arg("--version")
        .output()
        .expect("Failed to execute");

    assert!(output.status.success());
    assert!(stdout(&output).contains("create-rext"));
}

#[test]
fn test_missing_project_name_is_usage_error() {
    let ws = workspace();
    let output = run_create_rext(&[], &ws, "true");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("Usage"));
    // Nothing was created
    assert_eq!(std::fs::read_dir(&ws.cwd).unwrap().count(), 0);
}

#[test]
fn test_invalid_project_name_rejected() {
    let ws = workspace();
    let output = run_create_rext(&["../escape"], &ws, "true");

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("path separators"));
    assert!(!ws.cwd.parent().unwrap().join("escape").exists());
}

#[test]
fn test_completion_bash() {
    let output = Command::new(env!("CARGO_BIN_EXE_create-rext"))
        .args(["--completions", "bash"])
        .output()
        .expect("Failed to execute");

    assert!(
        output.status.success(),
        "completions bash failed: {}",
        stderr(&output)
    );
    assert!(stdout(&output).contains("create-rext"));
}

// =============================================================================
// Scaffolding Tests
// =============================================================================

#[cfg(unix)]
#[test]
fn test_creates_project() {
    let ws = workspace();
    let output = run_create_rext(&["my-app"], &ws, "true");
    assert!(
        output.status.success(),
        "create failed: {}",
        stderr(&output)
    );

    let project = ws.cwd.join("my-app");
    assert_eq!(
        std::fs::read_to_string(project.join("README.md")).unwrap(),
        "# Template\n"
    );
    assert!(project.join("src").join("index.ts").is_file());
    assert_eq!(
        read_manifest(&project),
        serde_json::json!({"name": "my-app", "version": "1.0.0"})
    );

    let out = stdout(&output);
    assert!(out.contains("Dependencies installed successfully."));
    assert!(out.contains("cd my-app"));
}

#[cfg(unix)]
#[test]
fn test_installer_runs_inside_project() {
    let ws = workspace();
    let output = run_create_rext(&["app"], &ws, "touch installed.marker");
    assert!(output.status.success(), "create failed: {}", stderr(&output));

    assert!(ws.cwd.join("app").join("installed.marker").is_file());
    assert!(!ws.cwd.join("installed.marker").exists());
}

#[test]
fn test_existing_directory_not_overwritten() {
    let ws = workspace();
    let existing = ws.cwd.join("taken");
    std::fs::create_dir(&existing).unwrap();
    std::fs::write(existing.join("notes.txt"), "keep me").unwrap();

    let output = run_create_rext(&["taken"], &ws, "true");

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("already exists"));
    assert!(!stdout(&output).contains("Creating"));
    assert_eq!(
        std::fs::read_to_string(existing.join("notes.txt")).unwrap(),
        "keep me"
    );
    assert!(!existing.join("package.json").exists());
}

#[test]
fn test_existing_file_not_overwritten() {
    let ws = workspace();
    std::fs::write(ws.cwd.join("taken"), "plain file").unwrap();

    let output = run_create_rext(&["taken"], &ws, "true");

    assert_eq!(output.status.code(), Some(1));
    assert_eq!(
        std::fs::read_to_string(ws.cwd.join("taken")).unwrap(),
        "plain file"
    );
}

#[cfg(unix)]
#[test]
fn test_missing_manifest_stops_before_install() {
    let ws = workspace();
    std::fs::remove_file(ws.template.join("package.json")).unwrap();

    let output = run_create_rext(&["app"], &ws, "touch installed.marker");

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("package.json not found"));
    // Copied files stay, installer never ran
    assert!(ws.cwd.join("app").join("README.md").is_file());
    assert!(!ws.cwd.join("app").join("installed.marker").exists());
}

#[cfg(unix)]
#[test]
fn test_install_failure_keeps_project() {
    let ws = workspace();
    let output = run_create_rext(&["app"], &ws, "false");

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Failed to install dependencies"));

    let project = ws.cwd.join("app");
    assert!(project.join("README.md").is_file());
    assert_eq!(read_manifest(&project)["name"], "app");
}

#[test]
fn test_installer_not_found() {
    let ws = workspace();
    let output = run_create_rext(&["app"], &ws, "create-rext-missing-installer-xyz install");

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("create-rext-missing-installer-xyz"));
    assert_eq!(read_manifest(&ws.cwd.join("app"))["name"], "app");
}

#[test]
fn test_skip_install() {
    let ws = workspace();
    let output = run_create_rext(
        &["app", "--skip-install"],
        &ws,
        "create-rext-missing-installer-xyz",
    );

    assert!(output.status.success(), "create failed: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("Install dependencies with:"));
    assert!(out.contains("create-rext-missing-installer-xyz"));
    assert_eq!(read_manifest(&ws.cwd.join("app"))["name"], "app");
}

#[test]
fn test_missing_template_creates_nothing() {
    let ws = workspace();
    let output = run_create_rext(
        &["app", "--template", "does-not-exist"],
        &ws,
        "true",
    );

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("Template directory not found"));
    assert!(!ws.cwd.join("app").exists());
}

/// Run with no template override of any kind, as an installed binary would
fn run_with_defaults(binary: &Path, args: &[&str], cwd: &Path) -> std::process::Output {
    Command::new(binary)
        .args(args)
        .current_dir(cwd)
        .env_remove("CREATE_REXT_TEMPLATE_DIR")
        .env_remove("CREATE_REXT_INSTALL_CMD")
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute create-rext")
}

fn assert_bundled_copy(project: &Path, name: &str) {
    let bundled = Path::new(env!("CARGO_MANIFEST_DIR")).join("template");
    assert_eq!(
        std::fs::read_to_string(project.join("README.md")).unwrap(),
        std::fs::read_to_string(bundled.join("README.md")).unwrap()
    );
    assert!(project.join("src").join("index.ts").is_file());

    let manifest = read_manifest(project);
    let mut expected: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(bundled.join("package.json")).unwrap(),
    )
    .unwrap();
    expected["name"] = serde_json::Value::String(name.to_string());
    assert_eq!(manifest, expected);
}

#[test]
fn test_default_template_is_bundled() {
    let ws = workspace();
    let output = run_with_defaults(
        Path::new(env!("CARGO_BIN_EXE_create-rext")),
        &["bundled", "--skip-install"],
        &ws.cwd,
    );

    assert!(output.status.success(), "create failed: {}", stderr(&output));
    assert_bundled_copy(&ws.cwd.join("bundled"), "bundled");
}

#[cfg(unix)]
#[test]
fn test_default_template_from_installed_location() {
    let ws = workspace();
    // Mimic `cargo install`: the binary alone in a bin directory
    let bin_dir = ws.cwd.parent().unwrap().join(".cargo").join("bin");
    std::fs::create_dir_all(&bin_dir).unwrap();
    let installed = bin_dir.join("create-rext");
    std::fs::copy(env!("CARGO_BIN_EXE_create-rext"), &installed).unwrap();

    let output = run_with_defaults(&installed, &["my-app", "--skip-install"], &ws.cwd);

    assert!(output.status.success(), "create failed: {}", stderr(&output));
    assert_bundled_copy(&ws.cwd.join("my-app"), "my-app");
}

#[cfg(unix)]
#[test]
fn test_config_file_sets_installer() {
    let ws = workspace();
    std::fs::write(
        ws.cwd.join("create-rext.toml"),
        "[install]\ncommand = [\"touch\", \"configured.marker\"]\n",
    )
    .unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_create-rext"))
        .arg("app")
        .current_dir(&ws.cwd)
        .env("CREATE_REXT_TEMPLATE_DIR", &ws.template)
        .env_remove("CREATE_REXT_INSTALL_CMD")
        .output()
        .expect("Failed to execute create-rext");

    assert!(output.status.success(), "create failed: {}", stderr(&output));
    assert!(ws.cwd.join("app").join("configured.marker").is_file());
    assert!(!ws.cwd.join("configured.marker").exists());
}

#[test]
fn test_config_file_skip_install() {
    let ws = workspace();
    std::fs::write(ws.cwd.join("create-rext.toml"), "[install]\nskip = true\n").unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_create-rext"))
        .arg("app")
        .current_dir(&ws.cwd)
        .env("CREATE_REXT_TEMPLATE_DIR", &ws.template)
        .env_remove("CREATE_REXT_INSTALL_CMD")
        .output()
        .expect("Failed to execute create-rext");

    assert!(output.status.success(), "create failed: {}", stderr(&output));
    assert!(stdout(&output).contains("npm install"));
    assert!(ws.cwd.join("app").join("package.json").is_file());
}
