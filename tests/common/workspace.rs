//! Temporary workspace management
//!
//! A [`TestWorkspace`] owns a temp directory holding Terraform projects and a
//! separate config home, so commands never read the real user config.

#![allow(dead_code)]

use assert_cmd::Command;
use lazytf::core::error::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// The TempDir must be kept alive for the duration of the test.
pub struct TestWorkspace {
    pub temp_dir: TempDir,
    pub root: PathBuf,
    pub config_home: PathBuf,
}

impl TestWorkspace {
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `lazytf` with the config home isolated and `--search-path` set to
    /// the workspace root.
    pub fn command(&self) -> anyhow::Result<Command> {
        let mut cmd = Command::cargo_bin("lazytf")?;
        cmd.env("XDG_CONFIG_HOME", &self.config_home)
            .env("HOME", self.temp_dir.path())
            .env_remove("AWS_CONFIG_FILE")
            .arg("--search-path")
            .arg(&self.root);
        Ok(cmd)
    }

    /// `lazytf` without any search path override.
    pub fn bare_command(&self) -> anyhow::Result<Command> {
        let mut cmd = Command::cargo_bin("lazytf")?;
        cmd.env("XDG_CONFIG_HOME", &self.config_home)
            .env("HOME", self.temp_dir.path())
            .env_remove("AWS_CONFIG_FILE");
        Ok(cmd)
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_home.join("lazytf").join("config.json")
    }
}

pub fn setup_workspace() -> Result<TestWorkspace> {
    let temp_dir = TempDir::new()?;
    let root = temp_dir.path().join("workspace");
    let config_home = temp_dir.path().join("config");
    fs::create_dir_all(&root)?;
    fs::create_dir_all(&config_home)?;

    Ok(TestWorkspace {
        temp_dir,
        root,
        config_home,
    })
}

/// Creates `relative` (and its parents) under `base` with `content`.
pub fn create_file(base: &Path, relative: &str, content: &str) -> Result<PathBuf> {
    let path = base.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, content)?;
    Ok(path)
}

/// Creates a directory containing a `main.tf`.
pub fn create_project(base: &Path, relative: &str) -> Result<PathBuf> {
    let main_tf = create_file(base, &format!("{relative}/main.tf"), "terraform {}\n")?;
    Ok(main_tf.parent().map(Path::to_path_buf).unwrap_or_default())
}

/// Writes `.terraform/terraform.tfstate` with the given backend block.
pub fn write_backend_state(project: &Path, backend_type: &str, config_json: &str) -> Result<()> {
    let content = format!(r#"{{"version":3,"backend":{{"type":"{backend_type}","config":{config_json}}}}}"#);
    create_file(project, ".terraform/terraform.tfstate", &content)?;
    Ok(())
}

/// Writes an executable shell script named `name` into the workspace's
/// private `bin/` directory and returns that directory.
#[cfg(unix)]
pub fn install_fake_binary(ws: &TestWorkspace, name: &str, script: &str) -> Result<PathBuf> {
    use std::os::unix::fs::PermissionsExt;

    let bin_dir = ws.temp_dir.path().join("bin");
    let path = create_file(&bin_dir, name, &format!("#!/bin/sh\n{script}\n"))?;
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
    Ok(bin_dir)
}

/// `PATH` value with `bin_dir` in front of the system directories.
pub fn path_with(bin_dir: &Path) -> String {
    format!("{}:/usr/bin:/bin", bin_dir.display())
}

/// A `PATH` under which no `terraform` or `aws` binary can be found.
pub fn empty_path(ws: &TestWorkspace) -> Result<PathBuf> {
    let dir = ws.temp_dir.path().join("empty-bin");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}
