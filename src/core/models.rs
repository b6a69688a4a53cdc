//! Discovery snapshots and derived state.
//!
//! These are plain data records produced by the discovery passes in
//! [`crate::core::discovery`], [`crate::core::varfiles`] and
//! [`crate::core::backend`], and consumed by the interactive session.
//!
//! # Public API
//! - [`Project`]: a directory owning Terraform sources
//! - [`VarFile`]: an environment's `.tfvars` file
//! - [`BackendVarFile`]: a backend configuration `.tfvars` file
//! - [`BackendState`]: what `.terraform/terraform.tfstate` says is initialized
//! - [`InitOptions`]: flags for a `terraform init` run
//! - [`Mode`]: single-project vs multi-project session

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Terraform's local metadata directory inside a project root.
pub const TERRAFORM_DIR: &str = ".terraform";
/// Local state metadata file inside [`TERRAFORM_DIR`].
pub const TERRAFORM_STATE_FILE: &str = "terraform.tfstate";
pub const TERRAFORM_SOURCE_EXTENSION: &str = "tf";
pub const TERRAFORM_VARS_EXTENSION: &str = "tfvars";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Display name, disambiguated with the parent directory when needed.
    pub name: String,
    /// Absolute path; the project's identity.
    pub path: PathBuf,
    pub is_initialized: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VarFile {
    /// File name, e.g. `dev2.tfvars`
    pub name: String,
    /// Path relative to the project root, e.g. `variables/dev2.tfvars`
    pub relative_path: PathBuf,
    pub full_path: PathBuf,
    /// File stem, e.g. `dev2`
    pub env_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendVarFile {
    /// File name, e.g. `backend_dev2.tfvars`
    pub name: String,
    /// Path relative to the project root, e.g. `variables/backend/local/backend_dev2.tfvars`
    pub relative_path: PathBuf,
    pub full_path: PathBuf,
    /// Environment this backend is for; empty for a generic backend.
    pub env_name: String,
}

impl BackendVarFile {
    pub fn is_generic(&self) -> bool {
        self.env_name.is_empty()
    }

    /// Directory holding the file, relative to the project root.
    pub fn relative_dir(&self) -> &Path {
        self.relative_path.parent().unwrap_or_else(|| Path::new(""))
    }

    /// Label used when several backends compete, e.g. `backend_dev2.tfvars (local)`.
    pub fn choice_label(&self) -> String {
        let dir = self
            .relative_dir()
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        format!("{} ({})", self.name, dir)
    }
}

/// Backend initialization state as observed on disk.
///
/// Never persisted. Recompute it after every `terraform init`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackendState {
    pub is_initialized: bool,
    /// e.g. `s3`, `local`, `azurerm`
    pub backend_type: String,
    /// String-valued entries of `backend.config`; other values are dropped.
    pub backend_config: BTreeMap<String, String>,
    /// Environment inferred from the backend config, empty when unknown.
    pub detected_env: String,
    pub matched_backend: Option<BackendVarFile>,
}

impl BackendState {
    /// True when `env_name` is the environment currently initialized.
    pub fn is_env_initialized(&self, env_name: &str) -> bool {
        self.is_initialized && !self.detected_env.is_empty() && self.detected_env == env_name
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InitOptions {
    pub backend_config_file: Option<BackendVarFile>,
    pub reconfigure: bool,
    pub upgrade: bool,
    /// Allow Terraform to prompt for input.
    pub input: bool,
}

impl InitOptions {
    /// Options used by the interactive init flow.
    pub fn for_backend(backend: BackendVarFile) -> Self {
        Self {
            backend_config_file: Some(backend),
            reconfigure: true,
            upgrade: true,
            input: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Started inside an initialized project; no project list.
    SingleProject,
    MultiProject,
}
