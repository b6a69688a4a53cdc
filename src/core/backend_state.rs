//! Backend state inference from `.terraform/terraform.tfstate`.
//!
//! After `terraform init`, Terraform records the active backend in its local
//! metadata directory. Reading that file tells us whether a project is
//! initialized, against which backend type, and usually which environment,
//! because state keys tend to embed the environment name
//! (`dev2/terraform.tfstate`, `terraform.tfstate.d/int`, ...).
//!
//! Nothing in here fails: missing or corrupt metadata degrades to empty
//! fields on [`BackendState`].

use crate::core::models::{BackendState, BackendVarFile, TERRAFORM_DIR, TERRAFORM_STATE_FILE};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Config keys that may carry the environment, in priority order.
const ENV_CANDIDATE_KEYS: [&str; 4] = ["key", "path", "prefix", "workspace_key_prefix"];

const STATE_FILE_SUFFIX: &str = ".tfstate";

#[derive(Debug, Deserialize)]
struct LocalStateFile {
    #[serde(default)]
    backend: Option<LocalBackend>,
}

#[derive(Debug, Deserialize)]
struct LocalBackend {
    #[serde(default, rename = "type")]
    backend_type: Option<String>,
    #[serde(default)]
    config: Option<serde_json::Map<String, serde_json::Value>>,
}

/// Reads the project's local Terraform metadata and infers the active backend.
pub fn detect_current_backend(project_path: &Path, backend_var_files: &[BackendVarFile]) -> BackendState {
    let terraform_dir = project_path.join(TERRAFORM_DIR);
    if !terraform_dir.is_dir() {
        return BackendState::default();
    }

    let mut state = BackendState {
        is_initialized: true,
        ..Default::default()
    };

    let state_path = terraform_dir.join(TERRAFORM_STATE_FILE);
    let data = match fs::read_to_string(&state_path) {
        Ok(data) => data,
        Err(e) => {
            log::debug!("No backend metadata at {}: {e}", state_path.display());
            return state;
        }
    };

    let parsed: LocalStateFile = match serde_json::from_str(&data) {
        Ok(parsed) => parsed,
        Err(e) => {
            log::debug!("Unparsable backend metadata at {}: {e}", state_path.display());
            return state;
        }
    };

    let Some(backend) = parsed.backend else {
        return state;
    };

    state.backend_type = backend.backend_type.unwrap_or_default();
    state.backend_config = backend
        .config
        .unwrap_or_default()
        .into_iter()
        .filter_map(|(key, value)| match value {
            serde_json::Value::String(s) => Some((key, s)),
            _ => None,
        })
        .collect();

    state.detected_env = infer_env_from_backend_config(&state.backend_config);
    if !state.detected_env.is_empty() {
        state.matched_backend = backend_var_files
            .iter()
            .find(|b| b.env_name == state.detected_env)
            .cloned();
    }

    log::debug!(
        "Backend for {}: type='{}' env='{}'",
        project_path.display(),
        state.backend_type,
        state.detected_env
    );
    state
}

/// Guesses the environment from a backend config's state location.
///
/// The first present key of `key`, `path`, `prefix`, `workspace_key_prefix`
/// is split on `/`; the first segment that is not empty, not `terraform` or
/// `states` once a `.tfstate` suffix is stripped, and not a `*.d` directory
/// is the environment. Returns `""` when nothing qualifies.
pub fn infer_env_from_backend_config(config: &BTreeMap<String, String>) -> String {
    let Some(value) = ENV_CANDIDATE_KEYS.iter().find_map(|key| config.get(*key)) else {
        return String::new();
    };

    value
        .split('/')
        .filter(|segment| !segment.is_empty())
        .map(|segment| segment.strip_suffix(STATE_FILE_SUFFIX).unwrap_or(segment))
        .find(|segment| {
            !segment.is_empty()
                && *segment != "terraform"
                && *segment != "states"
                && !segment.ends_with(".d")
        })
        .map(str::to_string)
        .unwrap_or_default()
}

pub fn format_backend_state(state: &BackendState) -> String {
    if !state.is_initialized {
        return "Not initialized\n\nRun 'terraform init' with a backend config to get started."
            .to_string();
    }

    let mut result = String::from("Initialized\n\n");
    if !state.backend_type.is_empty() {
        result.push_str(&format!("Backend Type: {}\n", state.backend_type));
    }
    if !state.detected_env.is_empty() {
        result.push_str(&format!("Current Environment: {}\n", state.detected_env));
    }
    if let Some(backend) = &state.matched_backend {
        result.push_str(&format!("Backend Config: {}\n", backend.name));
        result.push_str(&format!("Config Path: {}\n", backend.relative_dir().display()));
    }
    result
}
