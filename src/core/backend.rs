//! Backend configuration file discovery and environment matching.
//!
//! Backend files live anywhere under `variables/backend/`. Their file name
//! decides which environment they serve:
//!
//! | File name              | Environment      |
//! |------------------------|------------------|
//! | `backend_dev2.tfvars`  | `dev2`           |
//! | `backend.tfvars`       | generic (`""`)   |
//! | `shared.tfvars`        | `shared`         |
//!
//! # Public API
//! - [`discover_backend_var_files`]: recursive scan of `variables/backend`
//! - [`extract_env_from_backend_file`]: file name to environment rule
//! - [`match_backends_for_env`]: which backend files apply to an environment
//! - [`format_backend_info`]: human readable summary of a match

use crate::core::models::{BackendVarFile, TERRAFORM_VARS_EXTENSION};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Backend file subtree, relative to the project root.
pub const BACKEND_DIR: [&str; 2] = ["variables", "backend"];

const BACKEND_PREFIX: &str = "backend_";
const GENERIC_BACKEND_STEM: &str = "backend";

/// Finds every `.tfvars` file below `variables/backend`.
///
/// A missing backend directory yields an empty list. Entries come back in
/// file name order, directory by directory.
pub fn discover_backend_var_files(project_path: &Path) -> Vec<BackendVarFile> {
    let backend_dir: PathBuf = BACKEND_DIR.iter().fold(project_path.to_path_buf(), |p, d| p.join(d));
    if !backend_dir.is_dir() {
        return Vec::new();
    }

    let suffix = format!(".{TERRAFORM_VARS_EXTENSION}");
    let backend_files: Vec<BackendVarFile> = WalkDir::new(&backend_dir)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::debug!("Skipping unreadable backend path: {e}");
                None
            }
        })
        .filter(|entry| !entry.file_type().is_dir())
        .filter_map(|entry| {
            let name = entry.file_name().to_string_lossy().into_owned();
            if !name.ends_with(&suffix) {
                return None;
            }
            let full_path = entry.into_path();
            let relative_path = full_path
                .strip_prefix(project_path)
                .map(Path::to_path_buf)
                .unwrap_or_else(|_| full_path.clone());
            Some(BackendVarFile {
                env_name: extract_env_from_backend_file(&name),
                name,
                relative_path,
                full_path,
            })
        })
        .collect();

    log::debug!(
        "Found {} backend files in {}",
        backend_files.len(),
        backend_dir.display()
    );
    backend_files
}

/// Environment a backend file name applies to; `""` marks a generic backend.
pub fn extract_env_from_backend_file(file_name: &str) -> String {
    let stem = file_name
        .strip_suffix(&format!(".{TERRAFORM_VARS_EXTENSION}"))
        .unwrap_or(file_name);

    if let Some(env) = stem.strip_prefix(BACKEND_PREFIX) {
        return env.to_string();
    }
    if stem == GENERIC_BACKEND_STEM {
        return String::new();
    }
    stem.to_string()
}

/// Backend files that apply to `env_name`.
///
/// Exact, case-sensitive matches win, in discovery order. Without one, the
/// generic backend is returned; if several exist the last one seen is used.
/// Otherwise the result is empty.
pub fn match_backends_for_env(env_name: &str, backends: &[BackendVarFile]) -> Vec<BackendVarFile> {
    let mut matches = Vec::new();
    let mut generic = None;

    for backend in backends {
        if backend.is_generic() {
            generic = Some(backend);
            continue;
        }
        if backend.env_name == env_name {
            matches.push(backend.clone());
        }
    }

    if !matches.is_empty() {
        return matches;
    }

    generic.cloned().into_iter().collect()
}

pub fn format_backend_info(backends: &[BackendVarFile]) -> String {
    match backends {
        [] => "No backend configuration found".to_string(),
        [backend] => format!("{} ({})", backend.name, backend.relative_dir().display()),
        many => {
            let mut result = String::from("Multiple backend options available:\n");
            for backend in many {
                result.push_str(&format!(
                    "  • {} ({})\n",
                    backend.name,
                    backend.relative_dir().display()
                ));
            }
            result
        }
    }
}
