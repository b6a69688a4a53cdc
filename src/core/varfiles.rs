//! Var-file discovery.
//!
//! Environments are the `.tfvars` files found, non-recursively, in the
//! project root and in `variables/`, `env/` and `tfvars/`, scanned in that
//! order. The same environment name in two directories yields two entries.

use crate::core::models::{VarFile, TERRAFORM_VARS_EXTENSION};
use std::fs;
use std::path::{Path, PathBuf};

/// Directories scanned for var files, relative to the project root.
pub const VAR_FILE_DIRS: [&str; 4] = [".", "variables", "env", "tfvars"];

pub fn discover_var_files(project_path: &Path) -> Vec<VarFile> {
    let suffix = format!(".{TERRAFORM_VARS_EXTENSION}");
    let mut var_files = Vec::new();

    for dir in VAR_FILE_DIRS {
        let dir_path = project_path.join(dir);
        let entries = match fs::read_dir(&dir_path) {
            Ok(entries) => entries,
            Err(_) => continue,
        };

        let mut found: Vec<VarFile> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.file_type().map(|t| !t.is_dir()).unwrap_or(false))
            .filter_map(|entry| {
                // a bare ".tfvars" is a var file for the unnamed environment
                let name = entry.file_name().to_string_lossy().into_owned();
                let env_name = name.strip_suffix(&suffix)?.to_string();
                let relative_path = if dir == "." {
                    PathBuf::from(&name)
                } else {
                    Path::new(dir).join(&name)
                };
                Some(VarFile {
                    name,
                    full_path: project_path.join(&relative_path),
                    relative_path,
                    env_name,
                })
            })
            .collect();

        // read_dir order is platform dependent; keep file name order
        found.sort_by(|a, b| a.name.cmp(&b.name));
        var_files.extend(found);
    }

    log::debug!(
        "Found {} var files in {}",
        var_files.len(),
        project_path.display()
    );
    var_files
}

/// Environment names in discovery order, for lists and selection modals.
pub fn var_file_display_names(var_files: &[VarFile]) -> Vec<String> {
    var_files.iter().map(|vf| vf.env_name.clone()).collect()
}

/// First var file for `env_name` and its index.
pub fn find_var_file_by_env_name<'a>(
    env_name: &str,
    var_files: &'a [VarFile],
) -> Option<(usize, &'a VarFile)> {
    var_files
        .iter()
        .enumerate()
        .find(|(_, vf)| vf.env_name == env_name)
}
