//! Terraform project discovery.
//!
//! Walks the configured search roots depth-first and records every directory
//! that directly contains a `.tf` file. Discovery never descends into a
//! project, so `.terraform/` and module subdirectories are never reported as
//! projects of their own.
//!
//! # Public API
//! - [`discover_projects`]: scan search roots, dedupe and disambiguate names
//! - [`is_terraform_project`]: non-recursive `.tf` file test
//! - [`is_initialized`]: `.terraform/` directory test
//! - [`determine_mode`]: choose single- or multi-project mode for a directory
//! - [`make_project_names_unique`]: post-processing pass

use crate::core::error::Result;
use crate::core::models::{Mode, Project, TERRAFORM_DIR, TERRAFORM_SOURCE_EXTENSION};
use crate::core::paths::{expand_home, should_ignore};
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// True when `path` holds a `.terraform/` metadata directory.
pub fn is_initialized(path: &Path) -> bool {
    path.join(TERRAFORM_DIR).is_dir()
}

/// True when `path` directly contains at least one `*.tf` file.
pub fn is_terraform_project(path: &Path) -> std::io::Result<bool> {
    let suffix = format!(".{TERRAFORM_SOURCE_EXTENSION}");
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        let is_source = entry.file_name().to_string_lossy().ends_with(&suffix);
        if is_source && !entry.file_type()?.is_dir() {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Picks the session mode for a working directory.
///
/// Only an *initialized* project switches to single-project mode; an
/// uninitialized one still opens the project list.
pub fn determine_mode(work_dir: &Path) -> (Mode, Option<Project>) {
    if !is_initialized(work_dir) {
        return (Mode::MultiProject, None);
    }

    let path = fs::canonicalize(work_dir).unwrap_or_else(|_| work_dir.to_path_buf());
    let project = Project {
        name: base_name(&path),
        path,
        is_initialized: true,
    };
    log::debug!("Single-project mode for {}", project.path.display());
    (Mode::SingleProject, Some(project))
}

/// Scans `search_paths` for Terraform projects.
///
/// Unreadable roots and subdirectories are skipped. The only error is a
/// `~` path when the home directory cannot be resolved.
pub fn discover_projects(search_paths: &[String], ignore_patterns: &[String]) -> Result<Vec<Project>> {
    let mut projects = Vec::new();

    for search_path in search_paths {
        let expanded = expand_home(search_path)?;
        let root = match fs::canonicalize(&expanded) {
            Ok(root) => root,
            Err(e) => {
                log::warn!("Skipping search path '{search_path}': {e}");
                continue;
            }
        };

        log::debug!("Scanning {} for Terraform projects", root.display());
        scan_root(&root, ignore_patterns, &mut projects);
    }

    let projects = make_project_names_unique(projects);
    log::debug!("Discovered {} Terraform projects", projects.len());
    Ok(projects)
}

fn scan_root(root: &Path, ignore_patterns: &[String], projects: &mut Vec<Project>) {
    let mut walker = WalkDir::new(root).sort_by_file_name().into_iter();

    while let Some(next) = walker.next() {
        let entry = match next {
            Ok(entry) => entry,
            Err(e) => {
                log::debug!("Skipping unreadable path: {e}");
                continue;
            }
        };

        if !entry.file_type().is_dir() {
            continue;
        }

        let path = entry.path();
        if should_ignore(path, ignore_patterns) {
            walker.skip_current_dir();
            continue;
        }

        match is_terraform_project(path) {
            Ok(true) => {
                projects.push(Project {
                    name: base_name(path),
                    path: path.to_path_buf(),
                    is_initialized: is_initialized(path),
                });
                walker.skip_current_dir();
            }
            Ok(false) => {}
            Err(e) => log::debug!("Skipping {}: {e}", path.display()),
        }
    }
}

/// Removes duplicate paths, then prefixes clashing names with their parent.
///
/// Renaming is a single pass; names that clash after renaming are kept.
pub fn make_project_names_unique(projects: Vec<Project>) -> Vec<Project> {
    let mut seen = HashSet::new();
    let mut unique: Vec<Project> = projects
        .into_iter()
        .filter(|project| seen.insert(project.path.clone()))
        .collect();

    let mut name_counts: HashMap<String, usize> = HashMap::new();
    for project in &unique {
        *name_counts.entry(project.name.clone()).or_default() += 1;
    }

    for project in &mut unique {
        if name_counts.get(&project.name).copied().unwrap_or(0) > 1 {
            let parent = project.path.parent().map(base_name).unwrap_or_default();
            project.name = format!("{}/{}", parent, project.name);
        }
    }

    unique
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
