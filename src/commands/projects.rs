use crate::core::{
    config::Config,
    discovery::discover_projects,
    error::{LazyTfError, Result},
    models::Project,
    output::format_indexed,
    print_info, print_section_header,
};
use colored::*;

pub fn execute_projects(config: &Config) -> Result<()> {
    let projects = load_projects(config)?;

    if projects.is_empty() {
        print_info("No Terraform projects found. Add a search path with --search-path or in the config file.");
        return Ok(());
    }

    print_section_header("Terraform Projects");
    for (index, project) in projects.iter().enumerate() {
        let marker = if project.is_initialized {
            "●".green()
        } else {
            "○".bright_black()
        };
        println!(
            "{} {} {}",
            format_indexed(index + 1, &project.name.blue().to_string()),
            marker,
            project.path.display().to_string().bright_black()
        );
    }
    println!();

    Ok(())
}

/// Discovers projects in the configured search paths.
pub fn load_projects(config: &Config) -> Result<Vec<Project>> {
    discover_projects(&config.search_paths, &config.ignore_patterns)
}

/// Looks a project up by its (unique) display name.
///
/// A 1-based index as printed by `lazytf projects` is accepted as well.
pub fn find_project(config: &Config, name: &str) -> Result<Project> {
    let mut projects = load_projects(config)?;
    if projects.is_empty() {
        return Err(LazyTfError::NoProjectsFound);
    }

    if let Some(position) = projects.iter().position(|p| p.name == name) {
        return Ok(projects.swap_remove(position));
    }
    match name.parse::<usize>() {
        Ok(index) if index >= 1 && index <= projects.len() => Ok(projects.swap_remove(index - 1)),
        _ => Err(LazyTfError::project_not_found(name)),
    }
}
