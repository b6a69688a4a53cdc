use crate::commands::projects::find_project;
use crate::core::{
    backend_state::format_backend_state, config::Config, error::Result, output::format_indexed,
    print_section_header, session::SelectionContext,
};
use colored::*;

/// Prints the var files, backend files and backend state of one project.
pub fn execute_show(config: &Config, name: &str) -> Result<()> {
    let project = find_project(config, name)?;
    let selection = SelectionContext::load(project);
    let state = &selection.backend_state;

    println!(
        "\n{} {}\n{} {}",
        "Project:".white(),
        selection.project.name.blue(),
        "Path:".white(),
        selection.project.path.display().to_string().bright_black()
    );

    print_section_header("Environments");
    if selection.var_files.is_empty() {
        println!("  {}", "No var files found".bright_black());
    }
    for (index, var_file) in selection.var_files.iter().enumerate() {
        let marker = if state.is_env_initialized(&var_file.env_name) {
            " ●".green().to_string()
        } else {
            String::new()
        };
        println!(
            "{}{} {}",
            format_indexed(index + 1, &var_file.env_name.blue().to_string()),
            marker,
            var_file.relative_path.display().to_string().bright_black()
        );
    }

    print_section_header("Backend Configs");
    if selection.backend_var_files.is_empty() {
        println!("  {}", "No backend configs found".bright_black());
    }
    for backend in &selection.backend_var_files {
        let env = if backend.is_generic() {
            "generic".to_string()
        } else {
            backend.env_name.clone()
        };
        println!(
            "  {} {}",
            backend.relative_path.display().to_string().white(),
            format!("({env})").bright_black()
        );
    }

    print_section_header("Backend State");
    for line in format_backend_state(state).lines() {
        println!("  {line}");
    }
    println!();

    Ok(())
}
