use crate::core::{config::Config, error::Result, print_section_header, print_success, print_warning};
use colored::*;

/// Prints the config file location and the effective configuration.
///
/// With `init`, writes the default config file first unless one exists.
pub fn execute_config(config: &Config, init: bool) -> Result<()> {
    let path = Config::config_path()?;

    if init {
        if Config::exists() {
            print_warning(&format!("Config file already exists at {}", path.display()));
        } else {
            Config::default().save()?;
            print_success(&format!("Wrote default config to {}", path.display()));
        }
    }

    print_section_header("Config File");
    let state = if path.exists() { "" } else { " (not created yet)" };
    println!("  {}{}", path.display().to_string().white(), state.bright_black());

    print_section_header("Effective Config");
    for line in serde_json::to_string_pretty(config)?.lines() {
        println!("  {line}");
    }
    println!();

    Ok(())
}
