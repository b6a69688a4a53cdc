//! Shared console formatting for the non-interactive commands.
//!
//! Errors are red with a `✕ Error:` prefix, successes get a green check,
//! section headers are followed by a blank line. Command output streamed
//! from Terraform is printed as-is, with stderr lines dimmed red.

use colored::*;

/// Prints `✕ Error: <message>` surrounded by blank lines.
pub fn print_error(message: &str) {
    eprintln!("\n{} {}\n", "✕ Error:".red(), message.white());
}

pub fn print_warning(message: &str) {
    println!("{} {}", "!".yellow(), message.white());
}

pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.white());
}

pub fn print_info(message: &str) {
    println!("\n{}\n", message.white());
}

pub fn print_section_header(header: &str) {
    println!("\n{}:\n", header.white());
}

/// One line of a running command's output.
pub fn print_command_line(line: &str, is_err: bool) {
    if is_err {
        println!("  {}", line.red().dimmed());
    } else {
        println!("  {}", line.bright_black());
    }
}

/// `[n] label` line used by every numbered list.
pub fn format_indexed(index: usize, label: &str) -> String {
    format!(
        "{}{}{} {}",
        "[".bright_black(),
        index.to_string().white(),
        "]".bright_black(),
        label
    )
}
