//! Common assertion helpers for command output

#![allow(dead_code)]

use predicates::prelude::*;

pub fn has_index(index: u32) -> impl Predicate<str> {
    predicates::str::contains(format!("[{}]", index))
}

pub fn project_not_found(name: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("No Terraform project named '{name}'"))
}

pub fn environment_not_found(env: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("no environment named '{env}'"))
}

pub fn init_aborted() -> impl Predicate<str> {
    predicates::str::contains("Initialization aborted")
}

pub fn not_initialized() -> impl Predicate<str> {
    predicates::str::contains("Not initialized")
}

pub fn needs_terminal() -> impl Predicate<str> {
    predicates::str::contains("needs an interactive terminal")
}
