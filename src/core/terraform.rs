//! `terraform` invocations.

use crate::core::executor::{execute_streaming, CommandStream};
use crate::core::models::InitOptions;
use std::path::Path;

pub const TERRAFORM_BIN: &str = "terraform";

/// Arguments for `terraform init` with the given options.
///
/// The backend file is passed by absolute path so the command works from
/// any working directory.
pub fn init_args(options: &InitOptions) -> Vec<String> {
    let mut args = vec!["init".to_string()];

    if let Some(backend) = &options.backend_config_file {
        args.push(format!("-backend-config={}", backend.full_path.display()));
    }
    if options.reconfigure {
        args.push("-reconfigure".to_string());
    }
    if options.upgrade {
        args.push("-upgrade".to_string());
    }
    if !options.input {
        args.push("-input=false".to_string());
    }

    args
}

/// Runs `terraform init` inside `project_path`, streaming its output.
pub fn run_init(project_path: &Path, options: &InitOptions) -> CommandStream {
    execute_streaming(TERRAFORM_BIN, &init_args(options), Some(project_path))
}
