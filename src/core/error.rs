//! Domain-specific error types and error handling utilities.
//!
//! This module defines [`LazyTfError`] which covers the failure modes that can
//! actually reach a caller. Discovery, matching and backend inference are
//! deliberately infallible for partial problems (an unreadable subdirectory,
//! a corrupt state file) and never produce one of these.
//!
//! # Public API
//! - [`LazyTfError`]: Main error enum covering all failure modes
//! - [`Result<T>`]: Type alias for `std::result::Result<T, LazyTfError>`
//!
//! # Error Categories
//! - **Environment**: home or config directory cannot be resolved
//! - **Configuration**: config file read, parse and write failures
//! - **Lookup**: unknown project, environment or SSO session names
//! - **Process**: failed or aborted `terraform` / `aws` runs
//! - **Prompt**: interactive choices asked for without a terminal

use std::path::PathBuf;
use thiserror::Error;

/// Domain-specific error types for lazytf
#[derive(Error, Debug)]
pub enum LazyTfError {
    // Environment errors
    #[error("Could not resolve the home directory")]
    HomeDirectoryNotFound,

    #[error("Could not find config directory")]
    ConfigDirectoryNotFound,

    // Configuration errors
    #[error("Failed to read config file '{path}': {source}")]
    ConfigReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ConfigParseFailed {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to write config file '{path}': {source}")]
    ConfigWriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to read AWS config file '{path}': {source}")]
    AwsConfigReadFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    // Lookup errors
    #[error("No Terraform project named '{name}'. Run 'lazytf projects' to list them.")]
    ProjectNotFound { name: String },

    #[error("No Terraform projects found in the configured search paths")]
    NoProjectsFound,

    #[error("Project '{project}' has no environment named '{env}'")]
    EnvironmentNotFound { project: String, env: String },

    #[error("No AWS SSO session named '{name}'")]
    SsoSessionNotFound { name: String },

    #[error("No [sso-session ...] entries found in the AWS config")]
    NoSsoSessions,

    // Process errors
    #[error("'{command}' failed: {error}")]
    CommandFailed { command: String, error: String },

    #[error("Initialization aborted: {reason}")]
    InitAborted { reason: String },

    // Prompt errors
    #[error("This prompt needs an interactive terminal; pass the choice as an argument or use --yes")]
    NotATerminal,

    #[error("Prompt failed: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience type alias for Results using LazyTfError
pub type Result<T> = std::result::Result<T, LazyTfError>;

impl LazyTfError {
    /// Create a config read failed error
    pub fn config_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config parse failed error
    pub fn config_parse_failed(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::ConfigParseFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a config write failed error
    pub fn config_write_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ConfigWriteFailed {
            path: path.into(),
            source,
        }
    }

    pub fn aws_config_read_failed(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::AwsConfigReadFailed {
            path: path.into(),
            source,
        }
    }

    /// Create a project not found error
    pub fn project_not_found(name: impl Into<String>) -> Self {
        Self::ProjectNotFound { name: name.into() }
    }

    /// Create an environment not found error
    pub fn environment_not_found(project: impl Into<String>, env: impl Into<String>) -> Self {
        Self::EnvironmentNotFound {
            project: project.into(),
            env: env.into(),
        }
    }

    pub fn sso_session_not_found(name: impl Into<String>) -> Self {
        Self::SsoSessionNotFound { name: name.into() }
    }

    pub fn command_failed(command: impl Into<String>, error: impl Into<String>) -> Self {
        Self::CommandFailed {
            command: command.into(),
            error: error.into(),
        }
    }

    pub fn init_aborted(reason: impl Into<String>) -> Self {
        Self::InitAborted {
            reason: reason.into(),
        }
    }
}
