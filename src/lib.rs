//! LazyTF - a terminal front-end for local Terraform projects.
//!
//! The library discovers Terraform projects, their var files and backend
//! configuration files, infers which environment a project is currently
//! initialized against, and drives `terraform init` through an interactive
//! selection state machine.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module:
//! - Project, var-file and backend-file discovery
//! - Backend state inference and environment matching
//! - The interactive [`Session`] and its modals
//! - Streaming command execution
//! - Error handling and result types

pub mod commands;
pub mod core;

pub use crate::core::{
    detect_current_backend,
    // Discovery
    discover_backend_var_files,
    discover_projects,
    discover_var_files,
    match_backends_for_env,

    BackendState,
    BackendVarFile,
    CommandEvent,
    Config,
    Event,
    InitOptions,
    Intent,
    // Error handling
    LazyTfError,
    Mode,
    Modal,
    ModalKey,
    Project,
    Result,
    // Interactive session
    Session,
    VarFile,
};
