//! Core functionality for lazytf.
//!
//! Discovery, backend inference and matching are synchronous reads of the
//! filesystem. The [`session`] module turns their results into the modal
//! decision flow that ends in a `terraform init` run.

pub mod aws;
pub mod backend;
pub mod backend_state;
pub mod config;
pub mod dirs;
pub mod discovery;
pub mod error;
pub mod executor;
pub mod modal;
pub mod models;
pub mod output;
pub mod paths;
pub mod render;
pub mod session;
pub mod terraform;
pub mod theme;
pub mod varfiles;

// === Error handling ===
pub use error::{LazyTfError, Result};

// === Configuration ===
pub use config::Config;

// === Discovery snapshots ===
pub use models::{BackendState, BackendVarFile, InitOptions, Mode, Project, VarFile};

// === Discovery and inference ===
pub use backend::{discover_backend_var_files, extract_env_from_backend_file, match_backends_for_env};
pub use backend_state::{detect_current_backend, infer_env_from_backend_config};
pub use discovery::{determine_mode, discover_projects, is_initialized, is_terraform_project};
pub use paths::{expand_home, should_ignore};
pub use varfiles::discover_var_files;

// === Process execution ===
pub use executor::{execute_streaming, CommandEvent, CommandStream};

// === Interactive session ===
pub use modal::{Modal, ModalKey, PendingAction, PendingChoice};
pub use session::{Event, Intent, Session, ViewMode};

// === Output formatting ===
pub use output::{print_error, print_info, print_section_header, print_success, print_warning};
pub use render::Renderer;
pub use theme::Theme;
