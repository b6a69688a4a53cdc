pub mod config;
pub mod driver;
pub mod init;
pub mod interactive;
pub mod projects;
pub mod prompt;
pub mod show;
pub mod sso;

pub use config::*;
pub use init::*;
pub use interactive::execute_interactive;
pub use projects::*;
pub use show::*;
pub use sso::*;
