use clap::{Parser, Subcommand};
use lazytf::commands::*;
use lazytf::core::{config::Config, error::Result, print_error};
use std::env;

#[derive(Parser)]
#[command(name = "lazytf")]
#[command(about = "Discover local Terraform projects and initialize them against the right backend")]
#[command(version = "0.1.0")]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    /// Directory to search for projects instead of the configured ones (repeatable)
    #[arg(long = "search-path", global = true)]
    search_paths: Vec<String>,

    /// Directory name pattern to skip instead of the configured ones (repeatable)
    #[arg(long = "ignore", global = true)]
    ignore_patterns: Vec<String>,

    /// Starts the interactive session when omitted
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List discovered Terraform projects
    Projects,
    /// Show environments, backend configs and backend state of a project
    Show {
        /// Project name or index from `lazytf projects`
        project: String,
    },
    /// Run terraform init for a project environment
    Init {
        /// Project name or index from `lazytf projects`
        project: String,
        /// Environment (var file name without .tfvars); asked for when omitted
        env: Option<String>,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Log in with an AWS SSO session from ~/.aws/config
    SsoLogin {
        /// Session name; asked for when omitted
        session: Option<String>,
    },
    /// Show the config file location and effective config
    Config {
        /// Write the default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

fn run(cli: Cli) -> Result<()> {
    let config = match cli.command {
        None => Config::load_or_create()?,
        Some(_) => Config::load()?,
    }
    .with_overrides(cli.search_paths, cli.ignore_patterns);

    match cli.command {
        None => execute_interactive(&config),
        Some(Commands::Projects) => execute_projects(&config),
        Some(Commands::Show { project }) => execute_show(&config, &project),
        Some(Commands::Init { project, env, yes }) => execute_init(&config, &project, env, yes),
        Some(Commands::SsoLogin { session }) => execute_sso_login(session),
        Some(Commands::Config { init }) => execute_config(&config, init),
    }
}

fn main() {
    let cli = Cli::parse();

    // Configure logging based on --debug flag
    if cli.debug {
        env::set_var("RUST_LOG", "debug");
    } else {
        env::set_var("RUST_LOG", "info");
    }
    env_logger::init();

    if let Err(e) = run(cli) {
        print_error(&e.to_string());
        std::process::exit(1);
    }
}
