//! CLI entry and dispatch.

use std::path::PathBuf;

use anyhow::{Context, Result};
use authform_core::Mode;
use authform_core::config::{self, Config};
use clap::Parser;

use crate::logging;

pub mod commands;

#[derive(Parser)]
#[command(name = "authform")]
#[command(version)]
#[command(about = "Login/signup form in your terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Use this config file instead of ${AUTHFORM_HOME}/config.toml
    #[arg(long, global = true, value_name = "PATH", env = "AUTHFORM_CONFIG")]
    config: Option<PathBuf>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Validate a submission without opening the form
    Check {
        /// Form mode to submit in
        #[arg(long, default_value = "login")]
        mode: Mode,

        #[arg(long, default_value = "")]
        username: String,

        /// Only checked in signup mode
        #[arg(long, default_value = "")]
        email: String,

        #[arg(long, default_value = "")]
        password: String,

        /// Only checked in signup mode
        #[arg(long = "confirm-password", default_value = "")]
        confirm_password: String,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // Guard must outlive everything that logs
    let _log_guard = logging::init();

    dispatch(cli)
}

fn dispatch(cli: Cli) -> Result<()> {
    let config_path = cli.config.unwrap_or_else(config::paths::config_path);

    // default to the interactive form
    let Some(command) = cli.command else {
        let config = Config::load_from(&config_path).context("load config")?;
        return commands::form::run(&config);
    };

    match command {
        Commands::Check {
            mode,
            username,
            email,
            password,
            confirm_password,
        } => commands::check::run(&commands::check::CheckOptions {
            mode,
            username,
            email,
            password,
            confirm_password,
        }),
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path(&config_path);
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(&config_path),
        },
    }
}
