//! CLI for the retrier.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use retrier_core::config;
use retrier_core::retry::Retrier;

use commands::{run_config, run_exec};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "retrier")]
#[command(about = "Run a program again until it succeeds", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Run a program, retrying while it exits non-zero.
    Exec {
        /// Maximum number of attempts (including the first). Defaults to the config value.
        #[arg(long, value_name = "N")]
        max_retries: Option<u32>,
        /// Exit code that means "give up now". May be repeated.
        #[arg(long = "stop-on", value_name = "CODE")]
        stop_on: Vec<i32>,
        /// Program and arguments, after `--`.
        #[arg(last = true, required = true, value_name = "COMMAND")]
        command: Vec<String>,
    },

    /// Show the config file path and effective settings.
    Config,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();

        match cli.command {
            CliCommand::Exec {
                max_retries,
                stop_on,
                command,
            } => {
                let retrier = match max_retries {
                    Some(n) => Retrier::new(n),
                    None => {
                        let cfg = config::load_or_init()?;
                        tracing::debug!("loaded config: {:?}", cfg);
                        Retrier::from_config(&cfg)
                    }
                };
                run_exec(&retrier, &command, &stop_on)?;
            }
            CliCommand::Config => run_config()?,
        }

        Ok(())
    }
}
