use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;

mod config;
mod demo;
mod report;
mod session;
mod state;

use config::{load_config, validate_budget, LogSection};

#[derive(Parser, Debug)]
#[command(
    name = "pawpal",
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("PAWPAL_BUILD_SHA"), ")"),
    about = "Plan today's pet care within your available time"
)]
struct Cli {
    /// Only log errors
    #[arg(long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Log scheduling decisions (debug level)
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the plan for a sample two-pet household
    Demo {
        /// Available minutes (10-480); defaults to config [owner].available_minutes
        #[arg(long)]
        budget: Option<u32>,
    },

    /// Interactive session: add pets and tasks, then generate today's schedule
    Plan {
        /// Starting available minutes (10-480); defaults to config [owner].available_minutes
        #[arg(long)]
        budget: Option<u32>,
    },

    /// Config file commands
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Write a default config.toml if none exists
    Init,

    /// Print the effective config
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Only the commands that use the config fail on a broken file.
    let loaded = load_config();
    let level = match &loaded {
        Ok(cfg) => cfg.log.level.clone(),
        Err(_) => LogSection::default().level,
    };
    init_tracing(cli.quiet, cli.verbose, &level)?;

    match cli.command {
        Command::Demo { budget } => {
            let cfg = loaded?;
            let minutes = resolve_budget(budget, cfg.owner.available_minutes)?;
            demo::run_demo(&cfg.owner.name, minutes)?;
        }

        Command::Plan { budget } => {
            let cfg = loaded?;
            let minutes = resolve_budget(budget, cfg.owner.available_minutes)?;
            let stdin = io::stdin();
            let mut session =
                session::Session::new(stdin.lock(), io::stdout(), &cfg.owner.name, minutes)?;
            session.run().context("interactive session")?;

            let pets = session.owner().pets().len();
            match session.last_plan() {
                Some(plan) => tracing::info!(pets, summary = %plan.summary(), "session ended"),
                None => tracing::info!(pets, "session ended without a plan"),
            }
        }

        Command::Config { command } => match command {
            ConfigCommand::Init => {
                let (path, written) = config::init_config()?;
                if written {
                    println!("Wrote {}", path.display());
                } else {
                    println!("Config already exists: {}", path.display());
                }
            }
            ConfigCommand::Show => {
                print!("{}", config::describe_config(&config::config_path()?));
            }
        },
    }

    Ok(())
}

fn resolve_budget(flag: Option<u32>, configured: u32) -> Result<u32> {
    validate_budget(flag.unwrap_or(configured)).context("invalid --budget")
}

fn init_tracing(quiet: bool, verbose: bool, configured: &str) -> Result<()> {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        configured
    };

    let filter = tracing_subscriber::EnvFilter::try_from_env("PAWPAL_LOG")
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}
