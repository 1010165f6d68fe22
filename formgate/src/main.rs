// formgate/src/main.rs
//! FormGate entry point.
//!
//! Loads the gatekeeper config and dispatches to the selected subcommand.

use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;

use formgate::cli::{Cli, Commands};
use formgate::commands::{error_msg, policy, replay, submit};
use formgate::logger;
use formgate_core::GatekeeperConfig;

fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(e) => {
            error_msg(format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    // A missing .env file is fine.
    let _ = dotenvy::dotenv();

    let args = Cli::parse();

    if args.quiet {
        logger::init_logger(Some(log::LevelFilter::Off));
    } else if args.debug {
        logger::init_logger(Some(log::LevelFilter::Debug));
    } else {
        logger::init_logger(None);
    }

    let config = GatekeeperConfig::load_or_default(args.config.as_deref())
        .context("Failed to load gatekeeper config")?;

    match args.command {
        Commands::Submit(cmd) => submit::run_submit(cmd, config, args.quiet),
        Commands::Replay(cmd) => replay::run_replay(cmd, config, args.quiet),
        Commands::CheckLink { href } => policy::run_check_link(&href),
        Commands::CheckScript { src } => policy::run_check_script(&src, &config),
    }
}
