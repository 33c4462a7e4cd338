//! Command-line interface layer.
//!
//! - `args`: clap definitions
//! - `commands`: one handler per subcommand
//! - `report`: cargo-style terminal output
//! - `exit_status`: process exit codes

use std::{
    env,
    io::{self, IsTerminal},
};

use anyhow::Result;
use tracing_subscriber::EnvFilter;

mod args;
pub mod commands;
mod exit_status;
pub mod report;
mod run;

pub use args::{
    Arguments, CheckCommand, Command, CommonArgs, KeysCommand, LocalesCommand, TranslateCommand,
};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    run::run(args)
}

/// Install the stderr `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise warnings only, or debug with `verbose`.
pub fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("phrasebook={}", default_level)));
    let ansi = io::stderr().is_terminal() && env::var_os("NO_COLOR").is_none();

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_ansi(ansi)
        .without_time()
        .try_init();
}
