use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use phrasebook::cli::{Arguments, Command, ExitStatus, init_tracing};

fn main() -> ExitCode {
    let args = Arguments::parse();
    init_tracing(args.verbose());

    if matches!(args.command, Some(Command::Serve)) {
        if let Err(err) = phrasebook::mcp::run_server() {
            eprintln!("{} {:#}", "error:".bold().red(), err);
            return ExitStatus::Error.into();
        }
        return ExitStatus::Success.into();
    }

    match phrasebook::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("{} {:#}", "error:".bold().red(), err);
            ExitStatus::Error.into()
        }
    }
}
