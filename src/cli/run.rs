use anyhow::{Result, bail};

use super::{
    args::{Arguments, Command},
    commands::{check::check, init::init, keys::keys, locales::locales, translate::translate},
    exit_status::ExitStatus,
};

/// Dispatch to the command handler.
///
/// `serve` is handled by the binary before this is called, since it owns
/// the async runtime.
pub fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Translate(cmd)) => translate(cmd),
        Some(Command::Keys(cmd)) => keys(cmd),
        Some(Command::Locales(cmd)) => locales(cmd),
        Some(Command::Check(cmd)) => check(cmd),
        Some(Command::Init) => init(),
        Some(Command::Serve) => {
            bail!("Serve command should be handled before run()")
        }
        None => {
            bail!("No command provided. Use --help to see available commands.")
        }
    }
}
