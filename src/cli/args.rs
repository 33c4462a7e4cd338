//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `translate`: Translate one token against the project's message files
//! - `keys`: List every token of a locale with a preview of its phrase
//! - `locales`: List loaded locales and the inferred initial locale
//! - `check`: Compare locales against the reference locale
//! - `init`: Initialize a phrasebook configuration file
//! - `serve`: Start MCP server for AI integration

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        self.common().is_some_and(|common| common.verbose)
    }

    pub fn common(&self) -> Option<&CommonArgs> {
        match &self.command {
            Some(Command::Translate(cmd)) => Some(&cmd.common),
            Some(Command::Keys(cmd)) => Some(&cmd.common),
            Some(Command::Locales(cmd)) => Some(&cmd.common),
            Some(Command::Check(cmd)) => Some(&cmd.common),
            Some(Command::Init) | Some(Command::Serve) | None => None,
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Messages directory path (overrides config file)
    #[arg(long)]
    pub messages_root: Option<PathBuf>,

    /// Preferred initial locale (overrides config file)
    #[arg(long)]
    pub default_locale: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct TranslateCommand {
    /// Dot-separated token, e.g. `nav.home` or `cart.items.[...]`
    pub token: String,

    /// Translate in this locale instead of the current one
    #[arg(long)]
    pub locale: Option<String>,

    /// Interpolation data as a JSON object, e.g. '{"name": "Ada"}'
    #[arg(long)]
    pub data: Option<String>,

    /// Count used for variant selection (overrides `count` in --data)
    #[arg(long, allow_negative_numbers = true)]
    pub count: Option<f64>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct KeysCommand {
    /// Locale to list (default: the inferred initial locale)
    #[arg(long)]
    pub locale: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct LocalesCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Translate a token using the project's message files
    Translate(TranslateCommand),
    /// List every token of a locale with a preview of its phrase
    Keys(KeysCommand),
    /// List loaded locales and their key counts
    Locales(LocalesCommand),
    /// Check locales for missing, extra and mismatched tokens
    Check(CheckCommand),
    /// Initialize a new .phrasebookrc.json configuration file
    Init,
    /// Start MCP server for AI coding agents
    Serve,
}
