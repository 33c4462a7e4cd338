use std::{
    env,
    path::{Path, PathBuf},
};

use anyhow::{Context as _, Result};

use crate::{
    cli::args::CommonArgs,
    config::{CONFIG_FILE_NAME, Config, load_config},
    core::{
        CollectingSink, LocaleCode, Provider,
        parsers::json::{ScanMessagesResult, scan_message_files},
    },
};

/// Configuration and loaded message files for one command run.
///
/// Command-line overrides are applied on top of the config file before
/// anything is loaded.
pub struct Project {
    pub root_dir: PathBuf,
    pub config: Config,
    pub from_file: bool,
    pub messages: ScanMessagesResult,
    pub verbose: bool,
}

impl Project {
    /// Load from the current working directory.
    pub fn load(args: &CommonArgs) -> Result<Self> {
        let root_dir = env::current_dir().context("Failed to read current directory")?;
        Self::load_from(&root_dir, args)
    }

    pub fn load_from(root_dir: &Path, args: &CommonArgs) -> Result<Self> {
        let config_result = load_config(root_dir)?;

        if args.verbose && !config_result.from_file {
            eprintln!(
                "Note: No {} found, using default configuration",
                CONFIG_FILE_NAME
            );
        }

        let mut config = config_result.config;
        if let Some(messages_root) = &args.messages_root {
            config.messages_root = messages_root.to_string_lossy().to_string();
        }
        if let Some(locale) = &args.default_locale {
            config.default_locale = Some(LocaleCode::new(locale));
        }
        config.validate()?;

        let messages = scan_message_files(config.messages_dir(root_dir))?;

        Ok(Self {
            root_dir: root_dir.to_path_buf(),
            config,
            from_file: config_result.from_file,
            messages,
            verbose: args.verbose,
        })
    }

    /// A provider over every loaded dictionary, reporting into `sink`.
    pub fn provider(&self, sink: &CollectingSink) -> Provider {
        Provider::builder()
            .config(self.config.provider_config())
            .dictionaries(self.messages.dictionaries().cloned())
            .warnings(sink.clone())
            .build()
    }

    /// Locale other locales are compared against: the configured default
    /// locale when it was loaded, otherwise the first file by name.
    pub fn reference_locale(&self) -> Option<&LocaleCode> {
        let files = &self.messages.files;
        if let Some(preferred) = &self.config.default_locale
            && let Some(found) = files.iter().find(|f| &f.dictionary.locale == preferred)
        {
            return Some(&found.dictionary.locale);
        }
        files.first().map(|f| &f.dictionary.locale)
    }

    /// Path relative to the project root, for display.
    pub fn display_path<'a>(&self, file_path: &'a str) -> &'a str {
        Path::new(file_path)
            .strip_prefix(&self.root_dir)
            .ok()
            .and_then(|p| p.to_str())
            .unwrap_or(file_path)
    }
}
