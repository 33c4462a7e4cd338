use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Ok, Result, bail};
use serde::{Deserialize, Serialize};

use crate::core::{LocaleCode, ProviderConfig};

pub const CONFIG_FILE_NAME: &str = ".phrasebookrc.json";

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_messages_root")]
    pub messages_root: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_locale: Option<LocaleCode>,
    #[serde(default)]
    pub quiet: bool,
    #[serde(default = "default_target_attribute")]
    pub target_attribute: String,
    #[serde(default)]
    pub ignore_attributes: bool,
    #[serde(default)]
    pub remove_attributes_on_render: bool,
}

fn default_messages_root() -> String {
    "./messages".to_string()
}

fn default_target_attribute() -> String {
    "phrase".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            messages_root: default_messages_root(),
            default_locale: None,
            quiet: false,
            target_attribute: default_target_attribute(),
            ignore_attributes: false,
            remove_attributes_on_render: false,
        }
    }
}

impl Config {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        if self.messages_root.trim().is_empty() {
            bail!("'messagesRoot' must not be empty");
        }

        let attribute = &self.target_attribute;
        if attribute.is_empty() || attribute.chars().any(char::is_whitespace) {
            bail!(
                "Invalid 'targetAttribute': \"{}\" (must be non-empty and contain no whitespace)",
                attribute
            );
        }

        if let Some(locale) = &self.default_locale
            && locale.is_empty()
        {
            bail!("'defaultLocale' must not be empty when set");
        }

        Ok(())
    }

    /// The subset of options the translation provider consumes.
    pub fn provider_config(&self) -> ProviderConfig {
        ProviderConfig {
            default_locale: self.default_locale.clone(),
            quiet: self.quiet,
        }
    }

    /// Messages directory resolved against `root`.
    pub fn messages_dir(&self, root: &Path) -> PathBuf {
        root.join(&self.messages_root)
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {:?}", path))?;
            config.validate()?;
            Ok(ConfigLoadResult {
                config,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            from_file: false,
        }),
    }
}
