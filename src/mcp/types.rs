use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

// ============================================================
// Params
// ============================================================

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetConfigParams {
    /// Absolute path to the project root (where .phrasebookrc.json lives)
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetLocalesParams {
    /// Absolute path to the project root
    pub project_root_path: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslateParams {
    /// Absolute path to the project root
    pub project_root_path: String,
    /// Dot-separated token, e.g. "nav.home" or "cart.items.[...]"
    pub token: String,
    /// Locale to translate in (default: the project's initial locale)
    pub locale: Option<String>,
    /// Interpolation values; "count" selects a plural variant
    pub data: Option<Map<String, Value>>,
}

// ============================================================
// Config Types (get_config)
// ============================================================

/// Configuration DTO for MCP
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigDto {
    /// True if config was loaded from a file, false if using defaults
    pub from_file: bool,
    pub config: ConfigValues,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigValues {
    pub messages_root: String,
    pub default_locale: Option<String>,
    pub quiet: bool,
    pub target_attribute: String,
    pub ignore_attributes: bool,
    pub remove_attributes_on_render: bool,
}

impl From<crate::config::Config> for ConfigValues {
    fn from(c: crate::config::Config) -> Self {
        Self {
            messages_root: c.messages_root,
            default_locale: c.default_locale.map(String::from),
            quiet: c.quiet,
            target_attribute: c.target_attribute,
            ignore_attributes: c.ignore_attributes,
            remove_attributes_on_render: c.remove_attributes_on_render,
        }
    }
}

// ============================================================
// Locales Types (get_locales)
// ============================================================

/// Result of get_locales operation
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocalesResult {
    pub messages_root: String,
    /// Locale chosen when nothing else is requested
    pub current_locale: Option<String>,
    pub locales: Vec<LocaleInfo>,
    /// Files that could not be loaded
    pub warnings: Vec<FileWarning>,
}

/// Information about a single locale
#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct LocaleInfo {
    pub locale: String,
    pub file_path: String,
    pub key_count: usize,
}

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct FileWarning {
    pub file_path: String,
    pub error: String,
}

// ============================================================
// Translate Types (translate)
// ============================================================

#[derive(Debug, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TranslateResult {
    /// Locale the token was looked up in
    pub locale: Option<String>,
    pub token: String,
    /// The translation, or the token itself on fallback
    pub result: String,
    /// False when the result is a fallback
    pub translated: bool,
    pub warnings: Vec<String>,
}
