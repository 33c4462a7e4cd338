use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use rayon::prelude::*;
use serde_json::Value;

use crate::core::{Dictionary, LocaleCode};

/// A warning from scanning message files.
#[derive(Debug, Clone)]
pub struct MessageScanWarning {
    pub file_path: String,
    pub error: String,
}

/// A dictionary together with the file it came from.
#[derive(Debug, Clone)]
pub struct MessageFile {
    pub file_path: String,
    pub dictionary: Dictionary,
}

#[derive(Debug, Default)]
pub struct ScanMessagesResult {
    /// Loaded files, ordered by file name.
    pub files: Vec<MessageFile>,
    pub warnings: Vec<MessageScanWarning>,
}

impl ScanMessagesResult {
    pub fn dictionaries(&self) -> impl Iterator<Item = &Dictionary> {
        self.files.iter().map(|f| &f.dictionary)
    }

    pub fn into_dictionaries(self) -> Vec<Dictionary> {
        self.files.into_iter().map(|f| f.dictionary).collect()
    }
}

pub fn parse_json_file(path: &Path, locale: &str) -> Result<Dictionary> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {:?}", path))?;

    let json: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON file: {:?}", path))?;

    Dictionary::from_json(locale, &json)
        .with_context(|| format!("Invalid dictionary in {:?}", path))
}

/// Extracts locale from filename.
///
/// Examples:
/// - "en.json" -> Some("en")
/// - "zh-CN.json" -> Some("zh-cn")
/// - "/path/to/messages/ja.json" -> Some("ja")
pub fn extract_locale(path: impl AsRef<Path>) -> Option<LocaleCode> {
    let path = path.as_ref();
    path.file_stem()
        .and_then(|s| s.to_str())
        .map(LocaleCode::new)
        .filter(|code| !code.is_empty())
}

pub fn scan_message_files(message_dir: impl AsRef<Path>) -> Result<ScanMessagesResult> {
    let message_dir = message_dir.as_ref();

    if !message_dir.exists() {
        bail!(
            "Messages directory '{}' does not exist.\n\
             Hint: Check your .phrasebookrc.json 'messagesRoot' setting.",
            message_dir.display()
        );
    }

    if !message_dir.is_dir() {
        bail!("'{}' is not a directory.", message_dir.display());
    }

    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(message_dir)? {
        let path = entry?.path();
        if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some("json") {
            paths.push(path);
        }
    }
    paths.sort();

    let parsed: Vec<(PathBuf, Result<Dictionary>)> = paths
        .into_par_iter()
        .filter_map(|path| {
            let locale = extract_locale(&path)?;
            let dictionary = parse_json_file(&path, locale.as_str());
            Some((path, dictionary))
        })
        .collect();

    let mut result = ScanMessagesResult::default();
    for (path, dictionary) in parsed {
        let file_path = path.to_string_lossy().to_string();
        match dictionary {
            Ok(dictionary) => {
                tracing::debug!(
                    locale = %dictionary.locale,
                    phrases = dictionary.phrases.leaf_count(),
                    file = %file_path,
                    "loaded dictionary"
                );
                result.files.push(MessageFile {
                    file_path,
                    dictionary,
                });
            }
            Err(e) => {
                result.warnings.push(MessageScanWarning {
                    file_path,
                    error: format!("{:#}", e),
                });
            }
        }
    }

    Ok(result)
}
