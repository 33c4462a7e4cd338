use serde_json::Value;

use super::{error::DictionaryError, locale::LocaleCode, phrase::PhraseTree};

/// All phrases for one locale.
#[derive(Debug, Clone)]
pub struct Dictionary {
    pub locale: LocaleCode,
    pub phrases: PhraseTree,
}

impl Dictionary {
    /// The locale is normalized, so `"EN"` and `"en"` name the same dictionary.
    pub fn new(locale: impl Into<LocaleCode>, phrases: PhraseTree) -> Self {
        Self {
            locale: locale.into(),
            phrases,
        }
    }

    pub fn from_json(locale: impl Into<LocaleCode>, value: &Value) -> Result<Self, DictionaryError> {
        Ok(Self::new(locale, PhraseTree::from_json(value)?))
    }
}
