//! Error types for dictionary ingestion and translation.

use thiserror::Error;

use super::locale::LocaleCode;

/// Why a resolved leaf cannot produce text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MalformedReason {
    /// A variant map key that is not a non-negative integer.
    #[error("variant key '{key}' is not a non-negative integer")]
    NonNumericKey { key: String },
    /// A variant map without entries.
    #[error("variant map has no entries")]
    EmptyVariants,
    /// The token points at a nested group of phrases instead of a leaf.
    #[error("token resolves to a group of phrases, not a phrase")]
    NotALeaf,
}

/// Recoverable failures of a single translation.
///
/// [`Provider::translate`](super::Provider::translate) converts these into
/// warnings and returns the token; [`Provider::try_translate`](super::Provider::try_translate)
/// hands them to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    #[error("no dictionary found for locale '{locale}' (token '{token}')")]
    NoDictionary { locale: LocaleCode, token: String },
    #[error("no phrase could be matched to token '{token}' in locale '{locale}'")]
    NotFound { locale: LocaleCode, token: String },
    #[error("malformed phrase '{token}' in locale '{locale}': {reason}")]
    MalformedPhrase {
        locale: LocaleCode,
        token: String,
        reason: MalformedReason,
    },
}

impl TranslateError {
    pub fn token(&self) -> &str {
        match self {
            Self::NoDictionary { token, .. }
            | Self::NotFound { token, .. }
            | Self::MalformedPhrase { token, .. } => token,
        }
    }

    pub fn locale(&self) -> &LocaleCode {
        match self {
            Self::NoDictionary { locale, .. }
            | Self::NotFound { locale, .. }
            | Self::MalformedPhrase { locale, .. } => locale,
        }
    }
}

/// Failures while turning JSON into a dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DictionaryError {
    #[error("dictionary root must be a JSON object, found {kind}")]
    RootNotObject { kind: &'static str },
    #[error("unsupported {kind} value at '{path}'; phrases must be strings, objects or arrays")]
    UnsupportedValue { path: String, kind: &'static str },
}
