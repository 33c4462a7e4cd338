//! Side channel for recoverable conditions.
//!
//! Nothing here stops a translation: the provider reports the condition and
//! carries on, returning the token where text was expected.

use std::sync::{Arc, Mutex};

use thiserror::Error;

use super::{error::TranslateError, locale::LocaleCode};

/// A recoverable condition worth telling a developer about.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Warning {
    #[error("no dictionaries provided")]
    NoDictionaries,
    #[error("locale '{locale}' does not exist in a dictionary; locale was not set")]
    UnknownLocale { locale: LocaleCode },
    #[error(transparent)]
    Translate(#[from] TranslateError),
    #[error("missing target for rendering")]
    MissingRenderTarget,
}

/// Receives warnings from a provider or renderer.
pub trait WarningSink: Send + Sync {
    fn warn(&self, warning: &Warning);
}

impl<F> WarningSink for F
where
    F: Fn(&Warning) + Send + Sync,
{
    fn warn(&self, warning: &Warning) {
        self(warning)
    }
}

/// Default sink: emits each warning as a `tracing` event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl WarningSink for TracingSink {
    fn warn(&self, warning: &Warning) {
        match warning {
            Warning::Translate(error) => tracing::warn!(
                token = error.token(),
                locale = %error.locale(),
                "{}",
                warning
            ),
            _ => tracing::warn!("{}", warning),
        }
    }
}

/// Keeps every warning in memory. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct CollectingSink {
    warnings: Arc<Mutex<Vec<Warning>>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything collected so far.
    pub fn warnings(&self) -> Vec<Warning> {
        self.warnings
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Remove and return everything collected so far.
    pub fn take(&self) -> Vec<Warning> {
        self.warnings
            .lock()
            .map(|mut guard| std::mem::take(&mut *guard))
            .unwrap_or_default()
    }
}

impl WarningSink for CollectingSink {
    fn warn(&self, warning: &Warning) {
        if let Ok(mut guard) = self.warnings.lock() {
            guard.push(warning.clone());
        }
    }
}
