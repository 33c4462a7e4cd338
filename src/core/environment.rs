//! Host environment seam for ambient locale preferences.
//!
//! Inference never reads process or OS state directly; it asks an
//! [`Environment`]. Servers and tests supply a [`StaticEnvironment`].

use sys_locale::get_locales;

use super::locale::{LocaleCode, normalize_preferences};

/// Supplies the user's ordered language preferences.
pub trait Environment {
    /// Ordered, deduplicated primary subtags, most preferred first.
    fn ambient_locale_preferences(&self) -> Vec<LocaleCode>;
}

/// Reads preferences from the operating system (`LANG`, `LC_*`, platform APIs).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn ambient_locale_preferences(&self) -> Vec<LocaleCode> {
        normalize_preferences(get_locales())
    }
}

/// A fixed list of preferences.
#[derive(Debug, Clone, Default)]
pub struct StaticEnvironment {
    preferences: Vec<LocaleCode>,
}

impl StaticEnvironment {
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            preferences: normalize_preferences(tags),
        }
    }

    /// No preferences at all; inference falls through to the dictionaries.
    pub fn empty() -> Self {
        Self::default()
    }
}

impl Environment for StaticEnvironment {
    fn ambient_locale_preferences(&self) -> Vec<LocaleCode> {
        self.preferences.clone()
    }
}
