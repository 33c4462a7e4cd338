//! The translation provider: dictionaries, current locale, listeners.

use std::{fmt, sync::Arc};

use serde_json::Value;

use super::{
    data::TranslationData,
    dictionary::Dictionary,
    environment::{Environment, SystemEnvironment},
    error::{MalformedReason, TranslateError},
    interpolate::interpolate,
    locale::{LocaleCode, infer_initial_locale},
    phrase::Phrase,
    resolve::resolve,
    warning::{TracingSink, Warning, WarningSink},
};

/// Options the provider itself understands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Preferred initial locale; ignored when no dictionary has it.
    pub default_locale: Option<LocaleCode>,
    /// Suppress every warning.
    pub quiet: bool,
}

/// Handle returned by [`Provider::on_language_changed`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Subscription(u64);

type LanguageListener = Box<dyn FnMut(&LocaleCode) + Send>;

/// Resolves tokens against per-locale dictionaries.
///
/// # Example
///
/// ```
/// use phrasebook::core::{Dictionary, PhraseTree, Provider, StaticEnvironment, TranslationData};
///
/// let en = Dictionary::new("en", PhraseTree::new().with("greeting", "Hello {{name}}"));
/// let de = Dictionary::new("DE", PhraseTree::new().with("greeting", "Hallo {{name}}"));
///
/// let mut provider = Provider::builder()
///     .dictionary(en)
///     .dictionary(de)
///     .environment(StaticEnvironment::new(["de-AT"]))
///     .build();
///
/// let data = TranslationData::new().with("name", "Ada");
/// assert_eq!(provider.translate("greeting", Some(&data), None), "Hallo Ada");
///
/// provider.set_language("en");
/// assert_eq!(provider.translate("greeting", Some(&data), None), "Hello Ada");
/// assert_eq!(provider.translate("missing.token", None, None), "missing.token");
/// ```
pub struct Provider {
    config: ProviderConfig,
    dictionaries: Vec<Dictionary>,
    current: Option<LocaleCode>,
    listeners: Vec<(Subscription, LanguageListener)>,
    next_subscription: u64,
    sink: Arc<dyn WarningSink>,
}

impl Provider {
    pub fn builder() -> ProviderBuilder {
        ProviderBuilder::default()
    }

    /// The locale used when `translate` gets no override.
    pub fn get_language(&self) -> Option<&LocaleCode> {
        self.current.as_ref()
    }

    /// Switch the current locale.
    ///
    /// Unknown locales leave the state untouched and emit
    /// [`Warning::UnknownLocale`]. On success every listener is notified
    /// before this returns. Returns whether the locale was set.
    pub fn set_language(&mut self, code: impl Into<LocaleCode>) -> bool {
        let code = code.into();
        if !self.has_locale(&code) {
            self.report(Warning::UnknownLocale { locale: code });
            return false;
        }

        self.current = Some(code.clone());
        for (_, listener) in &mut self.listeners {
            listener(&code);
        }
        true
    }

    /// Register a callback fired after every successful [`set_language`](Self::set_language).
    pub fn on_language_changed(
        &mut self,
        listener: impl FnMut(&LocaleCode) + Send + 'static,
    ) -> Subscription {
        let subscription = Subscription(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((subscription, Box::new(listener)));
        subscription
    }

    /// Remove a listener. Returns false if it was already gone.
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(id, _)| *id != subscription);
        self.listeners.len() != before
    }

    /// Translate `token`, falling back to the token itself on any failure.
    ///
    /// `locale` overrides the current locale for this call only. Failures are
    /// reported through the warning sink unless the provider is quiet.
    pub fn translate(
        &self,
        token: &str,
        data: Option<&TranslationData>,
        locale: Option<&str>,
    ) -> String {
        match self.try_translate(token, data, locale) {
            Ok(text) => text,
            Err(error) => {
                self.report(Warning::Translate(error));
                token.to_string()
            }
        }
    }

    /// Like [`translate`](Self::translate), but failures are returned instead
    /// of reported.
    pub fn try_translate(
        &self,
        token: &str,
        data: Option<&TranslationData>,
        locale: Option<&str>,
    ) -> Result<String, TranslateError> {
        let locale = match locale {
            Some(code) => LocaleCode::new(code),
            None => self.current.clone().unwrap_or_else(|| LocaleCode::new("")),
        };

        let Some(dictionary) = self.dictionary(locale.as_str()) else {
            return Err(TranslateError::NoDictionary {
                locale,
                token: token.to_string(),
            });
        };

        let Some(phrase) = resolve(&dictionary.phrases, token) else {
            return Err(TranslateError::NotFound {
                locale,
                token: token.to_string(),
            });
        };

        let empty = TranslationData::default();
        let data = data.unwrap_or(&empty);

        match &*phrase {
            Phrase::Context(phrase) => {
                let text = phrase.call(data.ctx().unwrap_or(&Value::Null));
                Ok(interpolate(&text, data.values()))
            }
            Phrase::Variants(variants) => {
                let text = variants.select(data.count());
                Ok(interpolate(text, &data.values_with_count()))
            }
            Phrase::Text(text) => Ok(interpolate(text, data.values())),
            Phrase::Tree(_) => Err(TranslateError::MalformedPhrase {
                locale,
                token: token.to_string(),
                reason: MalformedReason::NotALeaf,
            }),
        }
    }

    /// A translate function bound to this provider, for handing to views.
    pub fn translator(&self) -> impl Fn(&str, Option<&TranslationData>) -> String + '_ {
        move |token, data| self.translate(token, data, None)
    }

    pub fn has_locale(&self, code: &LocaleCode) -> bool {
        self.dictionaries.iter().any(|d| &d.locale == code)
    }

    /// Dictionary locales in insertion order.
    pub fn locales(&self) -> impl Iterator<Item = &LocaleCode> {
        self.dictionaries.iter().map(|d| &d.locale)
    }

    pub fn dictionary(&self, locale: &str) -> Option<&Dictionary> {
        let locale = LocaleCode::new(locale);
        self.dictionaries.iter().find(|d| d.locale == locale)
    }

    pub fn dictionaries(&self) -> &[Dictionary] {
        &self.dictionaries
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    pub(crate) fn report(&self, warning: Warning) {
        if !self.config.quiet {
            self.sink.warn(&warning);
        }
    }
}

impl fmt::Debug for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Provider")
            .field("config", &self.config)
            .field("locales", &self.locales().collect::<Vec<_>>())
            .field("current", &self.current)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

/// Typed construction for [`Provider`].
#[derive(Default)]
pub struct ProviderBuilder {
    config: ProviderConfig,
    dictionaries: Vec<Dictionary>,
    environment: Option<Box<dyn Environment>>,
    sink: Option<Arc<dyn WarningSink>>,
}

impl ProviderBuilder {
    pub fn config(mut self, config: ProviderConfig) -> Self {
        self.config = config;
        self
    }

    pub fn default_locale(mut self, locale: impl Into<LocaleCode>) -> Self {
        self.config.default_locale = Some(locale.into());
        self
    }

    pub fn quiet(mut self, quiet: bool) -> Self {
        self.config.quiet = quiet;
        self
    }

    pub fn dictionary(mut self, dictionary: Dictionary) -> Self {
        self.dictionaries.push(dictionary);
        self
    }

    pub fn dictionaries(mut self, dictionaries: impl IntoIterator<Item = Dictionary>) -> Self {
        self.dictionaries.extend(dictionaries);
        self
    }

    /// Source of ambient locale preferences. Defaults to [`SystemEnvironment`].
    pub fn environment(mut self, environment: impl Environment + 'static) -> Self {
        self.environment = Some(Box::new(environment));
        self
    }

    /// Where warnings go. Defaults to [`TracingSink`].
    pub fn warnings(mut self, sink: impl WarningSink + 'static) -> Self {
        self.sink = Some(Arc::new(sink));
        self
    }

    pub fn build(self) -> Provider {
        let mut dictionaries: Vec<Dictionary> = Vec::with_capacity(self.dictionaries.len());
        for dictionary in self.dictionaries {
            match dictionaries.iter_mut().find(|d| d.locale == dictionary.locale) {
                Some(existing) => {
                    tracing::debug!(locale = %dictionary.locale, "replacing duplicate dictionary");
                    existing.phrases = dictionary.phrases;
                }
                None => dictionaries.push(dictionary),
            }
        }

        let environment = self
            .environment
            .unwrap_or_else(|| Box::new(SystemEnvironment));
        let available: Vec<LocaleCode> = dictionaries.iter().map(|d| d.locale.clone()).collect();
        let current = infer_initial_locale(
            &available,
            self.config.default_locale.as_ref(),
            &environment.ambient_locale_preferences(),
        );

        let provider = Provider {
            config: self.config,
            dictionaries,
            current,
            listeners: Vec::new(),
            next_subscription: 0,
            sink: self.sink.unwrap_or_else(|| Arc::new(TracingSink)),
        };

        if provider.dictionaries.is_empty() {
            provider.report(Warning::NoDictionaries);
        }
        provider
    }
}
