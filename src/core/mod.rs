//! Translation engine.
//!
//! ## Module Structure
//!
//! - `locale`: Locale codes and initial-locale inference
//! - `environment`: Ambient locale preferences from the host
//! - `phrase`: Phrase model built at ingestion
//! - `dictionary`: A locale paired with its phrase tree
//! - `resolve`: Token parsing and tree traversal
//! - `plural`: Numeric variant selection
//! - `interpolate`: `{{placeholder}}` substitution
//! - `data`: Translation data with reserved `count`/`ctx` keys
//! - `provider`: Current locale, dictionaries and the translate operation
//! - `warning`: Warning channel
//! - `error`: Ingestion and translation errors
//! - `parsers`: Dictionary loading from message files

pub mod data;
pub mod dictionary;
pub mod environment;
pub mod error;
pub mod interpolate;
pub mod locale;
pub mod parsers;
pub mod phrase;
pub mod plural;
pub mod provider;
pub mod resolve;
pub mod warning;

pub use data::{COUNT_KEY, CTX_KEY, TranslationData};
pub use dictionary::Dictionary;
pub use environment::{Environment, StaticEnvironment, SystemEnvironment};
pub use error::{DictionaryError, MalformedReason, TranslateError};
pub use interpolate::{MISSING_VALUE, display_value, interpolate, placeholders};
pub use locale::{LocaleCode, infer_initial_locale, normalize_preferences};
pub use phrase::{ContextPhrase, Phrase, PhraseKind, PhraseTree, TokenEntry};
pub use plural::{VariantMap, normalize_count};
pub use provider::{Provider, ProviderBuilder, ProviderConfig, Subscription};
pub use resolve::{VARIANT_MARKER, resolve, token_segments};
pub use warning::{CollectingSink, TracingSink, Warning, WarningSink};
