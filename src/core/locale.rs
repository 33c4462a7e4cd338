//! Locale codes and initial-locale inference.

use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};

/// A normalized language identifier (e.g. `"en"`, `"de"`, `"zh-cn"`).
///
/// Codes are trimmed and lowercased on construction, so `"EN"` and `"en"`
/// select the same dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct LocaleCode(String);

impl LocaleCode {
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The primary language subtag: `"en-us"` -> `"en"`, `"pt_BR.UTF-8"` -> `"pt"`.
    pub fn primary_subtag(&self) -> LocaleCode {
        Self::new(primary_subtag(&self.0))
    }
}

fn primary_subtag(tag: &str) -> &str {
    tag.split(['-', '_', '.', '@']).next().unwrap_or_default()
}

impl fmt::Display for LocaleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for LocaleCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for LocaleCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LocaleCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for LocaleCode {
    fn from(code: String) -> Self {
        Self::new(code)
    }
}

impl From<LocaleCode> for String {
    fn from(code: LocaleCode) -> Self {
        code.0
    }
}

/// Reduce host language tags to ordered, deduplicated primary subtags.
///
/// ```
/// use phrasebook::core::{LocaleCode, normalize_preferences};
///
/// let prefs = normalize_preferences(["de-DE", "en-US", "de-AT", "en"]);
/// assert_eq!(prefs, vec![LocaleCode::new("de"), LocaleCode::new("en")]);
/// ```
pub fn normalize_preferences<I, S>(tags: I) -> Vec<LocaleCode>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut seen = Vec::new();
    for tag in tags {
        let code = LocaleCode::new(primary_subtag(tag.as_ref().trim()));
        if !code.is_empty() && !seen.contains(&code) {
            seen.push(code);
        }
    }
    seen
}

/// Pick the locale a provider starts in.
///
/// Priority:
/// 1. `explicit`, when it names an available locale
/// 2. the first ambient preference, when available
/// 3. the first remaining ambient preference that is available
/// 4. the first available locale (insertion order)
/// 5. `None` when nothing is available
pub fn infer_initial_locale(
    available: &[LocaleCode],
    explicit: Option<&LocaleCode>,
    ambient: &[LocaleCode],
) -> Option<LocaleCode> {
    if let Some(explicit) = explicit
        && available.contains(explicit)
    {
        return Some(explicit.clone());
    }

    if let Some((first, rest)) = ambient.split_first() {
        if available.contains(first) {
            return Some(first.clone());
        }
        if let Some(matched) = rest.iter().find(|code| available.contains(code)) {
            return Some(matched.clone());
        }
    }

    available.first().cloned()
}
