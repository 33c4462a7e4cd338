//! Numeric variant selection by closest lower bound.
//!
//! A [`VariantMap`] holds author-defined thresholds rather than CLDR
//! categories: `{0: "none", 1: "one", 5: "several", 10: "many"}` maps a count
//! of 7 to the `5` bucket.

use std::collections::BTreeMap;

use super::error::MalformedReason;

/// Non-empty mapping from non-negative integer thresholds to phrase text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantMap {
    variants: BTreeMap<u64, String>,
}

impl VariantMap {
    /// Build a map from string keys, as they appear in dictionary files.
    ///
    /// Fails if any key is not a non-negative integer or if there are no
    /// entries at all.
    pub fn from_entries<I, K, V>(entries: I) -> Result<Self, MalformedReason>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut variants = BTreeMap::new();
        for (key, value) in entries {
            let key = key.as_ref();
            let threshold = parse_threshold(key).ok_or_else(|| MalformedReason::NonNumericKey {
                key: key.to_string(),
            })?;
            variants.insert(threshold, value.into());
        }
        if variants.is_empty() {
            return Err(MalformedReason::EmptyVariants);
        }
        Ok(Self { variants })
    }

    /// Build a map from numeric thresholds.
    pub fn from_thresholds<I, V>(entries: I) -> Result<Self, MalformedReason>
    where
        I: IntoIterator<Item = (u64, V)>,
        V: Into<String>,
    {
        let variants: BTreeMap<u64, String> = entries
            .into_iter()
            .map(|(threshold, value)| (threshold, value.into()))
            .collect();
        if variants.is_empty() {
            return Err(MalformedReason::EmptyVariants);
        }
        Ok(Self { variants })
    }

    /// Pick the variant for `count`.
    ///
    /// The greatest threshold `<= count` wins; a count below every threshold
    /// falls back to the smallest one.
    pub fn select(&self, count: Option<f64>) -> &str {
        let count = normalize_count(count);
        let chosen = if count < 0.0 {
            None
        } else {
            // Saturating cast: fractional counts floor, huge counts clamp.
            let bound = count.floor() as u64;
            self.variants.range(..=bound).next_back()
        };

        chosen
            .or_else(|| self.variants.iter().next())
            .map(|(_, text)| text.as_str())
            .unwrap_or_default()
    }

    /// Text stored under exactly `key`, as written in a dictionary file.
    pub fn get(&self, key: &str) -> Option<&str> {
        let threshold = parse_threshold(key)?;
        if threshold.to_string() != key {
            return None;
        }
        self.variants.get(&threshold).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.variants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// Thresholds and their text, ascending.
    pub fn iter(&self) -> impl Iterator<Item = (u64, &str)> {
        self.variants
            .iter()
            .map(|(threshold, text)| (*threshold, text.as_str()))
    }
}

/// Apply the singular default: a missing count means `1`, while an explicit
/// `0` stays `0`.
pub fn normalize_count(count: Option<f64>) -> f64 {
    match count {
        Some(c) if c == 0.0 => 0.0,
        Some(c) if c.is_nan() => 1.0,
        Some(c) => c,
        None => 1.0,
    }
}

fn parse_threshold(key: &str) -> Option<u64> {
    if key.is_empty() || !key.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    key.parse().ok()
}
