//! Phrase model: the tagged union built once when a dictionary is ingested.

use std::{collections::BTreeMap, fmt, sync::Arc};

use serde_json::{Map, Value};

use super::{
    error::{DictionaryError, MalformedReason},
    plural::VariantMap,
    resolve::{VARIANT_MARKER, token_segments},
};

/// A phrase computed from an arbitrary context value.
#[derive(Clone)]
pub struct ContextPhrase(Arc<dyn Fn(&Value) -> String + Send + Sync>);

impl ContextPhrase {
    pub fn new(f: impl Fn(&Value) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    pub fn call(&self, ctx: &Value) -> String {
        (self.0)(ctx)
    }
}

impl fmt::Debug for ContextPhrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ContextPhrase(..)")
    }
}

/// One entry of a dictionary.
#[derive(Debug, Clone)]
pub enum Phrase {
    /// Literal text, interpolated with the translation data.
    Text(String),
    /// Text produced from the `ctx` value of the translation data.
    Context(ContextPhrase),
    /// Plural/numeric variants selected by `count`.
    Variants(VariantMap),
    /// A nested group of phrases.
    Tree(PhraseTree),
}

/// Shape of a phrase, used for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PhraseKind {
    Text,
    Context,
    Variants,
    Tree,
}

impl fmt::Display for PhraseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhraseKind::Text => write!(f, "text"),
            PhraseKind::Context => write!(f, "context"),
            PhraseKind::Variants => write!(f, "variants"),
            PhraseKind::Tree => write!(f, "group"),
        }
    }
}

impl Phrase {
    pub fn text(text: impl Into<String>) -> Self {
        Phrase::Text(text.into())
    }

    pub fn context(f: impl Fn(&Value) -> String + Send + Sync + 'static) -> Self {
        Phrase::Context(ContextPhrase::new(f))
    }

    /// Variants keyed by numeric threshold.
    ///
    /// ```
    /// use phrasebook::core::Phrase;
    ///
    /// let apples = Phrase::variants([(0, "no apples"), (1, "an apple"), (2, "{{count}} apples")]);
    /// assert!(apples.is_ok());
    /// ```
    pub fn variants<I, V>(entries: I) -> Result<Self, MalformedReason>
    where
        I: IntoIterator<Item = (u64, V)>,
        V: Into<String>,
    {
        VariantMap::from_thresholds(entries).map(Phrase::Variants)
    }

    pub fn kind(&self) -> PhraseKind {
        match self {
            Phrase::Text(_) => PhraseKind::Text,
            Phrase::Context(_) => PhraseKind::Context,
            Phrase::Variants(_) => PhraseKind::Variants,
            Phrase::Tree(_) => PhraseKind::Tree,
        }
    }
}

impl From<&str> for Phrase {
    fn from(text: &str) -> Self {
        Phrase::Text(text.to_string())
    }
}

impl From<String> for Phrase {
    fn from(text: String) -> Self {
        Phrase::Text(text)
    }
}

impl From<VariantMap> for Phrase {
    fn from(variants: VariantMap) -> Self {
        Phrase::Variants(variants)
    }
}

impl From<PhraseTree> for Phrase {
    fn from(tree: PhraseTree) -> Self {
        Phrase::Tree(tree)
    }
}

/// A leaf of a [`PhraseTree`], addressed by its full token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenEntry {
    /// Token including markers, e.g. `cart.items.[...]` or `greet.(formal)`.
    pub token: String,
    pub kind: PhraseKind,
    /// Short human-readable rendering of the phrase.
    pub preview: String,
}

/// Nested phrases keyed by path segment.
#[derive(Debug, Clone, Default)]
pub struct PhraseTree {
    entries: BTreeMap<String, Phrase>,
}

impl PhraseTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Convert a JSON object into a phrase tree.
    ///
    /// Objects whose keys are all non-negative integers and whose values are
    /// all strings become [`Phrase::Variants`]; arrays are read as objects keyed
    /// by index. Numbers, booleans and nulls are rejected.
    pub fn from_json(value: &Value) -> Result<Self, DictionaryError> {
        match value {
            Value::Object(map) => tree_from_object(map, ""),
            other => Err(DictionaryError::RootNotObject {
                kind: json_kind(other),
            }),
        }
    }

    /// Insert `phrase` at a dotted `path`, creating intermediate groups.
    ///
    /// Token markers are stripped from the path, so a context phrase inserted
    /// at `(greeting)` is found by the token `(greeting)`. An intermediate
    /// segment that currently holds a leaf is replaced by a group.
    pub fn insert(&mut self, path: &str, phrase: impl Into<Phrase>) {
        let segments: Vec<&str> = token_segments(path)
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect();
        let Some((last, parents)) = segments.split_last() else {
            return;
        };

        let mut node = self;
        for segment in parents {
            let entry = node
                .entries
                .entry(segment.to_string())
                .or_insert_with(|| Phrase::Tree(PhraseTree::new()));
            if !matches!(entry, Phrase::Tree(_)) {
                *entry = Phrase::Tree(PhraseTree::new());
            }
            node = match entry {
                Phrase::Tree(child) => child,
                _ => return,
            };
        }
        node.entries.insert(last.to_string(), phrase.into());
    }

    /// Builder-style [`insert`](Self::insert).
    pub fn with(mut self, path: &str, phrase: impl Into<Phrase>) -> Self {
        self.insert(path, phrase);
        self
    }

    /// Direct child lookup (one segment, no markers).
    pub fn get(&self, key: &str) -> Option<&Phrase> {
        self.entries.get(key)
    }

    /// Number of direct children.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Phrase)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Every leaf with its full token, in sorted key order.
    pub fn tokens(&self) -> Vec<TokenEntry> {
        let mut result = Vec::new();
        collect_tokens(self, String::new(), &mut result);
        result
    }

    /// Number of leaves (texts, context phrases and variant maps).
    pub fn leaf_count(&self) -> usize {
        self.entries
            .values()
            .map(|phrase| match phrase {
                Phrase::Tree(child) => child.leaf_count(),
                _ => 1,
            })
            .sum()
    }
}

fn collect_tokens(tree: &PhraseTree, prefix: String, result: &mut Vec<TokenEntry>) {
    for (key, phrase) in &tree.entries {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        match phrase {
            Phrase::Tree(child) => collect_tokens(child, path, result),
            Phrase::Text(text) => result.push(TokenEntry {
                token: path,
                kind: PhraseKind::Text,
                preview: text.clone(),
            }),
            Phrase::Variants(variants) => result.push(TokenEntry {
                token: format!("{}.{}", path, VARIANT_MARKER),
                kind: PhraseKind::Variants,
                preview: variants
                    .iter()
                    .map(|(threshold, text)| format!("{}: {}", threshold, text))
                    .collect::<Vec<_>>()
                    .join(" | "),
            }),
            Phrase::Context(_) => {
                let token = match path.rsplit_once('.') {
                    Some((parent, name)) => format!("{}.({})", parent, name),
                    None => format!("({})", path),
                };
                result.push(TokenEntry {
                    token,
                    kind: PhraseKind::Context,
                    preview: "<context>".to_string(),
                });
            }
        }
    }
}

fn tree_from_object(map: &Map<String, Value>, path: &str) -> Result<PhraseTree, DictionaryError> {
    let mut tree = PhraseTree::new();
    for (key, value) in map {
        let child_path = join_path(path, key);
        let phrase = phrase_from_json(value, &child_path)?;
        tree.entries.insert(key.clone(), phrase);
    }
    Ok(tree)
}

fn phrase_from_json(value: &Value, path: &str) -> Result<Phrase, DictionaryError> {
    match value {
        Value::String(text) => Ok(Phrase::Text(text.clone())),
        Value::Object(map) => {
            let entries = map.iter().map(|(k, v)| (k.clone(), v));
            entries_to_phrase(entries.collect(), path)
        }
        Value::Array(items) => {
            let entries = items.iter().enumerate().map(|(i, v)| (i.to_string(), v));
            entries_to_phrase(entries.collect(), path)
        }
        other => Err(DictionaryError::UnsupportedValue {
            path: path.to_string(),
            kind: json_kind(other),
        }),
    }
}

fn entries_to_phrase(entries: Vec<(String, &Value)>, path: &str) -> Result<Phrase, DictionaryError> {
    let all_text = !entries.is_empty() && entries.iter().all(|(_, v)| v.is_string());
    if all_text {
        let texts = entries
            .iter()
            .filter_map(|(k, v)| v.as_str().map(|text| (k.as_str(), text)));
        if let Ok(variants) = VariantMap::from_entries(texts) {
            return Ok(Phrase::Variants(variants));
        }
    }

    let mut tree = PhraseTree::new();
    for (key, value) in entries {
        let child_path = join_path(path, &key);
        let phrase = phrase_from_json(value, &child_path)?;
        tree.entries.insert(key, phrase);
    }
    Ok(Phrase::Tree(tree))
}

fn join_path(prefix: &str, key: &str) -> String {
    if prefix.is_empty() {
        key.to_string()
    } else {
        format!("{}.{}", prefix, key)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
