//! Data passed alongside a token: substitution values plus the reserved
//! `count` and `ctx` keys.

use serde_json::{Map, Value};

/// Key whose value drives variant selection.
pub const COUNT_KEY: &str = "count";
/// Key whose value is handed to context phrases.
pub const CTX_KEY: &str = "ctx";

/// Interpolation values for one translation.
///
/// ```
/// use phrasebook::core::TranslationData;
/// use serde_json::json;
///
/// let data = TranslationData::new().with("name", "Ada").with_count(3);
/// assert_eq!(data.count(), Some(3.0));
///
/// let same = TranslationData::from_value(json!({"name": "Ada", "count": 3}));
/// assert_eq!(same, data);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslationData {
    count: Option<Value>,
    ctx: Option<Value>,
    values: Map<String, Value>,
}

impl TranslationData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Split a JSON object into reserved keys and substitution values.
    /// Anything other than an object yields empty data.
    pub fn from_value(value: Value) -> Self {
        match value {
            Value::Object(map) => Self::from_map(map),
            _ => Self::default(),
        }
    }

    pub fn from_map(mut map: Map<String, Value>) -> Self {
        let count = map.remove(COUNT_KEY);
        let ctx = map.remove(CTX_KEY);
        Self {
            count,
            ctx,
            values: map,
        }
    }

    /// Add a substitution value. The reserved keys are routed to
    /// [`with_count`](Self::with_count) / [`with_ctx`](Self::with_ctx).
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        let value = value.into();
        match key.as_str() {
            COUNT_KEY => self.count = Some(value),
            CTX_KEY => self.ctx = Some(value),
            _ => {
                self.values.insert(key, value);
            }
        }
        self
    }

    pub fn with_count(mut self, count: impl Into<Value>) -> Self {
        self.count = Some(count.into());
        self
    }

    pub fn with_ctx(mut self, ctx: impl Into<Value>) -> Self {
        self.ctx = Some(ctx.into());
        self
    }

    /// Numeric count: numbers as-is, numeric strings parsed, anything else
    /// treated as absent.
    pub fn count(&self) -> Option<f64> {
        match self.count.as_ref()? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }

    pub fn ctx(&self) -> Option<&Value> {
        self.ctx.as_ref()
    }

    /// Substitution values without the reserved keys.
    pub fn values(&self) -> &Map<String, Value> {
        &self.values
    }

    /// Substitution values with `count` included, for variant phrases such
    /// as `"{{count}} items"`.
    pub fn values_with_count(&self) -> Map<String, Value> {
        let mut values = self.values.clone();
        if let Some(count) = &self.count {
            values.insert(COUNT_KEY.to_string(), count.clone());
        }
        values
    }
}

impl From<Value> for TranslationData {
    fn from(value: Value) -> Self {
        Self::from_value(value)
    }
}

impl From<Map<String, Value>> for TranslationData {
    fn from(map: Map<String, Value>) -> Self {
        Self::from_map(map)
    }
}
