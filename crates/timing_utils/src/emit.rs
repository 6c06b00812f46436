//! Duration records and their structured context

use crate::clock::format_seconds;
use crate::logger::Logger;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Structured context attached to a single timing record.
///
/// Keys are kept sorted. The fields travel next to the message as one
/// structured `extra` field and never change the message text.
///
/// # Example
///
/// ```rust
/// use timing_utils::Fields;
///
/// let fields = Fields::new().with("q", "select 1").with("rows", 3);
/// assert_eq!(fields.to_string(), r#"{"q":"select 1","rows":3}"#);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fields(Map<String, Value>);

impl Fields {
    /// Create an empty set of fields.
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Add a field, replacing any previous value under the same key.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert a field, returning the value it replaced.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Merge another set of fields into this one. Later values win.
    pub fn extend(&mut self, other: Fields) {
        self.0.extend(other.0);
    }

    /// Get a field by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no fields.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over the fields in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.0.iter()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Fields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl From<Map<String, Value>> for Fields {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl fmt::Display for Fields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Objects with string keys always serialize.
        let json = serde_json::to_string(&self.0).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

/// Emit one INFO record `"{label} ran in {seconds}s"`.
///
/// Non-empty `extra` fields are attached to the record as a structured `extra`
/// field. Absent or empty fields leave the record with the message alone.
pub fn emit_duration(logger: &Logger, label: &str, seconds: f64, extra: Option<&Fields>) {
    let shown = format_seconds(seconds);
    logger.in_scope(|| match extra.filter(|fields| !fields.is_empty()) {
        Some(fields) => tracing::info!(extra = %fields, "{label} ran in {shown}s"),
        None => tracing::info!("{label} ran in {shown}s"),
    });
}

/// Emit one DEBUG record `"{label} ran in {seconds}s"`.
///
/// Used for per-call function timing, which may sit on hot paths.
pub fn emit_debug_duration(logger: &Logger, label: &str, seconds: f64) {
    let shown = format_seconds(seconds);
    logger.in_scope(|| {
        tracing::debug!("{label} ran in {shown}s");
    });
}
