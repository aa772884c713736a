//! Untyped rows returned by the staff REST API.
//!
//! Members, tasks, bookings and log entries all arrive as JSON objects whose
//! shape differs per endpoint. [`Record`] keeps them as a field map and
//! [`FieldAccess`] exposes the one coercion rule every list operation relies
//! on.
use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

/// Errors produced when building a [`Record`] from arbitrary JSON.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordError {
    /// The JSON value was not an object.
    #[error("expected a JSON object, found {0}")]
    NotAnObject(&'static str),
}

/// Read access to named fields as text.
///
/// `None` means the field is absent or `null`; such records never match a
/// search term or a filter value.
pub trait FieldAccess {
    fn field_text(&self, name: &str) -> Option<Cow<'_, str>>;
}

impl<T: FieldAccess + ?Sized> FieldAccess for &T {
    fn field_text(&self, name: &str) -> Option<Cow<'_, str>> {
        (**self).field_text(name)
    }
}

/// Converts a JSON value to the text used for matching and export.
pub fn value_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Bool(b) => Some(Cow::Borrowed(if *b { "true" } else { "false" })),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Array(_) | Value::Object(_) => Some(Cow::Owned(value.to_string())),
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

/// One row of a domain collection.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    #[must_use]
    pub fn new() -> Self {
        Self(Map::new())
    }

    /// Adds or replaces a field, returning the record for chaining.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    /// Borrow the raw JSON value of a field.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }
}

impl FieldAccess for Record {
    fn field_text(&self, name: &str) -> Option<Cow<'_, str>> {
        self.0.get(name).and_then(value_text)
    }
}

impl FieldAccess for Map<String, Value> {
    fn field_text(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).and_then(value_text)
    }
}

impl FieldAccess for Value {
    fn field_text(&self, name: &str) -> Option<Cow<'_, str>> {
        self.as_object().and_then(|map| map.field_text(name))
    }
}

impl FieldAccess for HashMap<String, String> {
    fn field_text(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|v| Cow::Borrowed(v.as_str()))
    }
}

impl FieldAccess for BTreeMap<String, String> {
    fn field_text(&self, name: &str) -> Option<Cow<'_, str>> {
        self.get(name).map(|v| Cow::Borrowed(v.as_str()))
    }
}

impl From<Map<String, Value>> for Record {
    fn from(map: Map<String, Value>) -> Self {
        Self(map)
    }
}

impl TryFrom<Value> for Record {
    type Error = RecordError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(map) => Ok(Self(map)),
            other => Err(RecordError::NotAnObject(json_kind(&other))),
        }
    }
}

impl From<Record> for Value {
    fn from(record: Record) -> Self {
        Value::Object(record.0)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
