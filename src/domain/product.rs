use derive_more::derive::Display;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A product document.
///
/// Only `id` (or `_id`) and `category` mean anything to this service; every
/// other field is carried through untouched. Because the record is a JSON
/// object, anything that survives into a `Product` is already plain data.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Product(Map<String, Value>);

impl Product {
    /// The identifier value, `id` first, then the document store's `_id`.
    pub fn id(&self) -> Option<&Value> {
        ["id", "_id"]
            .iter()
            .filter_map(|field| self.0.get(*field))
            .find(|value| !value.is_null())
    }

    /// Canonical JSON of the identifier, used as the storage key.
    pub fn key(&self) -> Option<String> {
        self.id().map(Value::to_string)
    }

    /// The identifier as a human readable string (strings lose their quotes).
    pub fn id_label(&self) -> Option<String> {
        self.id().map(value_label)
    }

    pub fn category(&self) -> Option<&str> {
        self.0.get("category").and_then(Value::as_str)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }
}

impl TryFrom<Value> for Product {
    type Error = Value;

    // hands the value back when it is not an object
    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Object(fields) => Ok(Self(fields)),
            other => Err(other),
        }
    }
}

/// Renders a scalar JSON value for display; strings are shown without quotes.
pub fn value_label(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// The category a request asks for, taken verbatim from the route.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("{}", _0)]
pub struct CategoryQuery(String);

impl CategoryQuery {
    pub fn new(category: impl Into<String>) -> Self {
        Self(category.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
