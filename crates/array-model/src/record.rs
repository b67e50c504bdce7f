//! The read-only record behind every model instance.

use std::ops::Index;
use std::sync::Arc;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::error::Result;
use crate::shape::require_object;

static NULL: Value = Value::Null;

/// One field-mapping from a bound dataset.
///
/// A `Record` shares its fields with the dataset it came from, so cloning it
/// or wrapping it in several instances never copies field data. There is no
/// way to obtain a mutable reference to the fields.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    fields: Arc<Map<String, Value>>,
}

impl Record {
    /// Build a record from a raw value, which must be a JSON object.
    pub fn new(value: Value) -> Result<Self> {
        require_object(value, "item_data").map(Self::from_fields)
    }

    /// Build a record from an already-typed field map.
    pub fn from_fields(fields: Map<String, Value>) -> Self {
        Self {
            fields: Arc::new(fields),
        }
    }

    /// The backing field map.
    pub fn values(&self) -> &Map<String, Value> {
        &self.fields
    }

    /// Raw value of `key`, or `None` when the record has no such field.
    ///
    /// A field that is present but `null` returns `Some(&Value::Null)`.
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Returns `true` if both records share the same backing allocation.
    pub fn ptr_eq(&self, other: &Record) -> bool {
        Arc::ptr_eq(&self.fields, &other.fields)
    }
}

/// Subscript access. Absent fields read as `Value::Null`, matching
/// `serde_json::Value` indexing, so a missing field and a present `null` look
/// the same here. Use [`Record::field`] whenever absence matters.
impl Index<&str> for Record {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        self.field(key).unwrap_or(&NULL)
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.fields.as_ref().serialize(serializer)
    }
}

impl TryFrom<Value> for Record {
    type Error = crate::error::ModelError;

    fn try_from(value: Value) -> Result<Self> {
        Self::new(value)
    }
}
