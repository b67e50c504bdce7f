//! Accessor declarations: named read methods mapped to record fields.

use serde_json::Value;

use crate::record::Record;

/// A declared accessor exposing one record field under a method name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Accessor {
    /// The exposed method name.
    pub name: &'static str,
    /// The record field it reads.
    pub key: &'static str,
}

impl Accessor {
    /// An accessor reading the field of the same name.
    pub const fn new(name: &'static str) -> Self {
        Self { name, key: name }
    }

    /// An accessor named `name` that reads the field `key`.
    pub const fn with_key(name: &'static str, key: &'static str) -> Self {
        Self { name, key }
    }

    /// Read this accessor's field from `record`. Resolved on every call.
    pub fn read<'a>(&self, record: &'a Record) -> Option<&'a Value> {
        record.field(self.key)
    }
}

/// Find the accessor declared as `name` in `accessors`.
pub fn find(accessors: &[Accessor], name: &str) -> Option<Accessor> {
    accessors.iter().copied().find(|a| a.name == name)
}
