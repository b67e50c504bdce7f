//! Bound datasets and the two lookup paths over them.
//!
//! A [`Dataset`] owns the records bound to a model type together with the
//! [`Lookup`] mode chosen at bind time. Individual records are only checked
//! for shape when they are instantiated, so a malformed entry fails the
//! lookup that reaches it rather than the bind.

use serde_json::Value;

use crate::config::BindOptions;
use crate::error::{ModelError, Result};
use crate::record::Record;
use crate::shape::require_array;

/// How `get` resolves its argument, fixed when the dataset is bound.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Lookup {
    /// The argument is a zero-based index in dataset order.
    Position,
    /// The argument is compared against this field of each record.
    Key(String),
}

impl Lookup {
    /// The lookup mode selected by `options`.
    pub fn from_options(options: &BindOptions) -> Self {
        match &options.primary_key {
            Some(field) => Lookup::Key(field.clone()),
            None => Lookup::Position,
        }
    }

    /// The key field, if this is keyed lookup.
    pub fn primary_key(&self) -> Option<&str> {
        match self {
            Lookup::Position => None,
            Lookup::Key(field) => Some(field),
        }
    }
}

/// A dataset entry. An entry that is not an object keeps its construction
/// error until something tries to instantiate it.
#[derive(Debug)]
enum Slot {
    Record(Record),
    Invalid(ModelError),
}

impl Slot {
    fn from_value(value: Value) -> Self {
        match Record::new(value) {
            Ok(record) => Slot::Record(record),
            Err(err) => Slot::Invalid(err),
        }
    }

    fn field(&self, key: &str) -> Option<&Value> {
        match self {
            Slot::Record(record) => record.field(key),
            Slot::Invalid(_) => None,
        }
    }

    fn instantiate(&self) -> Result<Record> {
        match self {
            Slot::Record(record) => Ok(record.clone()),
            Slot::Invalid(err) => Err(err.clone()),
        }
    }
}

/// An immutable, ordered set of records plus its lookup mode.
#[derive(Debug)]
pub struct Dataset {
    slots: Vec<Slot>,
    lookup: Lookup,
}

impl Dataset {
    /// Bind `data`, which must be a JSON array.
    pub fn new(data: Value, options: &BindOptions) -> Result<Self> {
        let rows = require_array(data, "data")?;

        Ok(Self {
            slots: rows.into_iter().map(Slot::from_value).collect(),
            lookup: Lookup::from_options(options),
        })
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` if the dataset has no records.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// The lookup mode chosen at bind time.
    pub fn lookup(&self) -> &Lookup {
        &self.lookup
    }

    /// Resolve `key` with this dataset's lookup mode.
    ///
    /// Returns `Ok(None)` when nothing matches. Fails only when the matched
    /// entry is not an object.
    pub fn get(&self, key: &Value) -> Result<Option<Record>> {
        let slot = match &self.lookup {
            Lookup::Position => self.at_position(key),
            Lookup::Key(field) => self.by_key(field, key),
        };
        slot.map(Slot::instantiate).transpose()
    }

    /// Every record in dataset order.
    pub fn records(&self) -> Result<Vec<Record>> {
        self.slots.iter().map(Slot::instantiate).collect()
    }

    /// Returns `true` if at least one record has `field`.
    pub fn has_field(&self, field: &str) -> bool {
        self.slots.iter().any(|slot| slot.field(field).is_some())
    }

    fn at_position(&self, key: &Value) -> Option<&Slot> {
        let index = usize::try_from(key.as_u64()?).ok()?;
        self.slots.get(index)
    }

    // Linear scan; the earliest match wins.
    fn by_key(&self, field: &str, key: &Value) -> Option<&Slot> {
        self.slots.iter().find(|slot| slot.field(field) == Some(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn users() -> Value {
        json!([
            { "name": "Nathan", "year": 1984 },
            { "name": "Dave", "year": 1987 },
        ])
    }

    #[test]
    fn rejects_non_array_data() {
        let err = Dataset::new(json!({"name": "Nathan"}), &BindOptions::default()).unwrap_err();
        assert_eq!(
            err,
            ModelError::TypeMismatch {
                name: "data".into(),
                expected: "array",
                actual: "object",
            }
        );
    }

    #[test]
    fn lookup_mode_follows_options() {
        let positional = Dataset::new(users(), &BindOptions::positional()).unwrap();
        assert_eq!(positional.lookup(), &Lookup::Position);

        let keyed = Dataset::new(users(), &BindOptions::keyed("name")).unwrap();
        assert_eq!(keyed.lookup().primary_key(), Some("name"));
    }

    #[test]
    fn positional_get() {
        let dataset = Dataset::new(users(), &BindOptions::positional()).unwrap();
        let dave = dataset.get(&json!(1)).unwrap().unwrap();
        assert_eq!(dave.field("year"), Some(&json!(1987)));
        assert!(dataset.get(&json!(5)).unwrap().is_none());
    }

    #[test]
    fn positional_get_ignores_non_indices() {
        let dataset = Dataset::new(users(), &BindOptions::positional()).unwrap();
        assert!(dataset.get(&json!(-1)).unwrap().is_none());
        assert!(dataset.get(&json!(0.0)).unwrap().is_none());
        assert!(dataset.get(&json!("0")).unwrap().is_none());
    }

    #[test]
    fn keyed_get_is_exact() {
        let dataset = Dataset::new(
            json!([{ "id": 1, "v": "int" }, { "id": "1", "v": "str" }]),
            &BindOptions::keyed("id"),
        )
        .unwrap();
        let found = dataset.get(&json!("1")).unwrap().unwrap();
        assert_eq!(found.field("v"), Some(&json!("str")));
        assert!(dataset.get(&json!(1.0)).unwrap().is_none());
    }

    #[test]
    fn keyed_get_prefers_earliest_duplicate() {
        let dataset = Dataset::new(
            json!([{ "k": "a", "n": 1 }, { "k": "a", "n": 2 }]),
            &BindOptions::keyed("k"),
        )
        .unwrap();
        let found = dataset.get(&json!("a")).unwrap().unwrap();
        assert_eq!(found.field("n"), Some(&json!(1)));
    }

    #[test]
    fn keyed_get_skips_records_without_the_key() {
        let dataset = Dataset::new(
            json!([{ "other": 1 }, { "k": null }]),
            &BindOptions::keyed("k"),
        )
        .unwrap();
        let found = dataset.get(&Value::Null).unwrap().unwrap();
        assert!(found.field("k").is_some());
    }

    #[test]
    fn malformed_entry_fails_on_instantiation() {
        let dataset = Dataset::new(json!([{ "a": 1 }, 7]), &BindOptions::default()).unwrap();
        assert_eq!(dataset.len(), 2);
        assert!(dataset.get(&json!(0)).unwrap().is_some());
        assert!(matches!(
            dataset.get(&json!(1)),
            Err(ModelError::TypeMismatch { actual: "number", .. })
        ));
        assert!(dataset.records().is_err());
    }

    #[test]
    fn malformed_entry_reports_record_construction_error() {
        let dataset = Dataset::new(json!([[1, 2]]), &BindOptions::default()).unwrap();
        let from_lookup = dataset.get(&json!(0)).unwrap_err();
        let from_record = Record::new(json!([1, 2])).unwrap_err();
        assert_eq!(from_lookup, from_record);
        assert_eq!(dataset.records().unwrap_err(), from_record);
    }

    #[test]
    fn has_field_checks_every_record() {
        let dataset = Dataset::new(json!([{ "a": 1 }, { "b": 2 }]), &BindOptions::default()).unwrap();
        assert!(dataset.has_field("b"));
        assert!(!dataset.has_field("c"));
    }

    #[test]
    fn empty_dataset() {
        let dataset = Dataset::new(json!([]), &BindOptions::default()).unwrap();
        assert!(dataset.is_empty());
        assert!(dataset.records().unwrap().is_empty());
        assert!(dataset.get(&json!(0)).unwrap().is_none());
    }
}
