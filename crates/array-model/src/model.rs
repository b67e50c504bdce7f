//! The [`ArrayModel`] trait and the per-type binding cell behind it.
//!
//! Each model type owns one `static` [`ModelCell`]. Binding a dataset swaps a
//! fresh [`Binding`] into the cell; readers clone the `Arc` out of the lock
//! and work on that snapshot, so a re-bind never changes records that were
//! already handed out.

use std::sync::{Arc, OnceLock, RwLock};

use serde_json::{Map, Value};
use tracing::{debug, warn};

use crate::accessor::{self, Accessor};
use crate::config::BindOptions;
use crate::dataset::Dataset;
use crate::error::{ModelError, Result};
use crate::record::Record;

/// A bound dataset and its memoized instance list.
pub struct Binding<M> {
    dataset: Dataset,
    all: OnceLock<Arc<[M]>>,
}

impl<M> Binding<M> {
    fn new(dataset: Dataset) -> Self {
        Self {
            dataset,
            all: OnceLock::new(),
        }
    }

    /// The bound dataset.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }
}

impl<M> std::fmt::Debug for Binding<M> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Binding")
            .field("records", &self.dataset.len())
            .field("lookup", self.dataset.lookup())
            .field("memoized", &self.all.get().is_some())
            .finish()
    }
}

/// Type-level storage for a model's binding.
///
/// Starts unbound; [`ArrayModel::bind`] moves it to bound. Intended to live
/// in a `static`, which [`crate::array_model!`] sets up.
#[derive(Debug)]
pub struct ModelCell<M> {
    binding: RwLock<Option<Arc<Binding<M>>>>,
}

impl<M> ModelCell<M> {
    /// An unbound cell.
    pub const fn new() -> Self {
        Self {
            binding: RwLock::new(None),
        }
    }

    /// The current binding, or `None` while unbound.
    pub fn load(&self, model: &'static str) -> Result<Option<Arc<Binding<M>>>> {
        let binding = self
            .binding
            .read()
            .map_err(|_| ModelError::LockPoisoned { model })?;
        Ok(binding.clone())
    }

    /// Replace the binding. Returns `true` if a previous one was dropped.
    fn store(&self, model: &'static str, next: Binding<M>) -> Result<bool> {
        let mut binding = self
            .binding
            .write()
            .map_err(|_| ModelError::LockPoisoned { model })?;
        Ok(binding.replace(Arc::new(next)).is_some())
    }
}

impl<M> Default for ModelCell<M> {
    fn default() -> Self {
        Self::new()
    }
}

/// A read-only model type backed by a static array of records.
///
/// Implementors supply the type-level cell and the record wrapping; the
/// lookup, enumeration and raw access operations are provided. Most types
/// should be declared with [`crate::array_model!`] rather than by hand.
pub trait ArrayModel: Sized + Send + Sync + 'static {
    /// Model name used in errors and log events.
    const NAME: &'static str;

    /// Accessors declared on this type.
    const ACCESSORS: &'static [Accessor] = &[];

    /// The type's binding cell.
    fn cell() -> &'static ModelCell<Self>;

    /// Wrap a record in a new instance.
    fn from_record(record: Record) -> Self;

    /// The record backing this instance.
    fn record(&self) -> &Record;

    /// Bind `data` as this type's dataset, replacing any earlier binding.
    ///
    /// `data` must be a JSON array. Entries are not checked until they are
    /// instantiated by [`get`](Self::get) or [`all`](Self::all).
    fn bind(data: Value, options: BindOptions) -> Result<()> {
        let dataset = Dataset::new(data, &options)?;

        if !dataset.is_empty() {
            for accessor in Self::ACCESSORS {
                if !dataset.has_field(accessor.key) {
                    warn!(
                        model = Self::NAME,
                        accessor = accessor.name,
                        field = accessor.key,
                        "accessor field missing from every record"
                    );
                }
            }
            if let Some(field) = dataset.lookup().primary_key() {
                if !dataset.has_field(field) {
                    warn!(model = Self::NAME, field, "primary key missing from every record");
                }
            }
        }

        let records = dataset.len();
        let primary_key = options.primary_key;
        let replaced = Self::cell().store(Self::NAME, Binding::new(dataset))?;
        debug!(
            model = Self::NAME,
            records,
            primary_key = ?primary_key,
            replaced,
            "dataset bound"
        );
        Ok(())
    }

    /// Returns `true` once a dataset has been bound.
    fn is_bound() -> Result<bool> {
        Ok(Self::cell().load(Self::NAME)?.is_some())
    }

    /// Look up one record by position or, if a primary key was bound, by key.
    ///
    /// Absence is `Ok(None)`: an out-of-range or non-integer position, or a
    /// key value no record carries. Key comparison is exact, so `1` does not
    /// match `1.0` or `"1"`.
    ///
    /// Positions count from the start only; a negative position such as `-1`
    /// is `None`, not the last record.
    fn get(key: impl Into<Value>) -> Result<Option<Self>> {
        let binding = bound::<Self>()?;
        let record = binding.dataset.get(&key.into())?;
        Ok(record.map(Self::from_record))
    }

    /// Every record as an instance, in dataset order.
    ///
    /// The list is built once per binding and shared afterwards.
    fn all() -> Result<Arc<[Self]>> {
        let binding = bound::<Self>()?;
        if let Some(all) = binding.all.get() {
            return Ok(all.clone());
        }

        let instances: Arc<[Self]> = binding
            .dataset
            .records()?
            .into_iter()
            .map(Self::from_record)
            .collect();
        debug!(model = Self::NAME, count = instances.len(), "materialized records");

        Ok(binding.all.get_or_init(|| instances).clone())
    }

    /// The backing record's fields.
    fn values(&self) -> &Map<String, Value> {
        self.record().values()
    }

    /// Raw value of `key`, or `None` if the record has no such field.
    fn field(&self, key: &str) -> Option<&Value> {
        self.record().field(key)
    }

    /// Read through the accessor declared as `name`.
    ///
    /// Returns `None` if no such accessor is declared or its field is absent.
    fn read(&self, name: &str) -> Option<&Value> {
        accessor::find(Self::ACCESSORS, name)?.read(self.record())
    }
}

fn bound<M: ArrayModel>() -> Result<Arc<Binding<M>>> {
    M::cell()
        .load(M::NAME)?
        .ok_or(ModelError::UnsupportedSource {
            model: M::NAME,
            source_shape: "unbound",
        })
}
