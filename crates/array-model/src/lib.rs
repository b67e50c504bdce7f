//! Read-only typed models over static, in-memory record arrays.
//!
//! Small reference datasets (enumerations, lookup tables) often live in code
//! as arrays of key/value records. This crate binds such an array to a model
//! type and exposes each record through named accessors, with lookup by
//! position or by a designated primary key.
//!
//! # Architecture
//!
//! - A model type owns a static [`ModelCell`] holding its bound [`Dataset`].
//!   Binding happens once at startup; re-binding replaces the dataset.
//! - [`ArrayModel::get`] resolves by position, or by key when
//!   [`BindOptions::primary_key`] is set. The mode is fixed at bind time.
//! - [`ArrayModel::all`] materializes every record once per binding.
//! - Instances wrap a shared, immutable [`Record`]; absent fields read as
//!   `None`.
//!
//! # Modules
//!
//! - [`error`] — Error types for binding and construction
//! - [`shape`] — Array/object shape checks
//! - [`record`] — The [`Record`] field map
//! - [`accessor`] — [`Accessor`] declarations
//! - [`dataset`] — [`Dataset`] and the [`Lookup`] paths
//! - [`model`] — The [`ArrayModel`] trait and [`ModelCell`]
//! - [`config`] — [`BindOptions`]
//!
//! # Quick Start
//!
//! ```rust
//! use array_model::{array_model, json, ArrayModel, BindOptions};
//!
//! array_model! {
//!     pub struct Users {
//!         username,
//!         age,
//!         first_name => "name",
//!     }
//! }
//!
//! impl Users {
//!     pub fn is_adult(&self) -> bool {
//!         self.age().and_then(|age| age.as_u64()).is_some_and(|age| age >= 18)
//!     }
//! }
//!
//! Users::bind(
//!     json!([
//!         { "username": "reednj", "name": "Nathan", "age": 31 },
//!         { "username": "j77", "name": "Peter", "age": 16 },
//!     ]),
//!     BindOptions::keyed("username"),
//! )
//! .unwrap();
//!
//! let peter = Users::get("j77").unwrap().unwrap();
//! assert_eq!(peter.first_name(), Some(&json!("Peter")));
//! assert!(!peter.is_adult());
//! assert!(Users::get("nobody").unwrap().is_none());
//! assert_eq!(Users::all().unwrap().len(), 2);
//! ```

pub mod accessor;
pub mod config;
pub mod dataset;
pub mod error;
mod macros;
pub mod model;
pub mod record;
pub mod shape;

pub use accessor::Accessor;
pub use config::BindOptions;
pub use dataset::{Dataset, Lookup};
pub use error::{ModelError, Result};
pub use model::{ArrayModel, Binding, ModelCell};
pub use record::Record;
pub use serde_json::{json, Map, Value};
pub use shape::{require_array, require_object, shape_name};
