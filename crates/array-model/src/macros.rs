/// Declare a model type over a static dataset.
///
/// Generates a newtype around [`Record`](crate::Record), its
/// [`ArrayModel`](crate::ArrayModel) impl with a type-level binding cell, one
/// accessor method per listed field, and `model["field"]` subscript access.
/// An entry written `name => "field"` exposes `field` as `name()`.
///
/// ```rust
/// use array_model::{array_model, json, ArrayModel, BindOptions};
///
/// array_model! {
///     pub struct User {
///         year,
///         first_name => "name",
///     }
/// }
///
/// User::bind(
///     json!([{ "name": "Nathan", "year": 1984 }, { "name": "Dave", "year": 1987 }]),
///     BindOptions::default(),
/// )
/// .unwrap();
///
/// let dave = User::get(1).unwrap().unwrap();
/// assert_eq!(dave.first_name(), Some(&json!("Dave")));
/// assert_eq!(dave.year(), Some(&json!(1987)));
/// assert!(User::get(5).unwrap().is_none());
/// ```
///
/// Accessors are inherent methods, so they shadow provided trait methods of
/// the same name and clash with the trait's associated functions. Avoid
/// declaring `values`, `field`, `read`, `record`, `get`, `all`, `bind`,
/// `is_bound`, `cell` or `from_record`.
#[macro_export]
macro_rules! array_model {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $( $accessor:ident $(=> $key:literal)? ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        $vis struct $name($crate::Record);

        impl $crate::ArrayModel for $name {
            const NAME: &'static str = stringify!($name);
            const ACCESSORS: &'static [$crate::Accessor] = &[
                $(
                    $crate::Accessor::with_key(
                        stringify!($accessor),
                        $crate::__accessor_key!($accessor $(, $key)?),
                    ),
                )*
            ];

            fn cell() -> &'static $crate::ModelCell<Self> {
                static CELL: $crate::ModelCell<$name> = $crate::ModelCell::new();
                &CELL
            }

            fn from_record(record: $crate::Record) -> Self {
                $name(record)
            }

            fn record(&self) -> &$crate::Record {
                &self.0
            }
        }

        #[allow(dead_code)]
        impl $name {
            $(
                pub fn $accessor(&self) -> Option<&$crate::Value> {
                    self.0.field($crate::__accessor_key!($accessor $(, $key)?))
                }
            )*
        }

        /// Raw field access. Absent fields read as `Value::Null`, the same as
        /// a present `null`; use `field` whenever absence matters.
        impl ::std::ops::Index<&str> for $name {
            type Output = $crate::Value;

            fn index(&self, key: &str) -> &$crate::Value {
                &self.0[key]
            }
        }
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __accessor_key {
    ($accessor:ident) => {
        stringify!($accessor)
    };
    ($accessor:ident, $key:literal) => {
        $key
    };
}
