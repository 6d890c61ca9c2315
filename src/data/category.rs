//! Category resolution.
//!
//! A [`CategorySpec`] is resolved once into a [`CategoryFn`] that maps any
//! record to its category key.

use crate::constants::CATEGORY_JOIN_SEPARATOR;
use crate::data::error::DataResult;
use crate::data::provider::join_record_fields;
use crate::types::{CategoryKey, Record};
use serde::ser::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;
use std::sync::Arc;

/// Caller-supplied category closure. Errors propagate to the caller unchanged.
pub type CustomCategoryFn = Arc<dyn Fn(&Record) -> anyhow::Result<CategoryKey> + Send + Sync>;

/// Resolved category function.
pub type CategoryFn = Arc<dyn Fn(&Record) -> DataResult<CategoryKey> + Send + Sync>;

/// How a record resolves to its category key
#[derive(Clone, Default)]
pub enum CategorySpec {
    /// Every record is undefined
    #[default]
    None,
    /// A single field
    Field(String),
    /// Several fields joined with `_`
    Fields(Vec<String>),
    /// A caller-supplied function
    Custom(CustomCategoryFn),
    /// Any other shape: the spec value itself is the key
    Constant(CategoryKey),
}

impl CategorySpec {
    pub fn field(name: impl Into<String>) -> Self {
        CategorySpec::Field(name.into())
    }

    pub fn fields<S: AsRef<str>>(names: &[S]) -> Self {
        CategorySpec::Fields(names.iter().map(|n| n.as_ref().to_string()).collect())
    }

    /// Infallible custom resolver.
    pub fn custom(resolve: impl Fn(&Record) -> CategoryKey + Send + Sync + 'static) -> Self {
        CategorySpec::Custom(Arc::new(move |record: &Record| -> anyhow::Result<CategoryKey> {
            Ok(resolve(record))
        }))
    }

    /// Custom resolver that may fail; its error aborts the enclosing operation.
    pub fn try_custom(
        resolve: impl Fn(&Record) -> anyhow::Result<CategoryKey> + Send + Sync + 'static,
    ) -> Self {
        CategorySpec::Custom(Arc::new(resolve))
    }

    /// Interpret an untyped spec value.
    ///
    /// `null` means no category, a string names a field and an array of
    /// strings names joined fields. Anything else is kept as a constant key.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Null => CategorySpec::None,
            Value::String(name) => CategorySpec::Field(name.clone()),
            Value::Array(items) if items.iter().all(Value::is_string) => CategorySpec::Fields(
                items
                    .iter()
                    .filter_map(|item| item.as_str().map(str::to_string))
                    .collect(),
            ),
            other => {
                tracing::warn!(spec = %other, "Unrecognized category spec, using it as a constant key");
                CategorySpec::Constant(CategoryKey::from_value(Some(other)))
            }
        }
    }
}

impl fmt::Debug for CategorySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategorySpec::None => f.write_str("None"),
            CategorySpec::Field(name) => f.debug_tuple("Field").field(name).finish(),
            CategorySpec::Fields(names) => f.debug_tuple("Fields").field(names).finish(),
            CategorySpec::Custom(_) => f.write_str("Custom(..)"),
            CategorySpec::Constant(key) => f.debug_tuple("Constant").field(key).finish(),
        }
    }
}

impl From<&str> for CategorySpec {
    fn from(name: &str) -> Self {
        CategorySpec::field(name)
    }
}

impl From<String> for CategorySpec {
    fn from(name: String) -> Self {
        CategorySpec::Field(name)
    }
}

impl From<Vec<String>> for CategorySpec {
    fn from(names: Vec<String>) -> Self {
        CategorySpec::Fields(names)
    }
}

impl Serialize for CategorySpec {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CategorySpec::None => serializer.serialize_none(),
            CategorySpec::Field(name) => serializer.serialize_str(name),
            CategorySpec::Fields(names) => names.serialize(serializer),
            CategorySpec::Constant(key) => key.serialize(serializer),
            CategorySpec::Custom(_) => Err(S::Error::custom(
                "custom category functions cannot be serialized",
            )),
        }
    }
}

impl<'de> Deserialize<'de> for CategorySpec {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(CategorySpec::from_value(&value))
    }
}

/// Resolve a spec into a single category function.
pub fn to_categories_fn(spec: &CategorySpec) -> CategoryFn {
    match spec {
        CategorySpec::None => Arc::new(|_: &Record| -> DataResult<CategoryKey> {
            Ok(CategoryKey::Undefined)
        }),
        CategorySpec::Field(name) => {
            let name = name.clone();
            Arc::new(move |record: &Record| -> DataResult<CategoryKey> {
                Ok(CategoryKey::from_value(record.get(&name)))
            })
        }
        CategorySpec::Fields(names) => {
            let names = names.clone();
            Arc::new(move |record: &Record| -> DataResult<CategoryKey> {
                Ok(CategoryKey::Text(join_record_fields(
                    record,
                    &names,
                    CATEGORY_JOIN_SEPARATOR,
                )))
            })
        }
        CategorySpec::Custom(resolve) => {
            let resolve = Arc::clone(resolve);
            Arc::new(move |record: &Record| -> DataResult<CategoryKey> { Ok(resolve(record)?) })
        }
        CategorySpec::Constant(key) => {
            let key = key.clone();
            Arc::new(move |_: &Record| -> DataResult<CategoryKey> { Ok(key.clone()) })
        }
    }
}
