//! Core types for the row-set engine.
//!
//! This module defines the values that flow through the pipeline: records,
//! category keys, mapper descriptors, the produced row sets, and the
//! declarative chart configuration that ties them together.

use crate::constants::{NULL_KEY, UNDEFINED_KEY};
use crate::data::CategorySpec;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

// ============================================================================
// Records & Keys
// ============================================================================

/// A flat key/value object representing one input data point.
pub type Record = serde_json::Map<String, Value>;

/// A category (or stacking) key derived from a record.
///
/// Mirrors the key space of a loosely typed record: a missing value is
/// `Undefined`, which is distinct from an explicit `Null`. Numbers compare with
/// SameValueZero semantics (`-0 == 0`, `NaN == NaN`) so a key set never holds
/// two entries that a reader would consider the same number.
#[derive(Clone, Debug, Default)]
pub enum CategoryKey {
    #[default]
    Undefined,
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl CategoryKey {
    /// Build a key from an optional record value.
    ///
    /// Arrays render the way a plain array is stringified (elements joined with
    /// `,`, nulls as empty strings) and objects collapse to `[object Object]`.
    pub fn from_value(value: Option<&Value>) -> Self {
        match value {
            None => CategoryKey::Undefined,
            Some(Value::Null) => CategoryKey::Null,
            Some(Value::Bool(b)) => CategoryKey::Bool(*b),
            Some(Value::Number(n)) => n
                .as_f64()
                .map(CategoryKey::Number)
                .unwrap_or(CategoryKey::Undefined),
            Some(Value::String(s)) => CategoryKey::Text(s.clone()),
            Some(Value::Array(items)) => CategoryKey::Text(
                items
                    .iter()
                    .map(join_element)
                    .collect::<Vec<_>>()
                    .join(","),
            ),
            Some(Value::Object(_)) => CategoryKey::Text("[object Object]".to_string()),
        }
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, CategoryKey::Undefined)
    }

    /// Render the key as an object property name.
    pub fn property_key(&self) -> String {
        match self {
            CategoryKey::Undefined => UNDEFINED_KEY.to_string(),
            CategoryKey::Null => NULL_KEY.to_string(),
            CategoryKey::Bool(b) => b.to_string(),
            CategoryKey::Number(n) => format_number(*n),
            CategoryKey::Text(s) => s.clone(),
        }
    }

    /// Convert back into a JSON value (`Undefined` becomes `null`).
    pub fn to_value(&self) -> Value {
        match self {
            CategoryKey::Undefined | CategoryKey::Null => Value::Null,
            CategoryKey::Bool(b) => Value::Bool(*b),
            CategoryKey::Number(n) => number_value(*n),
            CategoryKey::Text(s) => Value::String(s.clone()),
        }
    }

    /// Default label ordering: property keys compared by UTF-16 code unit,
    /// with undefined keys sorted last.
    pub fn default_cmp(&self, other: &Self) -> Ordering {
        match (self.is_undefined(), other.is_undefined()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => self
                .property_key()
                .encode_utf16()
                .cmp(other.property_key().encode_utf16()),
        }
    }
}

/// Element rendering used when an array is stringified or joined.
pub(crate) fn join_element(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        other => CategoryKey::from_value(Some(other)).property_key(),
    }
}

/// Format a number the way it appears as an object property name.
fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }
    let magnitude = n.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        // Exponent form always carries a sign for positive exponents
        let formatted = format!("{:e}", n);
        return match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => formatted,
        };
    }
    format!("{}", n)
}

/// JSON number for a key, preferring integers for whole values.
fn number_value(n: f64) -> Value {
    if n.fract() == 0.0 && n >= i64::MIN as f64 && n < i64::MAX as f64 {
        Value::Number(serde_json::Number::from(n as i64))
    } else {
        serde_json::Number::from_f64(n)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}

impl PartialEq for CategoryKey {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (CategoryKey::Undefined, CategoryKey::Undefined) => true,
            (CategoryKey::Null, CategoryKey::Null) => true,
            (CategoryKey::Bool(a), CategoryKey::Bool(b)) => a == b,
            (CategoryKey::Number(a), CategoryKey::Number(b)) => {
                (a.is_nan() && b.is_nan()) || a == b
            }
            (CategoryKey::Text(a), CategoryKey::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for CategoryKey {}

impl Hash for CategoryKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            CategoryKey::Undefined | CategoryKey::Null => {}
            CategoryKey::Bool(b) => b.hash(state),
            CategoryKey::Number(n) => {
                let canonical = if n.is_nan() {
                    f64::NAN
                } else if *n == 0.0 {
                    0.0
                } else {
                    *n
                };
                canonical.to_bits().hash(state);
            }
            CategoryKey::Text(s) => s.hash(state),
        }
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.property_key())
    }
}

impl From<&str> for CategoryKey {
    fn from(value: &str) -> Self {
        CategoryKey::Text(value.to_string())
    }
}

impl From<String> for CategoryKey {
    fn from(value: String) -> Self {
        CategoryKey::Text(value)
    }
}

impl From<f64> for CategoryKey {
    fn from(value: f64) -> Self {
        CategoryKey::Number(value)
    }
}

impl From<i64> for CategoryKey {
    fn from(value: i64) -> Self {
        CategoryKey::Number(value as f64)
    }
}

impl From<bool> for CategoryKey {
    fn from(value: bool) -> Self {
        CategoryKey::Bool(value)
    }
}

impl From<CategoryKey> for Value {
    fn from(key: CategoryKey) -> Self {
        key.to_value()
    }
}

impl Serialize for CategoryKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CategoryKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(CategoryKey::from_value(Some(&value)))
    }
}

// ============================================================================
// Mappers
// ============================================================================

/// How a mapper turns records into series, resolved once at construction.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum MapperKind {
    /// One series aligned to record order
    #[default]
    Simple,
    /// One series per distinct value of `stack_field`, aligned to labels
    Stacked { stack_field: String },
    /// One series per distinct value of `multi_field`, aligned to labels
    Multi { multi_field: String },
}

impl MapperKind {
    /// Field whose values split the mapper into several row sets, if any.
    pub fn row_key_field(&self) -> Option<&str> {
        match self {
            MapperKind::Simple => None,
            MapperKind::Stacked { stack_field } => Some(stack_field),
            MapperKind::Multi { multi_field } => Some(multi_field),
        }
    }
}

/// Describes which record field feeds a series and how it is presented.
///
/// Bar, line and pie mappers share this shape; the stacked-bar and multi-line
/// variants add the splitting field carried by [`MapperKind`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(from = "MapperShape", into = "MapperShape")]
pub struct DataMapper {
    /// Record field holding the numeric value
    pub field: String,
    /// Series name for the simple strategy
    pub label: Option<String>,
    pub unit: Option<String>,
    pub color: Option<String>,
    /// Bar grouping; for split mappers, the record field whose value names the group
    pub group: Option<String>,
    pub kind: MapperKind,
}

impl DataMapper {
    fn new(field: impl Into<String>, kind: MapperKind) -> Self {
        Self {
            field: field.into(),
            label: None,
            unit: None,
            color: None,
            group: None,
            kind,
        }
    }

    pub fn bar(field: impl Into<String>) -> Self {
        Self::new(field, MapperKind::Simple)
    }

    pub fn line(field: impl Into<String>) -> Self {
        Self::new(field, MapperKind::Simple)
    }

    pub fn pie(field: impl Into<String>) -> Self {
        Self::new(field, MapperKind::Simple)
    }

    pub fn stacked_bar(field: impl Into<String>, stack_field: impl Into<String>) -> Self {
        Self::new(
            field,
            MapperKind::Stacked {
                stack_field: stack_field.into(),
            },
        )
    }

    pub fn multi_line(field: impl Into<String>, multi_field: impl Into<String>) -> Self {
        Self::new(
            field,
            MapperKind::Multi {
                multi_field: multi_field.into(),
            },
        )
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Whether this mapper produces one row set per distinct splitting value.
    pub fn is_split(&self) -> bool {
        self.kind.row_key_field().is_some()
    }

    /// Render the mapper as a record, in its flat JSON shape.
    ///
    /// Used when mappers act as the label source of a [`crate::data::DataSet`].
    pub fn to_record(&self) -> Record {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => Record::new(),
        }
    }
}

/// Flat wire shape of a mapper. Splitting fields are probed by presence.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct MapperShape {
    field: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    group: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    stack_field: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    multi_field: Option<String>,
}

impl From<MapperShape> for DataMapper {
    fn from(shape: MapperShape) -> Self {
        let kind = match (shape.stack_field, shape.multi_field) {
            (Some(stack_field), _) => MapperKind::Stacked { stack_field },
            (None, Some(multi_field)) => MapperKind::Multi { multi_field },
            (None, None) => MapperKind::Simple,
        };
        Self {
            field: shape.field,
            label: shape.label,
            unit: shape.unit,
            color: shape.color,
            group: shape.group,
            kind,
        }
    }
}

impl From<DataMapper> for MapperShape {
    fn from(mapper: DataMapper) -> Self {
        let (stack_field, multi_field) = match mapper.kind {
            MapperKind::Simple => (None, None),
            MapperKind::Stacked { stack_field } => (Some(stack_field), None),
            MapperKind::Multi { multi_field } => (None, Some(multi_field)),
        };
        Self {
            field: mapper.field,
            label: mapper.label,
            unit: mapper.unit,
            color: mapper.color,
            group: mapper.group,
            stack_field,
            multi_field,
        }
    }
}

// ============================================================================
// Row Sets
// ============================================================================

/// One renderable series.
///
/// `data` is aligned to record order for simple mappers and to
/// [`crate::data::DataSet::labels`] for stacked/multi mappers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RowSet {
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group: Option<String>,
    pub data: Vec<Option<f64>>,
    pub mapper: DataMapper,
    /// Only set by the visibility helpers
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
}

// ============================================================================
// Chart Configuration
// ============================================================================

/// Ordering applied to discovered labels before series are built
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LabelOrder {
    /// Keep first-seen order
    #[default]
    None,
    /// Default ordering (property keys ascending, undefined last)
    Asc,
    /// Reverse of `Asc`
    Desc,
}

impl LabelOrder {
    pub fn label(&self) -> &'static str {
        match self {
            LabelOrder::None => "Original",
            LabelOrder::Asc => "Label A→Z",
            LabelOrder::Desc => "Label Z→A",
        }
    }

    pub fn all() -> &'static [LabelOrder] {
        &[LabelOrder::None, LabelOrder::Asc, LabelOrder::Desc]
    }
}

/// Collection scanned when discovering labels
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LabelSource {
    #[default]
    Records,
    /// Scan the mapper descriptors instead of the records
    Mappers,
}

/// Declarative mapping from records to chart series
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ChartConfig {
    /// How each record resolves to a category label
    pub category: CategorySpec,
    /// One descriptor per requested series family
    pub mappers: Vec<DataMapper>,
    /// Value emitted for slots without a valid number
    pub default_value: Option<f64>,
    pub label_order: LabelOrder,
    pub label_source: LabelSource,
}

impl ChartConfig {
    pub fn new(category: CategorySpec) -> Self {
        Self {
            category,
            ..Default::default()
        }
    }

    pub fn with_mapper(mut self, mapper: DataMapper) -> Self {
        self.mappers.push(mapper);
        self
    }

    pub fn with_default_value(mut self, default_value: f64) -> Self {
        self.default_value = Some(default_value);
        self
    }

    pub fn with_label_order(mut self, label_order: LabelOrder) -> Self {
        self.label_order = label_order;
        self
    }

    pub fn with_label_source(mut self, label_source: LabelSource) -> Self {
        self.label_source = label_source;
        self
    }
}
