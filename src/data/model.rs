use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

// ---------------------------------------------------------------------------
// IndexDefinition – one entry of the catalog
// ---------------------------------------------------------------------------

/// A single spectral index as described by the dataset.
///
/// Only `bands` is interpreted. Every other field (formula, long name,
/// reference, platforms, ...) is carried through untouched in `extra`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexDefinition {
    /// Band names required to compute the index, in dataset order.
    /// May be empty; duplicates are kept as-is.
    pub bands: Vec<String>,
    /// Opaque remaining fields of the record.
    #[serde(flatten)]
    pub extra: Map<String, JsonValue>,
}

impl IndexDefinition {
    pub fn new<I, S>(bands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            bands: bands.into_iter().map(Into::into).collect(),
            extra: Map::new(),
        }
    }

    /// Raw access to any pass-through field.
    pub fn field(&self, name: &str) -> Option<&JsonValue> {
        self.extra.get(name)
    }

    fn str_field(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(JsonValue::as_str)
    }

    pub fn formula(&self) -> Option<&str> {
        self.str_field("formula")
    }

    pub fn long_name(&self) -> Option<&str> {
        self.str_field("long_name")
    }

    pub fn reference(&self) -> Option<&str> {
        self.str_field("reference")
    }

    pub fn application_domain(&self) -> Option<&str> {
        self.str_field("application_domain")
    }
}

// ---------------------------------------------------------------------------
// IndexCatalog – the "SpectralIndices" mapping
// ---------------------------------------------------------------------------

/// All known index definitions keyed by index name.
///
/// Lookup is exact and case-sensitive. The catalog is never mutated once
/// built; every fetch produces a fresh one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IndexCatalog {
    indices: BTreeMap<String, IndexDefinition>,
}

impl IndexCatalog {
    pub fn get(&self, index: &str) -> Option<&IndexDefinition> {
        self.indices.get(index)
    }

    pub fn contains(&self, index: &str) -> bool {
        self.indices.contains_key(index)
    }

    /// Index names in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.indices.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &IndexDefinition)> {
        self.indices.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of indices.
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Whether the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

impl<S: Into<String>> FromIterator<(S, IndexDefinition)> for IndexCatalog {
    fn from_iter<T: IntoIterator<Item = (S, IndexDefinition)>>(iter: T) -> Self {
        Self {
            indices: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// ParamValue – caller-supplied band input
// ---------------------------------------------------------------------------

/// A band value handed in for index computation: a single reflectance or a
/// whole array of them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Scalar(f64),
    Array(Vec<f64>),
}

/// Band name → value, owned by the caller.
pub type ParameterSet = BTreeMap<String, ParamValue>;

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Scalar(v)
    }
}

impl From<Vec<f64>> for ParamValue {
    fn from(v: Vec<f64>) -> Self {
        ParamValue::Array(v)
    }
}
