use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::value::Value;

/// Fundamental ratios bundle
///
/// Schema-less: holds whatever tags the API sent, in the order they arrived.
/// Tag reference:
/// <https://web.archive.org/web/20200725010343/https://interactivebrokers.github.io/tws-api/fundamental_ratios_tags.html>
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FundamentalRatios {
    fields: IndexMap<String, Value>,
}

impl FundamentalRatios {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<Value>,
    {
        pairs.into_iter().collect()
    }

    /// Parse a `TAG=VALUE;TAG=VALUE;...` tick payload
    ///
    /// Segments without `=` are skipped. Values become ints or floats when
    /// they parse as such and stay strings otherwise.
    pub fn parse(payload: &str) -> Self {
        payload
            .split(';')
            .filter_map(|segment| segment.split_once('='))
            .map(|(tag, raw)| (tag, Value::parse(raw)))
            .collect()
    }

    /// Insert a field; an existing tag keeps its position
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.fields.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Numeric field value, if present and numeric
    pub fn get_f64(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Value::as_f64)
    }

    /// Text field value, if present and a string
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for FundamentalRatios {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut ratios = Self::new();
        for (k, v) in iter {
            ratios.insert(k, v);
        }
        ratios
    }
}

impl fmt::Display for FundamentalRatios {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FundamentalRatios(")?;
        for (i, (name, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}={}", name, value)?;
        }
        write!(f, ")")
    }
}
