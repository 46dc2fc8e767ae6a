/*
[INPUT]:  Caller-supplied request parameters (scalars only)
[OUTPUT]: Insertion-ordered parameter map used for canonical encoding
[POS]:    Data layer - request parameter model
[UPDATE]: When adding new scalar kinds or merge semantics change
*/

use std::fmt;

use rust_decimal::Decimal;

/// A scalar request parameter value. Nested values are not representable.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Str(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Decimal(Decimal),
    Bool(bool),
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Str(value) => f.write_str(value),
            ParamValue::Int(value) => write!(f, "{value}"),
            ParamValue::UInt(value) => write!(f, "{value}"),
            // f64's Display is the shortest round-trip form: 1.0 -> "1", 0.5 -> "0.5"
            ParamValue::Float(value) => write!(f, "{value}"),
            ParamValue::Decimal(value) => write!(f, "{}", value.normalize()),
            ParamValue::Bool(value) => f.write_str(if *value { "true" } else { "false" }),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Str(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Str(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Str(value.clone())
    }
}

impl From<i32> for ParamValue {
    fn from(value: i32) -> Self {
        ParamValue::Int(i64::from(value))
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::UInt(u64::from(value))
    }
}

impl From<u64> for ParamValue {
    fn from(value: u64) -> Self {
        ParamValue::UInt(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl From<Decimal> for ParamValue {
    fn from(value: Decimal) -> Self {
        ParamValue::Decimal(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

/// Insertion-ordered parameter map.
///
/// Re-inserting an existing key replaces the value but keeps the key's
/// original position, the same way an object spread behaves. Signatures
/// depend on this ordering byte for byte.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParameterMap {
    entries: Vec<(String, ParamValue)>,
}

impl ParameterMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a parameter, returning the previous value.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<ParamValue>,
    ) -> Option<ParamValue> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Apply `overrides` on top of `self`; later values win on collision.
    pub fn merge(mut self, overrides: &ParameterMap) -> Self {
        for (key, value) in overrides.iter() {
            self.insert(key, value.clone());
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(key, value)| (key.as_str(), value))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(key, _)| key.as_str())
    }
}

impl<K, V> FromIterator<(K, V)> for ParameterMap
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = ParameterMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for ParameterMap
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_first_position_on_replace() {
        let mut params = ParameterMap::new();
        params.insert("a", 1);
        params.insert("b", 2);
        let previous = params.insert("a", 3);

        assert_eq!(previous, Some(ParamValue::Int(1)));
        assert_eq!(params.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(params.get("a"), Some(&ParamValue::Int(3)));
    }

    #[test]
    fn test_merge_overrides_win() {
        let defaults = ParameterMap::from([("max_results", 100), ("start_index", 0)]);
        let overrides = ParameterMap::from([("start_index", 50)]).with("symbol", "ETHBTC");

        let merged = defaults.merge(&overrides);

        assert_eq!(
            merged.keys().collect::<Vec<_>>(),
            vec!["max_results", "start_index", "symbol"]
        );
        assert_eq!(merged.get("start_index"), Some(&ParamValue::Int(50)));
    }

    #[test]
    fn test_value_display_is_minimal() {
        assert_eq!(ParamValue::Float(1.0).to_string(), "1");
        assert_eq!(ParamValue::Float(0.5).to_string(), "0.5");
        assert_eq!(ParamValue::Int(-7).to_string(), "-7");
        assert_eq!(
            ParamValue::Decimal("1.50".parse().expect("decimal")).to_string(),
            "1.5"
        );
        assert_eq!(ParamValue::Bool(true).to_string(), "true");
    }
}
