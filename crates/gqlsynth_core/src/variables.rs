//! Request variables.
//!
//! A variable is either bound to a JSON value (`null` included) or present
//! but undefined, meaning "not supplied". Only defined variables produce
//! arguments and variable definitions.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// Insertion-ordered variables of a data-access request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Variables {
    values: IndexMap<String, Option<Value>>,
}

impl Variables {
    /// Creates an empty variable set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds a variable to a value.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(name.into(), Some(value.into()));
    }

    /// Records a variable that is present but not supplied.
    pub fn insert_undefined(&mut self, name: impl Into<String>) {
        self.values.insert(name.into(), None);
    }

    /// Builder-style [`Variables::insert`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Returns the value bound to `name`, if it is defined.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.values.get(name).and_then(Option::as_ref)
    }

    /// Returns true if `name` is bound to a defined value.
    #[must_use]
    pub fn is_defined(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Returns a copy without the given names.
    #[must_use]
    pub fn without(&self, names: &[&str]) -> Self {
        Self {
            values: self
                .values
                .iter()
                .filter(|(name, _)| !names.contains(&name.as_str()))
                .map(|(name, value)| (name.clone(), value.clone()))
                .collect(),
        }
    }

    /// Returns the defined variables as a JSON object.
    #[must_use]
    pub fn to_json(&self) -> Map<String, Value> {
        self.values
            .iter()
            .filter_map(|(name, value)| value.clone().map(|v| (name.clone(), v)))
            .collect()
    }

    /// Returns the number of variables, defined or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns true if there are no variables.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl From<Map<String, Value>> for Variables {
    fn from(map: Map<String, Value>) -> Self {
        map.into_iter().collect()
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for Variables {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(name, value)| (name.into(), Some(value)))
                .collect(),
        }
    }
}

impl<'de> Deserialize<'de> for Variables {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Map::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defined_and_undefined() {
        let mut vars = Variables::new();
        vars.insert("foo", "foo_value");
        vars.insert("bar", Value::Null);
        vars.insert_undefined("baz");

        assert!(vars.is_defined("foo"));
        assert!(vars.is_defined("bar"));
        assert!(!vars.is_defined("baz"));
        assert!(!vars.is_defined("missing"));
        assert_eq!(vars.len(), 3);
        assert_eq!(vars.to_json().keys().collect::<Vec<_>>(), ["foo", "bar"]);
    }

    #[test]
    fn test_without() {
        let vars = Variables::new()
            .with("sortField", "id")
            .with("sortOrder", "ASC")
            .with("page", 1);
        let meta = vars.without(&["sortField", "sortOrder"]);

        assert_eq!(meta.to_json().keys().collect::<Vec<_>>(), ["page"]);
        assert_eq!(vars.len(), 3);
    }

    #[test]
    fn test_to_json_strips_undefined() {
        let mut vars = Variables::new().with("id", 1).with("title", Value::Null);
        vars.insert_undefined("body");

        assert_eq!(Value::Object(vars.to_json()), json!({ "id": 1, "title": null }));
    }

    #[test]
    fn test_deserialize() {
        let vars: Variables = serde_json::from_value(json!({ "id": "1", "ids": [1, 2] })).unwrap();

        assert_eq!(vars.get("ids"), Some(&json!([1, 2])));
        assert!(vars.is_defined("id"));
    }
}
