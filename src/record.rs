//! PHP variable records and the mapping-to-records normalizer.
//!
//! PHP input comes in two equivalent shapes:
//!
//! - a mapping from [`VariableName`] to [`Value`] ([`VariableMap`])
//! - an ordered list of `{name, value}` [`VariableRecord`]s
//!
//! [`normalize_to_records`] turns the first into the second, keeping order.
//!
//! ```rust
//! use hash2stuff::{normalize_to_records, Value, VariableMap, VariableName};
//!
//! let mut vars = VariableMap::new();
//! vars.insert(VariableName::new("foo"), Value::from("bar"));
//! vars.insert(VariableName::new("nested").with_subkey("subkey"), Value::from(1));
//!
//! let records = normalize_to_records(&vars);
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[1].name.subkeys(), ["subkey"]);
//! ```

use crate::{from_value, Error, Result, Value};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use tracing::trace;

/// Name of a generated PHP variable: a base identifier plus optional
/// associative sub-keys, e.g. `nested` + `["subkey"]` for `$nested['subkey']`.
///
/// A name always has a base; an empty path cannot be constructed.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct VariableName {
    base: String,
    subkeys: Vec<String>,
}

impl VariableName {
    /// Creates a plain variable name without sub-keys.
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        VariableName {
            base: base.into(),
            subkeys: Vec::new(),
        }
    }

    /// Appends a nested sub-key.
    #[must_use]
    pub fn with_subkey(mut self, key: impl Into<String>) -> Self {
        self.subkeys.push(key.into());
        self
    }

    /// Builds a name from a path whose first element is the base.
    ///
    /// # Errors
    ///
    /// Returns an argument type error if the path is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use hash2stuff::VariableName;
    ///
    /// let name = VariableName::from_path(vec!["nested".into(), "with".into(), "keys".into()]).unwrap();
    /// assert_eq!(name.base(), "nested");
    /// assert_eq!(name.subkeys(), ["with", "keys"]);
    /// assert!(VariableName::from_path(Vec::new()).is_err());
    /// ```
    pub fn from_path(path: Vec<String>) -> Result<Self> {
        let mut parts = path.into_iter();
        let base = parts
            .next()
            .ok_or_else(|| Error::argument("name", "expects a non-empty sequence of strings"))?;
        Ok(VariableName {
            base,
            subkeys: parts.collect(),
        })
    }

    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    #[must_use]
    pub fn subkeys(&self) -> &[String] {
        &self.subkeys
    }

    #[must_use]
    pub fn has_subkeys(&self) -> bool {
        !self.subkeys.is_empty()
    }
}

impl fmt::Display for VariableName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.base)?;
        for key in &self.subkeys {
            write!(f, "['{}']", key)?;
        }
        Ok(())
    }
}

impl From<&str> for VariableName {
    fn from(base: &str) -> Self {
        VariableName::new(base)
    }
}

impl From<String> for VariableName {
    fn from(base: String) -> Self {
        VariableName::new(base)
    }
}

impl Serialize for VariableName {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        if self.subkeys.is_empty() {
            return serializer.serialize_str(&self.base);
        }

        use serde::ser::SerializeSeq;
        let mut seq = serializer.serialize_seq(Some(self.subkeys.len() + 1))?;
        seq.serialize_element(&self.base)?;
        for key in &self.subkeys {
            seq.serialize_element(key)?;
        }
        seq.end()
    }
}

impl<'de> Deserialize<'de> for VariableName {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct NameVisitor;

        impl<'de> Visitor<'de> for NameVisitor {
            type Value = VariableName;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string or a non-empty sequence of strings")
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E> {
                Ok(VariableName::new(value))
            }

            fn visit_string<E>(self, value: String) -> std::result::Result<Self::Value, E> {
                Ok(VariableName::new(value))
            }

            fn visit_seq<A>(self, mut seq: A) -> std::result::Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                let base: String = seq
                    .next_element()?
                    .ok_or_else(|| de::Error::invalid_length(0, &self))?;
                let mut name = VariableName::new(base);
                while let Some(key) = seq.next_element::<String>()? {
                    name.subkeys.push(key);
                }
                Ok(name)
            }
        }

        deserializer.deserialize_any(NameVisitor)
    }
}

/// One PHP assignment: `$name = value;`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VariableRecord {
    pub name: VariableName,
    pub value: Value,
}

impl VariableRecord {
    pub fn new(name: impl Into<VariableName>, value: impl Into<Value>) -> Self {
        VariableRecord {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Variables keyed by name, in assignment order.
pub type VariableMap = IndexMap<VariableName, Value>;

/// Converts a variable mapping into records, one per entry, in iteration order.
#[must_use]
pub fn normalize_to_records(vars: &VariableMap) -> Vec<VariableRecord> {
    trace!(entries = vars.len(), "normalizing variable map");
    vars.iter()
        .map(|(name, value)| VariableRecord {
            name: name.clone(),
            value: value.clone(),
        })
        .collect()
}

/// Reads PHP input given as dynamic data.
///
/// A mapping is normalized with each key as a plain variable name; a sequence
/// must hold `{name, value}` mappings.
///
/// # Errors
///
/// Returns an argument type error for any other kind, or when a sequence
/// element is not a well-formed record.
///
/// # Examples
///
/// ```rust
/// use hash2stuff::{records_from_value, value};
///
/// let records = records_from_value(value!([
///     { "name": ["nested", "subkey"], "value": "Subvalue" }
/// ])).unwrap();
/// assert_eq!(records[0].name.to_string(), "nested['subkey']");
///
/// assert!(records_from_value(value!("some string")).is_err());
/// ```
pub fn records_from_value(input: Value) -> Result<Vec<VariableRecord>> {
    match input {
        Value::Mapping(map) => {
            let vars: VariableMap = map
                .into_iter()
                .map(|(key, value)| (VariableName::new(key), value))
                .collect();
            Ok(normalize_to_records(&vars))
        }
        Value::Sequence(_) => from_value(input).map_err(|e| {
            Error::argument(
                "input",
                format!("expects a sequence of {{name, value}} records: {}", e),
            )
        }),
        other => Err(Error::argument(
            "input",
            format!(
                "expects a mapping or a sequence of {{name, value}} records, got {}",
                other.kind()
            ),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value;

    #[test]
    fn test_normalize_preserves_order_and_count() {
        let mut vars = VariableMap::new();
        vars.insert(VariableName::new("simple"), Value::from("string"));
        vars.insert(
            VariableName::new("nested")
                .with_subkey("with")
                .with_subkey("subkeys"),
            value!({ "value": "subkey" }),
        );

        let records = normalize_to_records(&vars);
        assert_eq!(
            records,
            vec![
                VariableRecord::new("simple", "string"),
                VariableRecord {
                    name: VariableName::from_path(vec![
                        "nested".to_string(),
                        "with".to_string(),
                        "subkeys".to_string(),
                    ])
                    .unwrap(),
                    value: value!({ "value": "subkey" }),
                },
            ]
        );
    }

    #[test]
    fn test_normalize_empty() {
        assert!(normalize_to_records(&VariableMap::new()).is_empty());
    }

    #[test]
    fn test_records_from_mapping() {
        let records = records_from_value(value!({ "b": 1, "a": 2 })).unwrap();
        assert_eq!(records[0], VariableRecord::new("b", 1));
        assert_eq!(records[1], VariableRecord::new("a", 2));
    }

    #[test]
    fn test_records_from_sequence() {
        let records = records_from_value(value!([
            { "name": "foo", "value": "bar" },
            { "name": ["nested", "subkey"], "value": ["one", "two"] }
        ]))
        .unwrap();

        assert_eq!(records[0], VariableRecord::new("foo", "bar"));
        assert_eq!(records[1].name.base(), "nested");
        assert_eq!(records[1].name.subkeys(), ["subkey"]);
    }

    #[test]
    fn test_records_rejects_malformed_input() {
        let err = records_from_value(value!(42)).unwrap_err();
        assert!(err.to_string().contains("got integer"));

        let missing_value = records_from_value(value!([{ "name": "foo" }]));
        assert!(matches!(missing_value, Err(Error::ArgumentType { .. })));

        let empty_name = records_from_value(value!([{ "name": [], "value": 1 }]));
        assert!(empty_name.is_err());
    }

    #[test]
    fn test_name_serializes_as_string_or_path() {
        assert_eq!(
            crate::to_value(&VariableName::new("foo")).unwrap(),
            value!("foo")
        );
        assert_eq!(
            crate::to_value(&VariableName::new("foo").with_subkey("bar")).unwrap(),
            value!(["foo", "bar"])
        );
    }
}
