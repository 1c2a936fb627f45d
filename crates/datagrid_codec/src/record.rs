//! Open record type.

use serde::de::{self, Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One row of tabular data.
///
/// A record is an ordered mapping from field name to a string value.
/// Numeric and date-like fields are kept as their display text and
/// parsed on demand by whoever needs a typed view of them.
///
/// Field order is the order in which fields were first set, and it is
/// preserved through serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    fields: Vec<(String, String)>,
}

impl Record {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of a field, if present.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.as_str())
    }

    /// Returns the value of a field, or the empty string when absent.
    #[must_use]
    pub fn value(&self, field: &str) -> &str {
        self.get(field).unwrap_or("")
    }

    /// Sets a field, returning the previous value.
    ///
    /// New fields are appended; existing fields keep their position.
    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) -> Option<String> {
        let field = field.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(name, _)| *name == field) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.fields.push((field, value));
                None
            }
        }
    }

    /// Builder-style variant of [`Record::set`].
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    /// Removes a field, returning its value.
    pub fn remove(&mut self, field: &str) -> Option<String> {
        let pos = self.fields.iter().position(|(name, _)| name == field)?;
        Some(self.fields.remove(pos).1)
    }

    /// Returns true if the field is present.
    #[must_use]
    pub fn contains(&self, field: &str) -> bool {
        self.fields.iter().any(|(name, _)| name == field)
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterates over field names in order.
    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Iterates over `(field, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Record
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (field, value) in iter {
            record.set(field, value);
        }
        record
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (field, value) in &self.fields {
            map.serialize_entry(field, value)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RecordVisitor)
    }
}

struct RecordVisitor;

impl<'de> Visitor<'de> for RecordVisitor {
    type Value = Record;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an object of scalar field values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Record, A::Error> {
        let mut record = Record::new();
        while let Some((field, CellText(value))) = access.next_entry::<String, CellText>()? {
            record.set(field, value);
        }
        Ok(record)
    }
}

/// A scalar cell value coerced to its display text.
struct CellText(String);

impl<'de> Deserialize<'de> for CellText {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(CellTextVisitor)
    }
}

struct CellTextVisitor;

impl<'de> Visitor<'de> for CellTextVisitor {
    type Value = CellText;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a string, number, boolean or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<CellText, E> {
        Ok(CellText(v.to_owned()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<CellText, E> {
        Ok(CellText(v))
    }

    fn visit_bool<E: de::Error>(self, v: bool) -> Result<CellText, E> {
        Ok(CellText(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<CellText, E> {
        Ok(CellText(v.to_string()))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<CellText, E> {
        Ok(CellText(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<CellText, E> {
        Ok(CellText(v.to_string()))
    }

    fn visit_unit<E: de::Error>(self) -> Result<CellText, E> {
        Ok(CellText(String::new()))
    }

    fn visit_none<E: de::Error>(self) -> Result<CellText, E> {
        Ok(CellText(String::new()))
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<CellText, D::Error> {
        deserializer.deserialize_any(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_keeps_position_and_returns_previous() {
        let mut record = Record::new().with("id", "EMP001").with("name", "Alice");
        assert_eq!(record.set("id", "EMP009"), Some("EMP001".to_string()));
        assert_eq!(record.fields().collect::<Vec<_>>(), vec!["id", "name"]);
        assert_eq!(record.value("id"), "EMP009");
    }

    #[test]
    fn missing_field_reads_as_empty() {
        let record = Record::new().with("name", "Alice");
        assert_eq!(record.get("salary"), None);
        assert_eq!(record.value("salary"), "");
    }

    #[test]
    fn remove_field() {
        let mut record = Record::new().with("a", "1").with("b", "2");
        assert_eq!(record.remove("a"), Some("1".to_string()));
        assert!(!record.contains("a"));
        assert_eq!(record.len(), 1);
    }

    #[test]
    fn json_preserves_authored_order() {
        let record = Record::new()
            .with("zeta", "1")
            .with("alpha", "2")
            .with("mid", "3");
        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"zeta":"1","alpha":"2","mid":"3"}"#);

        let back: Record = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn json_scalars_become_text() {
        let record: Record =
            serde_json::from_str(r#"{"n": 42, "f": 1.5, "b": true, "z": null, "neg": -3}"#)
                .unwrap();
        assert_eq!(record.value("n"), "42");
        assert_eq!(record.value("f"), "1.5");
        assert_eq!(record.value("b"), "true");
        assert_eq!(record.value("z"), "");
        assert_eq!(record.value("neg"), "-3");
    }

    #[test]
    fn json_nested_values_are_rejected() {
        let result: Result<Record, _> = serde_json::from_str(r#"{"tags": ["a", "b"]}"#);
        assert!(result.is_err());
    }
}
