//! Tagged field values and the generic row form consumed by the statistics
//! engine.
//!
//! Typed records are converted into a [`Row`] exactly once, at the boundary
//! between normalization and analysis. Column discovery then reduces to a tag
//! match instead of runtime type inspection.

use std::collections::BTreeMap;

/// A single observed value with an explicit type tag.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Missing or unparseable data.
    Null,
    /// A finite numeric observation.
    Number(f64),
    /// A tri-state boolean attribute. Never treated as numeric.
    Bool(bool),
    /// Free-form or categorical text.
    Text(String),
}

impl FieldValue {
    /// Returns the numeric payload when this value is [`FieldValue::Number`].
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns true when this value carries no data.
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    /// Wrap an optional numeric observation.
    pub fn number(value: Option<f64>) -> Self {
        value.map_or(FieldValue::Null, FieldValue::Number)
    }

    /// Wrap an optional boolean attribute.
    pub fn boolean(value: Option<bool>) -> Self {
        value.map_or(FieldValue::Null, FieldValue::Bool)
    }

    /// Wrap an optional text attribute.
    pub fn text(value: Option<&str>) -> Self {
        value.map_or(FieldValue::Null, |text| {
            FieldValue::Text(text.to_string())
        })
    }
}

/// One flat record in the generic form the statistics engine operates on.
///
/// Only scalar attributes appear here; list attributes and nested sub-records
/// are left out (nested numeric leaves are hoisted by the record's
/// [`ToRow`] implementation under a prefixed name).
pub type Row = BTreeMap<String, FieldValue>;

/// Conversion from a typed flat record into its analysis row.
pub trait ToRow {
    /// Build the row for this record. Every scalar field of the record must
    /// be present, with [`FieldValue::Null`] for missing data.
    fn to_row(&self) -> Row;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_wraps_option() {
        assert_eq!(FieldValue::number(Some(2.5)), FieldValue::Number(2.5));
        assert_eq!(FieldValue::number(None), FieldValue::Null);
    }

    #[test]
    fn as_number_rejects_bool() {
        assert_eq!(FieldValue::Bool(true).as_number(), None);
        assert_eq!(FieldValue::Number(1.0).as_number(), Some(1.0));
    }

    #[test]
    fn text_wraps_option() {
        assert_eq!(
            FieldValue::text(Some("Gryffindor")),
            FieldValue::Text("Gryffindor".to_string())
        );
        assert!(FieldValue::text(None).is_null());
    }
}
