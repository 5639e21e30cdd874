//! Named records built from tokenized rows.

use std::borrow::Cow;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::{CatalintError, Result};
use crate::schema::SheetSchema;

/// Separator between values of a multi-valued field.
pub const MULTI_VALUE_SEPARATOR: &str = "; ";

/// The value of one field of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Field declared single-valued; kept exactly as tokenized.
    Single(String),
    /// Field that may hold several values, split on `"; "`.
    Multiple(Vec<String>),
}

impl FieldValue {
    /// Split a raw cell on the multi-value separator.
    pub fn split(raw: &str) -> Self {
        FieldValue::Multiple(
            raw.split(MULTI_VALUE_SEPARATOR)
                .map(str::to_string)
                .collect(),
        )
    }

    /// The scalar values held by this field.
    pub fn values(&self) -> &[String] {
        match self {
            FieldValue::Single(value) => std::slice::from_ref(value),
            FieldValue::Multiple(values) => values,
        }
    }

    /// Number of scalar values.
    pub fn len(&self) -> usize {
        self.values().len()
    }

    /// The raw cell text, with split values joined back together.
    pub fn joined(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Single(value) => Cow::Borrowed(value.as_str()),
            FieldValue::Multiple(values) if values.len() == 1 => Cow::Borrowed(values[0].as_str()),
            FieldValue::Multiple(values) => Cow::Owned(values.join(MULTI_VALUE_SEPARATOR)),
        }
    }

    /// True when no value was supplied for the field.
    pub fn is_empty(&self) -> bool {
        self.joined().is_empty()
    }

    /// True when the raw cell text carries the multi-value separator.
    pub fn has_separator(&self) -> bool {
        self.joined().contains(MULTI_VALUE_SEPARATOR)
    }
}

/// One row of a sheet, keyed by field name in schema order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Record {
    fields: IndexMap<String, FieldValue>,
}

impl Record {
    /// Get a field's value by name.
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Identifying label: the first field's raw text.
    pub fn label(&self) -> String {
        self.fields
            .first()
            .map(|(_, value)| value.joined().into_owned())
            .unwrap_or_default()
    }

    /// Iterate fields in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the record has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, FieldValue)> for Record {
    fn from_iter<I: IntoIterator<Item = (K, FieldValue)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

/// Map a tokenized row onto a sheet's fields, in schema order.
///
/// Missing trailing columns are treated as empty values. Extra columns are a
/// [`CatalintError::RowShape`] error. Fields whose cardinality may allow
/// several values are split here; computed cardinality is only resolved by
/// the validator.
pub fn map_row(row: Vec<String>, schema: &SheetSchema, row_number: usize) -> Result<Record> {
    if row.len() > schema.len() {
        return Err(CatalintError::RowShape {
            row: row_number,
            expected: schema.len(),
            found: row.len(),
        });
    }

    let mut columns = row.into_iter();
    let fields = schema
        .fields()
        .map(|(name, rule)| {
            let raw = columns.next().unwrap_or_default();
            let value = if rule.cardinality.may_be_multiple() {
                FieldValue::split(&raw)
            } else {
                FieldValue::Single(raw)
            };
            (name.to_string(), value)
        })
        .collect();

    Ok(Record { fields })
}
