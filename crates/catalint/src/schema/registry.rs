//! The sheet schema registry.

use indexmap::IndexMap;

use crate::error::Result;

use super::rule::FieldRule;
use super::sheets::{self, Sheet};

/// Ordered field rules for one sheet.
#[derive(Debug, Clone)]
pub struct SheetSchema {
    sheet: Sheet,
    fields: IndexMap<&'static str, FieldRule>,
}

impl SheetSchema {
    /// Create a schema from fields in column order.
    pub fn new(sheet: Sheet, fields: impl IntoIterator<Item = (&'static str, FieldRule)>) -> Self {
        Self {
            sheet,
            fields: fields.into_iter().collect(),
        }
    }

    /// The sheet this schema describes.
    pub fn sheet(&self) -> Sheet {
        self.sheet
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// True when the schema declares no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate fields in column order.
    pub fn fields(&self) -> impl Iterator<Item = (&'static str, &FieldRule)> {
        self.fields.iter().map(|(name, rule)| (*name, rule))
    }

    /// Get a field's rule by name.
    pub fn field(&self, name: &str) -> Option<&FieldRule> {
        self.fields.get(name)
    }

    /// Field names in column order.
    pub fn field_names(&self) -> Vec<&'static str> {
        self.fields.keys().copied().collect()
    }
}

/// Immutable lookup from sheet to schema, built once per process.
#[derive(Debug, Clone)]
pub struct SchemaRegistry {
    schemas: IndexMap<Sheet, SheetSchema>,
}

impl SchemaRegistry {
    /// The registry of built-in sheets.
    pub fn builtin() -> Self {
        let schemas = Sheet::ALL
            .into_iter()
            .map(|sheet| (sheet, SheetSchema::new(sheet, sheets::fields(sheet))))
            .collect();
        Self { schemas }
    }

    /// Look up a schema by sheet name.
    pub fn schema_for(&self, name: &str) -> Result<&SheetSchema> {
        let sheet: Sheet = name.parse()?;
        Ok(self.sheet(sheet))
    }

    /// Get the schema for a sheet.
    pub fn sheet(&self, sheet: Sheet) -> &SheetSchema {
        &self.schemas[&sheet]
    }

    /// Iterate all schemas in dataset order.
    pub fn iter(&self) -> impl Iterator<Item = &SheetSchema> {
        self.schemas.values()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
