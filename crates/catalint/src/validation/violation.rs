//! Field violations and the aggregated report.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CatalintError, Result};
use crate::format::FormatKind;
use crate::schema::Sheet;

/// Message for a required field with no value.
pub const MISSING_REQUIRED: &str = "missing required value";

/// Message for a single-valued field carrying the multi-value separator.
pub const MULTIPLE_VALUES: &str = "multiple values but only one expected";

/// Type of rule a field failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    /// Required field is empty.
    MissingRequired,
    /// Several values where one is expected.
    Cardinality,
    /// One or more values failed the field's format.
    Format(FormatKind),
}

impl ViolationKind {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            ViolationKind::MissingRequired => "missing value",
            ViolationKind::Cardinality => "cardinality",
            ViolationKind::Format(FormatKind::EnumSet) => "enumerated set mismatch",
            ViolationKind::Format(FormatKind::Pattern) => "pattern mismatch",
            ViolationKind::Format(FormatKind::Predicate) => "predicate mismatch",
        }
    }
}

/// A single field-level rule failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// Field name.
    pub field: String,
    /// Which rule failed.
    pub kind: ViolationKind,
    /// Human-readable description.
    pub message: String,
}

impl Violation {
    /// Create a new violation.
    pub fn new(field: impl Into<String>, kind: ViolationKind, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            kind,
            message: message.into(),
        }
    }

    /// A required field left empty.
    pub fn missing_required(field: impl Into<String>) -> Self {
        Self::new(field, ViolationKind::MissingRequired, MISSING_REQUIRED)
    }

    /// A single-valued field holding several values.
    pub fn multiple_values(field: impl Into<String>) -> Self {
        Self::new(field, ViolationKind::Cardinality, MULTIPLE_VALUES)
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// All violations of one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordViolations {
    /// 1-based row number of the record.
    pub row: usize,
    /// The record's first field, used to identify it.
    pub label: String,
    /// Violations in field order.
    pub violations: Vec<Violation>,
}

/// Every violation found in one run, grouped by record in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// Sheet the records belong to.
    pub sheet: Sheet,
    /// One entry per failing record.
    pub records: Vec<RecordViolations>,
}

impl ValidationReport {
    /// Create an empty report.
    pub fn new(sheet: Sheet) -> Self {
        Self {
            sheet,
            records: Vec::new(),
        }
    }

    /// True when no record failed any check.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of failing records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Total number of violations across records.
    pub fn violation_count(&self) -> usize {
        self.records.iter().map(|r| r.violations.len()).sum()
    }

    /// Iterate failing records in source order.
    pub fn iter(&self) -> impl Iterator<Item = &RecordViolations> {
        self.records.iter()
    }

    /// `Ok(())` for an empty report, otherwise a [`CatalintError::Validation`].
    pub fn into_result(self) -> Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(CatalintError::Validation(self))
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in &self.records {
            writeln!(f, "{} (row {}):", record.label, record.row)?;
            for violation in &record.violations {
                writeln!(f, "  {}", violation)?;
            }
        }
        Ok(())
    }
}
