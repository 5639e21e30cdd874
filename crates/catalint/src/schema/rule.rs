//! Per-field rules: requiredness, cardinality and format.

use std::fmt;

use crate::format::Format;
use crate::input::Record;

/// Decides from a whole record whether a field may hold several values.
pub type CardinalityFn = fn(&Record) -> bool;

/// Whether a field may carry more than one `"; "`-separated value.
#[derive(Debug, Clone, Copy)]
pub enum Cardinality {
    /// Fixed: `true` for multi-valued, `false` for exactly one value.
    Static(bool),
    /// Depends on other fields of the same record.
    Computed {
        /// Short name used in diagnostics and schema listings.
        name: &'static str,
        rule: CardinalityFn,
    },
}

impl Cardinality {
    /// Whether the record mapper should split the raw value.
    ///
    /// Computed rules count as possibly multiple; they are resolved later
    /// against the full record.
    pub fn may_be_multiple(&self) -> bool {
        !matches!(self, Cardinality::Static(false))
    }

    /// Resolve the rule for a concrete record.
    pub fn allows_multiple(&self, record: &Record) -> bool {
        match self {
            Cardinality::Static(multiple) => *multiple,
            Cardinality::Computed { rule, .. } => rule(record),
        }
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cardinality::Static(true) => write!(f, "multiple"),
            Cardinality::Static(false) => write!(f, "single"),
            Cardinality::Computed { name, .. } => write!(f, "computed ({})", name),
        }
    }
}

/// The contract for one field of one sheet.
#[derive(Debug, Clone)]
pub struct FieldRule {
    /// An empty value is a violation.
    pub required: bool,
    /// Single, multiple, or record-dependent.
    pub cardinality: Cardinality,
    /// Format every scalar value must satisfy.
    pub format: Option<Format>,
}

impl FieldRule {
    /// A required, single-valued field with no format.
    pub fn required() -> Self {
        Self {
            required: true,
            cardinality: Cardinality::Static(false),
            format: None,
        }
    }

    /// An optional, single-valued field with no format.
    pub fn optional() -> Self {
        Self {
            required: false,
            ..Self::required()
        }
    }

    /// Allow several `"; "`-separated values.
    pub fn multiple(mut self) -> Self {
        self.cardinality = Cardinality::Static(true);
        self
    }

    /// Let the record decide whether several values are allowed.
    pub fn computed(mut self, name: &'static str, rule: CardinalityFn) -> Self {
        self.cardinality = Cardinality::Computed { name, rule };
        self
    }

    /// Set the format constraint.
    pub fn with_format(mut self, format: Format) -> Self {
        self.format = Some(format);
        self
    }
}
