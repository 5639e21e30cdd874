//! Validation engine: applies sheet schemas and aggregates violations.

mod validator;
mod violation;

pub use validator::RecordValidator;
pub use violation::{
    MISSING_REQUIRED, MULTIPLE_VALUES, RecordViolations, ValidationReport, Violation, ViolationKind,
};
