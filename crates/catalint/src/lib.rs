//! Catalint: validation engine for the sheets of a bibliographic catalog.
//!
//! A catalog dataset is split into named sheets (`catalog`, `authors`,
//! `publishers`, `places`). Catalint tokenizes the raw text of one sheet,
//! maps every row onto the sheet's declared fields and checks each field
//! against its rules, collecting every violation instead of stopping at the
//! first one.
//!
//! # Core Principles
//!
//! - **Exhaustive**: one run reports everything wrong with a sheet
//! - **Schema-driven**: field order, requiredness, cardinality and formats come from one registry
//! - **Injected lookups**: license and language-tag membership are supplied by the caller
//!
//! # Example
//!
//! ```
//! use catalint::{Catalint, LanguageTags, Lookups, SpdxLicenses};
//!
//! let lookups = Lookups::new(SpdxLicenses::from_ids(["MIT"]), LanguageTags::well_formed());
//! let catalint = Catalint::new(lookups);
//!
//! let report = catalint.report("places", "Paris,FR,Q90,\n,FR,,").unwrap();
//! assert_eq!(report.len(), 1);
//! println!("{}", report);
//! ```

pub mod error;
pub mod format;
pub mod input;
pub mod schema;
pub mod validation;

mod catalint;

pub use crate::catalint::{Catalint, CatalintConfig};
pub use error::{CatalintError, Result};
pub use format::{Format, FormatKind, LanguageTags, Lookup, LookupKind, Lookups, PatternKind, SpdxLicenses};
pub use input::{FieldValue, Record, Tokenizer};
pub use schema::{Cardinality, FieldRule, SchemaRegistry, Sheet, SheetSchema};
pub use validation::{RecordValidator, RecordViolations, ValidationReport, Violation, ViolationKind};
