//! Main Catalint struct and public API.

use tracing::{debug, info};

use crate::error::{CatalintError, Result};
use crate::format::Lookups;
use crate::input::{map_row, Record, Tokenizer};
use crate::schema::{SchemaRegistry, SheetSchema};
use crate::validation::{RecordValidator, ValidationReport};

/// Configuration for a validation run.
#[derive(Debug, Clone)]
pub struct CatalintConfig {
    /// The first row names the columns and is checked against the schema.
    pub has_header: bool,
    /// Worker threads used to validate records (1 = validate inline).
    pub threads: usize,
}

impl Default for CatalintConfig {
    fn default() -> Self {
        Self {
            has_header: false,
            threads: 1,
        }
    }
}

impl CatalintConfig {
    /// Expect a header row.
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Set the number of validation threads.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads.max(1);
        self
    }
}

/// The sheet validation engine.
///
/// Owns the schema registry and the injected lookups; both are read-only, so
/// one engine can validate any number of sheets.
#[derive(Debug, Clone)]
pub struct Catalint {
    config: CatalintConfig,
    registry: SchemaRegistry,
    tokenizer: Tokenizer,
    validator: RecordValidator,
}

impl Catalint {
    /// Create an engine with default configuration.
    pub fn new(lookups: Lookups) -> Self {
        Self::with_config(lookups, CatalintConfig::default())
    }

    /// Create an engine with custom configuration.
    pub fn with_config(lookups: Lookups, config: CatalintConfig) -> Self {
        Self {
            config,
            registry: SchemaRegistry::builtin(),
            tokenizer: Tokenizer::new(),
            validator: RecordValidator::new(lookups),
        }
    }

    /// The active configuration.
    pub fn config(&self) -> &CatalintConfig {
        &self.config
    }

    /// The schema registry.
    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// Tokenize and map a sheet into `(row, record)` pairs.
    ///
    /// The sheet name is resolved before the text is looked at, so an unknown
    /// sheet is reported even for malformed input.
    pub fn records(&self, sheet: &str, text: &str) -> Result<Vec<(usize, Record)>> {
        let schema = self.registry.schema_for(sheet)?;
        self.map_rows(schema, text)
    }

    fn map_rows(&self, schema: &SheetSchema, text: &str) -> Result<Vec<(usize, Record)>> {
        let mut rows = self.tokenizer.tokenize(text)?.into_iter().enumerate();

        if self.config.has_header {
            if let Some((_, header)) = rows.next() {
                check_header(schema, header)?;
            }
        }

        rows.map(|(idx, cells)| {
            let row = idx + 1;
            map_row(cells, schema, row).map(|record| (row, record))
        })
        .collect()
    }

    /// Validate a sheet and return every violation found.
    ///
    /// Structural problems (unknown sheet, malformed text, too many columns,
    /// header mismatch) abort the run with an error and no partial report.
    pub fn report(&self, sheet: &str, text: &str) -> Result<ValidationReport> {
        let schema = self.registry.schema_for(sheet)?;
        let records = self.map_rows(schema, text)?;

        debug!(
            sheet = %schema.sheet(),
            rows = records.len(),
            threads = self.config.threads,
            "validating sheet"
        );

        let mut report = ValidationReport::new(schema.sheet());
        report.records = self
            .validator
            .validate_records(&records, schema, self.config.threads);

        info!(
            sheet = %schema.sheet(),
            rows = records.len(),
            failing = report.len(),
            violations = report.violation_count(),
            "validation finished"
        );

        Ok(report)
    }

    /// Validate a sheet, failing with [`CatalintError::Validation`] on any violation.
    pub fn check(&self, sheet: &str, text: &str) -> Result<()> {
        self.report(sheet, text)?.into_result()
    }
}

fn check_header(schema: &SheetSchema, header: Vec<String>) -> Result<()> {
    let expected = schema.field_names();
    let matches = header.len() == expected.len()
        && header.iter().zip(&expected).all(|(found, name)| found == name);

    if matches {
        Ok(())
    } else {
        Err(CatalintError::HeaderMismatch {
            expected: expected.into_iter().map(str::to_string).collect(),
            found: header,
        })
    }
}
