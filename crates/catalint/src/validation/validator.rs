//! Applies sheet schemas to mapped records.

use std::thread;

use tracing::trace;

use crate::format::Lookups;
use crate::input::{FieldValue, Record};
use crate::schema::{FieldRule, SheetSchema};

use super::violation::{RecordViolations, Violation, ViolationKind};

/// Checks records against field rules, consulting the injected lookups.
///
/// Every field of a record is checked; failures are collected, never
/// short-circuited, so one pass reports everything wrong with the sheet.
#[derive(Debug, Clone)]
pub struct RecordValidator {
    lookups: Lookups,
}

impl RecordValidator {
    /// Create a validator using the given lookups.
    pub fn new(lookups: Lookups) -> Self {
        Self { lookups }
    }

    /// The lookups format checks consult.
    pub fn lookups(&self) -> &Lookups {
        &self.lookups
    }

    /// Validate one record. Violations come back in field order.
    pub fn validate_record(&self, record: &Record, schema: &SheetSchema) -> Vec<Violation> {
        let absent = FieldValue::Single(String::new());
        let mut violations = Vec::new();

        for (name, rule) in schema.fields() {
            let value = record.get(name).unwrap_or(&absent);
            self.validate_field(name, rule, value, record, &mut violations);
        }

        violations
    }

    fn validate_field(
        &self,
        name: &str,
        rule: &FieldRule,
        value: &FieldValue,
        record: &Record,
        violations: &mut Vec<Violation>,
    ) {
        if value.is_empty() {
            if rule.required {
                violations.push(Violation::missing_required(name));
            }
            return;
        }

        if !rule.cardinality.allows_multiple(record) && value.has_separator() {
            violations.push(Violation::multiple_values(name));
        }

        if let Some(format) = rule.format {
            let failures: Vec<String> = value
                .values()
                .iter()
                .filter(|v| !format.check(v, &self.lookups))
                .map(|v| format.mismatch(v))
                .collect();

            if !failures.is_empty() {
                violations.push(Violation::new(
                    name,
                    ViolationKind::Format(format.kind()),
                    failures.join("; "),
                ));
            }
        }
    }

    /// Validate `(row, record)` pairs, keeping only failing records.
    ///
    /// With `threads > 1` the records are split into contiguous chunks checked
    /// on scoped threads; groups are still returned in input order.
    pub fn validate_records(
        &self,
        records: &[(usize, Record)],
        schema: &SheetSchema,
        threads: usize,
    ) -> Vec<RecordViolations> {
        let threads = threads.max(1);
        if threads == 1 || records.len() < 2 {
            return self.validate_chunk(records, schema);
        }

        let chunk_size = records.len().div_ceil(threads);
        thread::scope(|scope| {
            let workers: Vec<_> = records
                .chunks(chunk_size)
                .map(|chunk| scope.spawn(move || self.validate_chunk(chunk, schema)))
                .collect();

            workers
                .into_iter()
                .flat_map(|worker| worker.join().unwrap_or_else(|e| std::panic::resume_unwind(e)))
                .collect()
        })
    }

    fn validate_chunk(&self, records: &[(usize, Record)], schema: &SheetSchema) -> Vec<RecordViolations> {
        records
            .iter()
            .filter_map(|(row, record)| {
                let violations = self.validate_record(record, schema);
                if violations.is_empty() {
                    return None;
                }
                let label = record.label();
                trace!(row, label = %label, count = violations.len(), "record failed validation");
                Some(RecordViolations {
                    row: *row,
                    label,
                    violations,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::format::{FormatKind, SpdxLicenses};
    use crate::input::map_row;
    use crate::schema::{SchemaRegistry, Sheet};
    use crate::validation::violation::{MISSING_REQUIRED, MULTIPLE_VALUES};

    fn validator() -> RecordValidator {
        RecordValidator::new(Lookups::new(
            SpdxLicenses::from_ids(["MIT", "CC-BY-4.0"]),
            |tag: &str| matches!(tag, "en" | "fr" | "de"),
        ))
    }

    fn publisher(cells: &[&str]) -> Record {
        let registry = SchemaRegistry::builtin();
        let row = cells.iter().map(|s| s.to_string()).collect();
        map_row(row, registry.sheet(Sheet::Publishers), 1).unwrap()
    }

    #[test]
    fn test_missing_required_stops_field_checks() {
        let registry = SchemaRegistry::builtin();
        let record = publisher(&["", "", "", "not-a-qid"]);
        let violations = validator().validate_record(&record, registry.sheet(Sheet::Publishers));

        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].field, "name");
        assert_eq!(violations[0].message, MISSING_REQUIRED);
        assert_eq!(violations[1].field, "qid");
        assert_eq!(violations[1].kind, ViolationKind::Format(FormatKind::Pattern));
    }

    #[test]
    fn test_empty_optional_field_is_skipped() {
        let registry = SchemaRegistry::builtin();
        let record = publisher(&["Acme"]);
        assert!(validator()
            .validate_record(&record, registry.sheet(Sheet::Publishers))
            .is_empty());
    }

    #[test]
    fn test_single_valued_field_with_separator() {
        let registry = SchemaRegistry::builtin();
        let record = publisher(&["Acme", "", "", "Q1; Q2"]);
        let violations = validator().validate_record(&record, registry.sheet(Sheet::Publishers));

        // The unsplit value is both a cardinality and a format failure.
        assert_eq!(violations.len(), 2);
        assert_eq!(violations[0].message, MULTIPLE_VALUES);
        assert_eq!(violations[1].kind, ViolationKind::Format(FormatKind::Pattern));
    }

    #[test]
    fn test_format_failures_are_joined_per_field() {
        let registry = SchemaRegistry::builtin();
        let schema = registry.sheet(Sheet::Catalog);
        let mut cells = vec![""; 24];
        cells[0] = "B9";
        cells[1] = "Title";
        cells[2] = "Smith";
        cells[3] = "https://example.com";
        cells[6] = "print";
        cells[15] = "en; xx; yy";
        cells[17] = "key";
        cells[18] = "Aves";
        cells[20] = "DE";
        let row = cells.iter().map(|s| s.to_string()).collect();
        let record = map_row(row, schema, 1).unwrap();

        let violations = validator().validate_record(&record, schema);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].field, "language");
        assert_eq!(violations[0].kind, ViolationKind::Format(FormatKind::Predicate));
        assert_eq!(
            violations[0].message,
            "\"xx\" is not a valid IETF BCP 47 language tag; \"yy\" is not a valid IETF BCP 47 language tag"
        );
    }

    #[test]
    fn test_threaded_validation_keeps_order() {
        let registry = SchemaRegistry::builtin();
        let schema = registry.sheet(Sheet::Publishers);
        let records: Vec<(usize, Record)> = (1..=40)
            .map(|row| {
                let name = if row % 3 == 0 { String::new() } else { format!("P{row}") };
                (row, publisher(&[name.as_str()]))
            })
            .collect();

        let serial = validator().validate_records(&records, schema, 1);
        let threaded = validator().validate_records(&records, schema, 4);

        assert_eq!(serial, threaded);
        assert_eq!(serial.len(), 13);
        assert!(serial.windows(2).all(|w| w[0].row < w[1].row));
    }
}
