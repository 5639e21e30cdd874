//! Validator performance benchmarks.
//!
//! Measures format checks, single-record validation and whole-sheet runs
//! with and without worker threads.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use catalint::input::map_row;
use catalint::{
    Catalint, CatalintConfig, LanguageTags, Lookups, PatternKind, RecordValidator, SchemaRegistry,
    Sheet, SpdxLicenses,
};

/// Sample values for pattern checks.
const PATTERN_SAMPLES: &[(PatternKind, &str)] = &[
    (PatternKind::Identifier, "B1042"),
    (PatternKind::Url, "https://www.biodiversitylibrary.org/item/12345"),
    (PatternKind::EdtfDate, "1998-04-12"),
    (PatternKind::EdtfDate, "1890/1895"),
    (PatternKind::IssnL, "0028-0836"),
    (PatternKind::Isbn, "9780123456789"),
    (PatternKind::Doi, "10.5962/bhl.title.1234"),
    (PatternKind::Qid, "Q5"),
    (PatternKind::Url, "not a url"),
    (PatternKind::EdtfDate, "2021-02-30"),
];

/// Catalog rows, valid and invalid.
const CATALOG_ROWS: &[&str] = &[
    "B1,Title,Smith,http://example.com,,,print,,,,,,,,,en,,key,Mammalia,,US,,,",
    "B2,Birds; Oiseaux,Dupont; Martin,https://example.org/b2,,,online,1998,Acme,Paris,2,0123456789; 9780123456789,,10.1000/xyz,CC-BY-4.0,en; fr,,key; checklist,Aves,Q5113,FR,,,",
    "B3,Title,Smith,ftp://example.com,,,book,2021-13,,,,,,,,xx-!,,poster,Mammalia,,US,,,",
    ",,,,,,,,,,,,,,,,,,,,,,,",
];

fn lookups() -> Lookups {
    Lookups::new(
        SpdxLicenses::from_ids(["MIT", "CC-BY-4.0", "CC0-1.0"]),
        LanguageTags::well_formed(),
    )
}

fn sheet_text(rows: usize) -> String {
    CATALOG_ROWS.iter().cycle().take(rows).copied().collect::<Vec<_>>().join("\n")
}

/// Benchmark the pattern checks.
fn bench_patterns(c: &mut Criterion) {
    let mut group = c.benchmark_group("patterns");

    group.bench_function("batch_10", |b| {
        b.iter(|| {
            for (kind, value) in PATTERN_SAMPLES {
                black_box(kind.is_match(value));
            }
        })
    });

    group.finish();
}

/// Benchmark single-record validation.
fn bench_record_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("record_validation");
    let registry = SchemaRegistry::builtin();
    let schema = registry.sheet(Sheet::Catalog);
    let validator = RecordValidator::new(lookups());

    for (idx, row) in CATALOG_ROWS.iter().enumerate() {
        let cells = catalint::input::tokenize(row).unwrap().remove(0);
        let record = map_row(cells, schema, 1).unwrap();

        group.bench_with_input(BenchmarkId::new("catalog_row", idx), &record, |b, record| {
            b.iter(|| black_box(validator.validate_record(record, schema)))
        });
    }

    group.finish();
}

/// Benchmark whole-sheet runs at different sizes and thread counts.
fn bench_sheet_validation(c: &mut Criterion) {
    let mut group = c.benchmark_group("sheet_validation");

    for rows in [100, 1_000, 10_000] {
        let text = sheet_text(rows);

        for threads in [1, 4] {
            let catalint =
                Catalint::with_config(lookups(), CatalintConfig::default().with_threads(threads));
            group.bench_with_input(
                BenchmarkId::new(format!("threads_{threads}"), rows),
                &text,
                |b, text| b.iter(|| black_box(catalint.report("catalog", text))),
            );
        }
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_patterns,
    bench_record_validation,
    bench_sheet_validation,
);
criterion_main!(benches);
