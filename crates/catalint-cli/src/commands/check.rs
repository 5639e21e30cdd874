//! Check command - validate a sheet file and print the violation report.

use std::fs;
use std::path::PathBuf;

use catalint::{
    Catalint, CatalintConfig, LanguageTags, Lookups, SpdxLicenses, ValidationReport, ViolationKind,
};
use colored::Colorize;
use tracing::debug;

/// SPDX license identifiers used when no list is given.
const DEFAULT_LICENSES: &str = include_str!("../../data/spdx-license-ids.json");

/// Arguments of `catalint check`.
pub struct CheckArgs {
    pub file: PathBuf,
    pub sheet: String,
    pub licenses: Option<PathBuf>,
    pub language_patterns: Option<PathBuf>,
    pub header: bool,
    pub threads: usize,
    pub json: bool,
    pub verbose: bool,
}

pub fn run(args: CheckArgs) -> Result<(), Box<dyn std::error::Error>> {
    if !args.file.exists() {
        return Err(format!("File not found: {}", args.file.display()).into());
    }

    let text = fs::read_to_string(&args.file)?;
    let lookups = load_lookups(args.licenses.as_ref(), args.language_patterns.as_ref())?;

    let config = CatalintConfig::default()
        .with_header(args.header)
        .with_threads(args.threads);
    let catalint = Catalint::with_config(lookups, config);

    if !args.json {
        println!(
            "{} {} {}",
            "Checking".cyan().bold(),
            args.file.display().to_string().white(),
            format!("({})", args.sheet).dimmed()
        );
    }

    let report = catalint.report(&args.sheet, &text)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report, args.verbose);
    }

    report.into_result()?;
    Ok(())
}

fn load_lookups(
    licenses: Option<&PathBuf>,
    language_patterns: Option<&PathBuf>,
) -> Result<Lookups, Box<dyn std::error::Error>> {
    let licenses = match licenses {
        Some(path) => SpdxLicenses::from_json(&fs::read_to_string(path)?)?,
        None => SpdxLicenses::from_json(DEFAULT_LICENSES)?,
    };
    debug!(count = licenses.len(), "loaded license identifiers");

    let language_tags = match language_patterns {
        Some(path) => {
            let content = fs::read_to_string(path)?;
            let patterns = content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'));
            let tags = LanguageTags::from_patterns(patterns)?;
            debug!(count = tags.len(), "loaded language tag patterns");
            tags
        }
        None => LanguageTags::well_formed(),
    };

    Ok(Lookups::new(licenses, language_tags))
}

fn print_report(report: &ValidationReport, verbose: bool) {
    if report.is_empty() {
        println!("{}", "No violations found - sheet looks clean!".green());
        return;
    }

    println!();
    for record in report.iter() {
        let label = if record.label.is_empty() {
            "(no id)".to_string()
        } else {
            record.label.clone()
        };
        println!(
            "{} {}",
            label.white().bold(),
            format!("row {}", record.row).dimmed()
        );

        for violation in &record.violations {
            let field = match violation.kind {
                ViolationKind::MissingRequired => violation.field.red(),
                ViolationKind::Cardinality => violation.field.yellow(),
                ViolationKind::Format(_) => violation.field.magenta(),
            };
            if verbose {
                println!(
                    "  {:16} {} {}",
                    field,
                    violation.message,
                    format!("[{}]", violation.kind.label()).dimmed()
                );
            } else {
                println!("  {:16} {}", field, violation.message);
            }
        }
    }

    println!();
    println!(
        "Found {} violations in {} records",
        report.violation_count().to_string().red().bold(),
        report.len().to_string().white().bold()
    );
}
