//! Built-in sheets and their field rules.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CatalintError;
use crate::format::{Format, LookupKind, PatternKind};
use crate::input::{FieldValue, Record};

use super::rule::FieldRule;

/// Allowed values of `catalog.entry_type`.
pub const ENTRY_TYPES: &[&str] = &["print", "online", "cd"];

/// Allowed values of `catalog.kind`.
pub const RESOURCE_KINDS: &[&str] = &[
    "key",
    "matrix",
    "reference",
    "checklist",
    "gallery",
    "supplement",
];

/// One sheet of the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sheet {
    /// Catalog entries (one per published resource).
    Catalog,
    /// Authors referenced by catalog entries.
    Authors,
    /// Publishers referenced by catalog entries.
    Publishers,
    /// Places of publication.
    Places,
}

impl Sheet {
    /// Every sheet, in dataset order.
    pub const ALL: [Sheet; 4] = [Sheet::Catalog, Sheet::Authors, Sheet::Publishers, Sheet::Places];

    /// The sheet's name as used on the command line and in file names.
    pub fn name(&self) -> &'static str {
        match self {
            Sheet::Catalog => "catalog",
            Sheet::Authors => "authors",
            Sheet::Publishers => "publishers",
            Sheet::Places => "places",
        }
    }
}

impl fmt::Display for Sheet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Sheet {
    type Err = CatalintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sheet::ALL
            .into_iter()
            .find(|sheet| sheet.name() == s)
            .ok_or_else(|| CatalintError::UnknownSheet(s.to_string()))
    }
}

/// A title may list several values when the entry is in several languages.
pub fn title_multiplicity(record: &Record) -> bool {
    record.get("language").is_some_and(|language| language.len() > 1)
}

/// Two ISBNs are only allowed as a 10/13 digit pair (paperback and hardback).
pub fn isbn_pairing(record: &Record) -> bool {
    match record.get("isbn") {
        Some(FieldValue::Multiple(isbns)) if isbns.len() == 2 => {
            let mut lengths = [isbns[0].len(), isbns[1].len()];
            lengths.sort_unstable();
            lengths == [10, 13]
        }
        _ => false,
    }
}

/// Field rules for a sheet, in column order.
pub(crate) fn fields(sheet: Sheet) -> Vec<(&'static str, FieldRule)> {
    let qid = || Format::Pattern(PatternKind::Qid);
    let url = || Format::Pattern(PatternKind::Url);

    match sheet {
        Sheet::Catalog => vec![
            ("id", FieldRule::required().with_format(Format::Pattern(PatternKind::Identifier))),
            ("title", FieldRule::required().computed("title multiplicity", title_multiplicity)),
            ("author", FieldRule::required().multiple()),
            ("url", FieldRule::required().with_format(url())),
            ("fulltext_url", FieldRule::optional().with_format(url())),
            ("archive_url", FieldRule::optional().with_format(url())),
            ("entry_type", FieldRule::required().with_format(Format::OneOf(ENTRY_TYPES))),
            ("date", FieldRule::optional().with_format(Format::Pattern(PatternKind::EdtfDate))),
            ("publisher", FieldRule::optional().multiple()),
            ("place", FieldRule::optional().multiple()),
            ("edition", FieldRule::optional()),
            (
                "isbn",
                FieldRule::optional()
                    .computed("isbn pairing", isbn_pairing)
                    .with_format(Format::Pattern(PatternKind::Isbn)),
            ),
            ("issn_l", FieldRule::optional().with_format(Format::Pattern(PatternKind::IssnL))),
            ("doi", FieldRule::optional().with_format(Format::Pattern(PatternKind::Doi))),
            ("license", FieldRule::optional().with_format(Format::Lookup(LookupKind::License))),
            (
                "language",
                FieldRule::required()
                    .multiple()
                    .with_format(Format::Lookup(LookupKind::LanguageTag)),
            ),
            ("series", FieldRule::optional()),
            ("kind", FieldRule::required().multiple().with_format(Format::OneOf(RESOURCE_KINDS))),
            ("taxon", FieldRule::required().multiple()),
            ("taxon_qid", FieldRule::optional().multiple().with_format(qid())),
            ("region", FieldRule::required().multiple()),
            ("volume", FieldRule::optional()),
            ("pages", FieldRule::optional()),
            ("notes", FieldRule::optional()),
        ],
        Sheet::Authors => vec![
            ("name", FieldRule::required()),
            ("full_name", FieldRule::optional()),
            ("qid", FieldRule::optional().with_format(qid())),
            ("notes", FieldRule::optional()),
        ],
        Sheet::Publishers => vec![
            ("name", FieldRule::required()),
            ("full_name", FieldRule::optional()),
            ("place", FieldRule::optional().multiple()),
            ("qid", FieldRule::optional().with_format(qid())),
            ("notes", FieldRule::optional()),
        ],
        Sheet::Places => vec![
            ("name", FieldRule::required()),
            ("country", FieldRule::optional()),
            ("qid", FieldRule::optional().with_format(qid())),
            ("notes", FieldRule::optional()),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(fields: &[(&str, &str)]) -> Record {
        fields
            .iter()
            .map(|(name, raw)| (*name, FieldValue::split(raw)))
            .collect()
    }

    #[test]
    fn test_sheet_from_str() {
        assert_eq!("catalog".parse::<Sheet>().unwrap(), Sheet::Catalog);
        assert_eq!("places".parse::<Sheet>().unwrap(), Sheet::Places);
        assert!(matches!(
            "Catalog".parse::<Sheet>(),
            Err(CatalintError::UnknownSheet(name)) if name == "Catalog"
        ));
    }

    #[test]
    fn test_title_multiplicity() {
        assert!(title_multiplicity(&record(&[("language", "en; fr")])));
        assert!(!title_multiplicity(&record(&[("language", "en")])));
        assert!(!title_multiplicity(&Record::default()));
    }

    #[test]
    fn test_isbn_pairing_compares_each_isbn() {
        assert!(isbn_pairing(&record(&[("isbn", "0123456789; 9780123456789")])));
        assert!(isbn_pairing(&record(&[("isbn", "9780123456789; 0123456789")])));
        assert!(!isbn_pairing(&record(&[("isbn", "0123456789; 0123456789")])));
        assert!(!isbn_pairing(&record(&[("isbn", "0123456789; 9780123456789; 012345678X")])));
        assert!(!isbn_pairing(&record(&[("isbn", "0123456789")])));
    }

    #[test]
    fn test_catalog_column_count() {
        assert_eq!(fields(Sheet::Catalog).len(), 24);
        assert_eq!(fields(Sheet::Catalog)[6].0, "entry_type");
        assert_eq!(fields(Sheet::Catalog)[15].0, "language");
    }
}
