//! Fixed value patterns shared across sheets.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

const IDENTIFIER_PATTERN: &str = r"^B[0-9]+$";

const URL_PATTERN: &str = r"^https?://[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*(?::[0-9]{1,5})?(?:[/?#]\S*)?$";

// Year, year-month or full date, a time with optional offset on full dates,
// and an optional `/` range end of any of those granularities.
const EDTF_DATE_PATTERN: &str = r"^[0-9]{4}(?:-[0-9]{2}(?:-[0-9]{2}(?:T[0-9]{2}:[0-9]{2}:[0-9]{2}(?:Z|[+-][0-9]{2}:[0-9]{2})?)?)?)?(?:/[0-9]{4}(?:-[0-9]{2}(?:-[0-9]{2}(?:T[0-9]{2}:[0-9]{2}:[0-9]{2}(?:Z|[+-][0-9]{2}:[0-9]{2})?)?)?)?)?$";

const ISSN_L_PATTERN: &str = r"^[0-9]{4}-[0-9]{3}[0-9X]$";

const ISBN_PATTERN: &str = r"^(?:[0-9]{13}|[0-9]{9}[0-9X])$";

const DOI_PATTERN: &str = r"^10\.\S+$";

const QID_PATTERN: &str = r"^Q[1-9][0-9]*$";

static IDENTIFIER: Lazy<Regex> = Lazy::new(|| Regex::new(IDENTIFIER_PATTERN).unwrap());
static URL: Lazy<Regex> = Lazy::new(|| Regex::new(URL_PATTERN).unwrap());
static EDTF_DATE: Lazy<Regex> = Lazy::new(|| Regex::new(EDTF_DATE_PATTERN).unwrap());
static ISSN_L: Lazy<Regex> = Lazy::new(|| Regex::new(ISSN_L_PATTERN).unwrap());
static ISBN: Lazy<Regex> = Lazy::new(|| Regex::new(ISBN_PATTERN).unwrap());
static DOI: Lazy<Regex> = Lazy::new(|| Regex::new(DOI_PATTERN).unwrap());
static QID: Lazy<Regex> = Lazy::new(|| Regex::new(QID_PATTERN).unwrap());

/// A named, anchored pattern a value must fully match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternKind {
    /// Catalog entry identifier (`B` followed by digits).
    Identifier,
    /// `http` or `https` URL.
    Url,
    /// EDTF-style date, date-time or range.
    EdtfDate,
    /// Linking ISSN.
    IssnL,
    /// ISBN-10 or ISBN-13, digits only.
    Isbn,
    /// Digital Object Identifier.
    Doi,
    /// Wikidata entity identifier.
    Qid,
}

impl PatternKind {
    /// The regular expression source.
    pub fn pattern(&self) -> &'static str {
        match self {
            PatternKind::Identifier => IDENTIFIER_PATTERN,
            PatternKind::Url => URL_PATTERN,
            PatternKind::EdtfDate => EDTF_DATE_PATTERN,
            PatternKind::IssnL => ISSN_L_PATTERN,
            PatternKind::Isbn => ISBN_PATTERN,
            PatternKind::Doi => DOI_PATTERN,
            PatternKind::Qid => QID_PATTERN,
        }
    }

    /// Human-readable name for diagnostics.
    pub fn description(&self) -> &'static str {
        match self {
            PatternKind::Identifier => "entry identifier",
            PatternKind::Url => "URL",
            PatternKind::EdtfDate => "EDTF date",
            PatternKind::IssnL => "ISSN-L",
            PatternKind::Isbn => "ISBN",
            PatternKind::Doi => "DOI",
            PatternKind::Qid => "Wikidata QID",
        }
    }

    fn regex(&self) -> &'static Regex {
        match self {
            PatternKind::Identifier => &*IDENTIFIER,
            PatternKind::Url => &*URL,
            PatternKind::EdtfDate => &*EDTF_DATE,
            PatternKind::IssnL => &*ISSN_L,
            PatternKind::Isbn => &*ISBN,
            PatternKind::Doi => &*DOI,
            PatternKind::Qid => &*QID,
        }
    }

    /// Check a single value.
    pub fn is_match(&self, value: &str) -> bool {
        if !self.regex().is_match(value) {
            return false;
        }
        match self {
            PatternKind::EdtfDate => value.split('/').all(is_calendar_date),
            _ => true,
        }
    }
}

/// Check that a date matched by the EDTF pattern names a real calendar point.
fn is_calendar_date(value: &str) -> bool {
    match value.len() {
        4 => true,
        7 => value
            .get(5..7)
            .and_then(|month| month.parse::<u32>().ok())
            .is_some_and(|month| (1..=12).contains(&month)),
        10 => NaiveDate::parse_from_str(value, "%Y-%m-%d").is_ok(),
        19 => NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S").is_ok(),
        _ => DateTime::parse_from_rfc3339(value).is_ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier() {
        assert!(PatternKind::Identifier.is_match("B1"));
        assert!(PatternKind::Identifier.is_match("B00042"));
        assert!(!PatternKind::Identifier.is_match("B"));
        assert!(!PatternKind::Identifier.is_match("b1"));
        assert!(!PatternKind::Identifier.is_match("B1a"));
        assert!(!PatternKind::Identifier.is_match("B\u{661}"));
        assert!(!PatternKind::Identifier.is_match("B\u{1D7CE}"));
    }

    #[test]
    fn test_url() {
        assert!(PatternKind::Url.is_match("http://example.com"));
        assert!(PatternKind::Url.is_match("https://www.biodiversitylibrary.org/item/12345"));
        assert!(PatternKind::Url.is_match("https://example.org:8080/a/b?c=d"));
        assert!(!PatternKind::Url.is_match("ftp://example.com/file"));
        assert!(!PatternKind::Url.is_match("example.com"));
        assert!(!PatternKind::Url.is_match("https://exa mple.com"));
    }

    #[test]
    fn test_edtf_granularities() {
        for value in [
            "1987",
            "1987-06",
            "1987-06-30",
            "1987-06-30T12:00:00",
            "1987-06-30T12:00:00Z",
            "1987-06-30T12:00:00+02:00",
            "1987/1990",
            "1987-06/1990-01-15",
        ] {
            assert!(PatternKind::EdtfDate.is_match(value), "{value} should match");
        }
    }

    #[test]
    fn test_edtf_rejects_impossible_dates() {
        for value in ["87", "1987-13", "1987-02-30", "1987-06-30T25:00:00", "1987/", "June 1987"] {
            assert!(!PatternKind::EdtfDate.is_match(value), "{value} should not match");
        }
    }

    #[test]
    fn test_edtf_requires_ascii_digits() {
        for value in ["111\u{1D7CE}", "1987-\u{1D7CE}", "\u{661}\u{669}\u{668}\u{667}"] {
            assert!(!PatternKind::EdtfDate.is_match(value), "{value} should not match");
        }
    }

    #[test]
    fn test_calendar_check_tolerates_multibyte_text() {
        assert!(!is_calendar_date("111\u{1D7CE}"));
        assert!(!is_calendar_date("19\u{e9}7-0"));
    }

    #[test]
    fn test_issn_isbn_doi_qid() {
        assert!(PatternKind::IssnL.is_match("0317-8471"));
        assert!(PatternKind::IssnL.is_match("2049-363X"));
        assert!(!PatternKind::IssnL.is_match("03178471"));

        assert!(PatternKind::Isbn.is_match("9780123456789"));
        assert!(PatternKind::Isbn.is_match("012345678X"));
        assert!(!PatternKind::Isbn.is_match("978-0-12-345678-9"));
        assert!(!PatternKind::Isbn.is_match("01234567"));
        assert!(!PatternKind::Isbn.is_match("\u{660}\u{661}\u{662}\u{663}\u{664}\u{665}\u{666}\u{667}\u{668}\u{669}"));
        assert!(!PatternKind::IssnL.is_match("\u{966}317-8471"));
        assert!(!PatternKind::Qid.is_match("Q\u{661}"));

        assert!(PatternKind::Doi.is_match("10.1000/182"));
        assert!(!PatternKind::Doi.is_match("doi:10.1000/182"));

        assert!(PatternKind::Qid.is_match("Q42"));
        assert!(!PatternKind::Qid.is_match("Q042"));
        assert!(!PatternKind::Qid.is_match("Q"));
    }
}
