//! Format checkers: enumerated sets, patterns and injected lookups.
//!
//! Every checker answers one question for one scalar value: does it pass?
//! The validator applies a field's [`Format`] value by value and uses
//! [`Format::mismatch`] to describe each failure.

mod lookups;
mod patterns;

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

pub use lookups::{LanguageTags, SpdxLicenses};
pub use patterns::PatternKind;

/// An injected membership test, such as a license list.
///
/// Implementations are shared read-only across validation threads.
pub trait Lookup: Send + Sync {
    /// Whether the value is accepted.
    fn contains(&self, value: &str) -> bool;
}

impl<F> Lookup for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn contains(&self, value: &str) -> bool {
        self(value)
    }
}

/// Which injected lookup a field is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LookupKind {
    /// SPDX license identifier.
    License,
    /// IETF BCP 47 language tag.
    LanguageTag,
}

impl LookupKind {
    /// Human-readable name for diagnostics.
    pub fn description(&self) -> &'static str {
        match self {
            LookupKind::License => "SPDX license identifier",
            LookupKind::LanguageTag => "IETF BCP 47 language tag",
        }
    }
}

/// The lookup services consulted by [`Format::Lookup`] checks.
#[derive(Clone)]
pub struct Lookups {
    licenses: Arc<dyn Lookup>,
    language_tags: Arc<dyn Lookup>,
}

impl Lookups {
    /// Bundle a license lookup and a language-tag lookup.
    pub fn new(licenses: impl Lookup + 'static, language_tags: impl Lookup + 'static) -> Self {
        Self {
            licenses: Arc::new(licenses),
            language_tags: Arc::new(language_tags),
        }
    }

    /// Get the lookup for a kind.
    pub fn get(&self, kind: LookupKind) -> &dyn Lookup {
        match kind {
            LookupKind::License => self.licenses.as_ref(),
            LookupKind::LanguageTag => self.language_tags.as_ref(),
        }
    }
}

impl fmt::Debug for Lookups {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lookups").finish_non_exhaustive()
    }
}

/// The three families of format check, for reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatKind {
    /// Value must be one of a fixed list.
    EnumSet,
    /// Value must match a pattern.
    Pattern,
    /// Value must pass an injected lookup.
    Predicate,
}

impl FormatKind {
    /// Get a human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            FormatKind::EnumSet => "enumerated set",
            FormatKind::Pattern => "pattern",
            FormatKind::Predicate => "predicate",
        }
    }
}

/// The format constraint of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Value must equal one of these literals.
    OneOf(&'static [&'static str]),
    /// Value must fully match a shared pattern.
    Pattern(PatternKind),
    /// Value must be accepted by an injected lookup.
    Lookup(LookupKind),
}

impl Format {
    /// Which family of check this is.
    pub fn kind(&self) -> FormatKind {
        match self {
            Format::OneOf(_) => FormatKind::EnumSet,
            Format::Pattern(_) => FormatKind::Pattern,
            Format::Lookup(_) => FormatKind::Predicate,
        }
    }

    /// Check a single scalar value.
    pub fn check(&self, value: &str, lookups: &Lookups) -> bool {
        match self {
            Format::OneOf(allowed) => allowed.iter().any(|a| *a == value),
            Format::Pattern(pattern) => pattern.is_match(value),
            Format::Lookup(kind) => lookups.get(*kind).contains(value),
        }
    }

    /// What a passing value looks like.
    pub fn expectation(&self) -> String {
        match self {
            Format::OneOf(allowed) => format!("one of [{}]", allowed.join(", ")),
            Format::Pattern(pattern) => {
                format!("{} matching {}", pattern.description(), pattern.pattern())
            }
            Format::Lookup(kind) => format!("a valid {}", kind.description()),
        }
    }

    /// Describe why a value failed this format.
    pub fn mismatch(&self, value: &str) -> String {
        match self {
            Format::OneOf(allowed) => {
                format!("\"{}\" is not one of [{}]", value, allowed.join(", "))
            }
            Format::Pattern(pattern) => format!(
                "\"{}\" is not a valid {} (expected pattern {})",
                value,
                pattern.description(),
                pattern.pattern()
            ),
            Format::Lookup(kind) => format!("\"{}\" is not a valid {}", value, kind.description()),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind().label(), self.expectation())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookups() -> Lookups {
        Lookups::new(
            SpdxLicenses::from_ids(["MIT", "CC-BY-4.0"]),
            |tag: &str| tag == "en" || tag == "fr",
        )
    }

    #[test]
    fn test_enum_set() {
        let format = Format::OneOf(&["print", "online", "cd"]);
        assert!(format.check("online", &lookups()));
        assert!(!format.check("Online", &lookups()));
        assert_eq!(format.kind(), FormatKind::EnumSet);
        assert_eq!(format.mismatch("book"), "\"book\" is not one of [print, online, cd]");
    }

    #[test]
    fn test_pattern() {
        let format = Format::Pattern(PatternKind::Qid);
        assert!(format.check("Q5", &lookups()));
        assert!(format.mismatch("5").contains("Wikidata QID"));
        assert!(format.mismatch("5").contains(r"^Q[1-9]\d*$"));
    }

    #[test]
    fn test_lookup_dispatch() {
        let licenses = Format::Lookup(LookupKind::License);
        let languages = Format::Lookup(LookupKind::LanguageTag);

        assert!(licenses.check("MIT", &lookups()));
        assert!(!licenses.check("en", &lookups()));
        assert!(languages.check("en", &lookups()));
        assert!(!languages.check("MIT", &lookups()));
        assert_eq!(
            licenses.mismatch("Foo"),
            "\"Foo\" is not a valid SPDX license identifier"
        );
    }

    #[test]
    fn test_display() {
        let format = Format::Lookup(LookupKind::LanguageTag);
        assert_eq!(format.to_string(), "predicate: a valid IETF BCP 47 language tag");
    }
}
