//! Lookup providers for license identifiers and language tags.
//!
//! The validator only sees the [`Lookup`](super::Lookup) trait; these are the
//! concrete providers the CLI wires in. Both are plain in-memory sets built
//! from data supplied by the caller.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::RegexSet;
use serde::Deserialize;

use crate::error::Result;

use super::Lookup;

/// RFC 5646 `langtag`, case-insensitive.
const LANGTAG_PATTERN: &str = r"(?i)^(?:[a-z]{2,3}(?:-[a-z]{3}){0,3}|[a-z]{4,8})(?:-[a-z]{4})?(?:-(?:[a-z]{2}|[0-9]{3}))?(?:-(?:[a-z0-9]{5,8}|[0-9][a-z0-9]{3}))*(?:-[0-9a-wy-z](?:-[a-z0-9]{2,8})+)*(?:-x(?:-[a-z0-9]{1,8})+)?$";

/// RFC 5646 `privateuse` tag on its own.
const PRIVATEUSE_PATTERN: &str = r"(?i)^x(?:-[a-z0-9]{1,8})+$";

static WELL_FORMED: Lazy<RegexSet> =
    Lazy::new(|| RegexSet::new([LANGTAG_PATTERN, PRIVATEUSE_PATTERN]).unwrap());

/// Accepted shapes of an SPDX license list.
#[derive(Deserialize)]
#[serde(untagged)]
enum SpdxDocument {
    /// A bare array of identifiers, as published by `spdx-license-ids`.
    Ids(Vec<String>),
    /// The SPDX `licenses.json` document.
    LicenseList { licenses: Vec<SpdxEntry> },
}

#[derive(Deserialize)]
struct SpdxEntry {
    #[serde(rename = "licenseId")]
    license_id: String,
}

/// A fixed set of valid SPDX license identifiers.
#[derive(Debug, Clone, Default)]
pub struct SpdxLicenses {
    ids: HashSet<String>,
}

impl SpdxLicenses {
    /// Build from identifiers.
    pub fn from_ids<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }

    /// Parse either a JSON array of identifiers or an SPDX `licenses.json`.
    pub fn from_json(json: &str) -> Result<Self> {
        let ids = match serde_json::from_str(json)? {
            SpdxDocument::Ids(ids) => ids,
            SpdxDocument::LicenseList { licenses } => {
                licenses.into_iter().map(|entry| entry.license_id).collect()
            }
        };
        Ok(Self::from_ids(ids))
    }

    /// Number of known identifiers.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// True when no identifiers are known.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl Lookup for SpdxLicenses {
    fn contains(&self, value: &str) -> bool {
        self.ids.contains(value)
    }
}

/// Language tags accepted by any of a set of anchored patterns.
#[derive(Debug, Clone)]
pub struct LanguageTags {
    patterns: RegexSet,
}

impl LanguageTags {
    /// Tags that are well-formed per RFC 5646 (no registry check).
    pub fn well_formed() -> Self {
        Self {
            patterns: WELL_FORMED.clone(),
        }
    }

    /// Build from an external pattern source. Each pattern must match a whole tag.
    pub fn from_patterns<I, S>(patterns: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let anchored: Vec<String> = patterns
            .into_iter()
            .map(|p| format!("^(?:{})$", p.as_ref()))
            .collect();
        Ok(Self {
            patterns: RegexSet::new(anchored)?,
        })
    }

    /// Number of patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// True when no pattern is configured; nothing is accepted.
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for LanguageTags {
    fn default() -> Self {
        Self::well_formed()
    }
}

impl Lookup for LanguageTags {
    fn contains(&self, value: &str) -> bool {
        self.patterns.is_match(value)
    }
}
