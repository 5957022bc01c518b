//! Ordered index of cruises keyed by expocode.
//!
//! Built once per feed load and read-only afterward. Iteration follows the
//! sorted display order; lookups go through a position map.

use crate::feed::{RawFeed, SiteCruise};
use std::cmp::Ordering;
use std::collections::HashMap;
use thiserror::Error;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// A feed entry that could not be admitted to the index.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
    /// The entry did not decode into a cruise with its files.
    #[error(
        "feed entry {position} ({}) is malformed: {reason}",
        .expocode.as_deref().unwrap_or("no expocode")
    )]
    Malformed {
        position: usize,
        expocode: Option<String>,
        reason: String,
    },
    /// The cruise has no display name for the configured site.
    #[error("cruise {expocode} has no \"{site}\" site entry")]
    MissingSite { expocode: String, site: String },
}

/// Result of building an index from a feed.
#[derive(Debug)]
pub struct IndexBuild {
    pub index: CruiseIndex,
    /// Entries left out of the index, in feed order.
    pub rejected: Vec<EntryError>,
    /// Number of entries that replaced an earlier entry with the same expocode.
    pub duplicates: usize,
}

#[derive(Debug, Default)]
pub struct CruiseIndex {
    site_key: String,
    entries: Vec<SiteCruise>,
    positions: HashMap<String, usize>,
}

impl CruiseIndex {
    /// Builds the index for `site_key`.
    ///
    /// Entries that fail to decode or lack the site are rejected individually.
    /// A repeated expocode replaces the earlier entry (last write wins).
    pub fn build(feed: RawFeed, site_key: &str) -> IndexBuild {
        let mut rejected = Vec::new();
        let mut duplicates = 0;
        let mut entries: Vec<SiteCruise> = Vec::with_capacity(feed.cruises.len());
        let mut positions: HashMap<String, usize> = HashMap::new();

        for (position, value) in feed.cruises.into_iter().enumerate() {
            let expocode_hint = value
                .pointer("/cruise/expocode")
                .and_then(|v| v.as_str())
                .map(str::to_string);

            let site_cruise: SiteCruise = match serde_json::from_value(value) {
                Ok(site_cruise) => site_cruise,
                Err(e) => {
                    let error = EntryError::Malformed {
                        position,
                        expocode: expocode_hint,
                        reason: e.to_string(),
                    };
                    log::warn!("Rejected feed entry: {}", error);
                    rejected.push(error);
                    continue;
                }
            };

            let expocode = site_cruise.cruise.expocode.clone();
            if site_cruise.cruise.site_name(site_key).is_none() {
                let error = EntryError::MissingSite {
                    expocode,
                    site: site_key.to_string(),
                };
                log::warn!("Rejected feed entry: {}", error);
                rejected.push(error);
                continue;
            }

            match positions.get(&expocode) {
                Some(&existing) => {
                    log::warn!("Duplicate expocode {}, keeping the later entry", expocode);
                    entries[existing] = site_cruise;
                    duplicates += 1;
                }
                None => {
                    positions.insert(expocode, entries.len());
                    entries.push(site_cruise);
                }
            }
        }

        entries.sort_by(|a, b| {
            locale_cmp(
                a.cruise.site_name(site_key).unwrap_or_default(),
                b.cruise.site_name(site_key).unwrap_or_default(),
            )
        });

        let positions = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| (entry.cruise.expocode.clone(), i))
            .collect();

        log::info!(
            "Indexed {} cruise(s), rejected {}, replaced {} duplicate(s)",
            entries.len(),
            rejected.len(),
            duplicates
        );

        IndexBuild {
            index: CruiseIndex {
                site_key: site_key.to_string(),
                entries,
                positions,
            },
            rejected,
            duplicates,
        }
    }

    pub fn get(&self, expocode: &str) -> Option<&SiteCruise> {
        self.positions.get(expocode).map(|&i| &self.entries[i])
    }

    /// Iterates cruises in display order.
    pub fn iter(&self) -> impl Iterator<Item = &SiteCruise> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Display name of an indexed cruise.
    ///
    /// Every admitted cruise has a site entry, so this is only empty for
    /// cruises that did not come from this index.
    pub fn display_name<'a>(&self, site_cruise: &'a SiteCruise) -> &'a str {
        site_cruise
            .cruise
            .site_name(&self.site_key)
            .unwrap_or_default()
    }
}

/// Primary ordering of character groups: whitespace, punctuation and
/// symbols, digits, then letters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum CharClass {
    Space,
    Punctuation,
    Digit,
    Letter,
}

impl CharClass {
    fn of(c: char) -> Self {
        if c.is_whitespace() {
            CharClass::Space
        } else if c.is_numeric() {
            CharClass::Digit
        } else if c.is_alphabetic() {
            CharClass::Letter
        } else {
            CharClass::Punctuation
        }
    }
}

/// Sort key approximating the browser's default collation.
///
/// Levels, in order: base characters ignoring case and accents (whitespace
/// and punctuation before digits before letters), accents, case (lowercase
/// first), then code points. Punctuation is ranked as a group but not
/// ordered by the full CLDR table, so two names differing only in which
/// symbol they use still fall back to code point order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
struct CollationKey {
    primary: Vec<(CharClass, char)>,
    secondary: String,
    tertiary: Vec<bool>,
    identity: String,
}

impl CollationKey {
    fn new(s: &str) -> Self {
        let decomposed: String = s.nfkd().collect();
        Self {
            primary: decomposed
                .chars()
                .filter(|c| !is_combining_mark(*c))
                .flat_map(char::to_lowercase)
                .map(|c| (CharClass::of(c), c))
                .collect(),
            secondary: decomposed.chars().flat_map(char::to_lowercase).collect(),
            tertiary: decomposed.chars().map(char::is_uppercase).collect(),
            identity: s.to_string(),
        }
    }
}

/// Locale-aware comparison of two display names.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    CollationKey::new(a).cmp(&CollationKey::new(b))
}
