//! Wire types for the cruise metadata feed.
//!
//! Field names follow the JSON served by the CCHDO API, including the
//! camel-cased `startDate`/`endDate`. Dates are opaque display strings and
//! are never parsed.

use serde::{Deserialize, Deserializer};
use std::collections::HashMap;

/// Participant role naming the data owners of a microstructure program.
pub const ROLE_MICROSTRUCTURE_PI: &str = "Microstructure PI";

/// Participant role naming the chief scientist(s) of a cruise.
pub const ROLE_CHIEF_SCIENTIST: &str = "Chief Scientist";

/// Reads an explicit `null` the same as a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Top-level feed document.
///
/// Entries are kept as raw JSON so one malformed cruise can be rejected on
/// its own when the index is built.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawFeed {
    pub cruises: Vec<serde_json::Value>,
}

/// One cruise together with the files archived for it.
#[derive(Debug, Clone, Deserialize)]
pub struct SiteCruise {
    pub cruise: Cruise,
    #[serde(default, deserialize_with = "null_as_default")]
    pub files: Vec<FileRecord>,
}

/// Per-site metadata attached to a cruise (only the display name is used).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SiteEntry {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Cruise {
    /// Unique cruise identifier, used as the index key and route segment.
    pub expocode: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sites: HashMap<String, SiteEntry>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub start_port: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub end_port: String,
    #[serde(rename = "startDate", default, deserialize_with = "null_as_default")]
    pub start_date: String,
    #[serde(rename = "endDate", default, deserialize_with = "null_as_default")]
    pub end_date: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ship: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub participants: Vec<Participant>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub references: Vec<Reference>,
}

impl Cruise {
    /// Display name of this cruise on the given site, if the site lists it.
    pub fn site_name(&self, site_key: &str) -> Option<&str> {
        self.sites.get(site_key).map(|site| site.name.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Participant {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub institution: String,
    /// Open enumeration; see [`ROLE_MICROSTRUCTURE_PI`] and [`ROLE_CHIEF_SCIENTIST`].
    #[serde(default, deserialize_with = "null_as_default")]
    pub role: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// A citation, link or DOI attached to a cruise.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Reference {
    /// Raw discriminant as served (`"link"`, `"doi"`, or anything else).
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
    #[serde(default)]
    pub organization: Option<String>,
    /// Optional `href`/`text` display overrides.
    #[serde(default)]
    pub properties: Option<serde_json::Map<String, serde_json::Value>>,
}

impl Reference {
    /// Returns a string property when it is present and non-empty.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties
            .as_ref()
            .and_then(|props| props.get(key))
            .and_then(|value| value.as_str())
            .filter(|s| !s.is_empty())
    }
}

/// Role of a file within a cruise's archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileRole {
    Dataset,
    Ancillary,
    Unprocessed,
    Intermediate,
    Raw,
    /// Any role this client does not display.
    #[serde(other)]
    Other,
}

/// Kind of data held by a file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataType {
    /// High resolution profiler data.
    Hrp,
    Documentation,
    Chipod,
    #[serde(other)]
    Other,
}

/// A file archived for a cruise.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FileRecord {
    pub file_name: String,
    /// Content hash; stable key for the file.
    pub file_hash: String,
    pub role: FileRole,
    pub data_type: DataType,
    /// Path relative to the content host.
    pub file_path: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cruise_decodes_camel_case_dates_and_defaults() {
        let cruise: Cruise = serde_json::from_value(json!({
            "expocode": "33RR20090320",
            "sites": { "microstructure.ucsd.edu": { "name": "CLIVAR I5" } },
            "start_port": "Fremantle",
            "end_port": "Durban",
            "startDate": "2009-03-20",
            "endDate": "2009-05-15",
            "ship": "Roger Revelle",
            "participants": []
        }))
        .unwrap();

        assert_eq!(cruise.start_date, "2009-03-20");
        assert_eq!(cruise.end_date, "2009-05-15");
        assert!(cruise.references.is_empty());
        assert_eq!(cruise.site_name("microstructure.ucsd.edu"), Some("CLIVAR I5"));
        assert_eq!(cruise.site_name("cchdo.ucsd.edu"), None);
    }

    #[test]
    fn test_null_display_fields_decode_as_empty() {
        let cruise: Cruise = serde_json::from_value(json!({
            "expocode": "A1",
            "sites": { "microstructure.ucsd.edu": { "name": "Natre" } },
            "start_port": null,
            "end_port": null,
            "startDate": null,
            "endDate": null,
            "ship": null,
            "participants": [
                { "name": "Gregg", "institution": null, "role": "Microstructure PI" }
            ],
            "references": null
        }))
        .unwrap();

        assert_eq!(cruise.start_port, "");
        assert_eq!(cruise.end_port, "");
        assert_eq!(cruise.start_date, "");
        assert_eq!(cruise.end_date, "");
        assert_eq!(cruise.ship, "");
        assert_eq!(cruise.participants[0].institution, "");
        assert!(cruise.references.is_empty());
    }

    #[test]
    fn test_unknown_file_discriminants_decode_as_other() {
        let file: FileRecord = serde_json::from_value(json!({
            "file_name": "notes.txt",
            "file_hash": "abc",
            "role": "archive",
            "data_type": "bottle",
            "file_path": "/data/notes.txt"
        }))
        .unwrap();

        assert_eq!(file.role, FileRole::Other);
        assert_eq!(file.data_type, DataType::Other);
    }

    #[test]
    fn test_reference_property_ignores_empty_and_non_string() {
        let reference: Reference = serde_json::from_value(json!({
            "type": "link",
            "value": "http://example.org",
            "properties": { "text": "", "href": 7 }
        }))
        .unwrap();

        assert_eq!(reference.property("text"), None);
        assert_eq!(reference.property("href"), None);
        assert_eq!(reference.property("missing"), None);
    }
}
