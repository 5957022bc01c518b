//! View models for the program list and cruise pages.

use super::classify::FileGroups;
use super::index::CruiseIndex;
use super::people::{chief_scientists, institutions, principal_investigators};
use super::placeholder::DisplayList;
use super::references::{reference_links, ReferenceLink};
use crate::feed::{FileRecord, SiteCruise};
use crate::state::{Route, SiteSettings};

/// One row of the program list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgramRow {
    pub expocode: String,
    pub display_name: String,
    pub start_port: String,
    pub start_date: String,
    pub end_date: String,
    pub link_target: Route,
}

/// Rows for every indexed cruise, in index order.
pub fn program_rows(index: &CruiseIndex) -> Vec<ProgramRow> {
    index
        .iter()
        .map(|site_cruise| {
            let cruise = &site_cruise.cruise;
            ProgramRow {
                expocode: cruise.expocode.clone(),
                display_name: index.display_name(site_cruise).to_string(),
                start_port: cruise.start_port.clone(),
                start_date: cruise.start_date.clone(),
                end_date: cruise.end_date.clone(),
                link_target: Route::Cruise(cruise.expocode.clone()),
            }
        })
        .collect()
}

/// A downloadable file on the content host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileLink {
    pub name: String,
    pub hash: String,
    pub url: String,
}

impl FileLink {
    fn new(file: &FileRecord, content_host: &str) -> Self {
        Self {
            name: file.file_name.clone(),
            hash: file.file_hash.clone(),
            url: format!("{}{}", content_host, file.file_path),
        }
    }
}

fn file_links(files: &[&FileRecord], content_host: &str) -> Vec<FileLink> {
    files
        .iter()
        .map(|file| FileLink::new(file, content_host))
        .collect()
}

/// Everything shown on a cruise page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CruiseDetail {
    pub expocode: String,
    /// Cruise page on the content host.
    pub expocode_url: String,
    pub display_name: String,
    pub owners: DisplayList<String>,
    pub chief_scientists: DisplayList<String>,
    pub dates: String,
    pub start_port: String,
    pub end_port: String,
    pub ship: String,
    pub institutions: DisplayList<String>,
    pub references: DisplayList<ReferenceLink>,
    pub dataset: Vec<FileLink>,
    pub reports: Vec<FileLink>,
    pub unprocessed: Vec<FileLink>,
    pub intermediate: Vec<FileLink>,
    pub raw: Vec<FileLink>,
}

impl CruiseDetail {
    pub fn assemble(site_cruise: &SiteCruise, settings: &SiteSettings) -> Self {
        let cruise = &site_cruise.cruise;
        let host = settings.content_host.as_str();

        let pis = principal_investigators(&cruise.participants);
        let chiefs = chief_scientists(&cruise.participants);
        let institution_names = institutions(&pis, &chiefs)
            .into_iter()
            .map(str::to_string)
            .collect();

        let groups = FileGroups::from_files(&site_cruise.files);

        Self {
            expocode: cruise.expocode.clone(),
            expocode_url: format!("{}/cruise/{}", host, cruise.expocode),
            display_name: cruise
                .site_name(&settings.site_key)
                .unwrap_or_default()
                .to_string(),
            owners: DisplayList::new(pis.iter().map(|p| p.name.clone()).collect()),
            chief_scientists: DisplayList::new(chiefs.iter().map(|p| p.name.clone()).collect()),
            dates: format!("{}/{}", cruise.start_date, cruise.end_date),
            start_port: cruise.start_port.clone(),
            end_port: cruise.end_port.clone(),
            ship: cruise.ship.clone(),
            institutions: DisplayList::new(institution_names),
            references: DisplayList::new(reference_links(&cruise.references)),
            dataset: file_links(&groups.dataset, host),
            reports: file_links(&groups.reports, host),
            unprocessed: file_links(&groups.unprocessed, host),
            intermediate: file_links(&groups.intermediate, host),
            raw: file_links(&groups.raw, host),
        }
    }

    /// True when the "Data As Received" section has nothing to show.
    pub fn as_received_is_empty(&self) -> bool {
        self.unprocessed.is_empty() && self.intermediate.is_empty() && self.raw.is_empty()
    }
}
