//! Application state management.
//!
//! The page controller owns the loaded index and hands it to the pages as an
//! immutable borrow. Readiness is a one-way NotLoaded → Loaded transition;
//! a failed load can be retried on request.

pub mod route;
mod settings;

pub use route::Route;
pub use settings::SiteSettings;

use crate::catalog::{program_rows, CruiseDetail, CruiseIndex, EntryError, ProgramRow};
use crate::feed::{FeedError, FeedResult};

/// Readiness of the cruise index.
#[derive(Debug, Default)]
pub enum FeedState {
    /// The feed has not arrived yet.
    #[default]
    NotLoaded,
    Loaded(CruiseIndex),
    /// The feed could not be loaded; holds the error message.
    Failed(String),
}

/// What the cruise page should show for a route parameter.
#[derive(Debug, PartialEq, Eq)]
pub enum DetailPage {
    Loading,
    Failed(String),
    NotFound(String),
    Ready(Box<CruiseDetail>),
}

/// Root application state.
#[derive(Debug, Default)]
pub struct AppState {
    pub settings: SiteSettings,

    /// Page currently shown
    pub route: Route,

    pub feed: FeedState,

    /// Feed entries left out of the index on the last load
    pub rejected: Vec<EntryError>,

    /// Status message displayed in the top bar
    pub status_message: String,

    /// Whether the long introduction text is expanded
    pub intro_open: bool,

    /// Set by the UI when the user asks to reload a failed feed
    pub retry_requested: bool,
}

impl AppState {
    pub fn new(settings: SiteSettings, route: Route) -> Self {
        Self {
            settings,
            route,
            status_message: "Loading...".to_string(),
            ..Default::default()
        }
    }

    /// Prepares the feed request and returns the URL to fetch.
    ///
    /// Without a configured URL the state fails immediately and no request
    /// should be made.
    pub fn begin_load(&mut self) -> Option<String> {
        self.retry_requested = false;
        match self.settings.feed_url.clone() {
            Some(url) => {
                self.feed = FeedState::NotLoaded;
                self.status_message = "Loading...".to_string();
                Some(url)
            }
            None => {
                self.fail(FeedError::MissingUrl);
                None
            }
        }
    }

    /// Applies the outcome of the feed request.
    pub fn apply_feed_result(&mut self, result: FeedResult) {
        if self.is_loaded() {
            log::warn!("Ignoring feed result, the index is already loaded");
            return;
        }

        match result {
            Ok(feed) => {
                let build = CruiseIndex::build(feed, &self.settings.site_key);
                let mut notes = Vec::new();
                if !build.rejected.is_empty() {
                    notes.push(format!("{} feed entries skipped", build.rejected.len()));
                }
                if build.duplicates > 0 {
                    notes.push(format!("{} duplicates replaced", build.duplicates));
                }
                self.status_message = if notes.is_empty() {
                    format!("{} programs", build.index.len())
                } else {
                    format!("{} programs ({})", build.index.len(), notes.join(", "))
                };
                self.rejected = build.rejected;
                self.feed = FeedState::Loaded(build.index);
            }
            Err(e) => self.fail(e),
        }
    }

    fn fail(&mut self, error: FeedError) {
        log::error!("Failed to load cruise feed: {}", error);
        self.status_message = format!("Failed to load cruises: {}", error);
        self.feed = FeedState::Failed(error.to_string());
    }

    pub fn is_loaded(&self) -> bool {
        matches!(self.feed, FeedState::Loaded(_))
    }

    pub fn index(&self) -> Option<&CruiseIndex> {
        match &self.feed {
            FeedState::Loaded(index) => Some(index),
            _ => None,
        }
    }

    /// Program list rows; empty until the index is loaded.
    pub fn program_rows(&self) -> Vec<ProgramRow> {
        self.index().map(program_rows).unwrap_or_default()
    }

    /// Resolves the cruise page for `expocode`.
    ///
    /// The index is not consulted before it has loaded.
    pub fn detail_page(&self, expocode: &str) -> DetailPage {
        match &self.feed {
            FeedState::NotLoaded => DetailPage::Loading,
            FeedState::Failed(message) => DetailPage::Failed(message.clone()),
            FeedState::Loaded(index) => match index.get(expocode) {
                Some(site_cruise) => {
                    DetailPage::Ready(Box::new(CruiseDetail::assemble(site_cruise, &self.settings)))
                }
                None => DetailPage::NotFound(expocode.to_string()),
            },
        }
    }

    /// Switches pages. Returns false when `route` is already shown.
    pub fn navigate(&mut self, route: Route) -> bool {
        if self.route == route {
            return false;
        }
        log::debug!("Route {} -> {}", self.route.to_hash(), route.to_hash());
        self.route = route;
        true
    }
}
