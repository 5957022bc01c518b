//! Cruise feed integration.
//!
//! This module provides:
//! - Wire types for the CCHDO microstructure feed
//! - A channel-based client that issues the single feed request

mod client;
mod error;
pub mod types;

#[cfg(test)]
pub use client::parse_feed;
pub use client::{FeedChannel, FeedResult};
pub use error::FeedError;
pub use types::{DataType, FileRecord, FileRole, Participant, RawFeed, Reference, SiteCruise};
