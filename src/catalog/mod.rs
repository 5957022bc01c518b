//! Data shaping for the cruise pages.
//!
//! Turns the decoded feed into what the pages display:
//! - An ordered, expocode-keyed index of cruises
//! - File groups by role and data type
//! - Participant sublists, institutions and reference links
//! - Page view models

mod classify;
mod index;
mod people;
mod placeholder;
mod references;
mod view;

pub use index::{CruiseIndex, EntryError};
pub use placeholder::DisplayList;
pub use references::ReferenceLink;
pub use view::{program_rows, CruiseDetail, FileLink, ProgramRow};
