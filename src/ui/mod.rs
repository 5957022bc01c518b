//! UI modules for the microstructure browser.
//!
//! The UI is split into:
//! - Top bar: site title and load status
//! - Program list page: introduction and the table of programs
//! - Cruise page: cruise details and file lists

mod cruise_page;
mod program_list;
mod top_bar;

pub use cruise_page::render_cruise_page;
pub use program_list::render_program_list;
pub use top_bar::render_top_bar;

use crate::state::AppState;
use eframe::egui::{self, Color32, RichText};
use egui_phosphor::regular as icons;

/// Shared body for the pages while the feed is not available.
///
/// Shows a spinner while loading, or the error with a retry button.
pub(crate) fn render_feed_pending(ui: &mut egui::Ui, state: &mut AppState, error: Option<&str>) {
    match error {
        None => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading...");
            });
        }
        Some(message) => {
            ui.label(
                RichText::new(format!("{} Could not load the cruise list: {}", icons::WARNING, message))
                    .color(Color32::from_rgb(220, 80, 80)),
            );
            if ui
                .button(format!("{} Retry", icons::ARROW_CLOCKWISE))
                .clicked()
            {
                state.retry_requested = true;
            }
        }
    }
}
