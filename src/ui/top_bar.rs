//! Top bar UI: site title and status.

use crate::state::{AppState, FeedState};
use eframe::egui::{self, Color32, RichText};

pub fn render_top_bar(ctx: &egui::Context, state: &AppState) {
    egui::TopBottomPanel::top("top_bar")
        .exact_height(36.0)
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.label(
                    RichText::new(&state.settings.site_key)
                        .strong()
                        .size(16.0),
                );

                ui.separator();

                let color = match state.feed {
                    FeedState::Failed(_) => Color32::from_rgb(220, 80, 80),
                    _ => Color32::GRAY,
                };
                let status = ui.label(RichText::new(&state.status_message).size(13.0).color(color));
                if !state.rejected.is_empty() {
                    let details: Vec<String> =
                        state.rejected.iter().map(|e| e.to_string()).collect();
                    status.on_hover_text(details.join("\n"));
                }
            });
        });
}
