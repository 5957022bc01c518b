//! Cruise page: breadcrumb, cruise fields and file lists.

use super::render_feed_pending;
use crate::catalog::{CruiseDetail, DisplayList, FileLink, ReferenceLink};
use crate::state::{AppState, DetailPage, Route};
use eframe::egui::{self, RichText};
use egui_phosphor::regular as icons;

/// Renders the page for `expocode`. Returns a route when a link was clicked.
pub fn render_cruise_page(ui: &mut egui::Ui, state: &mut AppState, expocode: &str) -> Option<Route> {
    match state.detail_page(expocode) {
        DetailPage::Loading => {
            render_feed_pending(ui, state, None);
            None
        }
        DetailPage::Failed(message) => {
            render_feed_pending(ui, state, Some(message.as_str()));
            None
        }
        DetailPage::NotFound(expocode) => {
            ui.label(format!("No program found for expocode {}", expocode));
            ui.add_space(5.0);
            if ui.link("Back to programs").clicked() {
                return Some(Route::Programs);
            }
            None
        }
        DetailPage::Ready(detail) => render_detail(ui, &detail),
    }
}

fn render_detail(ui: &mut egui::Ui, detail: &CruiseDetail) -> Option<Route> {
    let mut clicked = None;

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.horizontal(|ui| {
            if ui.link("Programs").clicked() {
                clicked = Some(Route::Programs);
            }
            ui.label(icons::CARET_RIGHT);
            ui.label(RichText::new(detail.display_name.as_str()).strong());
        });
    });
    ui.add_space(8.0);

    egui::Grid::new("cruise_fields")
        .num_columns(2)
        .spacing([24.0, 6.0])
        .show(ui, |ui| {
            field(ui, "Expocode", |ui| {
                ui.hyperlink_to(detail.expocode.as_str(), detail.expocode_url.as_str());
            });
            field(ui, "Data Owner/PI", |ui| name_list(ui, &detail.owners));
            field(ui, "Chief Scientist(s)", |ui| {
                name_list(ui, &detail.chief_scientists)
            });
            field(ui, "Dates", |ui| {
                ui.label(detail.dates.as_str());
            });
            field(ui, "Port Out", |ui| {
                ui.label(detail.start_port.as_str());
            });
            field(ui, "Port In", |ui| {
                ui.label(detail.end_port.as_str());
            });
            field(ui, "Ship", |ui| {
                ui.label(detail.ship.as_str());
            });
            field(ui, "Institutions", |ui| name_list(ui, &detail.institutions));
            field(ui, "References", |ui| {
                display_list(ui, &detail.references, reference_item)
            });
        });

    ui.add_space(10.0);
    ui.heading("Microstructure NetCDF Dataset");
    file_list(ui, &detail.dataset);

    ui.add_space(6.0);
    ui.heading("Reports");
    file_list(ui, &detail.reports);

    if !detail.as_received_is_empty() {
        ui.add_space(10.0);
        ui.heading("Data As Received");
        optional_file_list(ui, "Unprocessed", &detail.unprocessed);
        optional_file_list(ui, "Intermediate", &detail.intermediate);
        optional_file_list(ui, "Raw", &detail.raw);
    }

    clicked
}

fn field(ui: &mut egui::Ui, label: &str, value: impl FnOnce(&mut egui::Ui)) {
    ui.label(RichText::new(label).strong());
    ui.vertical(value);
    ui.end_row();
}

fn display_list<T>(ui: &mut egui::Ui, list: &DisplayList<T>, mut item: impl FnMut(&mut egui::Ui, &T)) {
    match list {
        DisplayList::Items(items) => {
            for entry in items {
                item(ui, entry);
            }
        }
        DisplayList::Placeholder(placeholder) => {
            ui.label(*placeholder);
        }
    }
}

fn name_list(ui: &mut egui::Ui, list: &DisplayList<String>) {
    display_list(ui, list, |ui, name| {
        ui.label(name.as_str());
    });
}

fn reference_item(ui: &mut egui::Ui, reference: &ReferenceLink) {
    ui.horizontal_wrapped(|ui| {
        ui.label(reference.prefix());
        match &reference.href {
            Some(href) => {
                ui.hyperlink_to(reference.text.as_str(), href.as_str());
            }
            None => {
                ui.label(reference.text.as_str());
            }
        }
    });
}

fn file_list(ui: &mut egui::Ui, files: &[FileLink]) {
    for file in files {
        ui.hyperlink_to(format!("{} {}", icons::FILE, file.name), file.url.as_str())
            .on_hover_text(file.hash.as_str());
    }
}

/// Subsection that is left out entirely when it has no files.
fn optional_file_list(ui: &mut egui::Ui, header: &str, files: &[FileLink]) {
    if files.is_empty() {
        return;
    }
    ui.label(RichText::new(header).strong());
    ui.indent(header, |ui| file_list(ui, files));
}
