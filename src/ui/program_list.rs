//! Program list page: introduction card and the table of programs.

use super::render_feed_pending;
use crate::state::{AppState, FeedState, Route};
use eframe::egui::{self, RichText};

const SUBMIT_URL: &str = "https://cchdo.ucsd.edu/submit";
const MIXING_ROUTINES_URL: &str =
    "https://github.com/OceanMixingCommunity/Standard-Mixing-Routines";
const MIXING_NOTEBOOK_URL: &str = "https://github.com/OceanMixingCommunity/Standard-Mixing-Routines/blob/master/Examine_mixing_data.ipynb";

/// Renders the program list. Returns the route of a clicked program.
pub fn render_program_list(ui: &mut egui::Ui, state: &mut AppState) -> Option<Route> {
    render_intro(ui, &mut state.intro_open);
    ui.add_space(10.0);

    ui.heading("Microstructure Programs");
    ui.separator();

    match &state.feed {
        FeedState::Loaded(_) => {}
        FeedState::NotLoaded => {
            render_feed_pending(ui, state, None);
            return None;
        }
        FeedState::Failed(message) => {
            let message = message.clone();
            render_feed_pending(ui, state, Some(message.as_str()));
            return None;
        }
    }

    if state.index().is_some_and(|index| index.is_empty()) {
        ui.label("No programs are listed in the feed.");
        return None;
    }

    let mut clicked = None;
    egui::Grid::new("program_table")
        .striped(true)
        .num_columns(4)
        .spacing([16.0, 4.0])
        .show(ui, |ui| {
            for header in ["Program Name", "Port Out", "Start Date", "End Date"] {
                ui.label(RichText::new(header).strong());
            }
            ui.end_row();

            for row in state.program_rows() {
                if ui
                    .link(row.display_name.as_str())
                    .on_hover_text(row.expocode.as_str())
                    .clicked()
                {
                    clicked = Some(row.link_target.clone());
                }
                ui.label(row.start_port.as_str());
                ui.label(row.start_date.as_str());
                ui.label(row.end_date.as_str());
                ui.end_row();
            }
        });

    clicked
}

fn render_intro(ui: &mut egui::Ui, open: &mut bool) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.label(
            RichText::new("Welcome to the NSF-funded Microstructure Database")
                .strong()
                .size(15.0),
        );
        ui.horizontal_wrapped(|ui| {
            ui.label(
                "This database provides a compilation of various datasets obtained from \
                 ocean microstructure profilers capable of measuring the smallest scales \
                 of oceanic turbulence.",
            );
            let toggle = if *open { "less <<" } else { "more >>" };
            if ui.link(toggle).clicked() {
                *open = !*open;
            }
        });

        if *open {
            ui.add_space(6.0);
            render_intro_details(ui);
        }
    });
}

fn render_intro_details(ui: &mut egui::Ui) {
    ui.label(
        "Data from microstructure programs have been provided by the data owners (PIs) \
         or has been digitized from historical papers. For the data given from PIs, data \
         has been archived as CF-compliant NetCDF files with 1-m binned data, where \
         possible, saving the variables: time, depth, pressure, temperature, salinity, \
         latitude, longitude as well as epsilon (ocean turbulent kinetic energy \
         dissipation rate in W/kg), and when available, chi-t (dissipation rate of \
         thermal variance from microtemperature in °C²/s) and chi-c (dissipation rate \
         of thermal variance from microconductivity in °C²/s).",
    );
    ui.add_space(4.0);
    ui.label(
        "Database entries include the program names and program PIs as well as cruise \
         information (research ship, ports of entry and exit, cruise dates, and chief \
         scientist). Relevant cruise reports, program related papers and other documents \
         are also contained in the data archive.",
    );
    ui.add_space(4.0);
    ui.label(
        "Data digitized from PEQUOD, PATCHEX, and WESPAC historical documents include \
         mean profiles of dissipation.",
    );
    ui.add_space(4.0);
    ui.label(
        "When available, supplementary data such as shipboard ADCP and meteorological \
         data is provided. It has been included as received from the data owners, \
         without further quality checks by CCHDO.",
    );
    ui.add_space(4.0);
    ui.horizontal_wrapped(|ui| {
        ui.label(
            "Newly obtained microstructure data can be uploaded by sending 1-m binned \
             data to the CCHDO group at",
        );
        ui.hyperlink(SUBMIT_URL);
    });
    ui.add_space(4.0);
    ui.label(
        "Citation for data sets that had pressure and/or depth calculated using the GSW \
         Oceanographic Toolbox: McDougall, T.J. and P.M. Barker, 2011: Getting started \
         with TEOS-10 and the Gibbs Seawater (GSW) Oceanographic Toolbox, 28pp., \
         SCOR/IAPSO WG127, ISBN 978-0-646-55621-5.",
    );
    ui.add_space(4.0);
    ui.horizontal_wrapped(|ui| {
        ui.label(
            "Community maintained routines for calculating mixing related variables are \
             collected at",
        );
        ui.hyperlink(MIXING_ROUTINES_URL);
    });
    ui.horizontal_wrapped(|ui| {
        ui.label("A Python notebook showing how to read the database files:");
        ui.hyperlink_to("Reading Mixing Database Files with Python", MIXING_NOTEBOOK_URL);
    });
}
