#![warn(clippy::all)]

//! Microstructure Browser - a catalog of ocean microstructure programs.
//!
//! Fetches the CCHDO cruise feed once, indexes the cruises tagged for the
//! microstructure site, and shows a program list plus a page per cruise with
//! links to the archived files.

mod catalog;
mod feed;
mod state;
mod ui;

use eframe::egui;
use feed::FeedChannel;
use state::{AppState, Route, SiteSettings};

// Native entry point
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::init();

    let native_options = eframe::NativeOptions::default();

    eframe::run_native(
        "Microstructure Browser",
        native_options,
        Box::new(|cc| Ok(Box::new(BrowserApp::new(cc)))),
    )
}

// WASM entry point - main is not called on wasm32
#[cfg(target_arch = "wasm32")]
fn main() {}

/// Entry point for the WASM application.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub async fn start() {
    use eframe::wasm_bindgen::JsCast as _;

    // Redirect `log` messages to `console.log`:
    eframe::WebLogger::init(log::LevelFilter::Debug).ok();

    let web_options = eframe::WebOptions::default();

    wasm_bindgen_futures::spawn_local(async {
        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("No document to attach the app to");
            return;
        };

        let Some(canvas) = document
            .get_element_by_id("app_canvas")
            .and_then(|el| el.dyn_into::<web_sys::HtmlCanvasElement>().ok())
        else {
            log::error!("Failed to find the app_canvas element");
            return;
        };

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(BrowserApp::new(cc)))),
            )
            .await;

        // Remove the loading text once the app has loaded:
        if let Some(loading_text) = document.get_element_by_id("loading_text") {
            match start_result {
                Ok(_) => {
                    loading_text.remove();
                }
                Err(e) => {
                    loading_text.set_inner_html(
                        "<p>The app has crashed. See the developer console for details.</p>",
                    );
                    log::error!("Failed to start eframe: {e:?}");
                }
            }
        }
    });
}

/// Page controller: owns the state and the feed request.
pub struct BrowserApp {
    state: AppState,

    /// Channel for the async feed request
    feed_channel: FeedChannel,
}

impl BrowserApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let settings = SiteSettings::load();
        let route = state::route::current_route().unwrap_or_default();
        log::info!("Starting on {}", route.to_hash());

        let mut state = AppState::new(settings, route);
        let mut feed_channel = FeedChannel::new();
        if let Some(url) = state.begin_load() {
            feed_channel.load(cc.egui_ctx.clone(), url);
        }

        Self {
            state,
            feed_channel,
        }
    }

    fn show_page(&mut self, ui: &mut egui::Ui) -> Option<Route> {
        match self.state.route.clone() {
            Route::Programs => ui::render_program_list(ui, &mut self.state),
            Route::Cruise(expocode) => ui::render_cruise_page(ui, &mut self.state, &expocode),
        }
    }
}

impl eframe::App for BrowserApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Follow back/forward navigation in the browser
        if let Some(route) = state::route::current_route() {
            self.state.navigate(route);
        }

        if let Some(result) = self.feed_channel.try_recv() {
            self.state.apply_feed_result(result);
        }

        if self.state.retry_requested && !self.feed_channel.is_loading() {
            if let Some(url) = self.state.begin_load() {
                self.feed_channel.load(ctx.clone(), url);
            }
        }

        ui::render_top_bar(ctx, &self.state);

        let clicked = egui::CentralPanel::default()
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false, false])
                    .show(ui, |ui| self.show_page(ui))
                    .inner
            })
            .inner;

        if let Some(route) = clicked {
            if self.state.navigate(route.clone()) {
                state::route::push_route(&route);
            }
        }
    }
}
