//! Feed download pipeline.
//!
//! Uses channel-based communication to bridge the async request
//! with egui's synchronous update loop.

use super::error::FeedError;
use super::types::RawFeed;
use eframe::egui;
use std::sync::mpsc::{channel, Receiver, Sender};

/// Outcome of one feed load.
pub type FeedResult = Result<RawFeed, FeedError>;

/// Channel-based client for the cruise feed.
///
/// The request is async but egui's update() is synchronous. The result is
/// sent back through a channel and picked up by `try_recv()` on a later frame.
pub struct FeedChannel {
    sender: Sender<FeedResult>,
    receiver: Receiver<FeedResult>,
    loading: bool,
}

impl Default for FeedChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedChannel {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self {
            sender,
            receiver,
            loading: false,
        }
    }

    /// Returns true while a request is outstanding.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Issues one GET for the feed at `url`.
    ///
    /// Ignored while a previous request is still outstanding.
    pub fn load(&mut self, ctx: egui::Context, url: String) {
        if self.loading {
            log::debug!("Feed load already in progress, ignoring request");
            return;
        }
        self.loading = true;
        let sender = self.sender.clone();

        #[cfg(target_arch = "wasm32")]
        {
            wasm_bindgen_futures::spawn_local(async move {
                log::info!("Loading cruise feed from {}", url);
                let result = match fetch_feed_text(&url).await {
                    Ok(body) => parse_logged(&body),
                    Err(e) => Err(e),
                };
                let _ = sender.send(result);
                ctx.request_repaint();
            });
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            std::thread::spawn(move || {
                log::info!("Loading cruise feed from {}", url);
                let result = fetch_feed_text(&url).and_then(|body| parse_logged(&body));
                let _ = sender.send(result);
                ctx.request_repaint();
            });
        }
    }

    /// Non-blocking check for a completed load.
    pub fn try_recv(&mut self) -> Option<FeedResult> {
        let result = self.receiver.try_recv().ok()?;
        self.loading = false;
        Some(result)
    }
}

/// Decodes a feed document.
///
/// Only the envelope is validated here; entries are decoded one by one
/// when the index is built.
pub fn parse_feed(body: &str) -> FeedResult {
    let document: serde_json::Value = serde_json::from_str(body)?;
    match document.get("cruises") {
        Some(serde_json::Value::Array(_)) => Ok(serde_json::from_value(document)?),
        Some(_) => Err(FeedError::Envelope("\"cruises\" is not an array".to_string())),
        None => Err(FeedError::Envelope("missing \"cruises\"".to_string())),
    }
}

fn parse_logged(body: &str) -> FeedResult {
    log::info!("Received {} bytes of feed data", body.len());
    let feed = parse_feed(body)?;
    log::info!("Feed lists {} cruise entries", feed.cruises.len());
    Ok(feed)
}

#[cfg(target_arch = "wasm32")]
async fn fetch_feed_text(url: &str) -> Result<String, FeedError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, RequestMode, Response};

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)
        .map_err(|e| FeedError::Network(format!("request error: {:?}", e)))?;

    let window = web_sys::window().ok_or_else(|| FeedError::Network("no window".to_string()))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| FeedError::Network(format!("fetch error: {:?}", e)))?;

    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| FeedError::Network("response is not a Response".to_string()))?;

    if !resp.ok() {
        return Err(FeedError::Status(resp.status()));
    }

    let text = JsFuture::from(
        resp.text()
            .map_err(|e| FeedError::Network(format!("body error: {:?}", e)))?,
    )
    .await
    .map_err(|e| FeedError::Network(format!("body error: {:?}", e)))?;

    text.as_string()
        .ok_or_else(|| FeedError::Network("response body is not text".to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
fn fetch_feed_text(url: &str) -> Result<String, FeedError> {
    let response = reqwest::blocking::get(url).map_err(|e| FeedError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(FeedError::Status(status.as_u16()));
    }

    response
        .text()
        .map_err(|e| FeedError::Network(e.to_string()))
}
