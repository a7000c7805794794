//! Channel bridge for the two overlay feeds.
//!
//! Fetches are async but egui's update() is synchronous. Each fetch runs
//! off the render thread (a worker thread natively, `spawn_local` on wasm),
//! sends its result through the channel, and requests a repaint. The two
//! feeds are independent: neither orders or blocks the other.

use eframe::egui;
use std::sync::mpsc::{channel, Receiver, Sender};

/// Which overlay a fetch belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedKind {
    Earthquakes,
    FaultLines,
}

impl FeedKind {
    pub fn label(&self) -> &'static str {
        match self {
            FeedKind::Earthquakes => "Earthquakes",
            FeedKind::FaultLines => "Fault Lines",
        }
    }
}

/// Outcome of one feed fetch.
#[derive(Debug)]
pub enum FeedResult {
    /// Response body received; not yet parsed.
    Success { kind: FeedKind, body: String },
    /// Network or HTTP failure. The overlay stays unpopulated.
    Error { kind: FeedKind, message: String },
}

/// Channel-based loader for the GeoJSON feeds.
pub struct FeedChannel {
    sender: Sender<FeedResult>,
    receiver: Receiver<FeedResult>,
}

impl Default for FeedChannel {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedChannel {
    pub fn new() -> Self {
        let (sender, receiver) = channel();
        Self { sender, receiver }
    }

    /// Spawns a fetch for one feed.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn fetch(&self, ctx: egui::Context, kind: FeedKind, url: String) {
        let sender = self.sender.clone();

        std::thread::spawn(move || {
            log::info!("Fetching {} feed: {}", kind.label(), url);
            let result = match fetch_text(&url) {
                Ok(body) => FeedResult::Success { kind, body },
                Err(message) => FeedResult::Error { kind, message },
            };
            let _ = sender.send(result);
            ctx.request_repaint();
        });
    }

    /// Spawns a fetch for one feed.
    #[cfg(target_arch = "wasm32")]
    pub fn fetch(&self, ctx: egui::Context, kind: FeedKind, url: String) {
        let sender = self.sender.clone();

        wasm_bindgen_futures::spawn_local(async move {
            log::info!("Fetching {} feed: {}", kind.label(), url);
            let result = match fetch_text(&url).await {
                Ok(body) => FeedResult::Success { kind, body },
                Err(message) => FeedResult::Error { kind, message },
            };
            let _ = sender.send(result);
            ctx.request_repaint();
        });
    }

    /// Non-blocking check for a completed fetch.
    pub fn try_recv(&self) -> Option<FeedResult> {
        self.receiver.try_recv().ok()
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn fetch_text(url: &str) -> Result<String, String> {
    let response =
        reqwest::blocking::get(url).map_err(|e| format!("Request failed: {}", e))?;

    if !response.status().is_success() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .text()
        .map_err(|e| format!("Failed to read response body: {}", e))
}

#[cfg(target_arch = "wasm32")]
async fn fetch_text(url: &str) -> Result<String, String> {
    let response = reqwest::get(url)
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.status().is_success() {
        return Err(format!("HTTP {}", response.status()));
    }

    response
        .text()
        .await
        .map_err(|e| format!("Failed to read response body: {}", e))
}
