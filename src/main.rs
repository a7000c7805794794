#![warn(clippy::all)]

//! Quake Workbench - A web-based earthquake visualization tool.
//!
//! Renders recent seismic events and tectonic plate boundaries as overlays
//! on an interactive slippy map. Both overlays are fetched as GeoJSON at
//! startup and can be toggled independently of the selectable base layers.

mod basemap;
mod config;
mod feed;
mod overlay;
mod state;
mod ui;

use basemap::BasemapTiles;
use config::MapConfig;
use eframe::egui;
use feed::{FeedChannel, FeedKind, FeedResult};
use overlay::{EarthquakeLayer, FaultLineLayer};
use state::{AppState, FeedPhase};
use walkers::MapMemory;

// Native entry point
#[cfg(not(target_arch = "wasm32"))]
fn main() -> eframe::Result<()> {
    env_logger::init();

    let native_options = eframe::NativeOptions::default();

    eframe::run_native(
        "Quake Workbench",
        native_options,
        Box::new(|cc| Ok(Box::new(QuakeWorkbenchApp::new(cc)))),
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
        let document = web_sys::window()
            .expect("No window")
            .document()
            .expect("No document");

        let canvas = document
            .get_element_by_id("app_canvas")
            .expect("Failed to find app_canvas")
            .dyn_into::<web_sys::HtmlCanvasElement>()
            .expect("app_canvas was not a HtmlCanvasElement");

        let start_result = eframe::WebRunner::new()
            .start(
                canvas,
                web_options,
                Box::new(|cc| Ok(Box::new(QuakeWorkbenchApp::new(cc)))),
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
                    panic!("Failed to start eframe: {e:?}");
                }
            }
        }
    });
}

/// Main application state and logic.
pub struct QuakeWorkbenchApp {
    /// Application state containing all sub-states
    state: AppState,

    /// Startup configuration (center, zoom, token, feed URLs)
    config: MapConfig,

    /// Tile caches for the three base layers
    basemaps: BasemapTiles,

    /// Map viewport state (zoom, pan)
    map_memory: MapMemory,

    /// Channel for async feed fetches
    feed_channel: FeedChannel,

    /// Earthquake overlay, populated once its fetch completes
    earthquakes: Option<EarthquakeLayer>,

    /// Fault-line overlay, populated once its fetch completes
    fault_lines: Option<FaultLineLayer>,
}

impl QuakeWorkbenchApp {
    /// Creates a new QuakeWorkbenchApp instance and kicks off both feed
    /// fetches. Their completions arrive through the feed channel in
    /// whichever order the network decides.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = MapConfig::default();
        let state = AppState::new(&config);

        let basemaps = BasemapTiles::new(&cc.egui_ctx, &config.mapbox_access_token);

        let mut map_memory = MapMemory::default();
        if map_memory.set_zoom(config.zoom).is_err() {
            log::warn!("Configured zoom {} is out of range", config.zoom);
        }

        let feed_channel = FeedChannel::new();
        feed_channel.fetch(
            cc.egui_ctx.clone(),
            FeedKind::Earthquakes,
            config.earthquake_feed_url.clone(),
        );
        feed_channel.fetch(
            cc.egui_ctx.clone(),
            FeedKind::FaultLines,
            config.fault_line_feed_url.clone(),
        );

        Self {
            state,
            config,
            basemaps,
            map_memory,
            feed_channel,
            earthquakes: None,
            fault_lines: None,
        }
    }

    /// Handles one completed feed fetch: parse and attach the overlay, or
    /// record the failure. Either way the other feed is unaffected.
    fn handle_feed_result(&mut self, result: FeedResult) {
        match result {
            FeedResult::Success { kind, body } => match kind {
                FeedKind::Earthquakes => match EarthquakeLayer::from_geojson(&body) {
                    Ok(layer) => {
                        log::info!("Loaded {} earthquake(s)", layer.len());
                        self.state.feeds.earthquakes = FeedPhase::Loaded {
                            features: layer.len(),
                        };
                        self.state.status_message =
                            format!("Loaded {} earthquakes", layer.len());
                        self.earthquakes = Some(layer);
                    }
                    Err(e) => self.record_feed_failure(kind, e),
                },
                FeedKind::FaultLines => match FaultLineLayer::from_geojson(&body) {
                    Ok(layer) => {
                        log::info!("Loaded {} fault line(s)", layer.len());
                        self.state.feeds.fault_lines = FeedPhase::Loaded {
                            features: layer.len(),
                        };
                        self.state.status_message =
                            format!("Loaded {} fault lines", layer.len());
                        self.fault_lines = Some(layer);
                    }
                    Err(e) => self.record_feed_failure(kind, e),
                },
            },
            FeedResult::Error { kind, message } => self.record_feed_failure(kind, message),
        }
    }

    fn record_feed_failure(&mut self, kind: FeedKind, message: String) {
        log::error!("{} feed failed: {}", kind.label(), message);
        self.state.status_message = format!("{} feed failed: {}", kind.label(), message);

        let phase = FeedPhase::Failed(message);
        match kind {
            FeedKind::Earthquakes => self.state.feeds.earthquakes = phase,
            FeedKind::FaultLines => self.state.feeds.fault_lines = phase,
        }
    }
}

impl eframe::App for QuakeWorkbenchApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Check for completed feed fetches
        while let Some(result) = self.feed_channel.try_recv() {
            self.handle_feed_result(result);
        }

        // Render UI panels in the correct order for egui layout:
        // side and top panels must come before the central panel
        ui::render_top_bar(ctx, &mut self.state);
        ui::render_controls(ctx, &mut self.state);
        ui::render_map(
            ctx,
            &mut self.state,
            &mut self.basemaps,
            &mut self.map_memory,
            &self.config,
            self.earthquakes.as_ref(),
            self.fault_lines.as_ref(),
        );
    }
}
