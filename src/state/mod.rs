//! Application state management.
//!
//! State is organized into logical groupings: overlay visibility, feed
//! loading phases, and map/selection state, plus the active base layer and
//! styling preset toggled from the layer control.

mod feed;
mod layer;
mod viz;

pub use feed::{FeedPhase, FeedStatus};
pub use layer::OverlayState;
pub use viz::VizState;

use crate::basemap::BasemapStyle;
use crate::config::MapConfig;
use crate::overlay::StylePreset;

/// Root application state containing all sub-states.
pub struct AppState {
    /// Active base layer; exactly one at a time.
    pub basemap: BasemapStyle,

    /// Active styling preset for markers and legend.
    pub preset: StylePreset,

    /// Overlay visibility toggles.
    pub overlays: OverlayState,

    /// Loading phase of each feed.
    pub feeds: FeedStatus,

    /// Map selection state.
    pub viz: VizState,

    /// Application status message displayed in the top bar.
    pub status_message: String,
}

impl AppState {
    pub fn new(config: &MapConfig) -> Self {
        Self {
            basemap: config.default_basemap,
            preset: config.default_preset,
            overlays: OverlayState::default(),
            feeds: FeedStatus::default(),
            viz: VizState::default(),
            status_message: "Loading feeds...".to_string(),
        }
    }
}
