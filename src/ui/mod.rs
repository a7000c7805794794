//! UI modules for the Quake Workbench application.
//!
//! The UI is split into distinct panels:
//! - Top bar: Title, status, and feed indicators
//! - Right panel: Base layer, overlay, and preset controls
//! - Central panel: The slippy map with its overlays
//! - Legend: Depth band colors, anchored bottom-right over the map

pub mod colors;
mod controls;
mod legend;
mod map_panel;
mod top_bar;

pub use controls::render_controls;
pub use legend::render_legend;
pub use map_panel::render_map;
pub use top_bar::render_top_bar;
