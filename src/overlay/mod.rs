//! Earthquake and fault-line overlays.
//!
//! Parsing of the two GeoJSON feeds into domain structures, the styling
//! helpers mapping magnitude to marker radius and depth to color, and the
//! map plugins that draw the overlays.

mod layer;
mod renderer;
mod style;

pub use layer::{Earthquake, EarthquakeLayer, FaultLineLayer};
pub use renderer::{EarthquakePlugin, FaultLinePlugin};
pub use style::{FaultLineStyle, StylePreset, MARKER_FILL_ALPHA};
