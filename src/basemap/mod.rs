//! Base tile layers for the map.
//!
//! Wraps the three Mapbox styles used as selectable backgrounds and owns
//! one tile cache per style so switching base layers never refetches.

mod source;
mod tiles;

pub use source::{BasemapStyle, MapboxSource};
pub use tiles::BasemapTiles;
