//! Application configuration.
//!
//! All tunable startup values live in one record with named fields and
//! defaults rather than being scattered as module globals. Values can be
//! overridden through environment variables before the map initializes
//! (on wasm the lookups simply fall through to the defaults).

use crate::basemap::BasemapStyle;
use crate::overlay::StylePreset;

/// USGS FDSN event query used by the earthquake overlay.
const EARTHQUAKE_FEED_URL: &str = "https://earthquake.usgs.gov/fdsnws/event/1/query?format=geojson\
     &starttime=2014-01-01&endtime=2014-01-02\
     &maxlongitude=-69.52148437&minlongitude=-123.83789062\
     &maxlatitude=48.74894534&minlatitude=25.16517337";

/// PB2002 tectonic plate boundaries used by the fault-line overlay.
const FAULT_LINE_FEED_URL: &str =
    "https://raw.githubusercontent.com/fraxen/tectonicplates/master/GeoJSON/PB2002_boundaries.json";

/// Startup configuration for the map and its data feeds.
#[derive(Debug, Clone)]
pub struct MapConfig {
    /// Initial map center latitude (degrees).
    pub center_lat: f64,
    /// Initial map center longitude (degrees).
    pub center_lon: f64,
    /// Initial slippy-map zoom level.
    pub zoom: f64,
    /// Mapbox access token for the base tile layers.
    pub mapbox_access_token: String,
    /// GeoJSON feed of seismic events.
    pub earthquake_feed_url: String,
    /// GeoJSON feed of plate boundaries.
    pub fault_line_feed_url: String,
    /// Base layer shown on load.
    pub default_basemap: BasemapStyle,
    /// Styling preset active on load.
    pub default_preset: StylePreset,
}

impl Default for MapConfig {
    fn default() -> Self {
        let mapbox_access_token = std::env::var("MAPBOX_ACCESS_TOKEN").unwrap_or_default();
        let earthquake_feed_url =
            std::env::var("QUAKE_FEED_URL").unwrap_or_else(|_| EARTHQUAKE_FEED_URL.to_string());
        let fault_line_feed_url =
            std::env::var("FAULT_FEED_URL").unwrap_or_else(|_| FAULT_LINE_FEED_URL.to_string());

        Self {
            // Continental US view, matching the source feed's bounding box
            center_lat: 37.09,
            center_lon: -95.71,
            zoom: 5.0,
            mapbox_access_token,
            earthquake_feed_url,
            fault_line_feed_url,
            default_basemap: BasemapStyle::default(),
            default_preset: StylePreset::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view() {
        let config = MapConfig::default();
        assert_eq!(config.center_lat, 37.09);
        assert_eq!(config.center_lon, -95.71);
        assert_eq!(config.zoom, 5.0);
        assert_eq!(config.default_basemap, BasemapStyle::Street);
    }

    #[test]
    fn test_default_feed_urls() {
        let config = MapConfig::default();
        assert!(config.earthquake_feed_url.contains("format=geojson"));
        assert!(config.fault_line_feed_url.ends_with("PB2002_boundaries.json"));
    }
}
