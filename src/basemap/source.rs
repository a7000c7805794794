//! Mapbox tile source definitions.

use walkers::sources::{Attribution, TileSource};
use walkers::TileId;

/// Selectable base layer styles.
///
/// Exactly one is active at a time; the default matches the street view
/// shown on load.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BasemapStyle {
    #[default]
    Street,
    Dark,
    Satellite,
}

impl BasemapStyle {
    pub fn label(&self) -> &'static str {
        match self {
            BasemapStyle::Street => "Street Map",
            BasemapStyle::Dark => "Dark Map",
            BasemapStyle::Satellite => "Satellite Map",
        }
    }

    /// Mapbox style id used in the tile URL path.
    pub fn style_id(&self) -> &'static str {
        match self {
            BasemapStyle::Street => "streets-v11",
            BasemapStyle::Dark => "dark-v10",
            BasemapStyle::Satellite => "satellite-v9",
        }
    }

    pub fn all() -> &'static [BasemapStyle] {
        &[
            BasemapStyle::Street,
            BasemapStyle::Dark,
            BasemapStyle::Satellite,
        ]
    }
}

/// Tile source for the Mapbox Styles tile API.
///
/// Tiles are requested at 256 px so the zoom numbering lines up with the
/// walkers default tile size.
pub struct MapboxSource {
    style: BasemapStyle,
    access_token: String,
}

impl MapboxSource {
    pub fn new(style: BasemapStyle, access_token: impl Into<String>) -> Self {
        Self {
            style,
            access_token: access_token.into(),
        }
    }
}

impl TileSource for MapboxSource {
    fn tile_url(&self, tile_id: TileId) -> String {
        format!(
            "https://api.mapbox.com/styles/v1/mapbox/{}/tiles/256/{}/{}/{}?access_token={}",
            self.style.style_id(),
            tile_id.zoom,
            tile_id.x,
            tile_id.y,
            self.access_token
        )
    }

    fn attribution(&self) -> Attribution {
        Attribution {
            text: "© Mapbox, © OpenStreetMap contributors",
            url: "https://www.mapbox.com/about/maps/",
            logo_light: None,
            logo_dark: None,
        }
    }

    fn max_zoom(&self) -> u8 {
        18
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_url_contains_style_and_token() {
        let source = MapboxSource::new(BasemapStyle::Dark, "pk.test-token");
        let url = source.tile_url(TileId {
            x: 8,
            y: 12,
            zoom: 5,
        });

        assert!(url.contains("/dark-v10/"));
        assert!(url.contains("/tiles/256/5/8/12"));
        assert!(url.ends_with("access_token=pk.test-token"));
    }

    #[test]
    fn test_style_ids() {
        assert_eq!(BasemapStyle::Street.style_id(), "streets-v11");
        assert_eq!(BasemapStyle::Dark.style_id(), "dark-v10");
        assert_eq!(BasemapStyle::Satellite.style_id(), "satellite-v9");
    }

    #[test]
    fn test_all_styles_listed() {
        assert_eq!(BasemapStyle::all().len(), 3);
        assert_eq!(BasemapStyle::default(), BasemapStyle::Street);
    }
}
