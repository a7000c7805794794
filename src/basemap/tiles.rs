//! Per-style tile caches.

use super::{BasemapStyle, MapboxSource};
use eframe::egui;
use walkers::HttpTiles;

/// One `HttpTiles` cache per base layer style.
///
/// Each style keeps its own cache so toggling between base layers in the
/// layer control reuses already downloaded tiles.
pub struct BasemapTiles {
    street: HttpTiles,
    dark: HttpTiles,
    satellite: HttpTiles,
}

impl BasemapTiles {
    pub fn new(ctx: &egui::Context, access_token: &str) -> Self {
        if access_token.is_empty() {
            log::warn!("No Mapbox access token configured; base tiles will fail to load");
        }

        Self {
            street: HttpTiles::new(
                MapboxSource::new(BasemapStyle::Street, access_token),
                ctx.clone(),
            ),
            dark: HttpTiles::new(
                MapboxSource::new(BasemapStyle::Dark, access_token),
                ctx.clone(),
            ),
            satellite: HttpTiles::new(
                MapboxSource::new(BasemapStyle::Satellite, access_token),
                ctx.clone(),
            ),
        }
    }

    /// Returns the tile cache for the active base layer.
    pub fn get_mut(&mut self, style: BasemapStyle) -> &mut HttpTiles {
        match style {
            BasemapStyle::Street => &mut self.street,
            BasemapStyle::Dark => &mut self.dark,
            BasemapStyle::Satellite => &mut self.satellite,
        }
    }
}
