//! Central panel UI: the slippy map and its overlays.

use crate::basemap::BasemapTiles;
use crate::config::MapConfig;
use crate::overlay::{
    EarthquakeLayer, EarthquakePlugin, FaultLineLayer, FaultLinePlugin, FaultLineStyle,
};
use crate::state::AppState;
use eframe::egui;
use walkers::{lon_lat, Map, MapMemory};

/// Renders the map with the active base layer and any loaded overlays.
///
/// Overlay plugins are attached back-to-front: fault lines first so
/// earthquake markers draw on top of them.
pub fn render_map(
    ctx: &egui::Context,
    state: &mut AppState,
    tiles: &mut BasemapTiles,
    memory: &mut MapMemory,
    config: &MapConfig,
    earthquakes: Option<&EarthquakeLayer>,
    fault_lines: Option<&FaultLineLayer>,
) {
    let basemap = state.basemap;
    let preset = state.preset;
    let show_earthquakes = state.overlays.earthquakes;
    let show_fault_lines = state.overlays.fault_lines;
    let center = lon_lat(config.center_lon, config.center_lat);

    egui::CentralPanel::default().show(ctx, |ui| {
        let mut map = Map::new(Some(tiles.get_mut(basemap)), memory, center);

        if show_fault_lines {
            if let Some(layer) = fault_lines {
                map = map.with_plugin(FaultLinePlugin {
                    layer,
                    style: FaultLineStyle::default(),
                });
            }
        }

        if show_earthquakes {
            if let Some(layer) = earthquakes {
                map = map.with_plugin(EarthquakePlugin {
                    layer,
                    preset,
                    selected: &mut state.viz.selected_event,
                });
            }
        }

        ui.add(map);
    });

    super::render_legend(ctx, preset);
}
