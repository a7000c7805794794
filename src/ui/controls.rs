//! Right panel UI: base layer, overlay, and styling controls.

use crate::basemap::BasemapStyle;
use crate::overlay::StylePreset;
use crate::state::AppState;
use eframe::egui::{self, RichText, ScrollArea};

pub fn render_controls(ctx: &egui::Context, state: &mut AppState) {
    egui::SidePanel::right("controls_panel")
        .resizable(true)
        .default_width(200.0)
        .min_width(160.0)
        .max_width(300.0)
        .show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                ui.heading("Layers");
                ui.separator();

                render_basemap_section(ui, state);
                ui.add_space(5.0);

                render_overlay_section(ui, state);
                ui.add_space(5.0);

                render_style_section(ui, state);
            });
        });
}

fn render_basemap_section(ui: &mut egui::Ui, state: &mut AppState) {
    egui::CollapsingHeader::new(RichText::new("Base Layer").strong())
        .default_open(true)
        .show(ui, |ui| {
            for style in BasemapStyle::all() {
                ui.radio_value(&mut state.basemap, *style, style.label());
            }
        });
}

fn render_overlay_section(ui: &mut egui::Ui, state: &mut AppState) {
    egui::CollapsingHeader::new(RichText::new("Overlays").strong())
        .default_open(true)
        .show(ui, |ui| {
            ui.checkbox(&mut state.overlays.earthquakes, "Earthquakes");
            ui.checkbox(&mut state.overlays.fault_lines, "Fault Lines");
        });

    // Hiding the earthquake layer also dismisses its popup
    if !state.overlays.earthquakes {
        state.viz.selected_event = None;
    }
}

fn render_style_section(ui: &mut egui::Ui, state: &mut AppState) {
    egui::CollapsingHeader::new(RichText::new("Style").strong())
        .default_open(true)
        .show(ui, |ui| {
            egui::ComboBox::from_id_salt("preset_selector")
                .selected_text(state.preset.label())
                .width(140.0)
                .show_ui(ui, |ui| {
                    for preset in StylePreset::all() {
                        ui.selectable_value(&mut state.preset, *preset, preset.label());
                    }
                });
        });
}
