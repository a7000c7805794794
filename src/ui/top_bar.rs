//! Top bar UI: app title, status, and feed indicators.

use crate::state::{AppState, FeedPhase};
use crate::ui::colors;
use eframe::egui::{self, Color32, RichText};

pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("top_bar")
        .exact_height(36.0)
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                ui.label(
                    RichText::new("Quake Workbench")
                        .strong()
                        .size(16.0)
                        .color(Color32::WHITE),
                );

                ui.separator();

                feed_indicator(ui, "Earthquakes", &state.feeds.earthquakes);
                feed_indicator(ui, "Fault Lines", &state.feeds.fault_lines);

                ui.separator();

                ui.label(
                    RichText::new(&state.status_message)
                        .size(13.0)
                        .color(Color32::GRAY),
                );
            });
        });
}

fn feed_indicator(ui: &mut egui::Ui, name: &str, phase: &FeedPhase) {
    let (color, detail) = match phase {
        FeedPhase::Loading => (colors::feed::LOADING, "loading".to_string()),
        FeedPhase::Loaded { features } => (colors::feed::LOADED, features.to_string()),
        FeedPhase::Failed(_) => (colors::feed::FAILED, "failed".to_string()),
    };

    ui.label(RichText::new("●").size(11.0).color(color));
    ui.label(
        RichText::new(format!("{}: {}", name, detail))
            .size(12.0)
            .color(colors::ui::VALUE),
    );
}
