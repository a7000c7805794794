//! Depth legend, anchored over the bottom-right corner of the map.

use crate::overlay::StylePreset;
use eframe::egui::{self, Align2, Color32, RichText, Sense};

/// One rendered legend row: a color swatch and its band label.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendRow {
    pub color: Color32,
    pub label: String,
}

/// Builds the legend rows for a preset's depth thresholds.
///
/// Interior bands are labeled `"low–high"`; the open-ended top band is
/// `"high+"`. The swatch color samples the depth-color function just above
/// the threshold, so each row shows the color of the band it opens.
pub fn legend_rows(preset: StylePreset) -> Vec<LegendRow> {
    let thresholds = preset.legend_thresholds();

    thresholds
        .iter()
        .enumerate()
        .map(|(i, &low)| {
            let label = match thresholds.get(i + 1) {
                Some(high) => format!("{}–{}", low, high),
                None => format!("{}+", low),
            };
            LegendRow {
                color: preset.depth_color((low + 1) as f64),
                label,
            }
        })
        .collect()
}

pub fn render_legend(ctx: &egui::Context, preset: StylePreset) {
    egui::Window::new("depth_legend")
        .anchor(Align2::RIGHT_BOTTOM, [-12.0, -12.0])
        .title_bar(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label(RichText::new("Depth").strong());
            ui.add_space(2.0);

            for row in legend_rows(preset) {
                ui.horizontal(|ui| {
                    let (rect, _) =
                        ui.allocate_exact_size(egui::vec2(14.0, 14.0), Sense::hover());
                    ui.painter().rect_filled(rect, 2.0, row.color);
                    ui.label(RichText::new(&row.label).size(12.0));
                });
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classic_legend_rows() {
        let rows = legend_rows(StylePreset::Classic);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0].label, "0–5");
        assert_eq!(rows[1].label, "5–10");
        assert_eq!(rows[2].label, "10+");
    }

    #[test]
    fn test_extended_legend_rows() {
        let rows = legend_rows(StylePreset::Extended);
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[0].label, "-10–10");
        assert_eq!(rows[5].label, "90+");
    }

    #[test]
    fn test_swatches_sample_above_threshold() {
        // Row for the "10+" band must show the ">10" color, not the tie color
        let rows = legend_rows(StylePreset::Classic);
        assert_eq!(rows[2].color, StylePreset::Classic.depth_color(11.0));
        assert_ne!(rows[2].color, StylePreset::Classic.depth_color(10.0));
    }

    #[test]
    fn test_swatch_colors_are_distinct() {
        for preset in StylePreset::all() {
            let rows = legend_rows(*preset);
            for pair in rows.windows(2) {
                assert_ne!(pair[0].color, pair[1].color);
            }
        }
    }
}
