//! Styling helpers for the overlays.
//!
//! Two presets are exposed, reflecting two iterations of the same display:
//! - `Classic`: x10 marker radius with a coarse 3-band depth palette.
//! - `Extended`: x2 marker radius with a fine 6-band red-to-green hue ramp.
//!
//! Both depth-color functions are pure and total; ties at exact threshold
//! values fall to the lower band (strict `>`).

use eframe::egui::Color32;

/// Marker fill alpha (0.75 opacity).
pub const MARKER_FILL_ALPHA: u8 = 191;

// Extended preset hue ramp, deepest first.
const DEPTH_90_PLUS: Color32 = Color32::from_rgb(234, 44, 44);
const DEPTH_70_90: Color32 = Color32::from_rgb(234, 130, 44);
const DEPTH_50_70: Color32 = Color32::from_rgb(238, 156, 0);
const DEPTH_30_50: Color32 = Color32::from_rgb(238, 204, 0);
const DEPTH_10_30: Color32 = Color32::from_rgb(212, 238, 0);
const DEPTH_SHALLOW: Color32 = Color32::from_rgb(152, 238, 0);

/// Named styling presets for the earthquake overlay.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StylePreset {
    #[default]
    Classic,
    Extended,
}

impl StylePreset {
    pub fn label(&self) -> &'static str {
        match self {
            StylePreset::Classic => "Classic",
            StylePreset::Extended => "Extended",
        }
    }

    pub fn all() -> &'static [StylePreset] {
        &[StylePreset::Classic, StylePreset::Extended]
    }

    /// Linear factor applied to magnitude to obtain the marker radius.
    pub fn radius_scale(&self) -> f64 {
        match self {
            StylePreset::Classic => 10.0,
            StylePreset::Extended => 2.0,
        }
    }

    /// Marker radius for a magnitude.
    ///
    /// A raw linear map: real feeds contain zero and negative magnitudes,
    /// which yield non-positive radii here. The renderer clamps to a
    /// minimum visible size at draw time.
    pub fn marker_radius(&self, magnitude: f64) -> f64 {
        magnitude * self.radius_scale()
    }

    /// Color for an event depth in kilometers.
    ///
    /// Depth may be negative for above-sea-level epicenters.
    pub fn depth_color(&self, depth_km: f64) -> Color32 {
        match self {
            StylePreset::Classic => {
                if depth_km > 10.0 {
                    Color32::RED
                } else if depth_km > 5.0 {
                    Color32::ORANGE
                } else {
                    Color32::YELLOW
                }
            }
            StylePreset::Extended => {
                if depth_km > 90.0 {
                    DEPTH_90_PLUS
                } else if depth_km > 70.0 {
                    DEPTH_70_90
                } else if depth_km > 50.0 {
                    DEPTH_50_70
                } else if depth_km > 30.0 {
                    DEPTH_30_50
                } else if depth_km > 10.0 {
                    DEPTH_10_30
                } else {
                    DEPTH_SHALLOW
                }
            }
        }
    }

    /// Ascending depth thresholds shown in the legend.
    pub fn legend_thresholds(&self) -> &'static [i32] {
        match self {
            StylePreset::Classic => &[0, 5, 10],
            StylePreset::Extended => &[-10, 10, 30, 50, 70, 90],
        }
    }
}

/// Static style applied to every fault-line feature.
#[derive(Debug, Clone, Copy)]
pub struct FaultLineStyle {
    pub color: Color32,
    pub width: f32,
}

impl Default for FaultLineStyle {
    fn default() -> Self {
        Self {
            // Red at 0.8 opacity, weight 1.5
            color: Color32::from_rgba_unmultiplied(255, 0, 0, 204),
            width: 1.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_is_linear_in_magnitude() {
        assert_eq!(StylePreset::Classic.marker_radius(5.0), 50.0);
        assert_eq!(StylePreset::Classic.marker_radius(0.0), 0.0);
        assert_eq!(StylePreset::Extended.marker_radius(5.0), 10.0);
        assert_eq!(StylePreset::Extended.marker_radius(7.25), 14.5);
    }

    #[test]
    fn test_negative_magnitude_passes_through() {
        // No clamping in the styling function itself
        assert_eq!(StylePreset::Classic.marker_radius(-1.2), -12.0);
        assert_eq!(StylePreset::Extended.marker_radius(-0.5), -1.0);
    }

    #[test]
    fn test_classic_depth_bands() {
        let preset = StylePreset::Classic;
        assert_eq!(preset.depth_color(0.0), Color32::YELLOW);
        assert_eq!(preset.depth_color(5.5), Color32::ORANGE);
        assert_eq!(preset.depth_color(12.0), Color32::RED);
    }

    #[test]
    fn test_classic_boundaries_fall_to_lower_band() {
        let preset = StylePreset::Classic;
        // depth == 10 is not yet the ">10" band
        assert_eq!(preset.depth_color(10.0), Color32::ORANGE);
        assert_eq!(preset.depth_color(5.0), Color32::YELLOW);
    }

    #[test]
    fn test_extended_depth_bands() {
        let preset = StylePreset::Extended;
        assert_eq!(preset.depth_color(-12.0), DEPTH_SHALLOW);
        assert_eq!(preset.depth_color(0.0), DEPTH_SHALLOW);
        assert_eq!(preset.depth_color(12.0), DEPTH_10_30);
        assert_eq!(preset.depth_color(31.0), DEPTH_30_50);
        assert_eq!(preset.depth_color(51.0), DEPTH_50_70);
        assert_eq!(preset.depth_color(71.0), DEPTH_70_90);
        assert_eq!(preset.depth_color(91.0), DEPTH_90_PLUS);
    }

    #[test]
    fn test_extended_boundaries_fall_to_lower_band() {
        let preset = StylePreset::Extended;
        assert_eq!(preset.depth_color(10.0), DEPTH_SHALLOW);
        assert_eq!(preset.depth_color(30.0), DEPTH_10_30);
        assert_eq!(preset.depth_color(90.0), DEPTH_70_90);
    }

    #[test]
    fn test_legend_thresholds_are_ascending() {
        for preset in StylePreset::all() {
            let thresholds = preset.legend_thresholds();
            assert!(thresholds.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
