//! Centralized color constants for the UI.

use eframe::egui::Color32;

/// General UI colors for labels and values.
pub mod ui {
    use super::Color32;

    /// Muted gray for labels.
    #[allow(dead_code)] // Available for future UI elements
    pub const LABEL: Color32 = Color32::from_rgb(100, 100, 100);
    /// Slightly brighter for values.
    pub const VALUE: Color32 = Color32::from_rgb(160, 160, 160);
}

/// Colors for feed status indicators.
pub mod feed {
    use super::Color32;

    /// Orange - fetch in flight.
    pub const LOADING: Color32 = Color32::from_rgb(255, 180, 50);
    /// Green - overlay populated.
    pub const LOADED: Color32 = Color32::from_rgb(100, 200, 100);
    /// Red - fetch failed; overlay stays empty.
    pub const FAILED: Color32 = Color32::from_rgb(255, 80, 80);
}
