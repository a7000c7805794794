//! Overlay visibility state.

/// Toggles for the two map overlays.
#[derive(Clone)]
pub struct OverlayState {
    /// Show the earthquake markers overlay.
    pub earthquakes: bool,
    /// Show the plate-boundary lines overlay.
    pub fault_lines: bool,
}

impl Default for OverlayState {
    fn default() -> Self {
        Self {
            earthquakes: true,
            fault_lines: true,
        }
    }
}
