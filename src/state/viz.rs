//! Map selection state.

/// State tied to the map viewport itself.
#[derive(Default)]
pub struct VizState {
    /// Index into the earthquake layer of the event whose popup is open.
    pub selected_event: Option<usize>,
}
