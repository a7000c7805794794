//! Feed loading phases.

/// Lifecycle of one GeoJSON feed.
///
/// There is no retry or timeout: a failed feed stays `Failed` and its
/// overlay is simply never populated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FeedPhase {
    #[default]
    Loading,
    Loaded {
        features: usize,
    },
    Failed(String),
}

impl FeedPhase {
    #[allow(dead_code)] // Used by tests and available for UI gating
    pub fn is_loaded(&self) -> bool {
        matches!(self, FeedPhase::Loaded { .. })
    }
}

/// Phase of each of the two independent feeds.
#[derive(Debug, Clone, Default)]
pub struct FeedStatus {
    pub earthquakes: FeedPhase,
    pub fault_lines: FeedPhase,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feed_phase_transitions() {
        let mut status = FeedStatus::default();
        assert_eq!(status.earthquakes, FeedPhase::Loading);
        assert!(!status.earthquakes.is_loaded());

        status.earthquakes = FeedPhase::Loaded { features: 42 };
        assert!(status.earthquakes.is_loaded());

        status.fault_lines = FeedPhase::Failed("HTTP 503".to_string());
        assert!(!status.fault_lines.is_loaded());
    }
}
