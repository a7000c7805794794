//! Async GeoJSON feed loading.
//!
//! Uses channel-based communication to bridge async fetches with egui's
//! synchronous update loop.

mod channel;

pub use channel::{FeedChannel, FeedKind, FeedResult};
