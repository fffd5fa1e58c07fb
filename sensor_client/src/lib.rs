//! `sensor_client`
//!
//! Client-side systems:
//! - Fixed-rate sampling of the transition simulator from a monotonic clock
//! - Force-to-color mapping per frame
//! - Bounded frame history for display interpolation

pub mod feed;
pub mod history;

pub use feed::SensorFeed;
