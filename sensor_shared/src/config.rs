//! Configuration system.
//!
//! Loads simulation bounds and feed settings from JSON strings (file IO left
//! to app).

use serde::{Deserialize, Serialize};

use crate::{error::SimError, gradient::Color, math::Vec3};

/// Envelope constraining every target the simulator draws.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationBounds {
    pub min_position: Vec3,
    pub max_position: Vec3,
    pub min_orientation: Vec3,
    pub max_orientation: Vec3,
    /// Upper bound on the magnitude of a drawn target force.
    pub max_force_magnitude: f32,
    /// Shortest transition, in seconds.
    pub min_transition_time: f32,
    /// Longest transition, in seconds.
    pub max_transition_time: f32,
}

impl Default for SimulationBounds {
    fn default() -> Self {
        Self {
            min_position: Vec3::splat(-10.0),
            max_position: Vec3::splat(10.0),
            min_orientation: Vec3::splat(-180.0),
            max_orientation: Vec3::splat(180.0),
            max_force_magnitude: 100.0,
            min_transition_time: 1.0,
            max_transition_time: 1.0,
        }
    }
}

impl SimulationBounds {
    /// Checks that every min is <= its max and every time/magnitude bound is
    /// positive and finite.
    pub fn validate(&self) -> Result<(), SimError> {
        check_range("position", self.min_position, self.max_position)?;
        check_range("orientation", self.min_orientation, self.max_orientation)?;

        if !(self.max_force_magnitude.is_finite() && self.max_force_magnitude > 0.0) {
            return Err(SimError::config(format!(
                "max_force_magnitude must be > 0, got {}",
                self.max_force_magnitude
            )));
        }
        for (name, v) in [
            ("min_transition_time", self.min_transition_time),
            ("max_transition_time", self.max_transition_time),
        ] {
            if !(v.is_finite() && v > 0.0) {
                return Err(SimError::config(format!("{} must be > 0, got {}", name, v)));
            }
        }
        if self.min_transition_time > self.max_transition_time {
            return Err(SimError::config(format!(
                "min_transition_time {} exceeds max_transition_time {}",
                self.min_transition_time, self.max_transition_time
            )));
        }
        if !(self.max_transition_time - self.min_transition_time).is_finite() {
            return Err(SimError::config("transition time range is too wide"));
        }
        Ok(())
    }

    /// Whether a position lies inside the configured envelope.
    pub fn contains_position(&self, p: Vec3) -> bool {
        within(p, self.min_position, self.max_position)
    }

    /// Whether an orientation lies inside the configured envelope.
    pub fn contains_orientation(&self, o: Vec3) -> bool {
        within(o, self.min_orientation, self.max_orientation)
    }
}

fn check_range(name: &str, min: Vec3, max: Vec3) -> Result<(), SimError> {
    if !(min.is_finite() && max.is_finite()) {
        return Err(SimError::config(format!("{} bounds must be finite", name)));
    }
    for (axis, lo, hi) in [("x", min.x, max.x), ("y", min.y, max.y), ("z", min.z, max.z)] {
        if lo > hi {
            return Err(SimError::config(format!(
                "min_{name}.{axis} ({lo}) exceeds max_{name}.{axis} ({hi})"
            )));
        }
        if !(hi - lo).is_finite() {
            return Err(SimError::config(format!(
                "{name}.{axis} range [{lo}, {hi}] is too wide"
            )));
        }
    }
    Ok(())
}

fn within(v: Vec3, min: Vec3, max: Vec3) -> bool {
    (min.x..=max.x).contains(&v.x) && (min.y..=max.y).contains(&v.y) && (min.z..=max.z).contains(&v.z)
}

/// Root configuration for a feed process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedConfig {
    #[serde(default)]
    pub bounds: SimulationBounds,
    /// Fixed seed for reproducible runs; entropy when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Sampling rate of the feed loop.
    #[serde(default = "default_rate_hz")]
    pub rate_hz: u32,
    /// Color shown at zero force.
    #[serde(default = "default_low_color")]
    pub low_color: Color,
    /// Color shown at `max_force_magnitude`.
    #[serde(default = "default_high_color")]
    pub high_color: Color,
    /// Number of frames retained by the feed.
    #[serde(default = "default_history_len")]
    pub history_len: usize,
}

fn default_rate_hz() -> u32 {
    60
}

fn default_low_color() -> Color {
    Color::GREEN
}

fn default_high_color() -> Color {
    Color::RED
}

fn default_history_len() -> usize {
    120
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            bounds: SimulationBounds::default(),
            seed: None,
            rate_hz: default_rate_hz(),
            low_color: default_low_color(),
            high_color: default_high_color(),
            history_len: default_history_len(),
        }
    }
}

impl FeedConfig {
    /// Parses config from JSON.
    pub fn from_json_str(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }
}
