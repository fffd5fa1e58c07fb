//! Shared fixtures for the integration tests.

use sensor_shared::{config::SimulationBounds, math::Vec3};

/// Tolerance for float comparisons against configured bounds.
pub const EPS: f32 = 1e-4;

/// Symmetric envelope around the origin with a fixed one-second transition.
pub fn example_bounds() -> SimulationBounds {
    SimulationBounds {
        min_position: Vec3::splat(-10.0),
        max_position: Vec3::splat(10.0),
        min_orientation: Vec3::splat(-45.0),
        max_orientation: Vec3::splat(45.0),
        max_force_magnitude: 100.0,
        min_transition_time: 1.0,
        max_transition_time: 1.0,
    }
}

/// Asymmetric envelope that excludes the origin, with variable durations.
pub fn offset_bounds() -> SimulationBounds {
    SimulationBounds {
        min_position: Vec3::new(1.0, -3.0, 20.0),
        max_position: Vec3::new(2.0, -1.0, 25.0),
        min_orientation: Vec3::new(0.0, 90.0, -10.0),
        max_orientation: Vec3::new(360.0, 90.0, 10.0),
        max_force_magnitude: 5.0,
        min_transition_time: 0.2,
        max_transition_time: 1.5,
    }
}

/// Monotonic timestamps `0, step, 2*step, ...` (`count` of them).
pub fn timeline(step: f64, count: usize) -> impl Iterator<Item = f64> {
    (0..count).map(move |i| i as f64 * step)
}
