//! `sensor_shared`
//!
//! Shared libraries for the simulated force-sensor feedback.
//!
//! Design goals:
//! - Deterministic given a seed and a sequence of timestamps.
//! - No hidden clock: time is always passed in by the caller.
//! - Traits for abstraction and dependency injection (randomness).
//! - No `unsafe`.

pub mod config;
pub mod error;
pub mod gradient;
pub mod math;
pub mod random;
pub mod simulator;

pub mod prelude {
    //! Commonly used exports.

    pub use crate::config::*;
    pub use crate::error::*;
    pub use crate::gradient::*;
    pub use crate::math::*;
    pub use crate::random::*;
    pub use crate::simulator::*;
}
