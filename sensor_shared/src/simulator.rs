//! Transition simulator.
//!
//! Produces smoothly varying force, position, and orientation readings by
//! interpolating from a committed "current" value toward a randomly drawn
//! target over a randomly drawn duration. All three channels share one
//! transition timer.
//!
//! Determinism notes:
//! - Time only advances inside [`TransitionSimulator::sample`], from the
//!   caller-supplied timestamp. There is no hidden clock.
//! - Given the same seed and the same timestamps, output is identical.
//! - Draw order is fixed: at construction force, duration, position,
//!   orientation; at each completion duration, force, position, orientation.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::{
    config::SimulationBounds,
    error::SimError,
    math::Vec3,
    random::{RandomSource, SeededRandom},
};

/// One interpolated reading.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Sample {
    pub force: Vec3,
    pub position: Vec3,
    pub orientation: Vec3,
}

impl Sample {
    pub fn force_magnitude(&self) -> f32 {
        self.force.magnitude()
    }
}

/// A value moving from `current` toward `target`.
#[derive(Debug, Clone, Copy, Default)]
struct Channel {
    current: Vec3,
    target: Vec3,
}

impl Channel {
    fn starting_at(current: Vec3) -> Self {
        Self {
            current,
            target: current,
        }
    }

    fn at(&self, t: f32) -> Vec3 {
        self.current.lerp(self.target, t)
    }

    fn commit(&mut self) {
        self.current = self.target;
    }
}

/// Draws a force with a uniformly random direction scaled by a magnitude
/// drawn uniformly from `[0, max_magnitude]`.
///
/// If the three direction draws are all zero the force is zero for that
/// cycle.
pub fn generate_force<R: RandomSource + ?Sized>(rng: &mut R, max_magnitude: f32) -> Vec3 {
    let mut dir = Vec3::new(
        rng.uniform(-1.0, 1.0),
        rng.uniform(-1.0, 1.0),
        rng.uniform(-1.0, 1.0),
    );
    dir.normalize();
    dir.scale(rng.uniform(0.0, max_magnitude))
}

/// Draws each component independently from `[min_i, max_i]`.
pub fn generate_within<R: RandomSource + ?Sized>(rng: &mut R, min: Vec3, max: Vec3) -> Vec3 {
    Vec3::new(
        rng.uniform(min.x, max.x),
        rng.uniform(min.y, max.y),
        rng.uniform(min.z, max.z),
    )
}

/// Target-seeking force/position/orientation generator.
///
/// Not internally synchronized; wrap it in a lock if several threads sample
/// the same instance.
#[derive(Debug)]
pub struct TransitionSimulator<R: RandomSource = SeededRandom> {
    bounds: SimulationBounds,
    rng: R,

    force: Channel,
    position: Channel,
    orientation: Channel,

    /// Sample time at which the in-flight transition started.
    transition_start: f64,
    transition_duration: f64,
    last_sample_time: f64,
    transitions_completed: u64,
}

impl TransitionSimulator<SeededRandom> {
    /// Convenience constructor over a seeded `StdRng`.
    pub fn with_seed(bounds: SimulationBounds, seed: u64) -> Result<Self, SimError> {
        Self::new(bounds, SeededRandom::from_seed(seed))
    }
}

impl<R: RandomSource> TransitionSimulator<R> {
    /// Validates `bounds`, draws the first targets, and starts the clock at 0.
    ///
    /// Current values start at the zero vector. Position and orientation
    /// start at zero clamped into their bounds, so envelopes that exclude
    /// the origin still never report an out-of-bounds reading.
    pub fn new(bounds: SimulationBounds, mut rng: R) -> Result<Self, SimError> {
        bounds.validate()?;

        let mut force = Channel::starting_at(Vec3::ZERO);
        let mut position =
            Channel::starting_at(Vec3::ZERO.clamp(bounds.min_position, bounds.max_position));
        let mut orientation = Channel::starting_at(
            Vec3::ZERO.clamp(bounds.min_orientation, bounds.max_orientation),
        );

        force.target = generate_force(&mut rng, bounds.max_force_magnitude);
        let transition_duration = draw_duration(&mut rng, &bounds);
        position.target = generate_within(&mut rng, bounds.min_position, bounds.max_position);
        orientation.target =
            generate_within(&mut rng, bounds.min_orientation, bounds.max_orientation);

        debug!(
            duration = transition_duration,
            target_force = force.target.magnitude(),
            "Simulator started"
        );

        Ok(Self {
            bounds,
            rng,
            force,
            position,
            orientation,
            transition_start: 0.0,
            transition_duration,
            last_sample_time: 0.0,
            transitions_completed: 0,
        })
    }

    /// Advances the clock to `now` (seconds since start) and returns the
    /// interpolated reading.
    ///
    /// Fails with [`SimError::InvalidTime`] if `now` is earlier than the
    /// previous call's timestamp (or not finite); state is left untouched.
    pub fn sample(&mut self, now: f64) -> Result<Sample, SimError> {
        if !now.is_finite() || now < self.last_sample_time {
            return Err(SimError::InvalidTime {
                previous: self.last_sample_time,
                requested: now,
            });
        }
        self.last_sample_time = now;

        if self.elapsed_in_transition() >= self.transition_duration {
            self.complete_transition(now);
        }

        let t = self.progress();
        trace!(now, t, "Sample");

        // Interpolation rounding can land an ulp outside the envelope.
        let b = &self.bounds;
        Ok(Sample {
            force: self.force.at(t),
            position: self.position.at(t).clamp(b.min_position, b.max_position),
            orientation: self
                .orientation
                .at(t)
                .clamp(b.min_orientation, b.max_orientation),
        })
    }

    fn complete_transition(&mut self, now: f64) {
        self.force.commit();
        self.position.commit();
        self.orientation.commit();

        self.transition_duration = draw_duration(&mut self.rng, &self.bounds);
        self.force.target = generate_force(&mut self.rng, self.bounds.max_force_magnitude);
        self.position.target =
            generate_within(&mut self.rng, self.bounds.min_position, self.bounds.max_position);
        self.orientation.target = generate_within(
            &mut self.rng,
            self.bounds.min_orientation,
            self.bounds.max_orientation,
        );

        self.transition_start = now;
        self.transitions_completed += 1;

        debug!(
            at = now,
            completed = self.transitions_completed,
            duration = self.transition_duration,
            target_force = self.force.target.magnitude(),
            "Transition complete"
        );
    }

    /// Seconds spent in the in-flight transition as of the last sample.
    pub fn elapsed_in_transition(&self) -> f64 {
        self.last_sample_time - self.transition_start
    }

    pub fn transition_duration(&self) -> f64 {
        self.transition_duration
    }

    /// Interpolation fraction as of the last sample, in `[0, 1]`.
    ///
    /// Below 1 in exact arithmetic; the `f32` cast may round up to 1.0.
    pub fn progress(&self) -> f32 {
        (self.elapsed_in_transition() / self.transition_duration) as f32
    }

    pub fn last_sample_time(&self) -> f64 {
        self.last_sample_time
    }

    pub fn transitions_completed(&self) -> u64 {
        self.transitions_completed
    }

    pub fn bounds(&self) -> &SimulationBounds {
        &self.bounds
    }

    /// Values the in-flight transition started from.
    pub fn origins(&self) -> Sample {
        Sample {
            force: self.force.current,
            position: self.position.current,
            orientation: self.orientation.current,
        }
    }

    /// Values the in-flight transition is heading toward.
    pub fn targets(&self) -> Sample {
        Sample {
            force: self.force.target,
            position: self.position.target,
            orientation: self.orientation.target,
        }
    }
}

fn draw_duration<R: RandomSource + ?Sized>(rng: &mut R, bounds: &SimulationBounds) -> f64 {
    rng.uniform(bounds.min_transition_time, bounds.max_transition_time) as f64
}
