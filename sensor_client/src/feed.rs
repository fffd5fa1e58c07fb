//! Feed driver.
//!
//! Owns a simulator and supplies it with a monotonic clock:
//! - `tick()` samples at the time elapsed since the feed was created
//! - `tick_at()` samples at an explicit time (tests, replays)
//!
//! Each sample is colored by force magnitude and kept in a bounded history.

use anyhow::Context;
use sensor_shared::{
    config::FeedConfig,
    gradient::{force_color, Color},
    random::{RandomSource, SeededRandom},
    simulator::TransitionSimulator,
};
use tokio::time::Instant;
use tracing::{debug, info};

use crate::history::{FeedbackFrame, FrameHistory};

/// High-level feedback feed.
pub struct SensorFeed<R: RandomSource = SeededRandom> {
    sim: TransitionSimulator<R>,
    low_color: Color,
    high_color: Color,
    pub frames: FrameHistory,

    origin: Instant,
    seq: u64,
}

impl SensorFeed<SeededRandom> {
    /// Builds a feed from config, seeding from entropy if no seed is set.
    pub fn from_config(cfg: &FeedConfig) -> anyhow::Result<Self> {
        let rng = match cfg.seed {
            Some(seed) => SeededRandom::from_seed(seed),
            None => SeededRandom::from_entropy(),
        };
        let sim = TransitionSimulator::new(cfg.bounds, rng).context("create simulator")?;
        info!(
            seed = ?cfg.seed,
            max_force = cfg.bounds.max_force_magnitude,
            history = cfg.history_len,
            "Feed created"
        );
        Ok(Self::new(sim, cfg.low_color, cfg.high_color, cfg.history_len))
    }
}

impl<R: RandomSource> SensorFeed<R> {
    pub fn new(
        sim: TransitionSimulator<R>,
        low_color: Color,
        high_color: Color,
        history_len: usize,
    ) -> Self {
        Self {
            sim,
            low_color,
            high_color,
            frames: FrameHistory::new(history_len),
            origin: Instant::now(),
            seq: 0,
        }
    }

    /// Samples at the time elapsed since the feed was created.
    pub fn tick(&mut self) -> anyhow::Result<FeedbackFrame> {
        let now = self.origin.elapsed().as_secs_f64();
        self.tick_at(now)
    }

    /// Samples at `now` seconds since start.
    pub fn tick_at(&mut self, now: f64) -> anyhow::Result<FeedbackFrame> {
        let sample = self
            .sim
            .sample(now)
            .with_context(|| format!("sample at {now:.3}s"))?;

        let color = force_color(
            sample.force_magnitude(),
            self.sim.bounds().max_force_magnitude,
            self.low_color,
            self.high_color,
        );
        let frame = FeedbackFrame {
            seq: self.seq,
            time: now,
            sample,
            color,
        };
        self.seq += 1;
        self.frames.push(frame);

        debug!(seq = frame.seq, t = self.sim.progress(), "Frame");
        Ok(frame)
    }

    pub fn simulator(&self) -> &TransitionSimulator<R> {
        &self.sim
    }

    /// Number of frames produced so far.
    pub fn frames_produced(&self) -> u64 {
        self.seq
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sensor_shared::{config::SimulationBounds, error::SimError};

    fn seeded_config() -> FeedConfig {
        FeedConfig {
            seed: Some(17),
            history_len: 4,
            ..FeedConfig::default()
        }
    }

    #[test]
    fn frames_are_numbered_and_bounded() -> anyhow::Result<()> {
        let mut feed = SensorFeed::from_config(&seeded_config())?;
        for i in 0..10 {
            let frame = feed.tick_at(i as f64 * 0.1)?;
            assert_eq!(frame.seq, i);
        }
        assert_eq!(feed.frames_produced(), 10);
        assert_eq!(feed.frames.len(), 4);
        Ok(())
    }

    #[test]
    fn first_frame_is_low_color() -> anyhow::Result<()> {
        let cfg = seeded_config();
        let mut feed = SensorFeed::from_config(&cfg)?;
        let frame = feed.tick_at(0.0)?;
        assert_eq!(frame.color, cfg.low_color);
        Ok(())
    }

    #[test]
    fn backwards_time_surfaces_sim_error() -> anyhow::Result<()> {
        let mut feed = SensorFeed::from_config(&seeded_config())?;
        feed.tick_at(1.0)?;
        let err = feed.tick_at(0.5).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<SimError>(),
            Some(SimError::InvalidTime { .. })
        ));
        assert_eq!(feed.frames.len(), 1);
        Ok(())
    }

    #[test]
    fn invalid_bounds_rejected() {
        let cfg = FeedConfig {
            bounds: SimulationBounds {
                max_force_magnitude: -1.0,
                ..SimulationBounds::default()
            },
            ..seeded_config()
        };
        assert!(SensorFeed::from_config(&cfg).is_err());
    }
}
