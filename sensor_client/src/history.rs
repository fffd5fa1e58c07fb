//! Frame history.
//!
//! The feed samples at its own rate; displays may render faster and blend
//! between the two most recent frames.

use std::collections::VecDeque;

use sensor_shared::{gradient::Color, math::Vec3, simulator::Sample};
use serde::{Deserialize, Serialize};

/// One sampled reading plus its display color.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeedbackFrame {
    pub seq: u64,
    /// Seconds since the feed started.
    pub time: f64,
    pub sample: Sample,
    pub color: Color,
}

/// Bounded history of recent frames, oldest first.
#[derive(Default)]
pub struct FrameHistory {
    history: VecDeque<FeedbackFrame>,
    max: usize,
}

impl FrameHistory {
    pub fn new(max: usize) -> Self {
        Self {
            history: VecDeque::with_capacity(max),
            max,
        }
    }

    pub fn push(&mut self, frame: FeedbackFrame) {
        self.history.push_back(frame);
        while self.history.len() > self.max {
            self.history.pop_front();
        }
    }

    /// Returns the number of buffered frames.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Returns true if no frames are buffered.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn latest(&self) -> Option<&FeedbackFrame> {
        self.history.back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FeedbackFrame> {
        self.history.iter()
    }

    /// Largest force magnitude among buffered frames.
    pub fn peak_force(&self) -> Option<f32> {
        self.history
            .iter()
            .map(|f| f.sample.force_magnitude())
            .reduce(f32::max)
    }

    /// Blends the positions of the two most recent frames.
    ///
    /// `alpha` should be in $[0,1]$ where 0 = older frame, 1 = newer.
    pub fn interp_position(&self, alpha: f32) -> Option<Vec3> {
        if self.history.len() < 2 {
            return None;
        }
        let a = &self.history[self.history.len() - 2];
        let b = &self.history[self.history.len() - 1];
        Some(a.sample.position.lerp(b.sample.position, alpha))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(seq: u64, x: f32, force: f32) -> FeedbackFrame {
        FeedbackFrame {
            seq,
            time: seq as f64,
            sample: Sample {
                force: Vec3::new(force, 0.0, 0.0),
                position: Vec3::new(x, 0.0, 0.0),
                orientation: Vec3::ZERO,
            },
            color: Color::WHITE,
        }
    }

    #[test]
    fn evicts_oldest_past_capacity() {
        let mut h = FrameHistory::new(2);
        h.push(frame(0, 0.0, 1.0));
        h.push(frame(1, 1.0, 2.0));
        h.push(frame(2, 2.0, 3.0));
        assert_eq!(h.len(), 2);
        assert_eq!(h.iter().next().map(|f| f.seq), Some(1));
        assert_eq!(h.latest().map(|f| f.seq), Some(2));
    }

    #[test]
    fn interp_needs_two_frames() {
        let mut h = FrameHistory::new(4);
        assert!(h.is_empty());
        assert_eq!(h.interp_position(0.5), None);
        h.push(frame(0, 0.0, 0.0));
        assert_eq!(h.interp_position(0.5), None);
        h.push(frame(1, 4.0, 0.0));
        assert_eq!(h.interp_position(0.25), Some(Vec3::new(1.0, 0.0, 0.0)));
    }

    #[test]
    fn peak_force_tracks_max() {
        let mut h = FrameHistory::new(8);
        assert_eq!(h.peak_force(), None);
        h.push(frame(0, 0.0, 3.0));
        h.push(frame(1, 0.0, -7.0));
        h.push(frame(2, 0.0, 5.0));
        assert_eq!(h.peak_force(), Some(7.0));
    }
}
