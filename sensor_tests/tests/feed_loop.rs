//! Feed driven by a real clock, the way the `feed` binary runs it.

use std::time::Duration;

use sensor_client::SensorFeed;
use sensor_shared::{config::FeedConfig, gradient::Color};
use sensor_tests::offset_bounds;

fn config() -> FeedConfig {
    FeedConfig {
        bounds: offset_bounds(),
        seed: Some(2024),
        rate_hz: 200,
        history_len: 16,
        ..FeedConfig::default()
    }
}

#[tokio::test]
async fn feed_runs_at_fixed_rate() -> anyhow::Result<()> {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .with_test_writer()
        .try_init();

    let cfg = config();
    let mut feed = SensorFeed::from_config(&cfg)?;
    let tick_interval = Duration::from_millis(5);
    let mut next_tick = tokio::time::Instant::now();

    let mut last_time = -1.0;
    for _ in 0..40 {
        let frame = feed.tick()?;
        assert!(frame.time >= last_time, "clock went backwards");
        last_time = frame.time;

        let b = cfg.bounds;
        assert!(b.contains_position(frame.sample.position));
        assert!(b.contains_orientation(frame.sample.orientation));
        assert!(frame.sample.force_magnitude() <= b.max_force_magnitude * 1.0001);

        next_tick += tick_interval;
        tokio::time::sleep_until(next_tick).await;
    }

    assert_eq!(feed.frames_produced(), 40);
    assert_eq!(feed.frames.len(), cfg.history_len);
    assert!(feed.frames.interp_position(0.5).is_some());
    assert!(last_time > 0.0);
    Ok(())
}

#[test]
fn colors_follow_force_magnitude() -> anyhow::Result<()> {
    let cfg = FeedConfig {
        low_color: Color::rgb(0.0, 0.0, 1.0),
        high_color: Color::rgb(1.0, 0.0, 0.0),
        ..config()
    };
    let max = cfg.bounds.max_force_magnitude;
    let mut feed = SensorFeed::from_config(&cfg)?;

    for i in 0..100 {
        let frame = feed.tick_at(i as f64 * 0.05)?;
        let expected = (frame.sample.force_magnitude() / max).clamp(0.0, 1.0);
        assert!((frame.color.r - expected).abs() < 1e-4);
        assert!((frame.color.b - (1.0 - expected)).abs() < 1e-4);
        assert_eq!(frame.color.g, 0.0);
    }
    Ok(())
}

#[test]
fn seeded_feeds_agree() -> anyhow::Result<()> {
    let mut a = SensorFeed::from_config(&config())?;
    let mut b = SensorFeed::from_config(&config())?;
    for i in 0..60 {
        let now = i as f64 / 30.0;
        assert_eq!(a.tick_at(now)?, b.tick_at(now)?);
    }
    Ok(())
}
