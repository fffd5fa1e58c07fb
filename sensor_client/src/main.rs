//! Standalone feed binary.
//!
//! Usage:
//!   cargo run -p sensor_client -- [--config feed.json] [--seed 42] [--rate-hz 60] [--duration 10]
//!
//! Samples the simulator at a fixed rate and logs each frame. Without
//! `--duration` the feed runs until interrupted.

use std::env;
use std::time::Duration;

use anyhow::Context;
use sensor_client::SensorFeed;
use sensor_shared::config::FeedConfig;
use tracing::info;

struct Args {
    cfg: FeedConfig,
    duration: Option<f64>,
}

fn parse_args(args: &[String]) -> anyhow::Result<Args> {
    let mut cfg = match args.iter().position(|a| a == "--config") {
        Some(i) if i + 1 < args.len() => {
            let path = &args[i + 1];
            let text = std::fs::read_to_string(path).with_context(|| format!("read {}", path))?;
            FeedConfig::from_json_str(&text).with_context(|| format!("parse {}", path))?
        }
        _ => FeedConfig::default(),
    };

    let mut duration = None;
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" if i + 1 < args.len() => {
                cfg.seed = Some(args[i + 1].parse().context("parse --seed")?);
                i += 2;
            }
            "--rate-hz" if i + 1 < args.len() => {
                cfg.rate_hz = args[i + 1].parse().context("parse --rate-hz")?;
                i += 2;
            }
            "--duration" if i + 1 < args.len() => {
                duration = Some(args[i + 1].parse().context("parse --duration")?);
                i += 2;
            }
            _ => i += 1,
        }
    }
    Ok(Args { cfg, duration })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    let Args { cfg, duration } = parse_args(&args)?;
    info!(rate_hz = cfg.rate_hz, seed = ?cfg.seed, ?duration, "Starting feed");

    let mut feed = SensorFeed::from_config(&cfg).context("create feed")?;

    let rate_hz = cfg.rate_hz.max(1);
    let tick_interval = Duration::from_secs_f32(1.0 / rate_hz as f32);
    let mut next_tick = tokio::time::Instant::now();

    loop {
        let frame = feed.tick()?;

        // Log about once per second.
        if frame.seq % rate_hz as u64 == 0 {
            let s = frame.sample;
            info!(
                t = frame.time,
                force = s.force_magnitude(),
                pos = ?s.position.to_array(),
                rot = ?s.orientation.to_array(),
                color = %frame.color.to_hex(),
                "Frame"
            );
        }

        if duration.is_some_and(|d| frame.time >= d) {
            break;
        }

        next_tick += tick_interval;
        tokio::time::sleep_until(next_tick).await;
    }

    let sim = feed.simulator();
    info!(
        frames = feed.frames_produced(),
        transitions = sim.transitions_completed(),
        peak_force = ?feed.frames.peak_force(),
        "Feed finished"
    );
    Ok(())
}
