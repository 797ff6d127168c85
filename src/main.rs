//! Pong Core entry point
//!
//! Headless runner: plays a session with idle paddles for a while, logging
//! score changes, then prints the final frame as JSON.
//!
//! Usage: `pong-core [config.json] [seconds] [seed]`

use std::time::{Duration, Instant};

use pong_core::Config;
use pong_core::sim::{FixedStep, GameEvent, GameState, TickInput, tick};

/// Frame pacing for the render side (~60 Hz)
const FRAME_TIME: Duration = Duration::from_millis(16);

fn main() {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let config = match args.next() {
        Some(path) if path != "-" => Config::load_or_default(path),
        _ => Config::default(),
    };
    let seconds: f32 = args.next().and_then(|s| s.parse().ok()).unwrap_or(5.0);
    let seed: u64 = args
        .next()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(rand::random);

    let mut state = GameState::new(config, seed);
    log::info!("Pong Core (native) starting, seed {}, {}s", state.seed, seconds);
    let mut stepper = FixedStep::new();
    let input = TickInput::default();

    let start = Instant::now();
    let mut last = start;
    while start.elapsed().as_secs_f32() < seconds {
        let now = Instant::now();
        let frame_dt = (now - last).as_secs_f32();
        last = now;

        for _ in 0..stepper.advance(frame_dt) {
            for event in tick(&mut state, &input, pong_core::consts::SIM_DT) {
                if let GameEvent::ScoreChanged { player, score } = event {
                    println!("Player {:?}: {}", player, score);
                }
            }
        }

        std::thread::sleep(FRAME_TIME);
    }

    let snapshot = state.snapshot();
    match serde_json::to_string_pretty(&snapshot) {
        Ok(json) => println!("{}", json),
        Err(e) => log::error!("Failed to encode final frame: {}", e),
    }
}
