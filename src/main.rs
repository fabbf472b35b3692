//! Skyfall headless entry point
//!
//! Runs the game loop at a simulated 60 fps with the autopilot at the
//! controls, then prints the final snapshot as JSON.
//!
//! Usage: `skyfall [settings.json] [seconds]`

use std::process::ExitCode;

use skyfall::{Game, GameError, Settings, autopilot};

/// Simulated presentation frame time
const FRAME_DT: f32 = 1.0 / 60.0;
/// Default run length when no duration is given
const DEFAULT_SECONDS: f32 = 60.0;
/// Autopilot drag speed (units per frame)
const AUTOPILOT_SPEED: f32 = 6.0;

fn run(settings_path: Option<&str>, seconds: f32) -> Result<(), GameError> {
    let settings = match settings_path {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    let mut game = Game::new(settings)?;
    log::info!("Skyfall (headless) starting, {seconds}s of play");

    let frames = (seconds / FRAME_DT).ceil() as u64;
    for frame in 0..frames {
        let delta = autopilot::steer(game.state(), AUTOPILOT_SPEED);
        game.queue_input(delta);
        game.update(FRAME_DT);

        if game.is_game_over() {
            log::info!("Ship lost at frame {frame}");
            break;
        }
    }

    let snapshot = game.snapshot();
    log::info!(
        "Finished: score {}, {} ticks, {:?}",
        snapshot.score,
        snapshot.time_ticks,
        snapshot.phase
    );
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let settings_path = args.first().map(String::as_str);
    let seconds = match args.get(1).map(|s| s.parse::<f32>()) {
        None => DEFAULT_SECONDS,
        Some(Ok(s)) if s.is_finite() && s > 0.0 => s,
        Some(_) => {
            eprintln!("usage: skyfall [settings.json] [seconds]");
            return ExitCode::FAILURE;
        }
    };

    match run(settings_path, seconds) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("skyfall: {e}");
            ExitCode::FAILURE
        }
    }
}
