//! Dino Run entry point
//!
//! Sets up the terminal, runs the fixed-rate game loop and records scores.

use std::io;
use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use dino_run::consts::DEFAULT_PLAY_AREA_WIDTH;
use dino_run::platform::{InputSource, KeyAction, KeyMap, Terminal};
use dino_run::render::{draw_frame, draw_game_over};
use dino_run::sim::{InputAction, Simulation, TickResult};
use dino_run::{HighScores, Settings};

fn main() -> io::Result<()> {
    env_logger::init();
    log::info!("Dino Run starting...");

    let settings = Settings::load();
    let mut scores = HighScores::load(&settings.highscores_path);

    let mut term = Terminal::new(KeyMap::from_settings(&settings))?;
    let width = match term.width() {
        0 => DEFAULT_PLAY_AREA_WIDTH,
        cols => i32::from(cols),
    };
    let level = settings
        .level(width)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidInput, err))?;

    let seed = settings.seed.unwrap_or_else(clock_seed);
    log::info!("Game initialized with seed: {}", seed);
    let mut sim = Simulation::with_seed(level, seed);

    let frame = Duration::from_millis(settings.frame_millis());

    loop {
        let frame_start = Instant::now();

        let key = term.poll()?;
        if key == Some(KeyAction::Quit) {
            break;
        }
        let mut input = key.and_then(KeyAction::as_input);
        if input == Some(InputAction::Jump)
            && !settings.allow_air_jump
            && !sim.actor().is_grounded()
        {
            input = None;
        }

        let result = sim.step(input);
        draw_frame(&sim, scores.top_score(), &mut term)?;

        if result == TickResult::Collided {
            let rank = scores.add_score(sim.score(), sim.level().number, sim.ticks());
            if rank.is_some() {
                if let Err(err) = scores.save_to(&settings.highscores_path) {
                    log::warn!("Could not save high scores: {err}");
                }
            }
            draw_game_over(&mut term, sim.score(), rank)?;

            match term.wait()? {
                KeyAction::Restart => sim.reset(),
                _ => break,
            }
            continue;
        }

        let elapsed = frame_start.elapsed();
        if elapsed < frame {
            thread::sleep(frame - elapsed);
        }
    }

    drop(term);
    log::info!("Dino Run exiting");
    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}
