//! Grid Snake entry point
//!
//! Runs a few games in demo mode without a window and logs how they went.
//! Pass a JSON settings file as the first argument to change the board.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use std::path::Path;

    use grid_snake::sim::{GameEvent, Outcome, Snapshot};
    use grid_snake::{Driver, Settings, TickObserver, autopilot};

    /// Games to play before exiting
    const DEMO_GAMES: u64 = 3;
    /// Give up on a game that runs this long
    const MAX_DEMO_TICKS: u64 = 200_000;

    /// Logs meals and results
    struct ProgressLog;

    impl TickObserver for ProgressLog {
        fn on_tick(&mut self, snapshot: &Snapshot<'_>, _outcome: Outcome, events: &[GameEvent]) {
            for event in events {
                if let GameEvent::FoodEaten { cell, score } = event {
                    log::debug!(
                        "Ate at ({}, {}), score {}, length {}",
                        cell.x,
                        cell.y,
                        score,
                        snapshot.tail.len() + 1
                    );
                }
            }
        }

        fn on_game_over(&mut self, score: u32, outcome: Outcome, rank: Option<usize>) {
            match rank {
                Some(rank) => log::info!("{:?} with score {} (rank {})", outcome, score, rank),
                None => log::info!("{:?} with score {}", outcome, score),
            }
        }
    }

    pub fn run() {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
        log::info!("Grid Snake (demo) starting...");

        let settings = match std::env::args().nth(1) {
            Some(path) => Settings::load(Path::new(&path)),
            None => Settings::default(),
        };

        let mut driver = match Driver::new(settings) {
            Ok(driver) => driver,
            Err(e) => {
                log::error!("Cannot start game: {}", e);
                std::process::exit(1);
            }
        };
        driver.add_observer(Box::new(ProgressLog));

        let dt = driver.settings().tick_interval_secs();
        for game in 1..=DEMO_GAMES {
            if game > 1 {
                if let Err(e) = driver.restart() {
                    log::error!("Cannot restart game: {}", e);
                    std::process::exit(1);
                }
            }

            while !driver.is_over() && driver.state().time_ticks < MAX_DEMO_TICKS {
                if let Some(heading) = autopilot::choose_heading(driver.state()) {
                    driver.steer(heading);
                }
                driver.update(dt);
            }

            if !driver.is_over() {
                log::warn!("Game {} stopped after {} ticks", game, MAX_DEMO_TICKS);
            }
        }

        if driver.highscores().is_empty() {
            log::info!("No game scored any points");
        }
        for (i, entry) in driver.highscores().entries.iter().enumerate() {
            log::info!(
                "#{} score {} in {} ticks ({:?})",
                i + 1,
                entry.score,
                entry.ticks,
                entry.outcome
            );
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    native::run();
}

#[cfg(target_arch = "wasm32")]
fn main() {}
