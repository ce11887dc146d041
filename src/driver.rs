//! Game driver
//!
//! Paces the simulation on a fixed interval, forwards input, keeps the
//! leaderboard and tells observers what happened after every tick.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::consts::MAX_SUBSTEPS;
use crate::error::ConfigError;
use crate::highscores::HighScores;
use crate::settings::Settings;
use crate::sim::{GameEvent, GameState, Heading, Outcome, Snapshot, tick};

/// Receives the game's progress; the renderer and score displays hang here
pub trait TickObserver {
    /// Called after every tick, including the one that ends the game
    fn on_tick(&mut self, snapshot: &Snapshot<'_>, outcome: Outcome, events: &[GameEvent]);

    /// Called once per game with the final score and leaderboard rank
    fn on_game_over(&mut self, _score: u32, _outcome: Outcome, _rank: Option<usize>) {}
}

/// Runs games one after another
pub struct Driver {
    settings: Settings,
    state: GameState,
    highscores: HighScores,
    observers: Vec<Box<dyn TickObserver>>,
    /// Time not yet consumed by ticks (seconds)
    accumulator: f32,
    /// Source of per-game seeds
    seeds: Pcg32,
    games_started: u64,
}

impl Driver {
    pub fn new(settings: Settings) -> Result<Self, ConfigError> {
        let base_seed = settings.seed.unwrap_or_else(rand::random);
        let mut seeds = Pcg32::seed_from_u64(base_seed);
        let state = GameState::new(&settings, seeds.random())?;
        Ok(Self {
            settings,
            state,
            highscores: HighScores::new(),
            observers: Vec::new(),
            accumulator: 0.0,
            seeds,
            games_started: 1,
        })
    }

    pub fn add_observer(&mut self, observer: Box<dyn TickObserver>) {
        self.observers.push(observer);
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn highscores(&self) -> &HighScores {
        &self.highscores
    }

    pub fn games_started(&self) -> u64 {
        self.games_started
    }

    pub fn is_over(&self) -> bool {
        !self.state.phase.is_running()
    }

    /// Buffer a heading for the next scheduled tick
    pub fn steer(&mut self, heading: Heading) {
        self.state.request_heading(heading);
    }

    /// Handle a direction key press.
    ///
    /// With `tick_on_input` the game steps right away and the interval timer
    /// starts over, so quick presses are never lost between ticks.
    pub fn request_heading(&mut self, heading: Heading) -> Option<Outcome> {
        self.steer(heading);
        if !self.settings.tick_on_input || self.is_over() {
            return None;
        }
        self.accumulator = 0.0;
        Some(self.step())
    }

    /// Run the ticks that fit into `dt` seconds.
    ///
    /// Returns the terminal outcome if the game ended during this call.
    pub fn update(&mut self, dt: f32) -> Option<Outcome> {
        if self.is_over() {
            return None;
        }

        let interval = self.settings.tick_interval_secs();
        self.accumulator += dt;

        let mut substeps = 0;
        while self.accumulator >= interval && substeps < MAX_SUBSTEPS {
            self.accumulator -= interval;
            substeps += 1;

            let outcome = self.step();
            if outcome.is_terminal() {
                self.accumulator = 0.0;
                return Some(outcome);
            }
        }

        // Drop time we could not catch up on
        if substeps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(interval);
        }
        None
    }

    /// Run exactly one tick and notify observers
    pub fn step(&mut self) -> Outcome {
        let was_running = self.state.phase.is_running();
        let outcome = tick(&mut self.state);
        let events = self.state.take_events();

        let snapshot = self.state.snapshot();
        for observer in self.observers.iter_mut() {
            observer.on_tick(&snapshot, outcome, &events);
        }

        if was_running && outcome.is_terminal() {
            self.finish(outcome);
        }
        outcome
    }

    fn finish(&mut self, outcome: Outcome) {
        let score = self.state.score();
        if self.highscores.potential_rank(score) == Some(1) {
            log::info!(
                "New highscore: {} (previous {})",
                score,
                self.highscores.top_score().unwrap_or(0)
            );
        }
        let rank = self
            .highscores
            .add_score(score, outcome, self.state.time_ticks);

        for observer in self.observers.iter_mut() {
            observer.on_game_over(score, outcome, rank);
        }
    }

    /// Throw away the current game and start a new one
    pub fn restart(&mut self) -> Result<(), ConfigError> {
        self.state = GameState::new(&self.settings, self.seeds.random())?;
        self.accumulator = 0.0;
        self.games_started += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::sim::{Cell, CollisionReason, Food};

    #[derive(Default)]
    struct Recorded {
        ticks: usize,
        scores: Vec<u32>,
        game_overs: Vec<(u32, Outcome, Option<usize>)>,
    }

    struct Recorder(Rc<RefCell<Recorded>>);

    impl TickObserver for Recorder {
        fn on_tick(&mut self, snapshot: &Snapshot<'_>, _outcome: Outcome, _events: &[GameEvent]) {
            let mut r = self.0.borrow_mut();
            r.ticks += 1;
            r.scores.push(snapshot.score);
        }

        fn on_game_over(&mut self, score: u32, outcome: Outcome, rank: Option<usize>) {
            self.0.borrow_mut().game_overs.push((score, outcome, rank));
        }
    }

    fn small_settings() -> Settings {
        Settings {
            width: 10,
            height: 10,
            initial_length: 3,
            start: Some((5, 5)),
            tick_interval_ms: 100,
            seed: Some(77),
            ..Default::default()
        }
    }

    /// Driver with both food cells moved out of the snake's row
    fn driver_with_recorder(settings: Settings) -> (Driver, Rc<RefCell<Recorded>>) {
        let mut driver = Driver::new(settings).unwrap();
        driver.state.food = Food::from_cells([Cell::new(0, 0), Cell::new(0, 9)]);
        let recorded = Rc::new(RefCell::new(Recorded::default()));
        driver.add_observer(Box::new(Recorder(recorded.clone())));
        (driver, recorded)
    }

    #[test]
    fn test_update_paces_ticks() {
        let (mut driver, recorded) = driver_with_recorder(small_settings());

        assert_eq!(driver.update(0.05), None);
        assert_eq!(recorded.borrow().ticks, 0);
        assert_eq!(driver.update(0.06), None);
        assert_eq!(recorded.borrow().ticks, 1);
        assert_eq!(driver.state().snake.head(), Cell::new(6, 5));
        assert_eq!(driver.update(0.2), None);
        assert_eq!(recorded.borrow().ticks, 3);
        assert_eq!(recorded.borrow().scores, vec![0, 0, 0]);
    }

    #[test]
    fn test_game_over_reported_once() {
        let (mut driver, recorded) = driver_with_recorder(small_settings());

        // Head reaches x = 9 after 4 ticks and leaves the board on the 5th
        let outcome = driver.update(0.1 * 5.0 + 0.01);
        assert_eq!(outcome, Some(Outcome::Collision(CollisionReason::OutOfBounds)));
        assert!(driver.is_over());
        assert_eq!(driver.update(1.0), None);

        let r = recorded.borrow();
        assert_eq!(r.ticks, 5);
        assert_eq!(
            r.game_overs,
            vec![(0, Outcome::Collision(CollisionReason::OutOfBounds), None)]
        );
    }

    #[test]
    fn test_input_ticks_immediately() {
        let (mut driver, recorded) = driver_with_recorder(small_settings());
        driver.update(0.09);

        assert_eq!(driver.request_heading(Heading::Up), Some(Outcome::Continue));
        assert_eq!(driver.state().snake.head(), Cell::new(5, 4));
        assert_eq!(recorded.borrow().ticks, 1);

        // Timer restarted, so the earlier 0.09s no longer counts
        driver.update(0.09);
        assert_eq!(recorded.borrow().ticks, 1);
    }

    #[test]
    fn test_input_without_immediate_tick() {
        let settings = Settings {
            tick_on_input: false,
            ..small_settings()
        };
        let (mut driver, recorded) = driver_with_recorder(settings);

        assert_eq!(driver.request_heading(Heading::Down), None);
        assert_eq!(recorded.borrow().ticks, 0);
        driver.update(0.1);
        assert_eq!(driver.state().snake.head(), Cell::new(5, 6));
    }

    #[test]
    fn test_restart_uses_new_seed() {
        let (mut driver, _) = driver_with_recorder(small_settings());
        let first_seed = driver.state().seed;
        driver.update(1.0);
        assert!(driver.is_over());

        driver.restart().unwrap();
        assert!(!driver.is_over());
        assert_ne!(driver.state().seed, first_seed);
        assert_eq!(driver.games_started(), 2);
        assert_eq!(driver.state().score(), 0);
    }

    #[test]
    fn test_same_settings_seed_same_games() {
        let a = Driver::new(small_settings()).unwrap();
        let b = Driver::new(small_settings()).unwrap();
        assert_eq!(a.state().seed, b.state().seed);
        assert_eq!(a.state().food, b.state().food);
    }

    #[test]
    fn test_highscore_recorded_on_game_over() {
        let (mut driver, recorded) = driver_with_recorder(small_settings());
        // Eaten on the last cell before the wall, so no second meal is possible
        driver.state.food = Food::from_cells([Cell::new(9, 5), Cell::new(0, 9)]);

        driver.update(1.0);
        assert!(driver.is_over());
        assert_eq!(driver.highscores().top_score(), Some(1));
        assert_eq!(recorded.borrow().game_overs[0].2, Some(1));
    }

    #[test]
    fn test_scoreless_game_not_ranked() {
        let (mut driver, recorded) = driver_with_recorder(small_settings());
        driver.update(1.0);
        assert!(driver.is_over());
        assert!(driver.highscores().is_empty());
        assert_eq!(recorded.borrow().game_overs[0].2, None);
    }
}
