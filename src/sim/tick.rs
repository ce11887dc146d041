//! Fixed-step simulation tick
//!
//! One call moves the snake one cell. Once a game has ended the state is
//! frozen and every further call reports the same outcome.

use super::snake::Outcome;
use super::state::{GameEvent, GamePhase, GameState};

/// Advance the game by one step
pub fn tick(state: &mut GameState) -> Outcome {
    if let Some(outcome) = state.phase.outcome() {
        log::debug!("Tick after game over ({:?}), ignoring", outcome);
        return outcome;
    }

    let score_before = state.snake.score();
    let food_before = state.food.clone();

    let outcome = state
        .snake
        .advance(&state.grid, &mut state.food, &mut state.spawner);
    state.time_ticks += 1;

    let score = state.snake.score();
    let ate = score > score_before || matches!(outcome, Outcome::Win(_));
    if ate {
        state.events.push(GameEvent::FoodEaten {
            cell: state.snake.head(),
            score,
        });
        for &cell in state.food.cells() {
            if !food_before.contains(cell) {
                state.events.push(GameEvent::FoodPlaced { cell });
            }
        }
        log::debug!("Ate at {:?}, score {}", state.snake.head(), score);
    }

    match outcome {
        Outcome::Continue => {}
        Outcome::Collision(reason) => {
            state.phase = GamePhase::Lost(reason);
            log::info!(
                "Game lost ({:?}) after {} ticks, score {}",
                reason,
                state.time_ticks,
                score
            );
        }
        Outcome::Win(reason) => {
            state.phase = GamePhase::Won(reason);
            log::info!(
                "Game won ({:?}) after {} ticks, score {}",
                reason,
                state.time_ticks,
                score
            );
        }
    }
    if outcome.is_terminal() {
        state.events.push(GameEvent::GameOver { outcome, score });
    }

    outcome
}
