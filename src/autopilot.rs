//! Demo mode: picks headings automatically
//!
//! Greedy towards the nearest food, but never into a wall or the body, and
//! preferring moves that leave enough open space to fit the whole snake.

use std::collections::{HashSet, VecDeque};

use crate::sim::{Cell, GameState, Heading};

/// Heading for the next tick, or `None` when every move is fatal
pub fn choose_heading(state: &GameState) -> Option<Heading> {
    let snake = &state.snake;
    let head = snake.head();
    let current = snake.heading();

    // Cells still blocked after the next move; the tip moves away unless growing
    let mut blocked: HashSet<Cell> = snake.tail().iter().copied().collect();
    if snake.growth_pending() == 0 {
        if let Some(tip) = snake.tail().last() {
            if !snake.tail()[..snake.tail().len() - 1].contains(tip) {
                blocked.remove(tip);
            }
        }
    }

    let needed = snake.len() + snake.growth_pending() as usize;

    Heading::ALL
        .into_iter()
        .filter(|&h| h != current.opposite())
        .filter_map(|h| {
            let next = head + h.vector();
            if !state.grid.contains(next) || blocked.contains(&next) {
                return None;
            }
            let room = open_area(state, &blocked, next, needed);
            let distance = state
                .food
                .cells()
                .iter()
                .map(|&food| manhattan(next, food))
                .min()
                .unwrap_or(0);
            Some((h, room >= needed, room, distance))
        })
        // Enough room first, then closest food, then more room, then keep going straight
        .min_by_key(|&(h, roomy, room, distance)| (!roomy, distance, usize::MAX - room, h != current))
        .map(|(h, ..)| h)
}

fn manhattan(a: Cell, b: Cell) -> i32 {
    (a - b).abs().element_sum()
}

/// Count free cells reachable from `start`, stopping once `limit` is reached
fn open_area(state: &GameState, blocked: &HashSet<Cell>, start: Cell, limit: usize) -> usize {
    let mut seen = HashSet::from([start]);
    let mut queue = VecDeque::from([start]);

    while let Some(cell) = queue.pop_front() {
        if seen.len() >= limit {
            break;
        }
        for h in Heading::ALL {
            let next = cell + h.vector();
            if state.grid.contains(next) && !blocked.contains(&next) && next != state.snake.head() && seen.insert(next) {
                queue.push_back(next);
            }
        }
    }
    seen.len()
}
