//! Snake body, heading and the per-tick movement algorithm

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::food::{Food, FoodSpawner, Placement};
use super::grid::{Cell, GridSpace, Heading};
use crate::consts::GROWTH_PER_FOOD;

/// Why a game was lost
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CollisionReason {
    OutOfBounds,
    SelfHit,
}

/// Why a game was won
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WinReason {
    /// No free cell left for relocated food
    BoardFull,
}

/// Result of a single tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Continue,
    Collision(CollisionReason),
    Win(WinReason),
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Continue)
    }
}

/// The player's snake
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnakeState {
    head: Cell,
    /// Body behind the head, nearest segment first
    tail: Vec<Cell>,
    heading: Heading,
    /// Requested heading, applied at the start of the next tick
    pending_heading: Heading,
    /// Ticks that will still add a segment
    growth_pending: u32,
    score: u32,
    growth_per_food: u32,
}

impl SnakeState {
    /// Build a straight snake of `initial_length` cells with the head at
    /// `head`, the body trailing away from `heading`.
    pub fn new(head: Cell, initial_length: usize, heading: Heading) -> Self {
        let back = heading.opposite().vector();
        let tail = (1..initial_length as i32).map(|i| head + back * i).collect();
        Self::from_body(head, tail, heading)
    }

    /// Build a snake from an explicit body
    pub fn from_body(head: Cell, tail: Vec<Cell>, heading: Heading) -> Self {
        Self {
            head,
            tail,
            heading,
            pending_heading: heading,
            growth_pending: 0,
            score: 0,
            growth_per_food: GROWTH_PER_FOOD,
        }
    }

    /// Override how many segments each food adds
    pub fn with_growth_per_food(mut self, growth: u32) -> Self {
        self.growth_per_food = growth;
        self
    }

    pub fn head(&self) -> Cell {
        self.head
    }

    pub fn tail(&self) -> &[Cell] {
        &self.tail
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn pending_heading(&self) -> Heading {
        self.pending_heading
    }

    pub fn growth_pending(&self) -> u32 {
        self.growth_pending
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    /// Number of cells including the head
    pub fn len(&self) -> usize {
        self.tail.len() + 1
    }

    /// Head followed by the tail
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        std::iter::once(self.head).chain(self.tail.iter().copied())
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.head == cell || self.tail.contains(&cell)
    }

    /// Ask for a turn on the next tick.
    ///
    /// Only 90 degree turns relative to the heading applied on the last tick
    /// are accepted; anything else is dropped silently. A later request before
    /// the next tick replaces an earlier one.
    pub fn request_heading(&mut self, heading: Heading) {
        if heading.is_turn_from(self.heading) {
            self.pending_heading = heading;
        } else {
            log::debug!("Ignoring heading {:?} while moving {:?}", heading, self.heading);
        }
    }

    /// Move one cell, then resolve walls, food and self collisions
    pub fn advance(&mut self, grid: &GridSpace, food: &mut Food, spawner: &mut FoodSpawner) -> Outcome {
        self.heading = self.pending_heading;

        // New segment starts on top of the tip and separates on later moves
        if self.growth_pending > 0 {
            let tip = self.tail.last().copied().unwrap_or(self.head);
            self.tail.push(tip);
            self.growth_pending -= 1;
        }

        if !self.tail.is_empty() {
            self.tail.rotate_right(1);
            self.tail[0] = self.head;
        }
        self.head += self.heading.vector();

        if !grid.contains(self.head) {
            return Outcome::Collision(CollisionReason::OutOfBounds);
        }

        if let Some(slot) = food.take(self.head) {
            let occupied: HashSet<Cell> = self.cells().chain(food.cells().iter().copied()).collect();
            match spawner.place(grid, &occupied) {
                Placement::Cell(cell) => food.restore(slot, cell),
                Placement::BoardFull => return Outcome::Win(WinReason::BoardFull),
            }
            self.score += 1;
            self.growth_pending += self.growth_per_food;
        }

        if self.tail.contains(&self.head) {
            return Outcome::Collision(CollisionReason::SelfHit);
        }

        Outcome::Continue
    }
}
