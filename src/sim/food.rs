//! Food cells and random placement
//!
//! Placement samples the whole board uniformly and gives up after a fixed
//! number of attempts. Giving up is not an error: it means the board is (close
//! to) full, which is the winning condition.

use std::collections::HashSet;

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::grid::{Cell, GridSpace};
use crate::consts::MAX_PLACEMENT_ATTEMPTS;

/// Food on the board, in placement order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Food {
    cells: Vec<Cell>,
}

impl Food {
    pub fn new() -> Self {
        Self { cells: Vec::new() }
    }

    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Self {
        Self {
            cells: cells.into_iter().collect(),
        }
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    pub fn push(&mut self, cell: Cell) {
        self.cells.push(cell);
    }

    /// Remove the food at `cell`, returning its slot index
    pub fn take(&mut self, cell: Cell) -> Option<usize> {
        let index = self.cells.iter().position(|&c| c == cell)?;
        self.cells.remove(index);
        Some(index)
    }

    /// Put a relocated food cell back into the slot it was taken from
    pub fn restore(&mut self, index: usize, cell: Cell) {
        let index = index.min(self.cells.len());
        self.cells.insert(index, cell);
    }
}

/// Result of a placement attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    Cell(Cell),
    /// No free cell found within the attempt budget
    BoardFull,
}

/// Picks free cells for food. Holds its RNG, never the board.
#[derive(Debug, Clone)]
pub struct FoodSpawner {
    rng: Pcg32,
    max_attempts: u32,
}

impl FoodSpawner {
    pub fn new(seed: u64) -> Self {
        Self::with_attempts(seed, MAX_PLACEMENT_ATTEMPTS)
    }

    pub fn with_attempts(seed: u64, max_attempts: u32) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(seed),
            max_attempts,
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Sample random cells until one is missing from `occupied`
    pub fn place(&mut self, grid: &GridSpace, occupied: &HashSet<Cell>) -> Placement {
        for _ in 0..self.max_attempts {
            let cell = Cell::new(
                self.rng.random_range(0..grid.width()),
                self.rng.random_range(0..grid.height()),
            );
            if !occupied.contains(&cell) {
                return Placement::Cell(cell);
            }
        }

        log::debug!(
            "No free cell after {} attempts on {}x{} board",
            self.max_attempts,
            grid.width(),
            grid.height()
        );
        Placement::BoardFull
    }
}
