use super::{BoundaryMode, Cell};
use rand::Rng;
use rayon::prelude::*;
use std::fmt;

/// Grid is a fixed-size 2D cell array, stored flat in row-major order.
/// All bounds checks go through `index`, so out-of-range access has one policy.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells dead.
    /// Dimensions are validated by the engine, not here.
    pub(crate) fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![Cell::Dead; width * height],
        }
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Flat index of (x, y), or None when out of range
    #[inline]
    const fn index(&self, x: usize, y: usize) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    #[inline]
    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_some_and(Cell::is_alive)
    }

    /// Set cell at position. Returns false if (x, y) is outside the grid.
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Flip the cell at position. Returns false if (x, y) is outside the grid.
    pub fn toggle(&mut self, x: usize, y: usize) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = self.cells[idx].toggle();
                true
            }
            None => false,
        }
    }

    /// Clear all cells to dead state
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Each cell alive independently with probability `density_percent / 100`.
    /// Callers guarantee `density_percent <= 100`.
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, density_percent: u8, rng: &mut R) {
        self.cells.iter_mut().for_each(|cell| {
            *cell = Cell::from_alive(rng.random_range(0..100u8) < density_percent);
        });
    }

    /// Count live cells among the 8 neighbors under the given boundary mode.
    /// On a wrapped axis shorter than 3 the same cell can be counted twice.
    pub fn count_live_neighbors(&self, x: usize, y: usize, mode: BoundaryMode) -> u8 {
        let mut count = 0u8;
        for dy in -1isize..=1 {
            let Some(ny) = mode.resolve(y, dy, self.height) else {
                continue;
            };
            for dx in -1isize..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let Some(nx) = mode.resolve(x, dx, self.width) else {
                    continue;
                };
                if self.cells[ny * self.width + nx].is_alive() {
                    count += 1;
                }
            }
        }
        count
    }

    /// Write the next generation of `self` into `next`.
    /// `self` is only read, so every neighbor count sees the frozen generation.
    pub fn evolve_into(&self, next: &mut Grid, mode: BoundaryMode, parallel: bool) {
        debug_assert_eq!(self.dimensions(), next.dimensions());
        let width = self.width;
        if width == 0 {
            return;
        }

        let evolve_row = |y: usize, row: &mut [Cell]| {
            for (x, slot) in row.iter_mut().enumerate() {
                let neighbors = self.count_live_neighbors(x, y, mode);
                *slot = self.cells[y * width + x].evolve(neighbors);
            }
        };

        if parallel {
            next.cells
                .par_chunks_mut(width)
                .enumerate()
                .for_each(|(y, row)| evolve_row(y, row));
        } else {
            next.cells
                .chunks_mut(width)
                .enumerate()
                .for_each(|(y, row)| evolve_row(y, row));
        }
    }

    /// Count total alive cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|c| c.is_alive()).count()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(idx, &cell)| (idx % width, idx / width, cell))
    }

    /// Positions of alive cells in row-major order
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(x, y, _)| (x, y))
    }
}

/// Rows of `O` (alive) and `.` (dead), one line per row.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // an empty grid has no rows to print
        for (y, row) in self.cells.chunks(self.width.max(1)).enumerate() {
            if y > 0 {
                writeln!(f)?;
            }
            for cell in row {
                f.write_str(if cell.is_alive() { "O" } else { "." })?;
            }
        }
        Ok(())
    }
}
