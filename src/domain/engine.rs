//! The grid engine: current generation, boundary policy, evolution parameters.
//!
//! The engine knows nothing about time. Each `step()` call advances exactly
//! one generation; how often that happens (and whether it happens while
//! paused) is decided by the driver in the application layer.

use super::{BoundaryMode, Cell, EngineError, Grid, Pattern, StepStrategy};
use macroquad::logging::{debug, info, warn};
use rand::Rng;
use std::mem;

pub const MIN_TICK_RATE: u32 = 1;
pub const MAX_TICK_RATE: u32 = 60;
pub const DEFAULT_TICK_RATE: u32 = 20;

/// Default alive probability (percent) for `randomize`
pub const DEFAULT_DENSITY: u8 = 12;
pub const MAX_DENSITY: u8 = 100;

/// Tick rate and pause flag. Read by the driver and the renderer only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EvolutionParams {
    pub tick_rate: u32,
    pub paused: bool,
}

impl Default for EvolutionParams {
    fn default() -> Self {
        Self {
            tick_rate: DEFAULT_TICK_RATE,
            paused: false,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Engine {
    grid: Grid,
    /// Next-generation buffer, swapped with `grid` at the end of each step
    scratch: Grid,
    boundary: BoundaryMode,
    params: EvolutionParams,
    strategy: StepStrategy,
    generation: u64,
}

impl Engine {
    /// Create an engine with all cells dead, Wrapped boundary, default tick rate.
    /// Fails when either side is zero or the cell count cannot be allocated.
    pub fn new(width: usize, height: usize) -> Result<Self, EngineError> {
        let cells = width
            .checked_mul(height)
            .filter(|&n| n > 0 && n <= isize::MAX as usize);
        if cells.is_none() {
            warn!("rejected grid dimensions {}x{}", width, height);
            return Err(EngineError::InvalidDimensions { width, height });
        }
        info!("creating {}x{} grid engine", width, height);
        Ok(Self {
            grid: Grid::new(width, height),
            scratch: Grid::new(width, height),
            boundary: BoundaryMode::default(),
            params: EvolutionParams::default(),
            strategy: StepStrategy::default(),
            generation: 0,
        })
    }

    pub const fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    /// Read-only view of the current generation
    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Generations advanced since the last clear or randomize
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.grid.live_cells()
    }

    /// Map signed coordinates onto the grid; None when outside
    fn position(&self, x: i32, y: i32) -> Option<(usize, usize)> {
        let (w, h) = self.grid.dimensions();
        let x = usize::try_from(x).ok().filter(|&x| x < w)?;
        let y = usize::try_from(y).ok().filter(|&y| y < h)?;
        Some((x, y))
    }

    /// Alive state at (x, y); anything outside the grid reads as dead.
    pub fn get_cell(&self, x: i32, y: i32) -> bool {
        self.position(x, y)
            .is_some_and(|(x, y)| self.grid.is_alive(x, y))
    }

    /// Set (x, y) alive or dead. Outside the grid this does nothing.
    pub fn set_cell(&mut self, x: i32, y: i32, alive: bool) {
        if let Some((x, y)) = self.position(x, y) {
            self.grid.set(x, y, Cell::from_alive(alive));
        }
    }

    /// Flip (x, y). Outside the grid this does nothing.
    pub fn toggle_cell(&mut self, x: i32, y: i32) {
        if let Some((x, y)) = self.position(x, y) {
            self.grid.toggle(x, y);
        }
    }

    /// Kill every cell. Idempotent.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
    }

    /// Randomize from the thread-local source
    pub fn randomize(&mut self, density_percent: u8) -> Result<(), EngineError> {
        self.randomize_with(density_percent, &mut rand::rng())
    }

    /// Each cell alive independently with probability `density_percent / 100`.
    /// Deterministic for a seeded `rng`.
    pub fn randomize_with<R: Rng + ?Sized>(
        &mut self,
        density_percent: u8,
        rng: &mut R,
    ) -> Result<(), EngineError> {
        if density_percent > MAX_DENSITY {
            warn!("rejected density {}", density_percent);
            return Err(EngineError::parameter(
                "density",
                i64::from(density_percent),
                0..=i64::from(MAX_DENSITY),
            ));
        }
        self.grid.randomize_with(density_percent, rng);
        self.generation = 0;
        Ok(())
    }

    /// Advance one generation.
    ///
    /// Neighbor counts are read from the current grid only; results go to the
    /// scratch buffer, which then becomes the current grid.
    pub fn step(&mut self) {
        let (w, h) = self.grid.dimensions();
        let parallel = self.strategy.is_parallel_for(w * h);
        self.grid.evolve_into(&mut self.scratch, self.boundary, parallel);
        mem::swap(&mut self.grid, &mut self.scratch);
        self.generation += 1;
    }

    /// Stamp `pattern` with its origin at the anchor.
    ///
    /// All-or-nothing: if any cell would land outside the grid the grid is left
    /// untouched and `false` is returned.
    pub fn stamp_pattern(&mut self, pattern: &Pattern, anchor_x: i32, anchor_y: i32) -> bool {
        let (w, h) = self.grid.dimensions();
        let fits = pattern
            .cells_at(anchor_x.into(), anchor_y.into())
            .all(|(x, y)| (0..w as i64).contains(&x) && (0..h as i64).contains(&y));

        if !fits {
            warn!(
                "rejected {} at ({}, {}): does not fit {}x{} grid",
                pattern.name, anchor_x, anchor_y, w, h
            );
            return false;
        }

        for (x, y) in pattern.cells_at(anchor_x.into(), anchor_y.into()) {
            self.grid.set(x as usize, y as usize, Cell::Alive);
        }
        debug!("stamped {} at ({}, {})", pattern.name, anchor_x, anchor_y);
        true
    }

    pub const fn boundary_mode(&self) -> BoundaryMode {
        self.boundary
    }

    pub fn set_boundary_mode(&mut self, mode: BoundaryMode) {
        if mode != self.boundary {
            debug!("boundary mode {} -> {}", self.boundary.name(), mode.name());
        }
        self.boundary = mode;
    }

    pub fn toggle_boundary_mode(&mut self) {
        self.set_boundary_mode(self.boundary.toggled());
    }

    pub const fn params(&self) -> EvolutionParams {
        self.params
    }

    pub const fn tick_rate(&self) -> u32 {
        self.params.tick_rate
    }

    /// Set ticks per second. Values outside 1..=60 are rejected and the rate
    /// is left as it was.
    pub fn set_tick_rate(&mut self, rate: u32) -> Result<(), EngineError> {
        if !(MIN_TICK_RATE..=MAX_TICK_RATE).contains(&rate) {
            warn!("rejected tick rate {}", rate);
            return Err(EngineError::parameter(
                "tick rate",
                i64::from(rate),
                i64::from(MIN_TICK_RATE)..=i64::from(MAX_TICK_RATE),
            ));
        }
        self.params.tick_rate = rate;
        Ok(())
    }

    /// Nudge the tick rate, saturating at the range ends
    pub fn adjust_tick_rate(&mut self, delta: i32) {
        let rate = (i64::from(self.params.tick_rate) + i64::from(delta))
            .clamp(i64::from(MIN_TICK_RATE), i64::from(MAX_TICK_RATE));
        self.params.tick_rate = rate as u32;
    }

    pub fn reset_tick_rate(&mut self) {
        self.params.tick_rate = DEFAULT_TICK_RATE;
    }

    pub const fn is_paused(&self) -> bool {
        self.params.paused
    }

    pub fn set_paused(&mut self, paused: bool) {
        if paused != self.params.paused {
            debug!("paused = {}", paused);
        }
        self.params.paused = paused;
    }

    pub fn toggle_paused(&mut self) {
        self.set_paused(!self.params.paused);
    }

    pub const fn step_strategy(&self) -> StepStrategy {
        self.strategy
    }

    pub fn set_step_strategy(&mut self, strategy: StepStrategy) {
        self.strategy = strategy;
    }
}
