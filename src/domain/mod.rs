mod boundary;
mod cell;
mod engine;
mod error;
mod grid;
mod patterns;
mod strategy;

pub use boundary::BoundaryMode;
pub use cell::Cell;
pub use engine::{
    DEFAULT_DENSITY, DEFAULT_TICK_RATE, Engine, EvolutionParams, MAX_DENSITY, MAX_TICK_RATE,
    MIN_TICK_RATE,
};
pub use error::EngineError;
pub use grid::Grid;
pub use patterns::{Pattern, presets};
pub use strategy::{PARALLEL_THRESHOLD, StepStrategy};
