// Domain layer - grid engine, rules, patterns
pub mod domain;

// Application layer - tick driver, commands, configuration
pub mod application;

// Infrastructure layer - CLI flags, window UI, rendering, input
pub mod cli;
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{BoundaryMode, Cell, Engine, EngineError, Grid, Pattern, StepStrategy, presets};
pub use application::{Command, SharedEngine, Simulation, SimulationConfig};
