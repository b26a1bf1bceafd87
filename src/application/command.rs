use crate::domain::{BoundaryMode, Pattern};

/// Every action the input layer can ask of a simulation.
/// Coordinates are grid cells; anything off the grid is ignored by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    TogglePause,
    IncreaseRate,
    DecreaseRate,
    ResetRate,
    Randomize,
    Clear,
    ToggleBoundary,
    SetBoundary(BoundaryMode),
    ToggleCell { x: i32, y: i32 },
    /// Drag painting: alive = true draws, false erases
    PaintCell { x: i32, y: i32, alive: bool },
    StampPattern { pattern: &'static Pattern, x: i32, y: i32 },
    /// Advance exactly one generation, even while paused
    Step,
}
