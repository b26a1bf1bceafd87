//! Selection of how a generation is evaluated.
//!
//! Every strategy produces the same next generation; they only differ in
//! whether rows are evaluated on the calling thread or fanned out to rayon.

/// Grids with at least this many cells step in parallel under `Auto`.
pub const PARALLEL_THRESHOLD: usize = 256 * 256;

/// Available row-evaluation strategies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StepStrategy {
    /// Rows evaluated in order on the caller's thread
    Serial,
    /// Rows evaluated on the rayon pool
    Parallel,
    /// Parallel for large grids, serial otherwise
    #[default]
    Auto,
}

impl StepStrategy {
    pub fn all() -> Vec<StepStrategy> {
        vec![StepStrategy::Serial, StepStrategy::Parallel, StepStrategy::Auto]
    }

    /// Display name, also accepted by `from_name`
    pub fn name(&self) -> &'static str {
        match self {
            StepStrategy::Serial => "serial",
            StepStrategy::Parallel => "parallel",
            StepStrategy::Auto => "auto",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            StepStrategy::Serial => "Row by row on the calling thread",
            StepStrategy::Parallel => "Rows spread over the rayon pool",
            StepStrategy::Auto => "Parallel above 65536 cells",
        }
    }

    pub fn from_name(name: &str) -> Option<StepStrategy> {
        Self::all()
            .into_iter()
            .find(|s| s.name().eq_ignore_ascii_case(name))
    }

    /// Whether a grid of `cells` cells should be stepped in parallel
    pub fn is_parallel_for(&self, cells: usize) -> bool {
        match self {
            StepStrategy::Serial => false,
            StepStrategy::Parallel => true,
            StepStrategy::Auto => cells >= PARALLEL_THRESHOLD,
        }
    }
}
