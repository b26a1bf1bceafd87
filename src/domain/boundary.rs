/// How neighbor lookups behave at the grid edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum BoundaryMode {
    /// Torus: coordinates wrap modulo width/height on each axis
    #[default]
    Wrapped,
    /// Finite plane: anything outside the grid counts as dead
    Clamped,
}

impl BoundaryMode {
    pub fn all() -> [BoundaryMode; 2] {
        [BoundaryMode::Wrapped, BoundaryMode::Clamped]
    }

    pub const fn toggled(self) -> Self {
        match self {
            BoundaryMode::Wrapped => BoundaryMode::Clamped,
            BoundaryMode::Clamped => BoundaryMode::Wrapped,
        }
    }

    /// Display name for status output
    pub fn name(&self) -> &'static str {
        match self {
            BoundaryMode::Wrapped => "Wrapped",
            BoundaryMode::Clamped => "Clamped",
        }
    }

    /// Resolve `pos + delta` on an axis of length `len`.
    /// `delta` is one of -1, 0, 1. Returns None when the neighbor does not exist.
    #[inline]
    pub fn resolve(self, pos: usize, delta: isize, len: usize) -> Option<usize> {
        match self {
            BoundaryMode::Wrapped => {
                // pos < len, so pos + len - 1 never underflows
                Some((pos + len).wrapping_add_signed(delta) % len)
            }
            BoundaryMode::Clamped => pos
                .checked_add_signed(delta)
                .filter(|&p| p < len),
        }
    }
}
