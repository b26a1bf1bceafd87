/// A named template of alive cells, stamped relative to an anchor.
/// Offsets are constant data; patterns are never built at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub cells: &'static [(usize, usize)], // Offsets of alive cells from the anchor
}

impl Pattern {
    /// Bounding width (largest x offset + 1)
    pub fn width(&self) -> usize {
        self.cells.iter().map(|&(x, _)| x + 1).max().unwrap_or(0)
    }

    /// Bounding height (largest y offset + 1)
    pub fn height(&self) -> usize {
        self.cells.iter().map(|&(_, y)| y + 1).max().unwrap_or(0)
    }

    /// Absolute positions of the pattern's cells for a given anchor
    pub fn cells_at(&self, anchor_x: i64, anchor_y: i64) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.cells
            .iter()
            .map(move |&(dx, dy)| (anchor_x + dx as i64, anchor_y + dy as i64))
    }
}

/// Pattern catalog
pub mod presets {
    use super::Pattern;

    /// Gosper Glider Gun - emits a glider every 30 generations
    pub const GOSPER_GLIDER_GUN: Pattern = Pattern {
        name: "Gosper Glider Gun",
        description: "Spaceship gun (period 30)",
        cells: &[
            // Left block
            (1, 5), (1, 6), (2, 5), (2, 6),
            // Left half
            (11, 5), (11, 6), (11, 7),
            (12, 4), (12, 8),
            (13, 3), (13, 9),
            (14, 3), (14, 9),
            (15, 6),
            (16, 4), (16, 8),
            (17, 5), (17, 6), (17, 7),
            (18, 6),
            // Right half
            (21, 3), (21, 4), (21, 5),
            (22, 3), (22, 4), (22, 5),
            (23, 2), (23, 6),
            (25, 1), (25, 2), (25, 6), (25, 7),
            // Right block
            (35, 3), (35, 4), (36, 3), (36, 4),
        ],
    };

    /// Pentadecathlon - long-period oscillator
    pub const PENTADECATHLON: Pattern = Pattern {
        name: "Pentadecathlon",
        description: "Oscillator (period 15)",
        cells: &[
            (1, 0), (1, 1),
            (0, 2), (2, 2),
            (1, 3), (1, 4), (1, 5), (1, 6),
            (0, 7), (2, 7),
            (1, 8), (1, 9),
        ],
    };

    /// Glider - simplest spaceship, moves diagonally
    pub const GLIDER: Pattern = Pattern {
        name: "Glider",
        description: "Moves diagonally (period 4)",
        cells: &[
            (1, 0),
            (2, 1),
            (0, 2), (1, 2), (2, 2),
        ],
    };

    /// Blinker - period 2 oscillator
    pub const BLINKER: Pattern = Pattern {
        name: "Blinker",
        description: "Oscillator (period 2)",
        cells: &[(0, 1), (1, 1), (2, 1)],
    };

    pub const TOAD: Pattern = Pattern {
        name: "Toad",
        description: "Oscillator (period 2)",
        cells: &[
            (1, 0), (2, 0), (3, 0),
            (0, 1), (1, 1), (2, 1),
        ],
    };

    pub const BEACON: Pattern = Pattern {
        name: "Beacon",
        description: "Oscillator (period 2)",
        cells: &[
            (0, 0), (1, 0),
            (0, 1),
            (3, 2),
            (2, 3), (3, 3),
        ],
    };

    /// Lightweight Spaceship (LWSS)
    pub const LWSS: Pattern = Pattern {
        name: "LWSS",
        description: "Lightweight Spaceship (period 4)",
        cells: &[
            (1, 0), (4, 0),
            (0, 1),
            (0, 2), (4, 2),
            (0, 3), (1, 3), (2, 3), (3, 3),
        ],
    };

    /// R-pentomino - methuselah, stabilizes after 1103 generations
    pub const R_PENTOMINO: Pattern = Pattern {
        name: "R-pentomino",
        description: "Methuselah - stabilizes at gen 1103",
        cells: &[
            (1, 0), (2, 0),
            (0, 1), (1, 1),
            (1, 2),
        ],
    };

    /// Block - simple still life
    pub const BLOCK: Pattern = Pattern {
        name: "Block",
        description: "Still life",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1)],
    };

    /// Every catalog pattern
    pub const ALL: &[Pattern] = &[
        GOSPER_GLIDER_GUN,
        PENTADECATHLON,
        GLIDER,
        BLINKER,
        TOAD,
        BEACON,
        LWSS,
        R_PENTOMINO,
        BLOCK,
    ];

    /// Look up a catalog pattern by name, ignoring case, spaces and dashes
    pub fn by_name(name: &str) -> Option<&'static Pattern> {
        let wanted = normalize(name);
        ALL.iter().find(|p| normalize(p.name) == wanted)
    }

    fn normalize(name: &str) -> String {
        name.chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect()
    }
}
