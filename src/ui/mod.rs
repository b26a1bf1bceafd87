//! Window layout: a square board canvas on the left, a text panel on the right.

pub const CANVAS_SIZE: f32 = 600.0;
pub const PANEL_WIDTH: f32 = 200.0;

/// X position where the panel starts
pub const fn panel_x() -> f32 {
    CANVAS_SIZE
}

pub const fn window_size() -> (f32, f32) {
    (CANVAS_SIZE + PANEL_WIDTH, CANVAS_SIZE)
}

/// Side length of one cell so the whole grid fits the canvas
pub fn cell_size(dimensions: (usize, usize)) -> f32 {
    let (w, h) = dimensions;
    CANVAS_SIZE / w.max(h).max(1) as f32
}

/// Grid cell under a screen position, or None when outside the canvas
pub fn screen_to_cell(screen: (f32, f32), cell_size: f32) -> Option<(i32, i32)> {
    let (sx, sy) = screen;
    let inside = |v: f32| v > 0.0 && v < CANVAS_SIZE;
    (inside(sx) && inside(sy)).then(|| {
        ((sx / cell_size).floor() as i32, (sy / cell_size).floor() as i32)
    })
}

/// Key help shown in the panel
pub const CONTROLS: &[(&str, &str)] = &[
    ("P", "Pause / resume"),
    ("F / S", "Faster / slower"),
    ("R", "Reset speed"),
    ("T", "Randomize"),
    ("C", "Clear"),
    ("W", "Wrap / clamp edges"),
    ("N", "Single step"),
    ("1", "Gosper gun at cursor"),
    ("2", "Pentadecathlon at cursor"),
    ("Click", "Toggle cell"),
    ("Drag", "Draw (Shift: erase)"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_size_fits_largest_axis() {
        assert_eq!(cell_size((75, 75)), 8.0);
        assert_eq!(cell_size((150, 75)), 4.0);
    }

    #[test]
    fn test_screen_to_cell() {
        assert_eq!(screen_to_cell((17.0, 9.0), 8.0), Some((2, 1)));
        assert_eq!(screen_to_cell((599.0, 599.0), 8.0), Some((74, 74)));
        assert_eq!(screen_to_cell((0.0, 10.0), 8.0), None);
        assert_eq!(screen_to_cell((650.0, 10.0), 8.0), None);
    }
}
