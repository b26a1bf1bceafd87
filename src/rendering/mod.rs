use macroquad::prelude::*;
use crate::domain::{BoundaryMode, Engine};
use crate::ui::{CANVAS_SIZE, CONTROLS, PANEL_WIDTH, cell_size, panel_x};

/// Format large numbers with K/M suffixes
fn format_number(n: usize) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        format!("{}", n)
    }
}

/// Cell outline: reddish while paused, light grey while running
fn stroke_color(paused: bool) -> Color {
    if paused {
        Color::from_rgba(255, 102, 102, 255)
    } else {
        Color::from_rgba(192, 192, 192, 255)
    }
}

/// Canvas border: green for a wrapped board, red for a clamped one
fn border_color(mode: BoundaryMode) -> Color {
    match mode {
        BoundaryMode::Wrapped => Color::from_rgba(0, 255, 0, 255),
        BoundaryMode::Clamped => Color::from_rgba(255, 0, 0, 255),
    }
}

/// Draw every cell of the current generation plus the boundary indicator
pub fn draw_grid(engine: &Engine) {
    let (width, height) = engine.dimensions();
    let size = cell_size((width, height));
    let stroke = stroke_color(engine.is_paused());

    for y in 0..height as i32 {
        for x in 0..width as i32 {
            let (sx, sy) = (x as f32 * size, y as f32 * size);
            let fill = if engine.get_cell(x, y) { BLACK } else { WHITE };
            draw_rectangle(sx, sy, size, size, fill);
            draw_rectangle_lines(sx, sy, size, size, 1.0, stroke);
        }
    }

    draw_rectangle_lines(
        0.0,
        0.0,
        size * width as f32,
        size * height as f32,
        2.0,
        border_color(engine.boundary_mode()),
    );
}

/// Draw the side panel with status and key help
pub fn draw_panel(engine: &Engine) {
    let px = panel_x();
    draw_rectangle(px, 0.0, PANEL_WIDTH, CANVAS_SIZE, Color::from_rgba(30, 30, 30, 255));

    let (w, h) = engine.dimensions();
    let status = [
        format!("Grid: {}x{}", w, h),
        format!("Generation: {}", engine.generation()),
        format!("Alive: {}", format_number(engine.population())),
        format!("Speed: {} gen/s", engine.tick_rate()),
        format!("Edges: {}", engine.boundary_mode().name()),
        if engine.is_paused() { "Paused".to_owned() } else { "Running".to_owned() },
    ];

    let x = px + 10.0;
    let mut y = 24.0;
    for line in &status {
        draw_text(line, x, y, 18.0, WHITE);
        y += 20.0;
    }

    y += 16.0;
    draw_text("Controls:", x, y, 16.0, WHITE);
    for (key, action) in CONTROLS {
        y += 16.0;
        draw_text(&format!("{:<6} {}", key, action), x, y, 14.0, GRAY);
    }
}
