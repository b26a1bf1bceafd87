use macroquad::prelude::*;
use crate::application::Command;
use crate::domain::presets;
use crate::ui::screen_to_cell;

/// Keys handled each frame, in dispatch order
const KEYS: [KeyCode; 10] = [
    KeyCode::P,
    KeyCode::F,
    KeyCode::S,
    KeyCode::R,
    KeyCode::T,
    KeyCode::W,
    KeyCode::C,
    KeyCode::N,
    KeyCode::Key1,
    KeyCode::Key2,
];

/// Map a key press to a command. Pattern keys need the cell under the cursor.
pub fn command_for_key(key: KeyCode, cursor: Option<(i32, i32)>) -> Option<Command> {
    match key {
        KeyCode::P => Some(Command::TogglePause),
        KeyCode::F => Some(Command::IncreaseRate),
        KeyCode::S => Some(Command::DecreaseRate),
        KeyCode::R => Some(Command::ResetRate),
        KeyCode::T => Some(Command::Randomize),
        KeyCode::W => Some(Command::ToggleBoundary),
        KeyCode::C => Some(Command::Clear),
        KeyCode::N => Some(Command::Step),
        KeyCode::Key1 => cursor.map(|(x, y)| Command::StampPattern {
            pattern: &presets::GOSPER_GLIDER_GUN,
            x,
            y,
        }),
        KeyCode::Key2 => cursor.map(|(x, y)| Command::StampPattern {
            pattern: &presets::PENTADECATHLON,
            x,
            y,
        }),
        _ => None,
    }
}

/// Tracks the left button between frames so a click toggles
/// and a drag paints.
#[derive(Default, Debug)]
pub struct PointerState {
    held: bool,
    pressed_at: Option<(i32, i32)>,
    dragging: bool,
}

impl PointerState {
    /// Feed one frame of pointer input.
    /// `cell` is the cell under the cursor, `down` the left button, `erase` the shift key.
    pub fn update(&mut self, cell: Option<(i32, i32)>, down: bool, erase: bool) -> Vec<Command> {
        let mut commands = Vec::new();

        match (self.held, down) {
            (false, true) => {
                self.held = true;
                self.pressed_at = cell;
                self.dragging = false;
            }
            (true, true) => {
                if let Some((x, y)) = cell {
                    if !self.dragging && self.pressed_at != Some((x, y)) {
                        self.dragging = true;
                        if let Some((sx, sy)) = self.pressed_at {
                            commands.push(Command::PaintCell { x: sx, y: sy, alive: !erase });
                        }
                    }
                    if self.dragging {
                        commands.push(Command::PaintCell { x, y, alive: !erase });
                    }
                }
            }
            (true, false) => {
                if let (Some((x, y)), false) = (self.pressed_at, self.dragging) {
                    commands.push(Command::ToggleCell { x, y });
                }
                *self = Self::default();
            }
            (false, false) => {}
        }

        commands
    }
}

/// Collect this frame's commands from keyboard and mouse
pub fn poll_commands(pointer: &mut PointerState, cell_size: f32) -> Vec<Command> {
    let cursor = screen_to_cell(mouse_position(), cell_size);

    let mut commands: Vec<Command> = KEYS
        .iter()
        .filter(|key| is_key_pressed(**key))
        .filter_map(|key| command_for_key(*key, cursor))
        .collect();

    let erase = is_key_down(KeyCode::LeftShift) || is_key_down(KeyCode::RightShift);
    commands.extend(pointer.update(cursor, is_mouse_button_down(MouseButton::Left), erase));
    commands
}
