use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::snake::Direction::{self, *};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    Quit,
}

/// Maps a key press to a game command. Unknown keys map to `None`.
pub fn command_for(key: &KeyEvent) -> Option<Command> {
    if is_ctrl_c(key) {
        return Some(Command::Quit);
    }

    match key.code {
        KeyCode::Up => Some(Command::Turn(Up)),
        KeyCode::Down => Some(Command::Turn(Down)),
        KeyCode::Left => Some(Command::Turn(Left)),
        KeyCode::Right => Some(Command::Turn(Right)),
        KeyCode::Esc => Some(Command::Quit),
        KeyCode::Char(c) => match c.to_ascii_lowercase() {
            'w' => Some(Command::Turn(Up)),
            's' => Some(Command::Turn(Down)),
            'a' => Some(Command::Turn(Left)),
            'd' => Some(Command::Turn(Right)),
            'q' => Some(Command::Quit),
            _ => None,
        },
        _ => None,
    }
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C')) && key.modifiers.contains(KeyModifiers::CONTROL)
}
