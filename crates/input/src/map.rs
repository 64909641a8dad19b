//! Key mapping from terminal events to engine commands.

use crate::types::{Command, Phase};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Keys that hold soft drop while pressed.
pub fn is_soft_drop_key(code: KeyCode) -> bool {
    matches!(
        code,
        KeyCode::Down
            | KeyCode::Char('s')
            | KeyCode::Char('S')
            | KeyCode::Char('j')
            | KeyCode::Char('J')
    )
}

/// Map a key press to a command.
///
/// The pause key resolves to `Pause` or `Resume` depending on `phase`, so a
/// single key toggles.
pub fn map_key(code: KeyCode, phase: Phase) -> Option<Command> {
    match code {
        // Movement
        KeyCode::Left
        | KeyCode::Char('a')
        | KeyCode::Char('A')
        | KeyCode::Char('h')
        | KeyCode::Char('H') => Some(Command::MoveLeft),
        KeyCode::Right
        | KeyCode::Char('d')
        | KeyCode::Char('D')
        | KeyCode::Char('l')
        | KeyCode::Char('L') => Some(Command::MoveRight),
        code if is_soft_drop_key(code) => Some(Command::SoftDropStart),

        // Rotation
        KeyCode::Up
        | KeyCode::Char('w')
        | KeyCode::Char('W')
        | KeyCode::Char('k')
        | KeyCode::Char('K') => Some(Command::Rotate),

        // Pause toggle
        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Esc => match phase {
            Phase::Running => Some(Command::Pause),
            Phase::Paused => Some(Command::Resume),
            Phase::GameOver => None,
        },

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
