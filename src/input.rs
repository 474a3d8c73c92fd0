use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::board::Direction;
use crate::config::Difficulty;

/// Discrete intents produced by the keyboard. Turn intents only ever
/// touch the snake's pending-direction slot, so the last press before
/// a tick boundary wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Turn(Direction),
    SetDifficulty(Difficulty),
    Restart,
    Quit,
}

pub fn map_key(key: KeyEvent) -> Option<Command> {
    if key.kind != KeyEventKind::Press && key.kind != KeyEventKind::Repeat {
        return None;
    }
    match key.code {
        KeyCode::Up => Some(Command::Turn(Direction::Up)),
        KeyCode::Down => Some(Command::Turn(Direction::Down)),
        KeyCode::Left => Some(Command::Turn(Direction::Left)),
        KeyCode::Right => Some(Command::Turn(Direction::Right)),
        KeyCode::Char('1') => Some(Command::SetDifficulty(Difficulty::Easy)),
        KeyCode::Char('2') => Some(Command::SetDifficulty(Difficulty::Medium)),
        KeyCode::Char('3') => Some(Command::SetDifficulty(Difficulty::Hard)),
        KeyCode::Char('r') | KeyCode::Enter => Some(Command::Restart),
        KeyCode::Char('q') => Some(Command::Quit),
        _ => None,
    }
}

/// Edits for the name-entry line shown after a new best score.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NameEdit {
    Char(char),
    Backspace,
    Commit,
    Cancel,
}

pub fn map_name_key(key: KeyEvent) -> Option<NameEdit> {
    if key.kind != KeyEventKind::Press && key.kind != KeyEventKind::Repeat {
        return None;
    }
    match key.code {
        KeyCode::Enter => Some(NameEdit::Commit),
        KeyCode::Esc => Some(NameEdit::Cancel),
        KeyCode::Backspace => Some(NameEdit::Backspace),
        KeyCode::Char(ch) if ch.is_ascii() && !ch.is_ascii_control() => {
            Some(NameEdit::Char(ch))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn arrows_map_to_turns() {
        assert_eq!(
            map_key(press(KeyCode::Up)),
            Some(Command::Turn(Direction::Up))
        );
        assert_eq!(
            map_key(press(KeyCode::Left)),
            Some(Command::Turn(Direction::Left))
        );
    }

    #[test]
    fn digits_map_to_difficulties() {
        assert_eq!(
            map_key(press(KeyCode::Char('2'))),
            Some(Command::SetDifficulty(Difficulty::Medium))
        );
        assert_eq!(
            map_key(press(KeyCode::Char('3'))),
            Some(Command::SetDifficulty(Difficulty::Hard))
        );
    }

    #[test]
    fn releases_are_ignored() {
        let mut ev = press(KeyCode::Up);
        ev.kind = KeyEventKind::Release;
        assert_eq!(map_key(ev), None);
    }

    #[test]
    fn name_entry_accepts_printable_ascii_only() {
        assert_eq!(
            map_name_key(press(KeyCode::Char('A'))),
            Some(NameEdit::Char('A'))
        );
        assert_eq!(map_name_key(press(KeyCode::Enter)), Some(NameEdit::Commit));
        assert_eq!(map_name_key(press(KeyCode::Esc)), Some(NameEdit::Cancel));
        assert_eq!(map_name_key(press(KeyCode::Tab)), None);
    }
}
