//! Key mapping from terminal events to engine key codes.

use crate::types::Key;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a terminal event to a key code.
///
/// Only presses count; releases and auto-repeats are dropped. A resize
/// arrives as [`Key::Resize`] and Ctrl-C as [`Key::Interrupt`] so games can
/// bind them like any other key.
pub fn map_event(event: &Event) -> Option<Key> {
    match event {
        Event::Key(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) if modifiers.contains(KeyModifiers::CONTROL) => Some(Key::Interrupt),
        Event::Key(KeyEvent {
            code,
            kind: KeyEventKind::Press,
            ..
        }) => map_key_code(*code),
        Event::Resize(_, _) => Some(Key::Resize),
        _ => None,
    }
}

pub fn map_key_code(code: KeyCode) -> Option<Key> {
    match code {
        KeyCode::Char(ch) => Some(Key::Char(ch)),
        KeyCode::Up => Some(Key::Up),
        KeyCode::Down => Some(Key::Down),
        KeyCode::Left => Some(Key::Left),
        KeyCode::Right => Some(Key::Right),
        KeyCode::Enter => Some(Key::Enter),
        KeyCode::Esc => Some(Key::Esc),
        KeyCode::Backspace => Some(Key::Backspace),
        KeyCode::Tab => Some(Key::Tab),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;

    fn with_kind(code: KeyCode, kind: KeyEventKind) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        })
    }

    #[test]
    fn test_char_keys() {
        assert_eq!(
            map_event(&Event::Key(KeyEvent::from(KeyCode::Char('q')))),
            Some(Key::Char('q'))
        );
        assert_eq!(
            map_event(&Event::Key(KeyEvent::from(KeyCode::Char(' ')))),
            Some(Key::Char(' '))
        );
    }

    #[test]
    fn test_named_keys() {
        assert_eq!(map_key_code(KeyCode::Left), Some(Key::Left));
        assert_eq!(map_key_code(KeyCode::Esc), Some(Key::Esc));
        assert_eq!(map_key_code(KeyCode::F(5)), None);
    }

    #[test]
    fn test_resize_is_a_key() {
        assert_eq!(map_event(&Event::Resize(80, 24)), Some(Key::Resize));
    }

    #[test]
    fn test_release_and_repeat_are_ignored() {
        assert_eq!(
            map_event(&with_kind(KeyCode::Char('a'), KeyEventKind::Release)),
            None
        );
        assert_eq!(
            map_event(&with_kind(KeyCode::Char('a'), KeyEventKind::Repeat)),
            None
        );
        assert_eq!(map_event(&Event::FocusGained), None);
    }

    #[test]
    fn test_ctrl_c_is_an_interrupt() {
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert_eq!(map_event(&ctrl_c), Some(Key::Interrupt));

        let plain = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::NONE));
        assert_eq!(map_event(&plain), Some(Key::Char('c')));
    }
}
