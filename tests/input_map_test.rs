use crossterm::event::{Event, KeyCode, KeyEvent};

use tui_arcade::input::map_event;
use tui_arcade::types::Key;

#[test]
fn characters_and_resize_map_to_bindable_keys() {
    assert_eq!(
        map_event(&Event::Key(KeyEvent::from(KeyCode::Char('p')))),
        Some(Key::from('p'))
    );
    assert_eq!(
        map_event(&Event::Key(KeyEvent::from(KeyCode::Up))),
        Some(Key::Up)
    );
    assert_eq!(map_event(&Event::Resize(100, 30)), Some(Key::Resize));
    assert_eq!(map_event(&Event::Key(KeyEvent::from(KeyCode::Home))), None);
}
