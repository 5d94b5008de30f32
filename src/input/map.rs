//! Event mapping from terminal events to simulation input.

use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEventKind,
};

use crate::types::InputEvent;

/// Translate a terminal event for the simulation.
///
/// Every mouse event reports the pointer cell; only a left-button press
/// counts as a click, so one physical click launches exactly one rocket.
/// Key repeats and releases are ignored.
pub fn map_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press && should_quit(key) => {
            Some(InputEvent::Quit)
        }
        Event::Resize(width, height) => Some(InputEvent::Resize { width, height }),
        Event::Mouse(mouse) => Some(InputEvent::Pointer {
            x: mouse.column,
            y: mouse.row,
            clicked: matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)),
        }),
        _ => None,
    }
}

/// Check if key should quit the animation.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(
            map_event(Event::Key(KeyEvent::from(KeyCode::Char('q')))),
            Some(InputEvent::Quit)
        );
        assert_eq!(
            map_event(Event::Key(KeyEvent::from(KeyCode::Char('Q')))),
            Some(InputEvent::Quit)
        );
        assert_eq!(
            map_event(Event::Key(KeyEvent::new(
                KeyCode::Char('c'),
                KeyModifiers::CONTROL
            ))),
            Some(InputEvent::Quit)
        );
        assert_eq!(map_event(Event::Key(KeyEvent::from(KeyCode::Char('x')))), None);
    }

    #[test]
    fn test_key_release_does_not_quit() {
        let release = KeyEvent::new_with_kind(
            KeyCode::Char('q'),
            KeyModifiers::NONE,
            KeyEventKind::Release,
        );
        assert_eq!(map_event(Event::Key(release)), None);
    }

    #[test]
    fn test_left_press_is_a_click() {
        assert_eq!(
            map_event(mouse(MouseEventKind::Down(MouseButton::Left), 12, 7)),
            Some(InputEvent::Pointer {
                x: 12,
                y: 7,
                clicked: true
            })
        );
    }

    #[test]
    fn test_motion_and_release_track_pointer_without_click() {
        assert_eq!(
            map_event(mouse(MouseEventKind::Moved, 3, 4)),
            Some(InputEvent::Pointer {
                x: 3,
                y: 4,
                clicked: false
            })
        );
        assert_eq!(
            map_event(mouse(MouseEventKind::Up(MouseButton::Left), 3, 4)),
            Some(InputEvent::Pointer {
                x: 3,
                y: 4,
                clicked: false
            })
        );
        assert_eq!(
            map_event(mouse(MouseEventKind::Drag(MouseButton::Left), 5, 6)),
            Some(InputEvent::Pointer {
                x: 5,
                y: 6,
                clicked: false
            })
        );
    }

    #[test]
    fn test_right_press_is_not_a_click() {
        assert_eq!(
            map_event(mouse(MouseEventKind::Down(MouseButton::Right), 1, 1)),
            Some(InputEvent::Pointer {
                x: 1,
                y: 1,
                clicked: false
            })
        );
    }

    #[test]
    fn test_resize_maps_to_input() {
        assert_eq!(
            map_event(Event::Resize(120, 40)),
            Some(InputEvent::Resize {
                width: 120,
                height: 40
            })
        );
    }
}
