//! Event handling: terminal events mapped onto the shell's raw event model.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};

use crate::domain::input::{EventKind, EventTarget, InputEvent};
use crate::domain::view::ViewId;

/// Maps a terminal event onto the shell's opaque event model.
///
/// `active` is the view holding the slot and `surface` its hit-test
/// rectangle. A `None` surface means the view is full-bleed, so every
/// pointer position counts as inside it. Keys always target the active
/// view.
#[must_use]
pub fn map_event(event: &Event, active: ViewId, surface: Option<Rect>) -> InputEvent {
    match event {
        Event::Key(_) => InputEvent::new(EventKind::Key, EventTarget::View(active)),
        Event::Mouse(mouse) => map_mouse(mouse, active, surface),
        _ => InputEvent::new(EventKind::Unrecognized, EventTarget::View(active)),
    }
}

fn map_mouse(mouse: &MouseEvent, active: ViewId, surface: Option<Rect>) -> InputEvent {
    let kind = match mouse.kind {
        MouseEventKind::Down(_) => EventKind::Press,
        MouseEventKind::Up(_) => EventKind::Release,
        MouseEventKind::Moved | MouseEventKind::Drag(_) => EventKind::Move,
        // Scroll wheels and anything newer.
        _ => EventKind::Unrecognized,
    };

    let target = match surface {
        Some(rect) if !rect.contains(Position::new(mouse.column, mouse.row)) => {
            EventTarget::Outside
        }
        _ => EventTarget::View(active),
    };

    InputEvent::new(kind, target)
}

/// Checks if key is the global quit chord, honored whatever view is active.
#[must_use]
pub fn is_quit_event(key: &KeyEvent) -> bool {
    matches!(
        key,
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        }
    )
}
