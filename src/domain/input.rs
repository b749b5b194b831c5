//! Raw input event model and the filter seam between the host event loop
//! and the shell.
//!
//! Events stay opaque here: the shell routes on kind and target only and
//! never inspects payloads such as coordinates or key codes.

use crate::domain::view::ViewId;

/// Coarse kind of a raw input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Pointer or touch press.
    Press,
    /// Pointer or touch release.
    Release,
    /// Pointer motion, including drags.
    Move,
    /// Keyboard key press.
    Key,
    /// Anything the shell has no routing rule for.
    Unrecognized,
}

impl EventKind {
    /// Whether this kind counts as user interaction for wake purposes.
    ///
    /// Presses and moves wake the display; releases and keys do not.
    #[must_use]
    pub const fn is_interaction(self) -> bool {
        matches!(self, Self::Press | Self::Move)
    }
}

/// Where the host attributed an event before routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventTarget {
    /// Inside the interactive surface of a view.
    View(ViewId),
    /// Outside every view surface, such as the backdrop around an overlay
    /// panel.
    Outside,
}

/// A raw input event as the shell sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    /// Coarse event kind.
    pub kind: EventKind,
    /// Host-attributed target.
    pub target: EventTarget,
}

impl InputEvent {
    /// Creates an event from its kind and target.
    #[must_use]
    pub const fn new(kind: EventKind, target: EventTarget) -> Self {
        Self { kind, target }
    }
}

/// Routing decision for one raw event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventDisposition {
    /// The shell intercepted the event; the active view never sees it.
    Consume,
    /// The event passes through to the active view unchanged.
    Forward,
}

/// Interception seam between the host event loop and the shell.
///
/// The host routes every mapped event through this trait before any view
/// handling, and dispatches to the active view only on [`EventDisposition::Forward`].
pub trait EventFilter {
    /// Decides whether `event` is consumed by the shell or forwarded to the
    /// active view.
    fn filter_event(&mut self, event: &InputEvent) -> EventDisposition;
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(EventKind::Press, true ; "press wakes")]
    #[test_case(EventKind::Move, true ; "move wakes")]
    #[test_case(EventKind::Release, false ; "release does not wake")]
    #[test_case(EventKind::Key, false ; "key does not wake")]
    #[test_case(EventKind::Unrecognized, false ; "unrecognized does not wake")]
    fn test_interaction_kinds(kind: EventKind, expected: bool) {
        assert_eq!(kind.is_interaction(), expected);
    }

    #[test]
    fn test_event_carries_kind_and_target() {
        let event = InputEvent::new(EventKind::Press, EventTarget::Outside);

        assert_eq!(event.kind, EventKind::Press);
        assert_eq!(event.target, EventTarget::Outside);
    }
}
