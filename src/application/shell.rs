//! The navigation shell: a single-slot view state machine plus the event
//! filter policy applied to raw input before the active view sees it.

use std::sync::Arc;

use tracing::{debug, error, info};

use crate::domain::input::{EventDisposition, EventFilter, EventKind, EventTarget, InputEvent};
use crate::domain::ports::{DeviceMonitor, OnboardingStore, WakeOutcome};
use crate::domain::view::{OnboardingStatus, ViewChange, ViewId, ViewSlot};

/// Owns which top-level view is visible and decides, per raw input event,
/// whether the shell consumes it or the active view receives it.
///
/// Every operation is synchronous and infallible; a transition request that
/// does not apply to the current slot is a no-op. The only asynchronous
/// effect is the onboarding persistence write, which is spawned after the
/// transition and can never roll it back.
pub struct NavigationShell {
    slot: ViewSlot,
    terms_version: u32,
    device: Arc<dyn DeviceMonitor>,
    store: Arc<dyn OnboardingStore>,
}

impl NavigationShell {
    /// Creates a shell with its collaborators injected.
    ///
    /// The slot starts at Onboarding until this installation has completed
    /// the current terms version, and at Home afterwards.
    #[must_use]
    pub fn new(
        onboarding: OnboardingStatus,
        terms_version: u32,
        device: Arc<dyn DeviceMonitor>,
        store: Arc<dyn OnboardingStore>,
    ) -> Self {
        let slot = ViewSlot::initial(onboarding);
        debug!(?slot, terms_version, "Navigation shell initialized");
        Self {
            slot,
            terms_version,
            device,
            store,
        }
    }

    /// The view currently holding the slot.
    #[must_use]
    pub const fn active_view(&self) -> ViewSlot {
        self.slot
    }

    /// Raises the settings overlay.
    ///
    /// Idempotent while Settings is already open, and a no-op during
    /// onboarding: Settings is reachable only from Home.
    pub fn open_settings(&mut self) -> Option<ViewChange> {
        match self.slot {
            ViewSlot::Home => self.transition(ViewSlot::Settings),
            ViewSlot::Settings | ViewSlot::Onboarding => None,
        }
    }

    /// Returns to Home from the settings overlay.
    ///
    /// No-op when Settings is not open.
    pub fn close_settings(&mut self) -> Option<ViewChange> {
        match self.slot {
            ViewSlot::Settings => self.transition(ViewSlot::Home),
            ViewSlot::Home | ViewSlot::Onboarding => None,
        }
    }

    /// Leaves onboarding for good: transitions to Home and hands the
    /// completion record to the store collaborator.
    ///
    /// One-way within the session. The write runs in the background; a
    /// failure is logged and leaves the session state untouched.
    pub fn complete_onboarding(&mut self) -> Option<ViewChange> {
        if self.slot != ViewSlot::Onboarding {
            return None;
        }

        let change = self.transition(ViewSlot::Home);
        info!(terms_version = self.terms_version, "Onboarding completed");

        let store = Arc::clone(&self.store);
        let version = self.terms_version;
        tokio::spawn(async move {
            if let Err(e) = store.mark_complete(version).await {
                error!(error = %e, "Failed to persist onboarding completion");
            }
        });

        change
    }

    fn transition(&mut self, to: ViewSlot) -> Option<ViewChange> {
        let from = self.slot;
        if from == to {
            return None;
        }
        self.slot = to;
        debug!(?from, ?to, "View slot changed");
        Some(ViewChange { from, to })
    }
}

impl EventFilter for NavigationShell {
    fn filter_event(&mut self, event: &InputEvent) -> EventDisposition {
        // Wake reporting is orthogonal to navigation: the device monitor
        // hears about every press and move before any routing decision.
        if event.kind.is_interaction()
            && self.device.note_interaction() == WakeOutcome::Woke
        {
            debug!(kind = ?event.kind, "Interaction woke the display; event stops here");
            return EventDisposition::Consume;
        }

        // Unknown kinds fail open.
        if event.kind == EventKind::Unrecognized {
            return EventDisposition::Forward;
        }

        match self.slot {
            ViewSlot::Home => EventDisposition::Forward,
            ViewSlot::Settings => {
                if event.kind == EventKind::Press
                    && event.target != EventTarget::View(ViewId::Settings)
                {
                    self.close_settings();
                    EventDisposition::Consume
                } else {
                    EventDisposition::Forward
                }
            }
            ViewSlot::Onboarding => {
                // Modal shield: presses aimed past the overlay go nowhere.
                if event.kind == EventKind::Press
                    && event.target != EventTarget::View(ViewId::Onboarding)
                {
                    EventDisposition::Consume
                } else {
                    EventDisposition::Forward
                }
            }
        }
    }
}
