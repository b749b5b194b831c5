//! View slot model: which top-level view is visible, and the show/hide
//! commands derived from it.

/// Identifier for one of the three top-level views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    /// The resident driving view.
    Home,
    /// The settings overlay.
    Settings,
    /// The first-run onboarding overlay.
    Onboarding,
}

impl ViewId {
    const ALL: [Self; 3] = [Self::Home, Self::Settings, Self::Onboarding];
}

/// The single currently-visible top-level view.
///
/// Exactly one view holds the slot at any time; `Home` is the rest state
/// once no overlay is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewSlot {
    /// Home holds the slot.
    Home,
    /// The settings overlay holds the slot.
    Settings,
    /// The onboarding overlay holds the slot.
    Onboarding,
}

/// Show/hide command issued to a view when the slot changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewCommand {
    /// The view becomes visible.
    Show,
    /// The view is hidden.
    Hide,
}

/// A completed slot transition, handed to the host so it can run the view
/// lifecycle hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewChange {
    /// The view that lost the slot.
    pub from: ViewSlot,
    /// The view that now holds the slot.
    pub to: ViewSlot,
}

/// Whether this installation has already completed onboarding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnboardingStatus {
    /// Onboarding was completed for the current terms version.
    Complete,
    /// Onboarding has not run, or ran for an older terms version.
    Pending,
}

impl ViewSlot {
    /// Initial slot for a fresh shell.
    #[must_use]
    pub const fn initial(onboarding: OnboardingStatus) -> Self {
        match onboarding {
            OnboardingStatus::Complete => Self::Home,
            OnboardingStatus::Pending => Self::Onboarding,
        }
    }

    /// The view occupying the slot.
    #[must_use]
    pub const fn view(self) -> ViewId {
        match self {
            Self::Home => ViewId::Home,
            Self::Settings => ViewId::Settings,
            Self::Onboarding => ViewId::Onboarding,
        }
    }

    /// Whether the active view is an overlay (anything but Home).
    #[must_use]
    pub const fn is_overlay(self) -> bool {
        !matches!(self, Self::Home)
    }

    /// The show/hide command each view receives under this slot.
    ///
    /// Pure mapping: exactly one view is told to show, the other two to
    /// hide, for every slot.
    #[must_use]
    pub fn visibility(self) -> [(ViewId, ViewCommand); 3] {
        ViewId::ALL.map(|id| {
            let command = if id == self.view() {
                ViewCommand::Show
            } else {
                ViewCommand::Hide
            };
            (id, command)
        })
    }
}
