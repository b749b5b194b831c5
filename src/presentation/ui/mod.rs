//! UI screens.

mod app;
mod home_screen;
mod onboarding_screen;
mod settings_screen;

pub use app::App;
pub use home_screen::{HomeAction, HomeScreen};
pub use onboarding_screen::{OnboardingAction, OnboardingScreen};
pub use settings_screen::{SettingsAction, SettingsScreen};

/// Visibility lifecycle hooks invoked when a view gains or loses the slot.
///
/// The slot change itself already happened in the navigation shell; these
/// hooks only give a view the chance to reset transient presentation state.
pub trait ViewLifecycle {
    /// The view just received the slot.
    fn on_show(&mut self) {}

    /// The view just lost the slot.
    fn on_hide(&mut self) {}
}
