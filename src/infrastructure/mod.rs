//! Infrastructure layer with external service adapters.

/// Application configuration.
pub mod config;
/// Display wake state tracking.
pub mod device;
/// Onboarding record persistence.
pub mod onboarding_store;

pub use config::{AppConfig, CliArgs, ConfigError, ConfigStore, DisplayConfig, LogLevel};
pub use device::InteractionMonitor;
pub use onboarding_store::TomlOnboardingStore;
