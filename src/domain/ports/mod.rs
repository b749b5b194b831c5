mod device_monitor_port;
mod onboarding_store_port;

pub use device_monitor_port::{DeviceMonitor, WakeOutcome};
pub use onboarding_store_port::OnboardingStore;

#[cfg(test)]
pub mod mocks {
    pub use super::device_monitor_port::mock::MockDeviceMonitor;
    pub use super::onboarding_store_port::mock::MockOnboardingStore;
}
