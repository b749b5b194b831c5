//! Device monitor port definition.

/// Outcome of reporting a user interaction to the device monitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WakeOutcome {
    /// The display was already awake; nothing changed.
    AlreadyAwake,
    /// The notification woke the display.
    Woke,
}

/// Port for the collaborator that owns display awake state.
///
/// The shell reports interactions through this port on every press or move
/// and never decides wakefulness itself.
pub trait DeviceMonitor: Send + Sync {
    /// Reports that the user interacted with the device.
    ///
    /// Called before routing, whatever view is active.
    fn note_interaction(&self) -> WakeOutcome;

    /// Whether the display is currently awake.
    fn is_awake(&self) -> bool;
}

#[cfg(test)]
pub mod mock {
    use super::{DeviceMonitor, WakeOutcome};
    use std::sync::Mutex;

    /// Mock device monitor that records every notification it receives.
    pub struct MockDeviceMonitor {
        awake: Mutex<bool>,
        notifications: Mutex<u32>,
    }

    impl MockDeviceMonitor {
        /// Monitor that starts awake.
        pub fn awake() -> Self {
            Self {
                awake: Mutex::new(true),
                notifications: Mutex::new(0),
            }
        }

        /// Monitor that starts asleep, so the next interaction wakes it.
        pub fn asleep() -> Self {
            Self {
                awake: Mutex::new(false),
                notifications: Mutex::new(0),
            }
        }

        /// Number of interactions reported so far.
        pub fn notification_count(&self) -> u32 {
            *self.notifications.lock().unwrap()
        }
    }

    impl DeviceMonitor for MockDeviceMonitor {
        fn note_interaction(&self) -> WakeOutcome {
            *self.notifications.lock().unwrap() += 1;
            let mut awake = self.awake.lock().unwrap();
            if *awake {
                WakeOutcome::AlreadyAwake
            } else {
                *awake = true;
                WakeOutcome::Woke
            }
        }

        fn is_awake(&self) -> bool {
            *self.awake.lock().unwrap()
        }
    }
}
