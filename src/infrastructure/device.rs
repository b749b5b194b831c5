//! Display wake state tracking.

use parking_lot::Mutex;
use std::time::{Duration, Instant};
use tracing::info;

use crate::domain::ports::{DeviceMonitor, WakeOutcome};

/// Tracks display awake state from interaction reports and an inactivity
/// timeout.
///
/// Interaction reports arrive through the [`DeviceMonitor`] port on every
/// press or move; the host tick drives [`InteractionMonitor::poll`], which
/// performs the timeout transition to asleep. A zero timeout disables
/// blanking entirely.
pub struct InteractionMonitor {
    timeout: Duration,
    state: Mutex<MonitorState>,
}

struct MonitorState {
    awake: bool,
    last_interaction: Instant,
}

impl InteractionMonitor {
    /// Creates a monitor that starts awake and blanks after `timeout` of
    /// inactivity.
    #[must_use]
    pub fn new(timeout: Duration) -> Self {
        Self {
            timeout,
            state: Mutex::new(MonitorState {
                awake: true,
                last_interaction: Instant::now(),
            }),
        }
    }

    /// Applies the inactivity timeout. Returns true if the display just went
    /// to sleep.
    pub fn poll(&self) -> bool {
        if self.timeout.is_zero() {
            return false;
        }

        let mut state = self.state.lock();
        if state.awake && state.last_interaction.elapsed() >= self.timeout {
            state.awake = false;
            info!("Display sleeping after inactivity");
            return true;
        }
        false
    }
}

impl DeviceMonitor for InteractionMonitor {
    fn note_interaction(&self) -> WakeOutcome {
        let mut state = self.state.lock();
        state.last_interaction = Instant::now();
        if state.awake {
            WakeOutcome::AlreadyAwake
        } else {
            state.awake = true;
            info!("Display woken by interaction");
            WakeOutcome::Woke
        }
    }

    fn is_awake(&self) -> bool {
        self.state.lock().awake
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn never_blanks() -> InteractionMonitor {
        InteractionMonitor::new(Duration::from_secs(3600))
    }

    #[test]
    fn test_monitor_starts_awake() {
        let monitor = never_blanks();

        assert!(monitor.is_awake());
        assert_eq!(monitor.note_interaction(), WakeOutcome::AlreadyAwake);
    }

    #[test]
    fn test_poll_before_timeout_keeps_display_awake() {
        let monitor = never_blanks();

        assert!(!monitor.poll());
        assert!(monitor.is_awake());
    }

    #[test]
    fn test_poll_after_timeout_sleeps_once() {
        let monitor = InteractionMonitor::new(Duration::from_nanos(1));
        std::thread::sleep(Duration::from_millis(2));

        assert!(monitor.poll());
        assert!(!monitor.is_awake());

        // Already asleep, so no further transition.
        assert!(!monitor.poll());
    }

    #[test]
    fn test_interaction_wakes_sleeping_display() {
        let monitor = InteractionMonitor::new(Duration::from_nanos(1));
        std::thread::sleep(Duration::from_millis(2));
        monitor.poll();

        assert_eq!(monitor.note_interaction(), WakeOutcome::Woke);
        assert!(monitor.is_awake());
        assert_eq!(monitor.note_interaction(), WakeOutcome::AlreadyAwake);
    }

    #[test]
    fn test_zero_timeout_disables_blanking() {
        let monitor = InteractionMonitor::new(Duration::ZERO);
        std::thread::sleep(Duration::from_millis(2));

        assert!(!monitor.poll());
        assert!(monitor.is_awake());
    }

    #[test]
    fn test_interaction_restarts_the_timeout() {
        let monitor = InteractionMonitor::new(Duration::from_secs(3600));
        monitor.note_interaction();

        assert!(!monitor.poll());
        assert!(monitor.is_awake());
    }
}
