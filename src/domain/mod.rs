//! Domain layer with the view slot model, the raw event model, and port
//! definitions.

/// Error types.
pub mod errors;
/// Raw input event model and the filter seam.
pub mod input;
/// Port definitions.
pub mod ports;
/// View slot model and visibility mapping.
pub mod view;

pub use errors::StoreError;
pub use input::{EventDisposition, EventFilter, EventKind, EventTarget, InputEvent};
pub use ports::{DeviceMonitor, OnboardingStore, WakeOutcome};
pub use view::{OnboardingStatus, ViewChange, ViewCommand, ViewId, ViewSlot};
