//! Application layer with the navigation shell.

/// Navigation shell: view slot state machine and event filter policy.
pub mod shell;

pub use shell::NavigationShell;
