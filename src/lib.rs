//! Cabview - a terminal dashboard shell for an onboard driving companion.
//!
//! This crate provides three mutually-exclusive full-screen views (home,
//! settings, onboarding) behind a navigation shell that owns which view is
//! visible and filters raw input before the active view sees it.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the navigation shell.
pub mod application;
/// Domain layer containing the view model, event model, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;
/// Presentation layer containing UI components and event handling.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "cabview";

/// Terms version a completed onboarding record must match.
///
/// Bumping this runs onboarding again on the next start.
pub const TERMS_VERSION: u32 = 2;
