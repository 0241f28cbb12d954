//! Shared test utilities
//!
//! A scripted console, enrollment fixtures and assertions used by the unit
//! tests and by the integration tests under `tests/`.

#[cfg(any(test, debug_assertions))]
pub mod mocks;

#[cfg(any(test, debug_assertions))]
pub mod fixtures;

#[cfg(any(test, debug_assertions))]
pub mod assertions;
