//! Shared test helpers: filesystem doubles, sample data and assertions.

#[cfg(any(test, debug_assertions))]
pub mod mocks;

#[cfg(any(test, debug_assertions))]
pub mod fixtures;

#[cfg(any(test, debug_assertions))]
pub mod assertions;
