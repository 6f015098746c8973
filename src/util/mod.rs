//! Utility functions and helpers.

mod debounce;

pub use debounce::Debouncer;
