//! API Facades Layer
//!
//! Provides the console bridge functions called from the managed runtime.
//! These facades maintain exact C function signatures so the managed host
//! can bind them directly.
//!
//! All facades call underlying Rust modules from inner layers.

pub mod console_facades;

pub use console_facades::*;
