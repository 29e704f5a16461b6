//! Entities Layer: Common Console Types
//!
//! Provides the platform-independent value types shared by the console
//! bridge. This crate contains no platform code and no dependencies; the
//! platform-specific layers build on the types defined here.
//!
//! ## Modules
//!
//! - **[`winsize`]**: Terminal window geometry as exchanged with the
//!   terminal driver and the managed caller.
//! - **[`standard_stream`]**: The closed set of standard stream selectors.

pub mod standard_stream;
pub mod winsize;

pub use standard_stream::StandardStream;
pub use winsize::WinSize;
