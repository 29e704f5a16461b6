//! Adapters Layer: Unix Console Integration
//!
//! Provides Unix-specific console control.
//! Based on WindowSize.c
//! Depends on Entities layer.

pub mod sys_console;

pub use sys_console::{get_window_size, set_window_size, standard_fileno};
