//! Helper functions for CLI output

mod date;

pub use date::*;
