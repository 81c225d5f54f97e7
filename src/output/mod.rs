//! Terminal output formatting
//!
//! Display utilities for one-shot command results.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_stats};
