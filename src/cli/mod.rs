//! Command-line interface for foodsafety.

mod commands;
mod helpers;
mod icons;

pub use commands::{is_verbose, run};
