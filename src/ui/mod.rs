//! Console presentation layer
//!
//! Result lines go to stdout through these helpers so every command renders
//! counts, markers and colours the same way. Diagnostics go through `tracing`.

pub mod display;

pub use display::{print_clean_outcome, print_validation_result};
