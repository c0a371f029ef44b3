//! Applying presets to the active display.

pub mod apply;

pub use apply::{ApplyOutcome, ApplyService};
