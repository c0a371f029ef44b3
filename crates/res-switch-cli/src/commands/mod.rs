//! Command implementations.

pub mod apply;
pub mod preset;

pub use apply::run_apply;
pub use preset::{run_add, run_edit, run_list, run_remove, run_show};
