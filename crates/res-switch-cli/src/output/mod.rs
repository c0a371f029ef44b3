//! Output formatting for CLI results.

pub mod json;
pub mod table;

use std::path::Path;

pub use json::JsonOutput;
pub use table::TableOutput;

use res_switch_core::{ApplyOutcome, Preset};

/// What happened to a preset in a mutating command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Change {
    Added,
    Updated,
    Removed,
}

impl Change {
    pub fn as_str(&self) -> &'static str {
        match self {
            Change::Added => "added",
            Change::Updated => "updated",
            Change::Removed => "removed",
        }
    }
}

/// Output formatter trait
pub trait OutputFormatter {
    /// Format the whole catalog
    fn format_presets(&self, presets: &[Preset], store: &Path) -> String;

    /// Format a single preset
    fn format_preset(&self, index: usize, preset: &Preset) -> String;

    /// Format the result of add/edit/remove
    fn format_change(&self, change: Change, index: usize, preset: &Preset) -> String;

    /// Format a successful apply
    fn format_applied(&self, index: usize, outcome: &ApplyOutcome) -> String;

    /// Format the command line a dry run would execute
    fn format_preview(&self, index: usize, command: &[String]) -> String;

    /// Format a generic message
    fn format_message(&self, message: &str) -> String;
}

/// Get the appropriate formatter based on JSON flag
pub fn get_formatter(json: bool) -> Box<dyn OutputFormatter> {
    if json {
        Box::new(JsonOutput::new())
    } else {
        Box::new(TableOutput::new())
    }
}
