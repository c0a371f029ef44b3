//! Table-formatted output for CLI.

use std::path::Path;

use colored::*;
use comfy_table::{Cell, CellAlignment, ContentArrangement, Table};

use super::{Change, OutputFormatter};
use res_switch_core::{ApplyOutcome, Preset};

pub struct TableOutput;

impl TableOutput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TableOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for TableOutput {
    fn format_presets(&self, presets: &[Preset], store: &Path) -> String {
        if presets.is_empty() {
            return format!("No presets saved in {}.", store.display());
        }

        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["#", "Width", "Height", "Refresh Rate"]);

        for (index, preset) in presets.iter().enumerate() {
            table.add_row(vec![
                Cell::new(index),
                Cell::new(preset.width()).set_alignment(CellAlignment::Right),
                Cell::new(preset.height()).set_alignment(CellAlignment::Right),
                Cell::new(format!("{} Hz", preset.refresh_rate()))
                    .set_alignment(CellAlignment::Right),
            ]);
        }

        format!("{}\n\n{} preset(s) total", table, presets.len())
    }

    fn format_preset(&self, index: usize, preset: &Preset) -> String {
        let lines = [
            format!("Preset #{}", index),
            format!("  Width:        {}", preset.width()),
            format!("  Height:       {}", preset.height()),
            format!("  Refresh Rate: {} Hz", preset.refresh_rate()),
        ];
        lines.join("\n")
    }

    fn format_change(&self, change: Change, index: usize, preset: &Preset) -> String {
        format!("{} Preset #{} {}: {}", "[OK]".green(), index, change.as_str(), preset)
    }

    fn format_applied(&self, index: usize, outcome: &ApplyOutcome) -> String {
        format!(
            "{} Applied preset #{} ({}) in {}ms",
            "[OK]".green(),
            index,
            outcome.preset,
            outcome.elapsed.as_millis()
        )
    }

    fn format_preview(&self, _index: usize, command: &[String]) -> String {
        command.join(" ")
    }

    fn format_message(&self, message: &str) -> String {
        message.to_string()
    }
}
