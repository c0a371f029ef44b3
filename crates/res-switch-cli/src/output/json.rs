//! JSON-formatted output for CLI.

use std::path::Path;

use serde::Serialize;
use serde_json::{json, Value};

use super::{Change, OutputFormatter};
use res_switch_core::{ApplyOutcome, Preset};

pub struct JsonOutput;

impl JsonOutput {
    pub fn new() -> Self {
        Self
    }

    fn to_json<T: Serialize>(value: &T) -> String {
        serde_json::to_string_pretty(value).unwrap_or_else(|_| "{}".to_string())
    }

    fn preset_value(index: usize, preset: &Preset) -> Value {
        json!({
            "index": index,
            "width": preset.width(),
            "height": preset.height(),
            "refreshRate": preset.refresh_rate()
        })
    }
}

impl Default for JsonOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputFormatter for JsonOutput {
    fn format_presets(&self, presets: &[Preset], store: &Path) -> String {
        let items: Vec<Value> = presets
            .iter()
            .enumerate()
            .map(|(index, preset)| Self::preset_value(index, preset))
            .collect();

        Self::to_json(&json!({
            "presets": items,
            "count": presets.len(),
            "store": store.display().to_string()
        }))
    }

    fn format_preset(&self, index: usize, preset: &Preset) -> String {
        Self::to_json(&Self::preset_value(index, preset))
    }

    fn format_change(&self, change: Change, index: usize, preset: &Preset) -> String {
        Self::to_json(&json!({
            "success": true,
            "change": change.as_str(),
            "preset": Self::preset_value(index, preset)
        }))
    }

    fn format_applied(&self, index: usize, outcome: &ApplyOutcome) -> String {
        Self::to_json(&json!({
            "success": true,
            "preset": Self::preset_value(index, &outcome.preset),
            "elapsedMs": outcome.elapsed.as_millis() as u64
        }))
    }

    fn format_preview(&self, index: usize, command: &[String]) -> String {
        Self::to_json(&json!({
            "index": index,
            "command": command
        }))
    }

    fn format_message(&self, message: &str) -> String {
        Self::to_json(&json!({ "message": message }))
    }
}
