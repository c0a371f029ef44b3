//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use res_switch_core::config::{default_store_path, DEFAULT_TOOL_PATH};
use res_switch_core::{ApplyConfig, PresetEdit, PresetInput, StoreConfig};

/// res-switch - Manage display-mode presets and apply them with QRes
#[derive(Parser, Debug)]
#[command(name = "res-switch")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output in JSON format
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose output (debug logging and the display tool's own output)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Preset file (default: resolutions.json next to the executable)
    #[arg(long, global = true, env = "RES_SWITCH_STORE")]
    pub store: Option<PathBuf>,

    /// Path to the QRes-compatible display tool
    #[arg(long, global = true, env = "RES_SWITCH_TOOL", default_value = DEFAULT_TOOL_PATH)]
    pub tool: PathBuf,

    /// Display tool timeout in milliseconds (0 = wait forever)
    #[arg(long, global = true, default_value = "30000", env = "RES_SWITCH_TIMEOUT")]
    pub timeout: u64,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    pub fn store_config(&self) -> StoreConfig {
        StoreConfig::new(self.store.clone().unwrap_or_else(default_store_path))
    }

    pub fn apply_config(&self) -> ApplyConfig {
        ApplyConfig::new(&self.tool)
            .with_timeout_ms(self.timeout)
            .quiet(self.tool_output_hidden())
    }

    /// The display tool's output is shown only with `--verbose` in table mode.
    pub fn tool_output_hidden(&self) -> bool {
        self.json || !self.verbose
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List all presets
    List,

    /// Show a single preset
    Show(ShowArgs),

    /// Add a preset
    Add(AddArgs),

    /// Change a preset
    Edit(EditArgs),

    /// Remove a preset
    Remove(RemoveArgs),

    /// Switch the display to a preset
    Apply(ApplyArgs),
}

#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Preset index as shown by `list`
    #[arg(allow_negative_numbers = true)]
    pub index: i64,
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// Width in pixels
    #[arg(allow_negative_numbers = true)]
    pub width: String,

    /// Height in pixels
    #[arg(allow_negative_numbers = true)]
    pub height: String,

    /// Refresh rate in Hz
    #[arg(allow_negative_numbers = true)]
    pub refresh: String,
}

impl AddArgs {
    pub fn input(&self) -> PresetInput {
        PresetInput::new(&self.width, &self.height, &self.refresh)
    }
}

#[derive(Args, Debug)]
pub struct EditArgs {
    /// Preset index as shown by `list`
    #[arg(allow_negative_numbers = true)]
    pub index: i64,

    /// New width in pixels
    #[arg(long, allow_negative_numbers = true)]
    pub width: Option<String>,

    /// New height in pixels
    #[arg(long, allow_negative_numbers = true)]
    pub height: Option<String>,

    /// New refresh rate in Hz
    #[arg(short, long, allow_negative_numbers = true)]
    pub refresh: Option<String>,
}

impl EditArgs {
    pub fn edit(&self) -> PresetEdit {
        PresetEdit {
            width: self.width.clone(),
            height: self.height.clone(),
            refresh_rate: self.refresh.clone(),
        }
    }
}

#[derive(Args, Debug)]
pub struct RemoveArgs {
    /// Preset index as shown by `list`
    #[arg(allow_negative_numbers = true)]
    pub index: i64,

    /// Skip confirmation
    #[arg(short, long)]
    pub force: bool,
}

#[derive(Args, Debug)]
pub struct ApplyArgs {
    /// Preset index as shown by `list`
    #[arg(allow_negative_numbers = true)]
    pub index: i64,

    /// Print the command line instead of running it
    #[arg(long)]
    pub dry_run: bool,
}
