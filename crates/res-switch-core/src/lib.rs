//! Shared core library for res-switch.
//!
//! Owns the preset catalog and its JSON backing file, and drives an external
//! QRes-compatible tool to change the active display mode.

pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod storage;
pub mod types;

pub use config::{ApplyConfig, StoreConfig};
pub use controller::{AlwaysConfirm, Confirm, Controller, RemoveOutcome};
pub use display::{ApplyOutcome, ApplyService};
pub use error::{CoreError, Result};
pub use storage::PresetStore;
pub use types::{Field, Preset, PresetEdit, PresetInput, DEFAULT_PRESETS};
