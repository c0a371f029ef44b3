//! Durable storage for the preset catalog.

pub mod preset;

pub use preset::PresetStore;
