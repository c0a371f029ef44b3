//! Preset catalog storage.
//!
//! The whole catalog lives in one JSON file. Writes go to a uniquely named
//! temp file in the same directory that is renamed over the target, so a
//! reader sees either the previous or the new catalog, never a mix.

use std::ffi::OsString;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use log::{debug, info};
use tokio::{fs, task};

use crate::error::{CoreError, IndexError, PersistenceError};
use crate::types::{Preset, DEFAULT_PRESETS};

/// Suffix of the scratch files used while saving.
const TEMP_SUFFIX: &str = ".tmp";

/// Owner of the in-memory catalog and its backing file.
///
/// Every mutation is written to disk before it becomes visible in memory, so
/// a failed save leaves both at the last good state.
#[derive(Debug)]
pub struct PresetStore {
    path: PathBuf,
    presets: Vec<Preset>,
}

impl PresetStore {
    /// Load the catalog from `path`.
    ///
    /// A missing file is seeded with [`DEFAULT_PRESETS`], which are written
    /// out straight away. A file that exists but can't be read or parsed is an
    /// error; it is never replaced with defaults.
    pub async fn load(path: impl Into<PathBuf>) -> Result<Self, PersistenceError> {
        let path = path.into();

        let content = match fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                info!("No preset file at {}, seeding defaults", path.display());
                let presets = DEFAULT_PRESETS.to_vec();
                save(&path, &presets).await?;
                return Ok(Self { path, presets });
            }
            Err(source) => return Err(PersistenceError::Read { path, source }),
        };

        let presets = match parse(&content) {
            Ok(presets) => presets,
            Err(source) => return Err(PersistenceError::Parse { path, source }),
        };

        debug!("Loaded {} preset(s) from {}", presets.len(), path.display());

        Ok(Self { path, presets })
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All presets in display order.
    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    pub fn len(&self) -> usize {
        self.presets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }

    /// Look up a preset by position.
    pub fn get(&self, index: usize) -> Result<&Preset, IndexError> {
        self.presets.get(index).ok_or(IndexError {
            index: index_for_error(index),
            len: self.presets.len(),
        })
    }

    /// Append a preset and persist. Returns its index.
    pub async fn add(&mut self, preset: Preset) -> Result<usize, CoreError> {
        let mut next = self.presets.clone();
        next.push(preset);

        self.commit(next).await?;

        let index = self.presets.len() - 1;
        info!("Added preset #{}: {}", index, preset);
        Ok(index)
    }

    /// Replace the preset at `index` and persist.
    pub async fn replace(&mut self, index: usize, preset: Preset) -> Result<(), CoreError> {
        self.get(index)?;

        let mut next = self.presets.clone();
        next[index] = preset;

        self.commit(next).await?;

        info!("Replaced preset #{} with {}", index, preset);
        Ok(())
    }

    /// Remove the preset at `index` and persist. Returns the removed value.
    pub async fn remove_at(&mut self, index: usize) -> Result<Preset, CoreError> {
        self.get(index)?;

        let mut next = self.presets.clone();
        let removed = next.remove(index);

        self.commit(next).await?;

        info!("Removed preset #{}: {}", index, removed);
        Ok(removed)
    }

    async fn commit(&mut self, next: Vec<Preset>) -> Result<(), PersistenceError> {
        save(&self.path, &next).await?;
        self.presets = next;
        Ok(())
    }
}

/// Serialize `presets` and atomically replace the file at `path`.
///
/// Missing parent directories are created.
pub async fn save(path: &Path, presets: &[Preset]) -> Result<(), PersistenceError> {
    let content = serde_json::to_string_pretty(presets).map_err(PersistenceError::Encode)?;
    let target = path.to_path_buf();

    let handle = task::spawn_blocking(move || write_atomic(&target, content.as_bytes()));
    let result = match handle.await {
        Ok(result) => result,
        Err(e) => Err(io::Error::from(e)),
    };

    if let Err(source) = result {
        return Err(PersistenceError::Write {
            path: path.to_path_buf(),
            source,
        });
    }

    debug!("Saved {} preset(s) to {}", presets.len(), path.display());
    Ok(())
}

/// Parse catalog file content. Blank content and `null` are an empty catalog.
fn parse(content: &str) -> Result<Vec<Preset>, serde_json::Error> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    let presets: Option<Vec<Preset>> = serde_json::from_str(content)?;
    Ok(presets.unwrap_or_default())
}

/// Write `bytes` to a fresh temp file next to `path`, sync it and rename it
/// over `path`. The temp file is deleted on every error path.
fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent)?;
            parent
        }
        _ => Path::new("."),
    };

    let mut temp = tempfile::Builder::new()
        .prefix(&temp_prefix(path))
        .suffix(TEMP_SUFFIX)
        .tempfile_in(dir)?;
    temp.write_all(bytes)?;
    temp.as_file().sync_all()?;
    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// `.resolutions.json.` for `resolutions.json`; tempfile appends a random part.
fn temp_prefix(path: &Path) -> OsString {
    let mut prefix = OsString::from(".");
    prefix.push(path.file_name().unwrap_or_default());
    prefix.push(".");
    prefix
}

fn index_for_error(index: usize) -> i64 {
    i64::try_from(index).unwrap_or(i64::MAX)
}
