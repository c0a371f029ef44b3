//! Sequencing of user intents onto the store and the apply service.
//!
//! Selection is passed in with each call and never kept between calls. The
//! controller is owned by a single caller and mutations take `&mut self`, so
//! two intents can never interleave.

use std::path::Path;

use log::info;

use crate::config::{ApplyConfig, StoreConfig};
use crate::display::{ApplyOutcome, ApplyService};
use crate::error::{CoreError, IndexError};
use crate::storage::PresetStore;
use crate::types::{Preset, PresetEdit, PresetInput};

/// Asks the user to confirm a destructive action.
pub trait Confirm {
    fn confirm(&self, prompt: &str) -> bool;
}

/// Confirms everything. Used for `--force`.
pub struct AlwaysConfirm;

impl Confirm for AlwaysConfirm {
    fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

/// Result of a remove intent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed { index: usize, preset: Preset },
    Cancelled,
}

pub struct Controller {
    store: PresetStore,
    apply: ApplyService,
}

impl Controller {
    /// Load the catalog and set up the display tool.
    ///
    /// Fails if the catalog file exists but can't be loaded, in which case
    /// nothing is written to it.
    pub async fn open(store: StoreConfig, apply: ApplyConfig) -> Result<Self, CoreError> {
        let store = PresetStore::load(store.path).await?;
        Ok(Self::new(store, ApplyService::new(apply)))
    }

    pub fn new(store: PresetStore, apply: ApplyService) -> Self {
        Self { store, apply }
    }

    pub fn store_path(&self) -> &Path {
        self.store.path()
    }

    pub fn list(&self) -> &[Preset] {
        self.store.presets()
    }

    /// Turn a user-supplied index into a catalog position.
    pub fn resolve(&self, index: i64) -> Result<usize, IndexError> {
        let len = self.store.len();
        usize::try_from(index)
            .ok()
            .filter(|&i| i < len)
            .ok_or(IndexError { index, len })
    }

    pub fn show(&self, index: i64) -> Result<Preset, CoreError> {
        let position = self.resolve(index)?;
        Ok(*self.store.get(position)?)
    }

    pub async fn add(&mut self, input: &PresetInput) -> Result<usize, CoreError> {
        let preset = input.build()?;
        self.store.add(preset).await
    }

    /// Replace the preset at `index`, keeping fields the edit leaves out.
    pub async fn edit(&mut self, index: i64, edit: &PresetEdit) -> Result<Preset, CoreError> {
        let position = self.resolve(index)?;
        let current = *self.store.get(position)?;
        let updated = edit.build(&current)?;

        self.store.replace(position, updated).await?;
        Ok(updated)
    }

    pub async fn remove(
        &mut self,
        index: i64,
        confirm: &dyn Confirm,
    ) -> Result<RemoveOutcome, CoreError> {
        let position = self.resolve(index)?;
        let preset = *self.store.get(position)?;

        if !confirm.confirm(&format!("Remove preset #{} ({})?", position, preset)) {
            info!("Removal of preset #{} cancelled", position);
            return Ok(RemoveOutcome::Cancelled);
        }

        let preset = self.store.remove_at(position).await?;
        Ok(RemoveOutcome::Removed {
            index: position,
            preset,
        })
    }

    /// The command line `apply` would run for `index`.
    pub fn preview(&self, index: i64) -> Result<Vec<String>, CoreError> {
        let preset = self.show(index)?;
        Ok(self.apply.command_line(&preset))
    }

    /// Switch the display to the preset at `index`. Never touches the catalog.
    pub async fn apply(&self, index: i64) -> Result<ApplyOutcome, CoreError> {
        let preset = self.show(index)?;
        Ok(self.apply.apply(&preset).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ApplyError, PersistenceError};
    use crate::types::{Field, DEFAULT_PRESETS};

    struct Decline;

    impl Confirm for Decline {
        fn confirm(&self, _prompt: &str) -> bool {
            false
        }
    }

    async fn open(tmp: &tempfile::TempDir, tool: &str) -> Controller {
        Controller::open(
            StoreConfig::new(tmp.path().join("resolutions.json")),
            ApplyConfig::new(tmp.path().join(tool)).quiet(true),
        )
        .await
        .unwrap()
    }

    fn file_bytes(controller: &Controller) -> Vec<u8> {
        std::fs::read(controller.store_path()).unwrap()
    }

    #[tokio::test]
    async fn test_add_then_list() {
        let tmp = tempfile::tempdir().unwrap();
        let mut controller = open(&tmp, "qres").await;

        let index = controller
            .add(&PresetInput::new("3440", "1440", "100"))
            .await
            .unwrap();

        assert_eq!(index, 2);
        assert_eq!(controller.list()[2], Preset::new(3440, 1440, 100).unwrap());
    }

    #[tokio::test]
    async fn test_invalid_input_changes_nothing() {
        let tmp = tempfile::tempdir().unwrap();
        let mut controller = open(&tmp, "qres").await;
        let before = file_bytes(&controller);

        for (input, field) in [
            (PresetInput::new("0", "1080", "60"), Field::Width),
            (PresetInput::new("1920", "-5", "60"), Field::Height),
            (PresetInput::new("1920", "1080", "0"), Field::RefreshRate),
        ] {
            let err = controller.add(&input).await.unwrap_err();
            assert!(matches!(err, CoreError::Validation(ref e) if e.field == field));

            let edit = PresetEdit {
                width: Some(input.width.clone()),
                height: Some(input.height.clone()),
                refresh_rate: Some(input.refresh_rate.clone()),
            };
            let err = controller.edit(0, &edit).await.unwrap_err();
            assert!(matches!(err, CoreError::Validation(_)));
        }

        assert_eq!(controller.list(), &DEFAULT_PRESETS[..]);
        assert_eq!(file_bytes(&controller), before);
    }

    #[tokio::test]
    async fn test_index_bounds() {
        let tmp = tempfile::tempdir().unwrap();
        let mut controller = open(&tmp, "qres").await;
        let before = file_bytes(&controller);
        let edit = PresetEdit {
            width: Some("800".to_string()),
            ..Default::default()
        };

        for index in [2, -1, i64::MIN] {
            let err = controller.edit(index, &edit).await.unwrap_err();
            assert!(matches!(err, CoreError::Index(IndexError { len: 2, .. })));

            let err = controller.remove(index, &AlwaysConfirm).await.unwrap_err();
            assert!(matches!(err, CoreError::Index(_)));

            assert!(matches!(controller.apply(index).await, Err(CoreError::Index(_))));
        }

        assert_eq!(file_bytes(&controller), before);
    }

    #[tokio::test]
    async fn test_edit_keeps_other_fields() {
        let tmp = tempfile::tempdir().unwrap();
        let mut controller = open(&tmp, "qres").await;

        let updated = controller
            .edit(
                1,
                &PresetEdit {
                    refresh_rate: Some("120".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated, Preset::new(1280, 720, 120).unwrap());
        assert_eq!(controller.show(1).unwrap(), updated);
    }

    #[tokio::test]
    async fn test_remove_requires_confirmation() {
        let tmp = tempfile::tempdir().unwrap();
        let mut controller = open(&tmp, "qres").await;

        let outcome = controller.remove(0, &Decline).await.unwrap();
        assert_eq!(outcome, RemoveOutcome::Cancelled);
        assert_eq!(controller.list().len(), 2);

        let outcome = controller.remove(0, &AlwaysConfirm).await.unwrap();
        assert_eq!(
            outcome,
            RemoveOutcome::Removed {
                index: 0,
                preset: DEFAULT_PRESETS[0],
            }
        );
        assert_eq!(controller.list(), &DEFAULT_PRESETS[1..]);
    }

    #[tokio::test]
    async fn test_corrupt_catalog_refuses_to_open() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("resolutions.json");
        std::fs::write(&path, "not json").unwrap();

        let result = Controller::open(StoreConfig::new(&path), ApplyConfig::default()).await;
        assert!(matches!(
            result,
            Err(CoreError::Persistence(PersistenceError::Parse { .. }))
        ));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "not json");
    }

    #[tokio::test]
    async fn test_preview() {
        let tmp = tempfile::tempdir().unwrap();
        let controller = open(&tmp, "qres").await;

        let line = controller.preview(1).unwrap();
        assert_eq!(&line[1..], ["/x:1280", "/y:720", "/r:60"]);
    }

    #[tokio::test]
    async fn test_apply_failure_leaves_catalog_alone() {
        let tmp = tempfile::tempdir().unwrap();
        let controller = open(&tmp, "missing-tool").await;
        let before = file_bytes(&controller);

        let err = controller.apply(0).await.unwrap_err();
        assert!(matches!(err, CoreError::Apply(ApplyError::Launch { .. })));

        assert_eq!(controller.list(), &DEFAULT_PRESETS[..]);
        assert_eq!(file_bytes(&controller), before);
    }
}
