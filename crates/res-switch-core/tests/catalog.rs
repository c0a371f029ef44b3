use std::path::PathBuf;

use res_switch_core::storage::preset::save;
use res_switch_core::{Preset, PresetStore, DEFAULT_PRESETS};

fn store_path(dir: &tempfile::TempDir) -> PathBuf {
    dir.path().join("resolutions.json")
}

fn sample_catalog() -> Vec<Preset> {
    vec![
        Preset::new(3840, 2160, 60).unwrap(),
        Preset::new(800, 600, 75).unwrap(),
        Preset::new(3840, 2160, 60).unwrap(),
        Preset::new(2560, 1080, 144).unwrap(),
    ]
}

#[tokio::test]
async fn default_seed_is_stable_across_loads() {
    let tmp = tempfile::tempdir().unwrap();
    let path = store_path(&tmp);

    let first = PresetStore::load(&path).await.unwrap();
    let written = std::fs::read_to_string(&path).unwrap();
    let second = PresetStore::load(&path).await.unwrap();

    assert_eq!(first.presets(), &DEFAULT_PRESETS[..]);
    assert_eq!(second.presets(), first.presets());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), written);
}

#[tokio::test]
async fn save_then_load_round_trips() {
    let tmp = tempfile::tempdir().unwrap();
    let path = store_path(&tmp);
    let catalog = sample_catalog();

    save(&path, &catalog).await.unwrap();
    let store = PresetStore::load(&path).await.unwrap();

    assert_eq!(store.presets(), &catalog[..]);
}

#[tokio::test]
async fn persisted_file_is_plain_json() {
    let tmp = tempfile::tempdir().unwrap();
    let path = store_path(&tmp);
    PresetStore::load(&path).await.unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            { "width": 1920, "height": 1080, "refreshRate": 60 },
            { "width": 1280, "height": 720, "refreshRate": 60 }
        ])
    );
}

#[tokio::test]
async fn interrupted_write_never_corrupts_catalog() {
    let tmp = tempfile::tempdir().unwrap();
    let path = store_path(&tmp);
    let mut store = PresetStore::load(&path).await.unwrap();

    // A crash mid-save leaves only a truncated scratch file behind.
    let scratch = tmp.path().join(".resolutions.json.x7Qp2a.tmp");
    std::fs::write(&scratch, "[{\"width\": 19").unwrap();

    let reloaded = PresetStore::load(&path).await.unwrap();
    assert_eq!(reloaded.presets(), &DEFAULT_PRESETS[..]);

    store.add(Preset::new(1024, 768, 60).unwrap()).await.unwrap();
    let reloaded = PresetStore::load(&path).await.unwrap();
    assert_eq!(reloaded.len(), 3);
    assert_eq!(
        std::fs::read_to_string(&scratch).unwrap(),
        "[{\"width\": 19"
    );
}

#[tokio::test]
async fn hand_edited_file_is_accepted() {
    let tmp = tempfile::tempdir().unwrap();
    let path = store_path(&tmp);
    std::fs::write(
        &path,
        r#"[{"refreshRate":144,"height":1440,"width":2560}]"#,
    )
    .unwrap();

    let store = PresetStore::load(&path).await.unwrap();
    assert_eq!(store.presets(), &[Preset::new(2560, 1440, 144).unwrap()]);
}
