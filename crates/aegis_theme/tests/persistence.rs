use aegis_core::Document;
use aegis_theme::{
    DisabledStorage, FileStorage, MemoryStorage, PersistOutcome, Persister, StorageError,
    ThemeConfig, ThemeContext, ThemeId, ThemeScope, ThemeStorage,
};
use pretty_assertions::assert_eq;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

fn fast_config() -> ThemeConfig {
    ThemeConfig::default().with_debounce(Duration::from_millis(5))
}

/// Memory storage that also records every write
#[derive(Default)]
struct CountingStorage {
    inner: MemoryStorage,
    writes: AtomicUsize,
    log: Mutex<Vec<String>>,
}

impl ThemeStorage for CountingStorage {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.load(key)
    }

    fn store(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.writes.fetch_add(1, Ordering::SeqCst);
        self.log.lock().unwrap().push(value.to_string());
        self.inner.store(key, value)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.inner.remove(key)
    }
}

#[tokio::test]
async fn debounced_write_lands_after_flush() {
    let storage = Arc::new(MemoryStorage::new());
    let mut themes =
        ThemeContext::new(fast_config(), storage.clone()).with_document(Document::new());

    themes.apply("amethyst-dusk-light", true);
    let status = themes.flush().await;

    assert_eq!(
        status.outcome,
        PersistOutcome::Written {
            value: "amethyst-dusk-light".to_string()
        }
    );
    assert_eq!(
        storage.load("aegis-theme").unwrap().as_deref(),
        Some("amethyst-dusk-light")
    );
}

#[tokio::test]
async fn burst_of_switches_keeps_the_newest() {
    let storage = Arc::new(CountingStorage::default());
    let mut themes = ThemeContext::new(
        ThemeConfig::default().with_debounce(Duration::from_millis(50)),
        storage.clone(),
    )
    .with_document(Document::new());

    for id in ["verdant-jade", "sapphire-tide", "rose-quartz-light", "arctic-frost"] {
        themes.apply(id, true);
    }
    let status = themes.flush().await;

    assert_eq!(status.ticket, 4);
    assert_eq!(
        storage.load("aegis-theme").unwrap().as_deref(),
        Some("arctic-frost")
    );
    let log = storage.log.lock().unwrap().clone();
    assert!(log.len() < 4, "writes were not coalesced: {log:?}");
    assert_eq!(log.last().map(String::as_str), Some("arctic-frost"));
}

#[tokio::test]
async fn writes_land_in_request_order() {
    let storage = Arc::new(CountingStorage::default());
    let mut persister = Persister::new(storage.clone(), "k", Duration::ZERO);

    let first = persister.schedule("a");
    persister.wait(first).await;
    let second = persister.schedule("b");
    let status = persister.wait(second).await;

    assert!(second > first);
    assert_eq!(status.ticket, second.get());
    assert_eq!(*storage.log.lock().unwrap(), vec!["a", "b"]);
    assert_eq!(storage.writes.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn status_starts_idle() {
    let persister = Persister::new(Arc::new(MemoryStorage::new()), "k", Duration::ZERO);
    assert_eq!(persister.key(), "k");
    assert_eq!(persister.status().outcome, PersistOutcome::Idle);
    assert_eq!(persister.flush().await.ticket, 0);
}

#[tokio::test]
async fn disabled_storage_reports_failure() {
    let mut themes = ThemeContext::new(fast_config(), Arc::new(DisabledStorage))
        .with_document(Document::new());
    assert_eq!(themes.current(), ThemeId::DEFAULT);

    themes.apply("copper-forge", true);
    let status = themes.flush().await;

    assert!(
        matches!(status.outcome, PersistOutcome::Failed { ref reason } if reason.contains("disabled")),
        "{status:?}"
    );
    // The theme is still active even though it could not be saved.
    assert_eq!(themes.current().as_str(), "copper-forge");
    assert_eq!(themes.persist_status(), status);
}

#[test]
fn restores_persisted_theme_and_scope() {
    let storage = Arc::new(MemoryStorage::new());
    storage.store("aegis-theme", "midnight-aurora-light").unwrap();
    storage.store("aegis-theme-scope", "page").unwrap();

    let themes = ThemeContext::new(ThemeConfig::default(), storage);
    assert_eq!(themes.current().as_str(), "midnight-aurora-light");
    assert_eq!(themes.scope(), ThemeScope::Page);
}

#[test]
fn invalid_persisted_values_fall_back() {
    let storage = Arc::new(MemoryStorage::new());
    storage.store("aegis-theme", "vaporwave").unwrap();
    storage.store("aegis-theme-scope", "galaxy").unwrap();

    let config = ThemeConfig {
        default_theme: "obsidian-steel".parse().unwrap(),
        ..ThemeConfig::default()
    };
    let themes = ThemeContext::new(config, storage);
    assert_eq!(themes.current().as_str(), "obsidian-steel");
    assert_eq!(themes.scope(), ThemeScope::Global);
}

#[test]
fn custom_storage_keys_are_honoured() {
    let storage = Arc::new(MemoryStorage::new());
    let config = ThemeConfig {
        theme_key: "care-home-theme".to_string(),
        scope_key: "care-home-scope".to_string(),
        ..ThemeConfig::default()
    };
    let mut themes = ThemeContext::new(config, storage.clone()).with_document(Document::new());
    themes.apply("verdant-jade", true);
    themes.set_scope(ThemeScope::Page);

    assert_eq!(
        storage.load("care-home-theme").unwrap().as_deref(),
        Some("verdant-jade")
    );
    assert_eq!(
        storage.load("care-home-scope").unwrap().as_deref(),
        Some("page")
    );
    assert_eq!(storage.load("aegis-theme").unwrap(), None);
}

#[tokio::test]
async fn file_storage_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("prefs").join("state.toml");

    {
        let mut themes = ThemeContext::new(fast_config(), Arc::new(FileStorage::new(&path)))
            .with_document(Document::new());
        themes.apply("crimson-ember", true);
        themes.set_scope(ThemeScope::Page);
        themes.flush().await;
    }

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("aegis-theme = \"crimson-ember\""), "{contents}");

    let themes = ThemeContext::new(fast_config(), Arc::new(FileStorage::new(&path)));
    assert_eq!(themes.current().as_str(), "crimson-ember");
    assert_eq!(themes.scope(), ThemeScope::Page);
}

#[test]
fn file_storage_missing_file_is_empty() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path().join("absent.toml"));

    assert_eq!(storage.load("aegis-theme").unwrap(), None);
    storage.remove("aegis-theme").unwrap();
    assert!(!storage.path().exists());
}

#[test]
fn corrupt_file_falls_back_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("state.toml");
    std::fs::write(&path, "this is = = not toml").unwrap();

    let storage = FileStorage::new(&path);
    assert!(matches!(
        storage.load("aegis-theme"),
        Err(StorageError::Parse(_))
    ));

    let themes = ThemeContext::new(ThemeConfig::default(), Arc::new(storage));
    assert_eq!(themes.current(), ThemeId::DEFAULT);
}

#[tokio::test]
async fn reset_clears_persisted_preferences() {
    let storage = Arc::new(MemoryStorage::new());
    let mut themes = ThemeContext::new(
        ThemeConfig::default().with_debounce(Duration::from_millis(30)),
        storage.clone(),
    )
    .with_document(Document::new());

    themes.apply("rose-quartz", true);
    themes.set_scope(ThemeScope::Page);
    // Reset before the debounced write fires.
    themes.reset();
    let status = themes.flush().await;

    assert_eq!(status.outcome, PersistOutcome::Cleared);
    assert_eq!(themes.current(), ThemeId::DEFAULT);
    assert_eq!(themes.scope(), ThemeScope::Global);
    assert_eq!(storage.load("aegis-theme").unwrap(), None);
    assert_eq!(storage.load("aegis-theme-scope").unwrap(), None);
}

#[test]
fn reset_without_a_document_still_restores_defaults() {
    let storage = Arc::new(MemoryStorage::new());
    storage.store("aegis-theme", "copper-forge-light").unwrap();
    storage.store("aegis-theme-scope", "page").unwrap();

    let mut themes = ThemeContext::new(ThemeConfig::default(), storage.clone());
    assert_eq!(themes.current().as_str(), "copper-forge-light");

    themes.reset();
    assert_eq!(themes.current(), ThemeId::DEFAULT);
    assert_eq!(themes.scope(), ThemeScope::Global);
    // No runtime: the clear ran inline.
    assert_eq!(storage.load("aegis-theme").unwrap(), None);
    assert_eq!(storage.load("aegis-theme-scope").unwrap(), None);
}
