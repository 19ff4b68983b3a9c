use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::error::{Error, Result};
use crate::models::answer::AnswerSet;

/// String key-value medium the quiz state lives in.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
}

/// One `<key>.json` file per key under `root`.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl KeyValueStore for FileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        std::fs::create_dir_all(&self.root)?;
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value)?;
        if let Err(e) = std::fs::rename(&tmp, &path) {
            std::fs::remove_file(&tmp).ok();
            return Err(e.into());
        }
        Ok(())
    }
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let items = self
            .items
            .lock()
            .map_err(|_| Error::Storage("memory store lock poisoned".to_string()))?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let mut items = self
            .items
            .lock()
            .map_err(|_| Error::Storage("memory store lock poisoned".to_string()))?;
        items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

pub fn encode_answers(answers: &AnswerSet) -> Result<String> {
    Ok(serde_json::to_string(answers)?)
}

/// Missing or malformed input decodes to the all-unanswered set.
pub fn decode_answers(raw: Option<&str>) -> AnswerSet {
    match raw {
        Some(raw) => serde_json::from_str(raw).unwrap_or_else(|e| {
            tracing::warn!(error = %e, "Discarding corrupt persisted quiz state");
            AnswerSet::empty()
        }),
        None => AnswerSet::empty(),
    }
}

/// Best-effort persistence of the answer set under a single fixed key.
#[derive(Clone)]
pub struct StorageService {
    store: Arc<dyn KeyValueStore>,
    key: String,
}

impl StorageService {
    pub fn new(store: Arc<dyn KeyValueStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn load_answers(&self) -> AnswerSet {
        match self.store.get_item(&self.key) {
            Ok(raw) => decode_answers(raw.as_deref()),
            Err(e) => {
                tracing::warn!(error = %e, key = %self.key, "Quiz state unreadable, starting fresh");
                AnswerSet::empty()
            }
        }
    }

    pub fn save_answers(&self, answers: &AnswerSet) {
        let result = encode_answers(answers).and_then(|raw| self.store.set_item(&self.key, &raw));
        if let Err(e) = result {
            tracing::warn!(error = %e, key = %self.key, "Failed to persist quiz state");
        }
    }
}
