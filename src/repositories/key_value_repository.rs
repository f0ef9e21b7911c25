use std::{
    collections::HashMap,
    fs, io,
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{AppError, AppResult};

static STORAGE_KEY_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[A-Za-z0-9_.-]+$").expect("STORAGE_KEY_REGEX is a valid regex pattern")
});

/// Durable string storage addressed by key.
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueRepository: Send {
    fn get(&self, key: &str) -> AppResult<Option<String>>;
    fn set(&mut self, key: &str, value: &str) -> AppResult<()>;
}

pub fn validate_key(key: &str) -> AppResult<()> {
    if STORAGE_KEY_REGEX.is_match(key) {
        Ok(())
    } else {
        Err(AppError::validation(format!("Invalid storage key '{}'", key)))
    }
}

/// Stores every key as `<base_dir>/<key>.json`.
pub struct FileKeyValueRepository {
    base_dir: PathBuf,
}

impl FileKeyValueRepository {
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!("{}.json", key))
    }
}

impl KeyValueRepository for FileKeyValueRepository {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        validate_key(key)?;
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => Ok(Some(raw)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        validate_key(key)?;
        fs::create_dir_all(&self.base_dir)?;

        // Readers never see a half-written document.
        let target = self.path_for(key);
        let staging = self.base_dir.join(format!(".{}.json.tmp", key));
        fs::write(&staging, value)?;
        fs::rename(&staging, &target)?;

        log::debug!("Wrote {} bytes to {}", value.len(), target.display());
        Ok(())
    }
}

/// Process-local storage. Clones share the same map.
#[derive(Clone, Default)]
pub struct InMemoryKeyValueRepository {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemoryKeyValueRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let repository = Self::new();
        if let Ok(mut entries) = repository.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
        repository
    }
}

impl KeyValueRepository for InMemoryKeyValueRepository {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        validate_key(key)?;
        let entries = self
            .entries
            .lock()
            .map_err(|_| AppError::InternalError("storage lock poisoned".to_string()))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> AppResult<()> {
        validate_key(key)?;
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| AppError::InternalError("storage lock poisoned".to_string()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
