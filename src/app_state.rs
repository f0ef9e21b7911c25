use std::sync::{Arc, Mutex, MutexGuard};

use crate::{
    config::Config,
    errors::{AppError, AppResult},
    repositories::{FileKeyValueRepository, KeyValueRepository},
    services::QuizStore,
};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<Mutex<QuizStore>>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> AppResult<Self> {
        let repository = FileKeyValueRepository::new(config.storage_dir.clone());
        log::info!("Using quiz storage in {}", repository.base_dir().display());
        Self::with_repository(config, Box::new(repository))
    }

    pub fn with_repository(config: Config, repository: Box<dyn KeyValueRepository>) -> AppResult<Self> {
        let store = QuizStore::load(repository, &config.storage_key)?;
        if let Some(warning) = store.load_warning() {
            log::warn!("{}", warning.message);
        }

        Ok(Self {
            store: Arc::new(Mutex::new(store)),
            config: Arc::new(config),
        })
    }

    pub fn lock_store(&self) -> AppResult<MutexGuard<'_, QuizStore>> {
        self.store
            .lock()
            .map_err(|_| AppError::InternalError("quiz store lock poisoned".to_string()))
    }
}
