//! Application state management
use flashcards_core::{Config, CoreError, Flashcards, Result};
use parking_lot::RwLock;
use std::sync::Arc;

/// Thread-safe application state wrapper
///
/// Cloned into every command invocation; all clones share one store.
#[derive(Clone)]
pub struct AppState {
    flashcards: Arc<RwLock<Option<Flashcards>>>,
}

impl AppState {
    pub fn new() -> Result<Self> {
        Self::with_config(Config::default())
    }

    pub fn with_config(config: Config) -> Result<Self> {
        tracing::info!(path = %config.database_path.display(), "Opening question store");
        Ok(Self::from_flashcards(Flashcards::new(config)?))
    }

    pub fn from_flashcards(flashcards: Flashcards) -> Self {
        Self {
            flashcards: Arc::new(RwLock::new(Some(flashcards))),
        }
    }

    pub fn initialize(&self) -> Result<usize> {
        self.with_flashcards(|flashcards| flashcards.initialize())
    }

    pub fn with_flashcards<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&Flashcards) -> Result<T>,
    {
        let guard = self.flashcards.read();
        match guard.as_ref() {
            Some(flashcards) => f(flashcards),
            None => Err(CoreError::NotInitialized),
        }
    }

    /// Drop the store; later commands fail with `NotInitialized`.
    pub fn shutdown(&self) {
        if self.flashcards.write().take().is_some() {
            tracing::info!("Question store closed");
        }
    }
}
