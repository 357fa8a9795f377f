//! Application configuration

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DATABASE_FILE_NAME: &str = "flashcards.sqlite";

/// Overrides the platform data directory when set.
pub const DATA_DIR_ENV: &str = "FLASHCARDS_DATA_DIR";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path to the database file
    pub database_path: PathBuf,
    /// Insert the example questions into a newly created database
    #[serde(default = "default_seed_examples")]
    pub seed_examples: bool,
}

fn default_seed_examples() -> bool {
    true
}

impl Config {
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            database_path: data_dir.join(DATABASE_FILE_NAME),
            seed_examples: default_seed_examples(),
        }
    }

    pub fn data_dir() -> PathBuf {
        if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|d| !d.is_empty()) {
            return PathBuf::from(dir);
        }

        dirs::data_local_dir()
            .map(|d| d.join("Flashcards"))
            .unwrap_or_else(|| PathBuf::from(".flashcards"))
    }

    pub fn with_seed_examples(mut self, seed_examples: bool) -> Self {
        self.seed_examples = seed_examples;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(Self::data_dir())
    }
}

mod dirs {
    use std::path::PathBuf;

    pub fn data_local_dir() -> Option<PathBuf> {
        #[cfg(target_os = "windows")]
        {
            std::env::var("LOCALAPPDATA").ok().map(PathBuf::from)
        }
        #[cfg(target_os = "macos")]
        {
            std::env::var("HOME")
                .ok()
                .map(|h| PathBuf::from(h).join("Library/Application Support"))
        }
        #[cfg(target_os = "linux")]
        {
            std::env::var("XDG_DATA_HOME")
                .ok()
                .filter(|d| !d.is_empty())
                .map(PathBuf::from)
                .or_else(|| {
                    std::env::var("HOME")
                        .ok()
                        .map(|h| PathBuf::from(h).join(".local/share"))
                })
        }
        #[cfg(not(any(target_os = "windows", target_os = "macos", target_os = "linux")))]
        {
            None
        }
    }
}
