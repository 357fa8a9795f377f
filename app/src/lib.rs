//! Flashcards - desktop host
//!
//! The presentation layer talks to the store through three commands
//! (`load-questions`, `add-question`, `remove-question`) sent as JSON lines
//! over stdin; each reply is one JSON line on stdout. Rust owns all state.

pub mod commands;
pub mod ipc;
mod state;

pub use state::AppState;

pub async fn run() -> anyhow::Result<()> {
    // Initialize logging
    flashcards_core::init_logging();

    // Opening the store is fatal on failure; nothing is served without it
    let state = AppState::new()?;
    let seeded = state.initialize()?;

    tracing::info!(seeded, "Flashcards started");

    let result = ipc::serve(state.clone(), tokio::io::stdin(), tokio::io::stdout()).await;
    state.shutdown();
    result
}
