//! JSON-lines message channel
//!
//! One request per line, tagged by `cmd` with the channel name:
//!
//! ```text
//! {"cmd":"load-questions"}
//! {"cmd":"add-question","question":{"question":"2+2?","answer":"4","topic":"Arithmetic","subject":"Math"}}
//! {"cmd":"remove-question","id":1}
//! ```
//!
//! Each request gets exactly one reply line holding a [`CommandResult`].
//! Requests are handled strictly in order; the blocking SQLite work runs on
//! the blocking pool while the channel awaits it.

use serde::Deserialize;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};

use crate::commands::{questions, CommandResult};
use crate::state::AppState;
use flashcards_core::NewQuestion;

#[derive(Debug, Deserialize)]
#[serde(tag = "cmd", rename_all = "kebab-case")]
pub enum Request {
    LoadQuestions,
    AddQuestion { question: NewQuestion },
    RemoveQuestion { id: i64 },
}

impl Request {
    pub fn channel(&self) -> &'static str {
        match self {
            Request::LoadQuestions => "load-questions",
            Request::AddQuestion { .. } => "add-question",
            Request::RemoveQuestion { .. } => "remove-question",
        }
    }
}

pub fn dispatch(state: &AppState, request: Request) -> serde_json::Result<String> {
    match request {
        Request::LoadQuestions => serde_json::to_string(&questions::load_questions(state)),
        Request::AddQuestion { question } => {
            serde_json::to_string(&questions::add_question(state, question))
        }
        Request::RemoveQuestion { id } => {
            serde_json::to_string(&questions::remove_question(state, id))
        }
    }
}

/// Decode one request line and produce its reply line.
pub fn handle_line(state: &AppState, line: &str) -> serde_json::Result<String> {
    match serde_json::from_str::<Request>(line) {
        Ok(request) => {
            tracing::debug!(channel = request.channel(), "Handling request");
            dispatch(state, request)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Rejected malformed request");
            serde_json::to_string(&CommandResult::<()>::err(format!("Invalid request: {e}")))
        }
    }
}

pub async fn serve<R, W>(state: AppState, reader: R, mut writer: W) -> anyhow::Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = BufReader::new(reader).lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let state = state.clone();
        let reply = tokio::task::spawn_blocking(move || handle_line(&state, &line)).await??;

        writer.write_all(reply.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
    }

    tracing::info!("IPC channel closed");
    Ok(())
}
