//! IPC Commands
//!
//! These commands bridge the presentation layer to the Rust core. Each one
//! is a single round trip that delegates to the core and reports the
//! outcome as a [`CommandResult`].

pub mod questions;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct CommandResult<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> CommandResult<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn err(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}
