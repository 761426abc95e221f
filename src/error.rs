// src/error.rs
use thiserror::Error;

pub type Result<T> = anyhow::Result<T>;

/// Failures the AI bridge reports back to the user instead of aborting the loop.
#[derive(Debug, Error)]
pub enum AssistantError {
    #[error("OPENAI_API_KEY environment variable not set")]
    MissingApiKey,

    #[error("{0:#}")]
    Request(anyhow::Error),
}
