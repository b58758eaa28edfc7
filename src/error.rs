//! Errors returned by the prompts and the `askline` binary.
//!
//! `PromptError` covers the terminal and filesystem failures a prompt cannot
//! recover from, plus option sets that were built wrong. The I/O and `dialoguer`
//! sources are kept behind `Arc` so the error stays `Clone`.
//!
//! Malformed user input never shows up here: the prompt loops recover from it by
//! re-prompting. Only a broken environment (terminal gone, filesystem unreadable)
//! or a programming error on the caller's side escapes as a `PromptError`.

use std::sync::Arc;
use thiserror::Error;

/// The primary error enumeration for everything a prompt can fail with.
#[derive(Error, Debug, Clone)]
pub enum PromptError {
    /// Error related to standard I/O operations (terminal or filesystem).
    #[error("I/O Error: {0}")]
    Io(Arc<std::io::Error>),

    /// Error originating from the interactive terminal console (`dialoguer`).
    #[error("Dialoguer Error: {0}")]
    Dialoguer(Arc<dialoguer::Error>),

    /// Input reached end-of-file while a prompt was still waiting for a line.
    #[error("Input closed before a valid answer was given")]
    InputClosed,

    /// A keyed option set was built with the same key twice.
    #[error("Duplicate option key: {0}")]
    DuplicateKey(String),

    /// A keyed option set was built with a key no answer can ever select.
    #[error("Unselectable option key: {0:?}")]
    InvalidKey(String),

    /// Error specific to CLI logic or argument handling.
    #[error("CLI Error: {0}")]
    Cli(String),
}

/// A specialized `Result` type using the crate's `PromptError`.
pub type Result<T> = std::result::Result<T, PromptError>;

// --- From implementations ---
// These allow easy conversion from external error types into PromptError
// using the `?` operator. Arc is used for non-Clone error types.

impl From<std::io::Error> for PromptError {
    fn from(err: std::io::Error) -> Self {
        PromptError::Io(Arc::new(err))
    }
}

impl From<dialoguer::Error> for PromptError {
    fn from(err: dialoguer::Error) -> Self {
        PromptError::Dialoguer(Arc::new(err))
    }
}
