//! Error types for cd-input.

use std::path::PathBuf;

use thiserror::Error;

use crate::InputKind;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("{kind} input, line {line}: {message}")]
    Parse {
        kind:    InputKind,
        line:    u64,
        message: String,
    },

    #[error("cannot open {kind} file {}: {source}", .path.display())]
    Open {
        kind:   InputKind,
        path:   PathBuf,
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type InputResult<T> = Result<T, InputError>;
