//! Error types for the input library.
//!
//! Queries never fail: missing windows, unmapped keys and out-of-range input
//! all degrade to idle answers. Errors are limited to initialization and to
//! parsing names and replay scripts.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("Window backend '{backend}' is not reachable")]
    BackendUnreachable { backend: &'static str },

    #[error("Unknown key name: {0}")]
    UnknownKey(String),

    #[error("Unknown mouse button: {0}")]
    UnknownButton(String),

    #[error("Invalid replay script {path}: {source}", path = .path.display())]
    Script {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
