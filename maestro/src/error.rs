//! Error types for flow construction and session storage.
//!
//! Only [`FlowError`] interrupts the caller: it is raised while building a
//! [`FlowGraph`](crate::graph::FlowGraph). [`StorageError`] is returned by
//! [`StorageBackend`](crate::store::StorageBackend) implementations and absorbed by the
//! [`StateManager`](crate::store::StateManager), which logs it and degrades to empty state.

use thiserror::Error;

/// Configuration error raised while building a flow graph.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    /// A node with this page id was already registered.
    #[error("node with page \"{0}\" already exists in graph")]
    DuplicateNode(String),

    /// The explicitly configured entry point is not a registered node.
    #[error("entry point \"{0}\" does not exist in nodes")]
    UnknownEntryPoint(String),
}

/// Error from a session storage backend.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Persisted record could not be encoded or decoded as JSON.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// No backing store is available (e.g. non-interactive rendering).
    #[error("storage backend unavailable")]
    Unavailable,

    /// Writing `key` would exceed the backend's byte quota.
    #[error("storage quota of {limit} bytes exceeded writing \"{key}\"")]
    QuotaExceeded { key: String, limit: usize },

    /// Underlying I/O failed (file-backed storage).
    #[error("storage i/o error: {0}")]
    Io(String),
}

impl From<serde_json::Error> for StorageError {
    fn from(e: serde_json::Error) -> Self {
        StorageError::Serialization(e.to_string())
    }
}

impl From<std::io::Error> for StorageError {
    fn from(e: std::io::Error) -> Self {
        StorageError::Io(e.to_string())
    }
}
