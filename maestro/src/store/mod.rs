//! # Store: per-session page state
//!
//! Two layers:
//!
//! 1. **Backend** ([`StorageBackend`]): string key-value storage for serialized buckets.
//! 2. **Manager** ([`StateManager`]): page-namespaced fields on top of a backend, keyed
//!    by session id, with all failures absorbed.
//!
//! ## Backends
//!
//! | Type                   | Persistence     | Use case                                 | Feature      |
//! |------------------------|-----------------|------------------------------------------|--------------|
//! | [`MemoryBackend`]      | In-process      | Default, tests; optional byte quota      | n/a          |
//! | `FileBackend`          | Files in a dir  | State across process restarts (CLI)      | `file-store` |
//! | [`UnavailableBackend`] | None            | Non-interactive rendering                | n/a          |
//!
//! [`MemoryEntries`] is the session-less in-memory variant used when a flow runs with
//! state tracking disabled.

mod backend;
#[cfg(feature = "file-store")]
mod file_backend;
mod memory_entries;
mod state_manager;

pub use backend::{MemoryBackend, StorageBackend, UnavailableBackend};
#[cfg(feature = "file-store")]
pub use file_backend::FileBackend;
pub use memory_entries::MemoryEntries;
pub use state_manager::{StateManager, STORAGE_PREFIX};
