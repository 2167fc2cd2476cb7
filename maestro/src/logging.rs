//! Diagnostics for graph traversal, storage and navigation.
//!
//! Every non-fatal problem (dangling references, skip cycles, storage failures, missing
//! view loaders) is reported through one of these functions. With the `tracing` feature
//! they emit structured events; without it they print to stderr.

use crate::error::StorageError;

/// A node's `next` names a page that is not in the graph.
pub fn log_dangling_next(page: &str, target: &str) {
    #[cfg(feature = "tracing")]
    tracing::warn!(page = page, target = target, "Next page does not exist in graph");

    #[cfg(not(feature = "tracing"))]
    eprintln!(
        "[WARN] Next page \"{}\" (from \"{}\") does not exist in graph",
        target, page
    );
}

/// A node's `previous_fallback` names a page that is not in the graph.
pub fn log_dangling_previous(page: &str, target: &str) {
    #[cfg(feature = "tracing")]
    tracing::warn!(page = page, target = target, "Previous page does not exist in graph");

    #[cfg(not(feature = "tracing"))]
    eprintln!(
        "[WARN] Previous page \"{}\" (from \"{}\") does not exist in graph",
        target, page
    );
}

/// Skip-chain traversal revisited a page.
pub fn log_skip_cycle(page: &str) {
    #[cfg(feature = "tracing")]
    tracing::warn!(page = page, "Circular skip condition detected");

    #[cfg(not(feature = "tracing"))]
    eprintln!("[WARN] Circular skip condition detected for page \"{}\"", page);
}

/// An explicit jump named a page that is not in the graph.
pub fn log_unknown_page(page: &str) {
    #[cfg(feature = "tracing")]
    tracing::warn!(page = page, "Page does not exist in graph");

    #[cfg(not(feature = "tracing"))]
    eprintln!("[WARN] Page \"{}\" does not exist in graph", page);
}

/// Reading or decoding a session bucket failed; the read degrades to empty.
pub fn log_storage_read_error(key: &str, error: &StorageError) {
    #[cfg(feature = "tracing")]
    tracing::warn!(key = key, %error, "Failed to read flow state");

    #[cfg(not(feature = "tracing"))]
    eprintln!("[WARN] Failed to read flow state \"{}\": {}", key, error);
}

/// Persisting a session bucket failed; the write is dropped.
pub fn log_storage_write_error(key: &str, error: &StorageError) {
    #[cfg(feature = "tracing")]
    tracing::error!(key = key, %error, "Failed to save flow state");

    #[cfg(not(feature = "tracing"))]
    eprintln!("[ERROR] Failed to save flow state \"{}\": {}", key, error);
}

/// A sentinel page has no registered view loader.
pub fn log_missing_loader(page: &str) {
    #[cfg(feature = "tracing")]
    tracing::warn!(page = page, "No view loader registered for page");

    #[cfg(not(feature = "tracing"))]
    eprintln!(
        "[WARN] No view loader found for page \"{}\". Add it to your loaders map.",
        page
    );
}

/// A path adapter was asked to write a parameter its template does not declare.
pub fn log_param_not_in_template(key: &str, template: &str) {
    #[cfg(feature = "tracing")]
    tracing::warn!(key = key, template = template, "Parameter is not defined in path template");

    #[cfg(not(feature = "tracing"))]
    eprintln!(
        "[WARN] Parameter \"{}\" is not defined in path template: {}",
        key, template
    );
}

/// A settled page change.
pub fn log_transition(page: Option<&str>, previous: Option<&str>) {
    #[cfg(feature = "tracing")]
    tracing::debug!(?page, ?previous, "Page changed");

    #[cfg(not(feature = "tracing"))]
    eprintln!("[DEBUG] Page changed: {:?} -> {:?}", previous, page);
}

/// A fresh session was seeded with empty entries for every page.
pub fn log_session_bootstrap(session: &str, pages: usize) {
    #[cfg(feature = "tracing")]
    tracing::info!(session = session, pages = pages, "Pre-registered flow state");

    #[cfg(not(feature = "tracing"))]
    eprintln!(
        "[INFO] Pre-registered {} pages for session \"{}\"",
        pages, session
    );
}

/// A session bucket was cleared on flow completion.
pub fn log_session_cleared(session: &str) {
    #[cfg(feature = "tracing")]
    tracing::info!(session = session, "Flow completed, state cleared");

    #[cfg(not(feature = "tracing"))]
    eprintln!("[INFO] Flow completed, state cleared for session \"{}\"", session);
}
