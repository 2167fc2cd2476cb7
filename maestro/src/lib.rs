//! # maestro
//!
//! Multi-step flow navigation: a wizard of pages linked by `next` / `previous` edges, where
//! pages can be skipped based on what the user entered earlier. The current page lives in
//! the URL, form state lives in a per-session bucket, and a reconciler keeps the two in
//! agreement with the graph.
//!
//! ## Design Principles
//!
//! - **Graph is data**: A [`FlowGraph`] is a set of [`FlowNode`]s. Dynamic `next` links and
//!   skip rules are pure functions of the aggregate [`FlowState`].
//! - **URL is the source of truth**: [`Flow`] derives its current page from the URL's page
//!   parameter. User navigation pushes history entries; system corrections (skips,
//!   session-id seeding) replace them.
//! - **Errors are pages**: Unknown pages and expired sessions resolve to the sentinels
//!   [`NOT_FOUND_PAGE`] and [`EXPIRED_PAGE`]. Only graph construction can fail.
//! - **Explicit transitions**: Every page change is returned as a [`Transition`] and passed
//!   to the configured change handler.
//!
//! ## Main Modules
//!
//! - [`graph`]: `FlowGraph`, `FlowNode`, next/previous resolution, validation, page order.
//! - [`store`]: `StorageBackend` trait, memory/file backends, `StateManager`.
//! - [`params`]: `UrlParamsAdapter` trait, `BrowserHistory`, query and path adapters.
//! - [`flow`]: `Flow` reconciler and navigation operations.
//! - [`presenter`]: page → view dispatch with lazy loading.
//!
//! ## Features
//!
//! - `file-store` (default): `FileBackend`, one JSON file per session bucket.
//! - `tracing`: structured diagnostics via `tracing` instead of stderr.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//!
//! use maestro::{
//!     BrowserHistory, Flow, FlowConfig, FlowGraph, FlowNode, MemoryBackend, QueryParamsAdapter,
//! };
//!
//! let graph = FlowGraph::from_nodes(
//!     [
//!         FlowNode::new("name").with_next("email"),
//!         FlowNode::new("email").with_previous("name"),
//!     ],
//!     None,
//! )
//! .unwrap();
//! let history = Arc::new(BrowserHistory::new("https://example.com/signup").unwrap());
//! let mut flow = Flow::new(
//!     Arc::new(graph),
//!     FlowConfig::default(),
//!     Arc::new(QueryParamsAdapter::new(history.clone())),
//!     Arc::new(MemoryBackend::new()),
//! );
//! flow.reconcile();
//! flow.update_state("first", serde_json::json!("Ada"));
//! flow.go_to_next();
//! assert_eq!(flow.current_page(), Some("email"));
//! ```

pub mod error;
pub mod flow;
pub mod graph;
pub mod logging;
pub mod params;
pub mod presenter;
pub mod state;
pub mod store;

pub use error::{FlowError, StorageError};
pub use flow::{Flow, FlowConfig, NavigationSnapshot, PageChangeHandler, Transition};
pub use graph::{
    is_sentinel, resolve_next, FlowGraph, FlowNode, NextPage, PageId, SkipRule, ValidationIssue,
    ValidationReport, EXPIRED_PAGE, NOT_FOUND_PAGE,
};
pub use params::{
    BrowserHistory, PathConfig, PathParamsAdapter, PathTemplate, PathTemplateError,
    QueryParamsAdapter, UrlParamsAdapter,
};
pub use presenter::{Frame, Presenter, ViewLoader};
pub use state::{field, FlowState, PageState, PageStateEntry};
#[cfg(feature = "file-store")]
pub use store::FileBackend;
pub use store::{MemoryBackend, StateManager, StorageBackend, UnavailableBackend};
