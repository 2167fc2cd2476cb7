//! # Flow: the navigation reconciler
//!
//! [`Flow`] owns the current page of one session. It reads the page and session id from a
//! [`UrlParamsAdapter`](crate::params::UrlParamsAdapter), state from a
//! [`StorageBackend`](crate::store::StorageBackend) (or memory), and resolves:
//!
//! | Situation                                         | Resolved page        |
//! |---------------------------------------------------|----------------------|
//! | No page parameter, or the entry point             | entry point / `None` |
//! | Page parameter not in the graph                   | `__notfound__`       |
//! | Mid-flow page, state enabled, no session bucket   | `__expired__`        |
//! | Skip-flagged page                                 | next (or previous when going back) non-skipped page |
//! | Otherwise                                         | the URL's page       |
//!
//! Each change produces a [`Transition`], returned from the operation that caused it and
//! passed to [`FlowConfig::on_page_change`].

mod config;
mod engine;
mod navigate;
mod reconcile;
mod session;
mod transition;

pub use config::{FlowConfig, PageChangeHandler};
pub use engine::Flow;
pub use session::{generate_session_id, SESSION_ID_LEN};
pub use transition::{NavigationSnapshot, Transition};
