//! URL parameters: the page and session id carried in the address bar.
//!
//! [`UrlParamsAdapter`] is the contract the reconciler consumes. Two transports are
//! provided over an in-process [`BrowserHistory`]: [`QueryParamsAdapter`]
//! (`?page=b&id=1a2b3`) and [`PathParamsAdapter`] (`/1a2b3/page/b`).
//!
//! Push vs. replace is part of the contract: `set_param` creates a history entry,
//! `replace_param` / `replace_params` never do.

use std::collections::BTreeMap;

mod history;
mod path;
mod query;

pub use history::BrowserHistory;
pub use path::{PathConfig, PathParamsAdapter, PathTemplate, PathTemplateError};
pub use query::QueryParamsAdapter;
pub use url::ParseError as UrlParseError;

/// Default name of the page parameter.
pub const DEFAULT_PAGE_PARAM: &str = "page";

/// Default name of the session-id parameter.
pub const DEFAULT_SESSION_PARAM: &str = "id";

/// Reads and writes named URL parameters.
///
/// **Interaction**: Held as `Arc<dyn UrlParamsAdapter>` by [`Flow`](crate::flow::Flow).
/// User-initiated navigation goes through `set_param`; system corrections (skip bypass,
/// session-id seeding) go through `replace_param`.
pub trait UrlParamsAdapter: Send + Sync {
    fn get_param(&self, name: &str) -> Option<String>;

    /// Sets `name` and pushes a new history entry.
    fn set_param(&self, name: &str, value: &str);

    /// Sets `name` on the current history entry.
    fn replace_param(&self, name: &str, value: &str);

    fn get_all_params(&self) -> BTreeMap<String, String>;

    /// Replaces parameters in one step on the current history entry.
    fn replace_params(&self, params: &BTreeMap<String, String>);

    /// Steps history back. False when there is nothing to go back to.
    fn back(&self) -> bool {
        false
    }

    /// Number of history entries, for push/replace accounting.
    fn history_len(&self) -> usize {
        1
    }
}
