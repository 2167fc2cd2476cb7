//! Flow options: parameter names, state tracking and the change handler.

use std::fmt;
use std::sync::Arc;

use crate::flow::Transition;
use crate::params::{DEFAULT_PAGE_PARAM, DEFAULT_SESSION_PARAM};
use crate::store::STORAGE_PREFIX;

/// Called once per settled page change.
pub type PageChangeHandler = Arc<dyn Fn(&Transition) + Send + Sync>;

/// Options for a [`Flow`](super::Flow).
///
/// **Interaction**: Passed to `Flow::new` together with the URL adapter and storage
/// backend, which are injected separately.
#[derive(Clone)]
pub struct FlowConfig {
    /// URL parameter holding the current page. Default `page`.
    pub page_param: String,
    /// URL parameter holding the session id. Default `id`.
    pub session_param: String,
    /// When false, state lives in memory only and sessions never expire.
    pub enable_state: bool,
    /// Key prefix for session buckets. Default `flow:`.
    pub storage_prefix: String,
    pub on_page_change: Option<PageChangeHandler>,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            page_param: DEFAULT_PAGE_PARAM.to_string(),
            session_param: DEFAULT_SESSION_PARAM.to_string(),
            enable_state: true,
            storage_prefix: STORAGE_PREFIX.to_string(),
            on_page_change: None,
        }
    }
}

impl FlowConfig {
    pub fn with_page_param(mut self, name: impl Into<String>) -> Self {
        self.page_param = name.into();
        self
    }

    pub fn with_session_param(mut self, name: impl Into<String>) -> Self {
        self.session_param = name.into();
        self
    }

    pub fn with_state(mut self, enabled: bool) -> Self {
        self.enable_state = enabled;
        self
    }

    pub fn with_storage_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.storage_prefix = prefix.into();
        self
    }

    pub fn with_on_page_change<F>(mut self, handler: F) -> Self
    where
        F: Fn(&Transition) + Send + Sync + 'static,
    {
        self.on_page_change = Some(Arc::new(handler));
        self
    }
}

impl fmt::Debug for FlowConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlowConfig")
            .field("page_param", &self.page_param)
            .field("session_param", &self.session_param)
            .field("enable_state", &self.enable_state)
            .field("storage_prefix", &self.storage_prefix)
            .field("on_page_change", &self.on_page_change.is_some())
            .finish()
    }
}
