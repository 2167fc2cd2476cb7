//! Page node: forward link, fallback "previous" link and skip predicate.

use std::fmt;
use std::sync::Arc;

use crate::state::FlowState;

/// Opaque page identifier.
pub type PageId = String;

/// Resolved page signalling an expired session (no state bucket for a mid-flow URL).
pub const EXPIRED_PAGE: &str = "__expired__";

/// Resolved page signalling a URL page that is not in the graph.
pub const NOT_FOUND_PAGE: &str = "__notfound__";

/// True for the two error sentinels, which are never graph members.
pub fn is_sentinel(page: &str) -> bool {
    page == EXPIRED_PAGE || page == NOT_FOUND_PAGE
}

/// Pure function choosing the next page from aggregate state. May be called several
/// times per reconciliation and must not have side effects.
pub type NextPageFn = dyn Fn(&FlowState) -> Option<PageId> + Send + Sync;

/// Pure predicate; when true the page is bypassed in both directions.
pub type SkipRule = Arc<dyn Fn(&FlowState) -> bool + Send + Sync>;

/// Forward link of a node.
#[derive(Clone)]
pub enum NextPage {
    /// Fixed target; statically validated.
    Page(PageId),
    /// Target computed from state; cannot be validated statically.
    Dynamic(Arc<NextPageFn>),
}

impl NextPage {
    pub fn dynamic<F>(f: F) -> Self
    where
        F: Fn(&FlowState) -> Option<PageId> + Send + Sync + 'static,
    {
        NextPage::Dynamic(Arc::new(f))
    }

    /// Literal target, if this is not a dynamic link.
    pub fn literal(&self) -> Option<&str> {
        match self {
            NextPage::Page(p) => Some(p),
            NextPage::Dynamic(_) => None,
        }
    }
}

impl fmt::Debug for NextPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NextPage::Page(p) => f.debug_tuple("Page").field(p).finish(),
            NextPage::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

impl From<&str> for NextPage {
    fn from(page: &str) -> Self {
        NextPage::Page(page.to_string())
    }
}

impl From<String> for NextPage {
    fn from(page: String) -> Self {
        NextPage::Page(page)
    }
}

/// One page's definition in a [`FlowGraph`](super::FlowGraph).
#[derive(Clone)]
pub struct FlowNode {
    pub page: PageId,
    pub next: Option<NextPage>,
    /// Page treated as "previous"; never derived from other nodes' `next`.
    pub previous_fallback: Option<PageId>,
    pub should_skip: Option<SkipRule>,
}

impl FlowNode {
    /// Creates a node with no links and no skip rule.
    pub fn new(page: impl Into<PageId>) -> Self {
        Self {
            page: page.into(),
            next: None,
            previous_fallback: None,
            should_skip: None,
        }
    }

    pub fn with_next(mut self, next: impl Into<NextPage>) -> Self {
        self.next = Some(next.into());
        self
    }

    pub fn with_next_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&FlowState) -> Option<PageId> + Send + Sync + 'static,
    {
        self.next = Some(NextPage::dynamic(f));
        self
    }

    pub fn with_previous(mut self, page: impl Into<PageId>) -> Self {
        self.previous_fallback = Some(page.into());
        self
    }

    pub fn with_skip<F>(mut self, f: F) -> Self
    where
        F: Fn(&FlowState) -> bool + Send + Sync + 'static,
    {
        self.should_skip = Some(Arc::new(f));
        self
    }

    /// Evaluates the skip rule; false when the node has none.
    pub fn skips(&self, state: &FlowState) -> bool {
        self.should_skip.as_ref().map(|f| f(state)).unwrap_or(false)
    }
}

impl fmt::Debug for FlowNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlowNode")
            .field("page", &self.page)
            .field("next", &self.next)
            .field("previous_fallback", &self.previous_fallback)
            .field("should_skip", &self.should_skip.as_ref().map(|_| ".."))
            .finish()
    }
}
