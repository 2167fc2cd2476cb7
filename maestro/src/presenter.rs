//! Presentation dispatch: maps the resolved page to a lazily built view.
//!
//! Views are produced by caller-supplied loaders and built at most once per page. A
//! missing view never fails: sentinels without a loader log a warning, ordinary pages
//! without a node or loader render nothing.
//!
//! [`Presenter::frame`] renders a settled flow. Inside a page-change handler, where the
//! flow is still borrowed by the running operation, [`Presenter::frame_for`] renders the
//! transition instead and shows the placeholder while a skip check is in progress.

use std::collections::HashMap;
use std::sync::Arc;

use dashmap::DashMap;

use crate::flow::{Flow, Transition};
use crate::graph::{is_sentinel, FlowGraph, FlowNode, PageId};
use crate::logging;

/// Builds the view of one page.
pub type ViewLoader<V> = Arc<dyn Fn() -> V + Send + Sync>;

/// What to render for a flow right now.
#[derive(Debug, Clone)]
pub enum Frame<V> {
    /// First resolution has not run.
    Blank,
    /// A skip bypass is in progress.
    Placeholder,
    /// The current page's view, if one can be produced.
    View(Option<Arc<V>>),
}

impl<V> Frame<V> {
    pub fn view(&self) -> Option<&Arc<V>> {
        match self {
            Frame::View(view) => view.as_ref(),
            Frame::Blank | Frame::Placeholder => None,
        }
    }
}

/// Page → view loader mapping with a per-page instance cache.
///
/// **Interaction**: [`frame`](Self::frame) reads a [`Flow`]'s snapshot,
/// [`frame_for`](Self::frame_for) a [`Transition`] delivered to the change handler. Hosts
/// that drive their own loop call [`present`](Self::present) directly.
pub struct Presenter<V> {
    loaders: HashMap<PageId, ViewLoader<V>>,
    cache: DashMap<PageId, Arc<V>>,
}

impl<V> Default for Presenter<V> {
    fn default() -> Self {
        Self {
            loaders: HashMap::new(),
            cache: DashMap::new(),
        }
    }
}

impl<V> Presenter<V> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the loader for `page`, replacing any earlier one.
    pub fn with_loader<F>(mut self, page: impl Into<PageId>, loader: F) -> Self
    where
        F: Fn() -> V + Send + Sync + 'static,
    {
        let page = page.into();
        self.cache.remove(&page);
        self.loaders.insert(page, Arc::new(loader));
        self
    }

    pub fn has_loader(&self, page: &str) -> bool {
        self.loaders.contains_key(page)
    }

    /// Number of views built so far.
    pub fn cached(&self) -> usize {
        self.cache.len()
    }

    /// View for `page`.
    ///
    /// Sentinel pages need only a loader. Ordinary pages need both their graph node and a
    /// loader; otherwise the result is `None`.
    pub fn present(&self, page: Option<&str>, node: Option<&FlowNode>) -> Option<Arc<V>> {
        let page = page?;
        if is_sentinel(page) {
            if !self.has_loader(page) {
                logging::log_missing_loader(page);
                return None;
            }
            return self.load(page);
        }
        if node.is_none() {
            return None;
        }
        self.load(page)
    }

    /// Frame for the flow's current state.
    pub fn frame(&self, flow: &Flow) -> Frame<V> {
        if flow.is_validating() {
            return Frame::Blank;
        }
        if flow.is_checking_skip() {
            return Frame::Placeholder;
        }
        Frame::View(self.present(flow.current_page(), flow.current_node()))
    }

    /// Frame for a transition as it is emitted.
    pub fn frame_for(&self, transition: &Transition, graph: &FlowGraph) -> Frame<V> {
        if transition.is_checking_skip {
            return Frame::Placeholder;
        }
        let page = transition.page.as_deref();
        Frame::View(self.present(page, page.and_then(|p| graph.node(p))))
    }

    fn load(&self, page: &str) -> Option<Arc<V>> {
        if let Some(view) = self.cache.get(page) {
            return Some(view.clone());
        }
        let loader = self.loaders.get(page)?;
        let view = self
            .cache
            .entry(page.to_string())
            .or_insert_with(|| Arc::new(loader()))
            .clone();
        Some(view)
    }
}
