//! Records emitted by the reconciler.

use serde::Serialize;

use crate::graph::PageId;
use crate::state::FlowState;

/// One settled page change: `(page, previous, state)`.
///
/// `page` is `None` when the flow has no entry point and no page in the URL.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Transition {
    pub page: Option<PageId>,
    pub previous: Option<PageId>,
    /// Aggregate state at the time of the change.
    pub state: FlowState,
    /// True when the change bypasses a skipped page. A handler sees it while the skip
    /// check is still in progress; the flow reports `is_checking_skip` as false again
    /// once the operation returns.
    pub is_checking_skip: bool,
}

/// Observable navigation status of a flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationSnapshot {
    pub current_page: Option<PageId>,
    /// True until the first reconciliation pass has run.
    pub is_validating: bool,
    /// True only while a skip bypass is being applied; handlers observe it through
    /// [`Transition::is_checking_skip`].
    pub is_checking_skip: bool,
    /// Bumped on every state write, session bootstrap and session change.
    pub state_version: u64,
}
