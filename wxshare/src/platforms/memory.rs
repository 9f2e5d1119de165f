//! In-memory host: a replaceable window snapshot plus an ordered action log.
//!
//! Useful for dry runs against captured trees and as the backend of the
//! crate's own tests.

use super::{AccessibilityHost, NodeAction};
use crate::errors::ShareError;
use crate::node::{NodeId, UINode};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// One action the automation asked the host to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedAction {
    pub node: NodeId,
    pub class_name: String,
    pub action: NodeAction,
}

#[derive(Debug)]
pub struct MemoryHost {
    window: Mutex<Option<UINode>>,
    actions: Mutex<Vec<RecordedAction>>,
    rejected: Mutex<Vec<(NodeId, Option<NodeAction>)>>,
    paste_supported: bool,
}

impl Default for MemoryHost {
    fn default() -> Self {
        Self::new()
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

impl MemoryHost {
    pub fn new() -> Self {
        Self {
            window: Mutex::new(None),
            actions: Mutex::new(Vec::new()),
            rejected: Mutex::new(Vec::new()),
            paste_supported: true,
        }
    }

    /// A host whose action set lacks paste, forcing the set-text fallback.
    pub fn without_paste() -> Self {
        Self {
            paste_supported: false,
            ..Self::new()
        }
    }

    /// Replace the active window snapshot (`None` means no active window).
    pub fn set_window(&self, root: Option<UINode>) {
        *lock(&self.window) = root;
    }

    /// Make every action against `node` fail.
    pub fn reject_actions_on(&self, node: NodeId) {
        lock(&self.rejected).push((node, None));
    }

    /// Make only `action` fail on `node`.
    pub fn reject_action(&self, node: NodeId, action: NodeAction) {
        lock(&self.rejected).push((node, Some(action)));
    }

    pub fn actions(&self) -> Vec<RecordedAction> {
        lock(&self.actions).clone()
    }

    /// Ids of clicked nodes, in click order.
    pub fn clicked(&self) -> Vec<NodeId> {
        lock(&self.actions)
            .iter()
            .filter(|recorded| recorded.action == NodeAction::Click)
            .map(|recorded| recorded.node)
            .collect()
    }

    /// Drain the log, returning what was recorded so far.
    pub fn take_actions(&self) -> Vec<RecordedAction> {
        std::mem::take(&mut *lock(&self.actions))
    }
}

impl AccessibilityHost for MemoryHost {
    fn active_window_root(&self) -> Option<UINode> {
        lock(&self.window).clone()
    }

    fn perform_action(&self, node: &UINode, action: NodeAction) -> Result<(), ShareError> {
        if matches!(action, NodeAction::Paste) && !self.paste_supported {
            return Err(ShareError::UnsupportedAction(format!(
                "paste on {}",
                node.id
            )));
        }
        let rejected = lock(&self.rejected).iter().any(|(id, kind)| {
            *id == node.id && kind.as_ref().map_or(true, |kind| *kind == action)
        });
        if rejected {
            return Err(ShareError::ActionFailed(format!(
                "{action:?} rejected on {} ({})",
                node.id, node.class_name
            )));
        }
        lock(&self.actions).push(RecordedAction {
            node: node.id,
            class_name: node.class_name.clone(),
            action,
        });
        Ok(())
    }

    fn supports_paste(&self) -> bool {
        self.paste_supported
    }
}
