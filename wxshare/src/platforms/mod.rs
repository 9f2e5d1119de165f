use crate::errors::ShareError;
use crate::node::UINode;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

pub mod memory;

pub use memory::MemoryHost;

/// Side-effecting interaction requested against one node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeAction {
    Focus,
    Paste,
    Click,
    /// Replace the node's text, for hosts without a paste action
    SetText(String),
}

/// The host runtime's accessibility surface
pub trait AccessibilityHost: Send + Sync {
    /// Snapshot of the active window's tree, if a window is active
    fn active_window_root(&self) -> Option<UINode>;

    /// Ask the host to perform `action` on `node`
    fn perform_action(&self, node: &UINode, action: NodeAction) -> Result<(), ShareError>;

    /// Whether [`NodeAction::Paste`] is available on this host
    fn supports_paste(&self) -> bool {
        true
    }
}

pub trait Clipboard: Send + Sync {
    /// Current text content of the primary clip
    fn primary_text(&self) -> Option<String>;
}

/// Image counts shared with the part of the app that starts a share
pub trait ShareCounters: Send + Sync {
    /// Images still waiting to be attached
    fn pending_count(&self) -> u32;
    /// Images already confirmed selected
    fn selected_count(&self) -> u32;
    fn set_counts(&self, selected: u32, pending: u32);
}

/// Global on/off gate checked before every notification
pub trait AutomationSwitch: Send + Sync {
    fn is_enabled(&self) -> bool;
}

impl AutomationSwitch for AtomicBool {
    fn is_enabled(&self) -> bool {
        self.load(Ordering::Relaxed)
    }
}

/// Counters kept in process memory
#[derive(Debug, Default)]
pub struct InMemoryCounters {
    selected: AtomicU32,
    pending: AtomicU32,
}

impl InMemoryCounters {
    pub fn new(selected: u32, pending: u32) -> Self {
        Self {
            selected: AtomicU32::new(selected),
            pending: AtomicU32::new(pending),
        }
    }
}

impl ShareCounters for InMemoryCounters {
    fn pending_count(&self) -> u32 {
        self.pending.load(Ordering::Relaxed)
    }

    fn selected_count(&self) -> u32 {
        self.selected.load(Ordering::Relaxed)
    }

    fn set_counts(&self, selected: u32, pending: u32) {
        self.selected.store(selected, Ordering::Relaxed);
        self.pending.store(pending, Ordering::Relaxed);
    }
}
