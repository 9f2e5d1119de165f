use crate::node::{NodeId, UINode};
use serde::{Deserialize, Serialize};

/// Category of a UI-change notification delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// A new screen (window state) appeared.
    ScreenAppeared,
    /// The content of an existing node changed.
    ContentChanged,
}

/// One notification from the host runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub kind: EventKind,
    /// Declared type name of the screen or node that changed.
    pub source_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<UINode>,
}

impl Notification {
    pub fn screen_appeared(source_type: impl Into<String>, source: Option<UINode>) -> Self {
        Self {
            kind: EventKind::ScreenAppeared,
            source_type: source_type.into(),
            source,
        }
    }

    pub fn content_changed(source_type: impl Into<String>, source: Option<UINode>) -> Self {
        Self {
            kind: EventKind::ContentChanged,
            source_type: source_type.into(),
            source,
        }
    }

    /// Identity of the source node, if the host attached one.
    pub fn source_id(&self) -> Option<NodeId> {
        self.source.as_ref().map(|node| node.id)
    }
}
