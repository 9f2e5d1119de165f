//! Read-only snapshots of the host application's UI tree

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque identity of a node instance, compared only for equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Represents one element of the host UI tree at notification time.
///
/// Children are kept as `Option` slots because hosts may expose null
/// entries in a child list; those slots are skipped by every traversal.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct UINode {
    pub id: NodeId,
    pub class_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content_description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Option<UINode>>,
}

impl UINode {
    pub fn new(id: u64, class_name: impl Into<String>) -> Self {
        Self {
            id: NodeId(id),
            class_name: class_name.into(),
            text: None,
            content_description: None,
            children: Vec::new(),
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.content_description = Some(description.into());
        self
    }

    /// Append a child node.
    pub fn with_child(mut self, child: UINode) -> Self {
        self.children.push(Some(child));
        self
    }

    pub fn with_children(mut self, children: impl IntoIterator<Item = UINode>) -> Self {
        self.children.extend(children.into_iter().map(Some));
        self
    }

    /// Append a null child slot, as some hosts report.
    pub fn with_null_child(mut self) -> Self {
        self.children.push(None);
        self
    }

    /// Number of child slots, null slots included.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Child at `index`, or `None` when out of range or the slot is null.
    pub fn child(&self, index: usize) -> Option<&UINode> {
        self.children.get(index).and_then(Option::as_ref)
    }

    pub fn last_child(&self) -> Option<&UINode> {
        self.children.last().and_then(Option::as_ref)
    }

    /// Iterate over the non-null children in order.
    pub fn present_children(&self) -> impl Iterator<Item = &UINode> {
        self.children.iter().flatten()
    }

    /// Case-insensitive containment check over text and content description.
    pub fn matches_text(&self, label: &str) -> bool {
        let needle = label.to_lowercase();
        [self.text.as_deref(), self.content_description.as_deref()]
            .into_iter()
            .flatten()
            .any(|value| value.to_lowercase().contains(&needle))
    }

    fn debug_with_depth(
        &self,
        f: &mut fmt::Formatter<'_>,
        current_depth: usize,
        max_depth: usize,
    ) -> fmt::Result {
        let mut debug_struct = f.debug_struct("UINode");
        debug_struct.field("id", &self.id);
        debug_struct.field("class_name", &self.class_name);
        if let Some(text) = &self.text {
            debug_struct.field("text", text);
        }

        if !self.children.is_empty() {
            if current_depth < max_depth {
                debug_struct.field(
                    "children",
                    &DebugChildrenWithDepth {
                        children: &self.children,
                        current_depth,
                        max_depth,
                    },
                );
            } else {
                debug_struct.field(
                    "children",
                    &format!("[{} children (depth limit reached)]", self.children.len()),
                );
            }
        }

        debug_struct.finish()
    }
}

impl fmt::Debug for UINode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.debug_with_depth(f, 0, 32)
    }
}

struct DebugChildrenWithDepth<'a> {
    children: &'a [Option<UINode>],
    current_depth: usize,
    max_depth: usize,
}

impl fmt::Debug for DebugChildrenWithDepth<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        for child in self.children {
            match child {
                Some(node) => list.entry(&DebugNodeWithDepth {
                    node,
                    current_depth: self.current_depth + 1,
                    max_depth: self.max_depth,
                }),
                None => list.entry(&"null"),
            };
        }
        list.finish()
    }
}

struct DebugNodeWithDepth<'a> {
    node: &'a UINode,
    current_depth: usize,
    max_depth: usize,
}

impl fmt::Debug for DebugNodeWithDepth<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.node
            .debug_with_depth(f, self.current_depth, self.max_depth)
    }
}
