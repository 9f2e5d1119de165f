//! Breadth-first lookups over a [`UINode`] snapshot

use crate::node::UINode;
use std::collections::VecDeque;
use tracing::trace;

/// A node found by text together with the node that holds it.
#[derive(Debug, Clone, Copy)]
pub struct TextMatch<'a> {
    pub node: &'a UINode,
    pub parent: Option<&'a UINode>,
}

/// Find the first node, in breadth-first order, whose class name contains
/// `class_name`. An absent root yields `None`.
pub fn find_by_type<'a>(root: Option<&'a UINode>, class_name: &str) -> Option<&'a UINode> {
    let mut queue: VecDeque<&UINode> = VecDeque::new();
    queue.push_back(root?);

    while let Some(node) = queue.pop_front() {
        if node.class_name.contains(class_name) {
            trace!(node = %node.id, class_name, "type match");
            return Some(node);
        }
        queue.extend(node.present_children());
    }
    None
}

/// Collect every node under `root` (root included) whose text or content
/// description contains `label`, in breadth-first order.
pub fn find_by_text<'a>(root: Option<&'a UINode>, label: &str) -> Vec<TextMatch<'a>> {
    let mut matches = Vec::new();
    let Some(root) = root else {
        return matches;
    };

    let mut queue: VecDeque<(&UINode, Option<&UINode>)> = VecDeque::new();
    queue.push_back((root, None));

    while let Some((node, parent)) = queue.pop_front() {
        if node.matches_text(label) {
            matches.push(TextMatch { node, parent });
        }
        queue.extend(node.present_children().map(|child| (child, Some(node))));
    }
    matches
}

/// First text match in breadth-first order.
pub fn find_first_by_text<'a>(root: Option<&'a UINode>, label: &str) -> Option<TextMatch<'a>> {
    find_by_text(root, label).into_iter().next()
}
