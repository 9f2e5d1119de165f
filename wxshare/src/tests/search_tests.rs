use super::{album_sheet, compose_screen, ALBUM_ROW, TEXT_INPUT};
use crate::node::{NodeId, UINode};
use crate::search::{find_by_text, find_by_type, find_first_by_text};

#[test]
fn test_find_by_type_returns_shallowest_match() {
    // Depth 1: a non-matching container whose subtree holds a deep match.
    // Depth 2: a matching node under the second container.
    let root = UINode::new(1, "Root")
        .with_child(
            UINode::new(2, "Container").with_child(
                UINode::new(4, "Wrapper").with_child(UINode::new(6, "android.widget.GridView")),
            ),
        )
        .with_child(UINode::new(3, "Container").with_child(UINode::new(5, "android.widget.GridView")));

    let found = find_by_type(Some(&root), "GridView").expect("grid should be found");
    assert_eq!(found.id, NodeId(5));
}

#[test]
fn test_find_by_type_prefers_left_sibling_at_same_depth() {
    let root = UINode::new(1, "Root").with_children([
        UINode::new(2, "android.widget.EditText"),
        UINode::new(3, "android.widget.EditText"),
    ]);
    assert_eq!(find_by_type(Some(&root), "EditText").map(|n| n.id), Some(NodeId(2)));
}

#[test]
fn test_find_by_type_matches_root() {
    let root = UINode::new(9, "android.widget.ListView");
    assert_eq!(find_by_type(Some(&root), "ListView").map(|n| n.id), Some(NodeId(9)));
}

#[test]
fn test_find_by_type_uses_substring_match() {
    let root = compose_screen();
    let found = find_by_type(Some(&root), "EditText").expect("substring should match");
    assert_eq!(found.id, NodeId(TEXT_INPUT));
}

#[test]
fn test_find_by_type_absent_root() {
    assert!(find_by_type(None, "GridView").is_none());
}

#[test]
fn test_find_by_type_no_match() {
    let root = compose_screen();
    assert!(find_by_type(Some(&root), "RecyclerView").is_none());
}

#[test]
fn test_find_by_type_skips_null_children() {
    let root = UINode::new(1, "Root")
        .with_null_child()
        .with_child(UINode::new(2, "Holder").with_null_child().with_child(UINode::new(3, "Target")));
    assert_eq!(find_by_type(Some(&root), "Target").map(|n| n.id), Some(NodeId(3)));
}

#[test]
fn test_find_by_text_pairs_match_with_parent() {
    let sheet = album_sheet(50, "从相册选择");
    let found = find_first_by_text(Some(&sheet), "从相册选择").expect("label should be found");
    assert_eq!(found.node.id, NodeId(54));
    assert_eq!(found.parent.map(|p| p.id), Some(NodeId(ALBUM_ROW)));
}

#[test]
fn test_find_by_text_is_case_insensitive_and_checks_description() {
    let root = UINode::new(1, "Root")
        .with_child(UINode::new(2, "Button").with_text("DONE"))
        .with_child(UINode::new(3, "ImageButton").with_description("Done editing"));

    let ids: Vec<NodeId> = find_by_text(Some(&root), "done")
        .into_iter()
        .map(|m| m.node.id)
        .collect();
    assert_eq!(ids, vec![NodeId(2), NodeId(3)]);
}

#[test]
fn test_find_by_text_root_has_no_parent() {
    let root = UINode::new(1, "TextView").with_text("done");
    let found = find_first_by_text(Some(&root), "done").expect("root should match");
    assert!(found.parent.is_none());
}

#[test]
fn test_find_by_text_absent_root() {
    assert!(find_by_text(None, "done").is_empty());
}
