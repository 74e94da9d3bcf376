use crate::fs::FsAccess;
use crate::tree::{FileTree, NodeId};

/// Depth-first pre-order walk of the tree, descending only into expanded
/// directories. Recomputed on every call so it always reflects the current
/// expand state.
pub fn visible_nodes(tree: &FileTree) -> Vec<NodeId> {
    let mut nodes = Vec::new();
    let mut stack = vec![tree.root()];
    while let Some(id) = stack.pop() {
        nodes.push(id);
        let node = tree.node(id);
        if node.is_dir && node.expanded {
            // Push in reverse so children come off the stack in order.
            for &child in node.children.iter().rev() {
                stack.push(child);
            }
        }
    }
    nodes
}

fn visible_index(tree: &FileTree, cursor: NodeId) -> Option<(Vec<NodeId>, usize)> {
    let visible = visible_nodes(tree);
    let index = visible.iter().position(|&id| id == cursor)?;
    Some((visible, index))
}

/// One visible row up; stays put at the first row or when the cursor is
/// not currently visible.
pub fn move_up(tree: &FileTree, cursor: NodeId) -> NodeId {
    match visible_index(tree, cursor) {
        Some((visible, index)) if index > 0 => visible[index - 1],
        _ => cursor,
    }
}

/// One visible row down; stays put at the last row or when the cursor is
/// not currently visible.
pub fn move_down(tree: &FileTree, cursor: NodeId) -> NodeId {
    match visible_index(tree, cursor) {
        Some((visible, index)) if index + 1 < visible.len() => visible[index + 1],
        _ => cursor,
    }
}

/// Jumps to the nearest directory after the cursor in the visible sequence.
pub fn next_directory(tree: &FileTree, cursor: NodeId) -> NodeId {
    match visible_index(tree, cursor) {
        Some((visible, index)) => visible[index + 1..]
            .iter()
            .copied()
            .find(|&id| tree.node(id).is_dir)
            .unwrap_or(cursor),
        None => cursor,
    }
}

/// Jumps to the nearest directory before the cursor in the visible sequence.
pub fn previous_directory(tree: &FileTree, cursor: NodeId) -> NodeId {
    match visible_index(tree, cursor) {
        Some((visible, index)) => visible[..index]
            .iter()
            .rev()
            .copied()
            .find(|&id| tree.node(id).is_dir)
            .unwrap_or(cursor),
        None => cursor,
    }
}

/// Flips a directory's expanded flag, lazily building its children on the
/// first expansion. No-op on files.
pub fn toggle_expand(tree: &mut FileTree, fs: &dyn FsAccess, id: NodeId) {
    if !tree.node(id).is_dir {
        return;
    }
    let now_expanded = !tree.node(id).expanded;
    tree.node_mut(id).expanded = now_expanded;
    if now_expanded && tree.node(id).children.is_empty() {
        tree.populate(id, fs);
    }
}

/// Path from the root down to `id`, both inclusive.
pub fn breadcrumbs(tree: &FileTree, id: NodeId) -> Vec<NodeId> {
    let mut path = Vec::new();
    let mut current = Some(id);
    while let Some(node_id) = current {
        path.push(node_id);
        current = tree.node(node_id).parent;
    }
    path.reverse();
    path
}

/// Depth of a node below the root (root = 0).
pub fn node_level(tree: &FileTree, id: NodeId) -> usize {
    let mut level = 0;
    let mut current = tree.node(id).parent;
    while let Some(parent) = current {
        level += 1;
        current = tree.node(parent).parent;
    }
    level
}

/// Window of `max_rows` rows over a list of `total` rows, centered on the
/// cursor where possible and clamped to the list bounds. The cursor index
/// is always inside the returned half-open range.
pub fn scroll_window(total: usize, cursor_index: usize, max_rows: usize) -> (usize, usize) {
    if total <= max_rows || max_rows == 0 {
        return (0, total);
    }
    let half = max_rows / 2;
    let mut start = cursor_index.saturating_sub(half);
    if start + max_rows > total {
        start = total - max_rows;
    }
    (start, start + max_rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::mock::MockFs;

    // Layout used throughout:
    //   /work
    //     a.txt
    //     sub/
    //       b.txt
    //       deep/
    //     z.txt
    fn sample_fs() -> MockFs {
        MockFs::new("/work")
            .with_dir(
                "/work",
                &[("a.txt", false), ("sub", true), ("z.txt", false)],
            )
            .with_dir("/work/sub", &[("b.txt", false), ("deep", true)])
            .with_dir("/work/sub/deep", &[])
    }

    fn names(tree: &FileTree, ids: &[NodeId]) -> Vec<String> {
        ids.iter().map(|&id| tree.node(id).name.clone()).collect()
    }

    fn child(tree: &FileTree, parent: NodeId, index: usize) -> NodeId {
        tree.node(parent).children[index]
    }

    #[test]
    fn collapsed_root_shows_only_itself() {
        let fs = sample_fs();
        let tree = FileTree::build_root(&fs).unwrap();
        assert_eq!(visible_nodes(&tree), vec![tree.root()]);
    }

    #[test]
    fn expansion_reveals_descendants_in_preorder() {
        let fs = sample_fs();
        let mut tree = FileTree::build_root(&fs).unwrap();
        let root = tree.root();
        toggle_expand(&mut tree, &fs, root);
        let sub = child(&tree, root, 1);
        toggle_expand(&mut tree, &fs, sub);

        let visible = visible_nodes(&tree);
        assert_eq!(
            names(&tree, &visible),
            ["work", "a.txt", "sub", "b.txt", "deep", "z.txt"]
        );
    }

    #[test]
    fn collapse_hides_descendants_but_keeps_children_cached() {
        let fs = sample_fs();
        let mut tree = FileTree::build_root(&fs).unwrap();
        let root = tree.root();
        toggle_expand(&mut tree, &fs, root);
        let sub = child(&tree, root, 1);
        toggle_expand(&mut tree, &fs, sub);
        toggle_expand(&mut tree, &fs, sub);

        assert_eq!(tree.node(sub).children.len(), 2);
        let visible = visible_nodes(&tree);
        assert_eq!(names(&tree, &visible), ["work", "a.txt", "sub", "z.txt"]);
    }

    #[test]
    fn toggle_expand_ignores_files() {
        let fs = sample_fs();
        let mut tree = FileTree::build_root(&fs).unwrap();
        let root = tree.root();
        toggle_expand(&mut tree, &fs, root);
        let file = child(&tree, root, 0);
        toggle_expand(&mut tree, &fs, file);
        assert!(!tree.node(file).expanded);
    }

    #[test]
    fn down_then_up_returns_to_start() {
        let fs = sample_fs();
        let mut tree = FileTree::build_root(&fs).unwrap();
        let root = tree.root();
        toggle_expand(&mut tree, &fs, root);

        let start = child(&tree, root, 0);
        let down = move_down(&tree, start);
        assert_ne!(down, start);
        assert_eq!(move_up(&tree, down), start);
    }

    #[test]
    fn movement_does_not_wrap() {
        let fs = sample_fs();
        let mut tree = FileTree::build_root(&fs).unwrap();
        let root = tree.root();
        toggle_expand(&mut tree, &fs, root);

        assert_eq!(move_up(&tree, root), root);
        let last = child(&tree, root, 2);
        assert_eq!(move_down(&tree, last), last);
    }

    #[test]
    fn hidden_cursor_leaves_movement_unchanged() {
        let fs = sample_fs();
        let mut tree = FileTree::build_root(&fs).unwrap();
        let root = tree.root();
        toggle_expand(&mut tree, &fs, root);
        let sub = child(&tree, root, 1);
        toggle_expand(&mut tree, &fs, sub);
        let b = child(&tree, sub, 0);
        toggle_expand(&mut tree, &fs, sub); // collapse, b is no longer visible

        assert_eq!(move_up(&tree, b), b);
        assert_eq!(move_down(&tree, b), b);
        assert_eq!(next_directory(&tree, b), b);
        assert_eq!(previous_directory(&tree, b), b);
    }

    #[test]
    fn directory_jump_skips_intervening_files() {
        let fs = sample_fs();
        let mut tree = FileTree::build_root(&fs).unwrap();
        let root = tree.root();
        toggle_expand(&mut tree, &fs, root);

        // Cursor on a.txt; the next directory in visible order is sub.
        let a = child(&tree, root, 0);
        let sub = child(&tree, root, 1);
        assert_eq!(next_directory(&tree, a), sub);
        // No directory after sub, cursor stays.
        let z = child(&tree, root, 2);
        assert_eq!(next_directory(&tree, z), z);
        // Backwards from z.txt lands on sub, from a.txt on the root.
        assert_eq!(previous_directory(&tree, z), sub);
        assert_eq!(previous_directory(&tree, a), root);
        assert_eq!(previous_directory(&tree, root), root);
    }

    #[test]
    fn breadcrumbs_run_root_to_node() {
        let fs = sample_fs();
        let mut tree = FileTree::build_root(&fs).unwrap();
        let root = tree.root();
        toggle_expand(&mut tree, &fs, root);
        let sub = child(&tree, root, 1);
        toggle_expand(&mut tree, &fs, sub);
        let b = child(&tree, sub, 0);

        assert_eq!(breadcrumbs(&tree, b), vec![root, sub, b]);
        assert_eq!(breadcrumbs(&tree, root), vec![root]);
    }

    #[test]
    fn node_level_counts_parent_hops() {
        let fs = sample_fs();
        let mut tree = FileTree::build_root(&fs).unwrap();
        let root = tree.root();
        toggle_expand(&mut tree, &fs, root);
        let sub = child(&tree, root, 1);
        toggle_expand(&mut tree, &fs, sub);
        let b = child(&tree, sub, 0);

        assert_eq!(node_level(&tree, root), 0);
        assert_eq!(node_level(&tree, sub), 1);
        assert_eq!(node_level(&tree, b), 2);
    }

    #[test]
    fn scroll_window_keeps_cursor_in_range() {
        // Short list: no clipping at all.
        assert_eq!(scroll_window(3, 1, 10), (0, 3));
        // Cursor near the top: window pinned to the start.
        assert_eq!(scroll_window(100, 2, 10), (0, 10));
        // Cursor mid-list: centered.
        assert_eq!(scroll_window(100, 50, 10), (45, 55));
        // Cursor near the end: window pinned to the end.
        assert_eq!(scroll_window(100, 99, 10), (90, 100));

        for cursor in 0..100 {
            let (start, end) = scroll_window(100, cursor, 10);
            assert!(start <= cursor && cursor < end);
            assert_eq!(end - start, 10);
            assert!(end <= 100);
        }
    }
}
