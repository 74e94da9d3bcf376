use crate::tree::{FileTree, NodeId};
use std::collections::HashMap;
use std::path::PathBuf;

/// The set of files marked for copying, keyed by absolute path. The map is
/// the source of truth; the per-node `selected` flag is kept in sync on
/// every toggle so the tree view can render marks without a lookup.
#[derive(Default)]
pub struct Selector {
    selection: HashMap<PathBuf, NodeId>,
}

impl Selector {
    pub fn new() -> Self {
        Selector::default()
    }

    /// Flips a file's membership in the selection. Directories are never
    /// selectable; toggling one does nothing.
    pub fn toggle(&mut self, tree: &mut FileTree, id: NodeId) {
        if tree.node(id).is_dir {
            return;
        }
        let node = tree.node_mut(id);
        node.selected = !node.selected;
        if node.selected {
            self.selection.insert(node.path.clone(), id);
        } else {
            self.selection.remove(&node.path);
        }
    }

    pub fn selection(&self) -> &HashMap<PathBuf, NodeId> {
        &self.selection
    }

    pub fn len(&self) -> usize {
        self.selection.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selection.is_empty()
    }

    /// Selected nodes in ascending path order. The map has no inherent
    /// order, so this sort is the single normalization point for anything
    /// user-visible: the clipboard payload and the selection panel both
    /// iterate this, never the raw map.
    pub fn sorted_by_path(&self) -> Vec<NodeId> {
        let mut entries: Vec<(&PathBuf, NodeId)> =
            self.selection.iter().map(|(path, &id)| (path, id)).collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        entries.into_iter().map(|(_, id)| id).collect()
    }

    /// Selected nodes filtered out of the visible sequence, preserving
    /// tree-traversal order. Alternate ordering for the selection panel.
    pub fn in_visible_order(&self, tree: &FileTree, visible: &[NodeId]) -> Vec<NodeId> {
        visible
            .iter()
            .copied()
            .filter(|&id| tree.node(id).selected)
            .collect()
    }
}
