use crate::fs::FsAccess;
use std::io;
use std::path::PathBuf;

/// Handle into the tree's node arena. Stable for the whole session: nodes
/// are never removed, collapsing only hides them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

#[derive(Debug)]
pub struct FileNode {
    pub name: String,
    /// Absolute path; unique across the tree and used as the selection key.
    pub path: PathBuf,
    pub is_dir: bool,
    pub expanded: bool,
    pub selected: bool,
    pub children: Vec<NodeId>,
    pub parent: Option<NodeId>,
}

/// The file tree, rooted at the working directory. Nodes live in an arena
/// and reference each other by [`NodeId`], so the child→parent back-link
/// carries no ownership.
pub struct FileTree {
    nodes: Vec<FileNode>,
    root: NodeId,
}

impl FileTree {
    /// Builds the root node from the working directory and populates its
    /// children eagerly. Failure to resolve the working directory is the
    /// one fatal error here.
    pub fn build_root(fs: &dyn FsAccess) -> io::Result<Self> {
        let root_path = fs.current_dir()?;
        let name = root_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| root_path.to_string_lossy().into_owned());

        let mut tree = FileTree {
            nodes: vec![FileNode {
                name,
                path: root_path,
                is_dir: true,
                expanded: false,
                selected: false,
                children: Vec::new(),
                parent: None,
            }],
            root: NodeId(0),
        };
        tree.populate(tree.root, fs);
        Ok(tree)
    }

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn node(&self, id: NodeId) -> &FileNode {
        &self.nodes[id.0]
    }

    pub fn node_mut(&mut self, id: NodeId) -> &mut FileNode {
        &mut self.nodes[id.0]
    }

    /// Fills in the children of a directory node from the filesystem. A
    /// read failure leaves the node childless: expansion just shows an
    /// empty directory.
    pub fn populate(&mut self, id: NodeId, fs: &dyn FsAccess) {
        let (dir_path, is_dir) = {
            let node = self.node(id);
            (node.path.clone(), node.is_dir)
        };
        if !is_dir {
            return;
        }
        let entries = match fs.read_dir(&dir_path) {
            Ok(entries) => entries,
            Err(_) => return,
        };

        for entry in entries {
            let child = NodeId(self.nodes.len());
            self.nodes.push(FileNode {
                path: dir_path.join(&entry.name),
                name: entry.name,
                is_dir: entry.is_dir,
                expanded: false,
                selected: false,
                children: Vec::new(),
                parent: Some(id),
            });
            self.nodes[id.0].children.push(child);
        }
    }
}
