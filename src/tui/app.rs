use crate::fs::FsAccess;
use crate::navigator;
use crate::selector::Selector;
use crate::tree::{FileTree, NodeId};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::io;

/// Which panel receives movement keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Focus {
    Tree,
    Selection,
}

/// The whole interactive session: tree, cursor, selection, and panel
/// state. Every keypress goes through [`App::handle_key`], a plain
/// state transition with no terminal dependency.
pub struct App {
    pub(super) tree: FileTree,
    pub(super) cursor: NodeId,
    pub(super) selector: Selector,
    pub(super) focus: Focus,
    pub(super) right_scroll: usize,
    /// Selection panel ordering: tree-traversal order instead of the
    /// default path order.
    pub(super) right_tree_order: bool,
    quit: bool,
    confirmed: bool,
}

impl App {
    pub fn new(fs: &dyn FsAccess) -> io::Result<Self> {
        let tree = FileTree::build_root(fs)?;
        let cursor = tree.root();
        Ok(App {
            tree,
            cursor,
            selector: Selector::new(),
            focus: Focus::Tree,
            right_scroll: 0,
            right_tree_order: false,
            quit: false,
            confirmed: false,
        })
    }

    pub fn tree(&self) -> &FileTree {
        &self.tree
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    pub fn quit(&self) -> bool {
        self.quit
    }

    pub fn confirmed(&self) -> bool {
        self.confirmed
    }

    pub(super) fn handle_key(&mut self, fs: &dyn FsAccess, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.confirmed = true;
                self.quit = true;
            }
            KeyCode::Char('w') => {
                self.confirmed = true;
                self.quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.quit = true,
            KeyCode::Char('l') | KeyCode::Char('L') => {
                if !self.selector.is_empty() {
                    self.focus = Focus::Selection;
                }
            }
            KeyCode::Char('h') | KeyCode::Char('H') => self.focus = Focus::Tree,
            KeyCode::Up | KeyCode::Char('k') => match self.focus {
                Focus::Selection => self.right_scroll = self.right_scroll.saturating_sub(1),
                Focus::Tree => self.cursor = navigator::move_up(&self.tree, self.cursor),
            },
            KeyCode::Down | KeyCode::Char('j') => match self.focus {
                Focus::Selection => {
                    if self.right_scroll + 1 < self.selector.len() {
                        self.right_scroll += 1;
                    }
                }
                Focus::Tree => self.cursor = navigator::move_down(&self.tree, self.cursor),
            },
            KeyCode::Char('K') => {
                if self.focus == Focus::Tree {
                    self.cursor = navigator::previous_directory(&self.tree, self.cursor);
                }
            }
            KeyCode::Char('J') => {
                if self.focus == Focus::Tree {
                    self.cursor = navigator::next_directory(&self.tree, self.cursor);
                }
            }
            KeyCode::Enter => {
                if self.focus == Focus::Tree {
                    if self.tree.node(self.cursor).is_dir {
                        navigator::toggle_expand(&mut self.tree, fs, self.cursor);
                    } else {
                        self.toggle_select();
                    }
                }
            }
            KeyCode::Char(' ') => {
                if self.focus == Focus::Tree {
                    self.toggle_select();
                }
            }
            KeyCode::Char('s') => {
                if self.focus == Focus::Selection {
                    self.right_tree_order = !self.right_tree_order;
                }
            }
            _ => {}
        }
    }

    fn toggle_select(&mut self) {
        self.selector.toggle(&mut self.tree, self.cursor);
        // Deselection can shrink the panel past the scroll position.
        if !self.selector.is_empty() {
            self.right_scroll = self.right_scroll.min(self.selector.len() - 1);
        } else {
            self.right_scroll = 0;
            self.focus = Focus::Tree;
        }
    }
}
