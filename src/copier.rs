use crate::clipboard::ClipboardSink;
use crate::fs::FsAccess;
use crate::selector::Selector;
use crate::tree::FileTree;
use crate::utils;
use anyhow::{Context, Result};

/// What a copy run produced, for the post-exit summary line.
pub struct CopyStats {
    pub files: usize,
    pub tokens: usize,
}

/// Serializes the selection into one clipboard payload and writes it in a
/// single call. Files are visited in sorted-path order so the output is
/// deterministic across runs. A file that cannot be read, or whose path
/// does not resolve relative to the working directory, is skipped without
/// comment; the clipboard write is the only error that escapes.
pub fn copy_selection(
    fs: &dyn FsAccess,
    sink: &mut dyn ClipboardSink,
    tree: &FileTree,
    selector: &Selector,
) -> Result<CopyStats> {
    let base = fs
        .current_dir()
        .context("could not resolve the working directory")?;

    let mut payload = String::new();
    let mut files = 0;
    for id in selector.sorted_by_path() {
        let node = tree.node(id);
        let Some(relative) = fs.relative_path(&node.path, &base) else {
            continue;
        };
        let Ok(content) = fs.read_file(&node.path) else {
            continue;
        };

        payload.push_str("★★ The contents of ");
        payload.push_str(&relative.display().to_string());
        payload.push_str(" is below.\n");
        payload.push_str(&String::from_utf8_lossy(&content));
        payload.push_str("\n\n");
        files += 1;
    }

    let tokens = utils::approx_tokens(&payload);
    sink.write(payload).context("clipboard write failed")?;
    Ok(CopyStats { files, tokens })
}
