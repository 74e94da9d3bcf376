use ignore::WalkBuilder;
use std::io;
use std::path::{Path, PathBuf};

/// One entry of a directory listing, as much as the tree needs to know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntryInfo {
    pub name: String,
    pub is_dir: bool,
}

/// Filesystem operations the core depends on. The real implementation is
/// [`OsFs`]; tests substitute an in-memory fake.
pub trait FsAccess {
    fn current_dir(&self) -> io::Result<PathBuf>;

    /// Lists the immediate entries of `path`, sorted by name.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntryInfo>>;

    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// `target` relative to `base`, or `None` if `target` is not under `base`.
    fn relative_path(&self, target: &Path, base: &Path) -> Option<PathBuf>;
}

/// Real filesystem access. Listings go through the `ignore` walker so
/// `.gitignore` rules apply unless the user asked for everything.
pub struct OsFs {
    include_ignored: bool,
}

impl OsFs {
    pub fn new(include_ignored: bool) -> Self {
        OsFs { include_ignored }
    }
}

impl FsAccess for OsFs {
    fn current_dir(&self) -> io::Result<PathBuf> {
        std::env::current_dir()
    }

    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntryInfo>> {
        // The walker swallows an unreadable root; probe it first so the
        // caller sees the io::Error the contract promises.
        std::fs::read_dir(path)?;

        let mut walker = WalkBuilder::new(path);
        walker.max_depth(Some(1));
        if self.include_ignored {
            walker.git_ignore(false).ignore(false);
        }

        let mut entries = Vec::new();
        for result in walker.build() {
            let dirent = match result {
                Ok(v) => v,
                Err(_) => continue,
            };
            if dirent.depth() == 0 {
                // The walker yields `path` itself first; skip it.
                continue;
            }
            let is_dir = dirent.file_type().is_some_and(|t| t.is_dir());
            entries.push(DirEntryInfo {
                name: dirent.file_name().to_string_lossy().into_owned(),
                is_dir,
            });
        }

        entries.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(entries)
    }

    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    fn relative_path(&self, target: &Path, base: &Path) -> Option<PathBuf> {
        target.strip_prefix(base).ok().map(Path::to_path_buf)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_dir_lists_entries_sorted_by_name() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("zeta.txt"), "z").unwrap();
        std::fs::write(dir.path().join("alpha.txt"), "a").unwrap();
        std::fs::create_dir(dir.path().join("mid")).unwrap();

        let fs = OsFs::new(false);
        let entries = fs.read_dir(dir.path()).unwrap();
        let names: Vec<&str> = entries.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["alpha.txt", "mid", "zeta.txt"]);
        assert!(entries[1].is_dir);
        assert!(!entries[0].is_dir);
    }

    #[test]
    fn read_dir_fails_on_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        let fs = OsFs::new(false);
        assert!(fs.read_dir(&dir.path().join("nope")).is_err());
    }

    #[test]
    fn relative_path_requires_target_under_base() {
        let fs = OsFs::new(false);
        assert_eq!(
            fs.relative_path(Path::new("/work/sub/b.txt"), Path::new("/work")),
            Some(PathBuf::from("sub/b.txt"))
        );
        assert_eq!(
            fs.relative_path(Path::new("/elsewhere/x"), Path::new("/work")),
            None
        );
    }
}
