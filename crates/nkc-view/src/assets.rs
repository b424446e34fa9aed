//! Icon asset existence checks.

use std::path::PathBuf;

/// Answers whether an asset path can be served.
pub trait AssetFiles {
    /// `path` is relative to the public asset root, without a leading `/`.
    fn exists(&self, path: &str) -> bool;
}

/// Asset files on the local filesystem below `root`.
#[derive(Debug, Clone)]
pub struct LocalAssets {
    root: PathBuf,
}

impl LocalAssets {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl AssetFiles for LocalAssets {
    fn exists(&self, path: &str) -> bool {
        self.root.join(path).is_file()
    }
}
