//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard},
};

use gosprout_core::{
    application::{ApplicationError, ports::Filesystem},
    error::SproutResult,
};

/// In-memory filesystem for testing.
///
/// Clones share state, so a test can keep a handle after boxing one into
/// the pipeline.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    /// Paths whose writes fail.
    read_only: HashSet<PathBuf>,
}

impl MemoryFilesystemInner {
    fn add_dir(&mut self, path: &Path) {
        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            self.directories.insert(current.clone());
        }
    }
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, MemoryFilesystemInner> {
        self.inner.read().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn write(&self) -> RwLockWriteGuard<'_, MemoryFilesystemInner> {
        self.inner
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Seed a file, creating its parent directories.
    pub fn with_file(self, path: impl AsRef<Path>, content: &str) -> Self {
        {
            let path = path.as_ref();
            let mut inner = self.write();
            if let Some(parent) = path.parent() {
                inner.add_dir(parent);
            }
            inner.files.insert(path.to_path_buf(), content.to_string());
        }
        self
    }

    /// Seed a directory.
    pub fn with_dir(self, path: impl AsRef<Path>) -> Self {
        self.write().add_dir(path.as_ref());
        self
    }

    /// Make every write to `path` fail.
    pub fn with_read_only(self, path: impl AsRef<Path>) -> Self {
        self.write().read_only.insert(path.as_ref().to_path_buf());
        self
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: impl AsRef<Path>) -> Option<String> {
        self.read().files.get(path.as_ref()).cloned()
    }

    /// List all files, sorted.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let mut files: Vec<_> = self.read().files.keys().cloned().collect();
        files.sort();
        files
    }
}

impl Filesystem for MemoryFilesystem {
    fn exists(&self, path: &Path) -> bool {
        let inner = self.read();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }

    fn has_content(&self, path: &Path) -> SproutResult<bool> {
        let inner = self.read();
        if let Some(content) = inner.files.get(path) {
            return Ok(!content.is_empty());
        }
        if !inner.directories.contains(path) {
            return Err(
                ApplicationError::filesystem("inspect", path, "no such file or directory").into(),
            );
        }
        let is_child = |p: &PathBuf| p.parent() == Some(path);
        Ok(inner.files.keys().any(is_child) || inner.directories.iter().any(is_child))
    }

    fn create_dir_all(&self, path: &Path) -> SproutResult<()> {
        let mut inner = self.write();
        if inner.files.contains_key(path) {
            return Err(
                ApplicationError::filesystem("create directory", path, "file exists").into(),
            );
        }
        inner.add_dir(path);
        Ok(())
    }

    fn write_file(&self, path: &Path, content: &str) -> SproutResult<()> {
        let mut inner = self.write();

        if inner.read_only.contains(path) {
            return Err(ApplicationError::filesystem("write", path, "permission denied").into());
        }

        // Ensure parent exists
        let orphaned = path
            .parent()
            .is_some_and(|parent| !parent.as_os_str().is_empty() && !inner.directories.contains(parent));
        if orphaned {
            return Err(
                ApplicationError::filesystem("write", path, "parent directory does not exist").into(),
            );
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }
}
