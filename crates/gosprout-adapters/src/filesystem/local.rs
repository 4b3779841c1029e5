//! Local filesystem adapter using std::fs.

use std::io;
use std::path::Path;

use gosprout_core::{
    application::{ApplicationError, ports::Filesystem},
    error::{SproutError, SproutResult},
};

/// Production filesystem implementation using `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Filesystem for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn has_content(&self, path: &Path) -> SproutResult<bool> {
        let metadata = std::fs::metadata(path).map_err(|e| map_io_error(path, e, "inspect"))?;
        if metadata.is_dir() {
            let mut entries =
                std::fs::read_dir(path).map_err(|e| map_io_error(path, e, "read directory"))?;
            Ok(entries.next().is_some())
        } else {
            Ok(metadata.len() > 0)
        }
    }

    fn create_dir_all(&self, path: &Path) -> SproutResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file(&self, path: &Path, content: &str) -> SproutResult<()> {
        std::fs::write(path, content).map_err(|e| map_io_error(path, e, "write"))
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &'static str) -> SproutError {
    ApplicationError::filesystem(operation, path, e).into()
}
