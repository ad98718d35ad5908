//! # File Collector Module
//!
//! Recursive directory traversal.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;
use walkdir::WalkDir;

/// Collects the regular files under a root directory.
pub struct FileCollector;

impl FileCollector {
  /// Walks `root` recursively and returns every regular file.
  ///
  /// Symbolic links are not followed and are not returned. Entries come back
  /// sorted by file name within each directory. The first traversal error
  /// aborts the walk.
  pub fn traverse_directory(root: &Path) -> Result<Vec<PathBuf>> {
    debug!("Scanning directory: {}", root.display());
    let start_time = std::time::Instant::now();

    let mut files = Vec::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
      let entry = entry.with_context(|| format!("Failed to walk directory: {}", root.display()))?;
      if entry.file_type().is_file() {
        files.push(entry.into_path());
      }
    }

    debug!(
      "Found {} files in {}ms",
      files.len(),
      start_time.elapsed().as_millis()
    );

    Ok(files)
  }
}
