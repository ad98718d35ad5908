//! # File I/O Module
//!
//! Whole-file reads and writes used by the processor. Handles are scoped to
//! each call, so they are closed on every exit path.

use std::path::Path;

use anyhow::{Context, Result};

pub struct FileIO;

impl FileIO {
  /// Read full file content.
  pub fn read_full_content(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
  }

  /// Replace the file content.
  ///
  /// The file is truncated and rewritten in place; an interruption midway can
  /// leave it partially written.
  pub fn write_file(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).with_context(|| format!("Failed to write file: {}", path.display()))
  }
}
