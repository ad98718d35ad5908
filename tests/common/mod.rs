#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Result;

pub const APACHE_MARKER: &str = "Licensed to the Apache Software Foundation";

/// Writes `content` to `root/relative`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, content: &str) -> Result<PathBuf> {
  let path = root.join(relative);
  if let Some(parent) = path.parent() {
    fs::create_dir_all(parent)?;
  }
  fs::write(&path, content)?;
  Ok(path)
}

/// Reads every regular file under `root` as (relative path, bytes), sorted.
pub fn snapshot(root: &Path) -> Result<Vec<(PathBuf, Vec<u8>)>> {
  let mut files = Vec::new();
  for entry in walkdir::WalkDir::new(root) {
    let entry = entry?;
    if entry.file_type().is_file() {
      let relative = entry.path().strip_prefix(root)?.to_path_buf();
      files.push((relative, fs::read(entry.path())?));
    }
  }
  files.sort();
  Ok(files)
}

/// A file that already carries the Apache header in `#` style.
pub fn licensed_python(body: &str) -> String {
  format!("# {APACHE_MARKER} (ASF) under one\n# ...\n\n{body}")
}
