//! # Workspace Module
//!
//! Resolves the directory tree a run operates on.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Workspace root selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Workspace {
  /// Workspace rooted at a git repository.
  Git { root: PathBuf },
  /// Workspace rooted at a plain directory.
  Directory { root: PathBuf },
}

impl Workspace {
  pub fn root(&self) -> &Path {
    match self {
      Self::Git { root } | Self::Directory { root } => root.as_path(),
    }
  }

  pub const fn is_git(&self) -> bool {
    matches!(self, Self::Git { .. })
  }
}

/// Resolve the workspace for a run.
///
/// An explicit root is used as given. Otherwise the nearest ancestor of the
/// current directory holding a `.git` entry is the root, falling back to the
/// current directory itself.
pub fn resolve_workspace(explicit_root: Option<&Path>) -> Result<Workspace> {
  let current_dir = std::env::current_dir().with_context(|| "Failed to get current directory")?;

  if let Some(root) = explicit_root {
    let root = abs_path_or_current(root, &current_dir);
    if !root.is_dir() {
      anyhow::bail!("Root is not a directory: {}", root.display());
    }
    return Ok(Workspace::Directory { root });
  }

  Ok(discover_from(&current_dir))
}

fn discover_from(start: &Path) -> Workspace {
  match start.ancestors().find(|dir| dir.join(".git").exists()) {
    Some(root) => Workspace::Git {
      root: root.to_path_buf(),
    },
    None => Workspace::Directory {
      root: start.to_path_buf(),
    },
  }
}

fn abs_path_or_current(path: &Path, current_dir: &Path) -> PathBuf {
  if path.is_absolute() {
    path.to_path_buf()
  } else {
    current_dir.join(path)
  }
}

#[cfg(test)]
mod tests {
  use std::fs;

  use tempfile::tempdir;

  use super::*;

  #[test]
  fn test_discover_git_root_from_subdirectory() {
    let dir = tempdir().unwrap();
    fs::create_dir_all(dir.path().join(".git")).unwrap();
    fs::create_dir_all(dir.path().join("python/mxnet")).unwrap();

    let workspace = discover_from(&dir.path().join("python/mxnet"));
    assert!(workspace.is_git());
    assert_eq!(workspace.root(), dir.path());
  }

  #[test]
  fn test_explicit_root_must_be_directory() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("setup.py");
    fs::write(&file, "").unwrap();

    assert!(resolve_workspace(Some(&file)).is_err());

    let workspace = resolve_workspace(Some(dir.path())).unwrap();
    assert_eq!(workspace.root(), dir.path());
    assert!(!workspace.is_git());
  }
}
