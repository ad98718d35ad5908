//! # Diff Module
//!
//! Renders the change `add` would make to a file, for `check --show-diff`
//! and `check --save-diff`.

use std::fmt::Write as _;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use owo_colors::{OwoColorize, Stream};
use similar::{ChangeTag, TextDiff};

/// Manages diff creation and rendering for license header changes.
#[derive(Debug, Default)]
pub struct DiffManager {
  /// Whether to print diffs to stderr
  pub show_diff: bool,

  /// File that diffs are appended to
  pub save_diff_path: Option<PathBuf>,
}

impl DiffManager {
  pub const fn new(show_diff: bool, save_diff_path: Option<PathBuf>) -> Self {
    Self {
      show_diff,
      save_diff_path,
    }
  }

  /// Whether any diff output was requested.
  pub const fn is_enabled(&self) -> bool {
    self.show_diff || self.save_diff_path.is_some()
  }

  /// Truncates the save file so a run starts with an empty diff.
  pub fn init(&self) -> Result<()> {
    if let Some(ref path) = self.save_diff_path {
      std::fs::write(path, "").with_context(|| format!("Failed to create diff file: {}", path.display()))?;
    }
    Ok(())
  }

  /// Renders a line diff between `original` and `new`.
  pub fn render(path: &Path, original: &str, new: &str) -> String {
    let diff = TextDiff::from_lines(original, new);

    let mut out = String::new();
    let _ = writeln!(out, "--- {}", path.display());
    let _ = writeln!(out, "+++ {}", path.display());
    for change in diff.iter_all_changes() {
      let sign = match change.tag() {
        ChangeTag::Delete => "-",
        ChangeTag::Insert => "+",
        ChangeTag::Equal => " ",
      };
      out.push_str(sign);
      out.push_str(change.as_str().unwrap_or_default());
      if change.missing_newline() {
        out.push('\n');
      }
    }
    out
  }

  /// Displays and/or saves the diff for one file.
  pub fn display_diff(&self, path: &Path, original: &str, new: &str) -> Result<()> {
    let rendered = Self::render(path, original, new);

    if self.show_diff {
      for line in rendered.lines() {
        let colored = if line.starts_with('+') {
          line.if_supports_color(Stream::Stderr, |l| l.green()).to_string()
        } else if line.starts_with('-') {
          line.if_supports_color(Stream::Stderr, |l| l.red()).to_string()
        } else {
          line.to_string()
        };
        eprintln!("{colored}");
      }
    }

    if let Some(ref diff_path) = self.save_diff_path {
      let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(diff_path)
        .with_context(|| format!("Failed to open diff file: {}", diff_path.display()))?;
      file
        .write_all(rendered.as_bytes())
        .with_context(|| format!("Failed to write diff file: {}", diff_path.display()))?;
    }

    Ok(())
  }
}
