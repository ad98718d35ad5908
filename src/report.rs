//! # Report Module
//!
//! Per-file outcomes of a run and the summary derived from them.

use std::path::PathBuf;
use std::time::Duration;

/// What happened to a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileAction {
  /// License header was written to the file
  Added,
  /// File lacks a license header (check mode, nothing written)
  Missing,
  /// File already carries an acceptable license
  AlreadyLicensed,
  /// File was not eligible or had nothing to license
  Skipped,
}

/// Information about a processed file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
  /// Path to the file
  pub path: PathBuf,
  /// Outcome for this file
  pub action: FileAction,
  /// Why the file was skipped, if it was
  pub reason: Option<String>,
}

impl FileReport {
  pub const fn new(path: PathBuf, action: FileAction) -> Self {
    Self {
      path,
      action,
      reason: None,
    }
  }

  pub fn skipped(path: PathBuf, reason: impl Into<String>) -> Self {
    Self {
      path,
      action: FileAction::Skipped,
      reason: Some(reason.into()),
    }
  }
}

/// Totals for a run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessingSummary {
  pub total_files: usize,
  pub files_with_license: usize,
  pub files_missing: usize,
  pub files_added: usize,
  pub files_ignored: usize,
  pub processing_time: Duration,
}

impl ProcessingSummary {
  pub fn from_reports(reports: &[FileReport], processing_time: Duration) -> Self {
    let count = |action: FileAction| reports.iter().filter(|r| r.action == action).count();

    Self {
      total_files: reports.len(),
      files_with_license: count(FileAction::AlreadyLicensed),
      files_missing: count(FileAction::Missing),
      files_added: count(FileAction::Added),
      files_ignored: count(FileAction::Skipped),
      processing_time,
    }
  }
}
