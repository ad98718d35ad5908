//! # Processor Module
//!
//! The core of the tool: decide whether a file needs a license header and,
//! in [`Mode::Add`], write it.
//!
//! The module is organized into several submodules:
//! - [`file_io`] - File reading and writing operations
//! - [`content_transformer`] - Legacy header removal, shebang handling, header insertion
//! - [`file_collector`] - Directory traversal
//!
//! Files are processed one at a time, in traversal order. The first I/O error
//! stops the run; files already rewritten stay rewritten.

mod content_transformer;
mod file_collector;
mod file_io;

use std::path::{Path, PathBuf};

use anyhow::Result;
pub use content_transformer::{ContentTransformer, split_lines};
pub use file_collector::FileCollector;
pub use file_io::FileIO;
use tracing::{debug, trace};

use crate::config::HeaderConfig;
use crate::diff::DiffManager;
use crate::file_filter::{CompositeFilter, FileFilter, create_eligibility_filter, dotted_extension};
use crate::license_detection::{LicenseDetector, PatternLicenseDetector};
use crate::report::{FileAction, FileReport};
use crate::templates::render_header;
use crate::verbose_log;

/// What a run does to files missing a header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
  /// Rewrite the file with the header prepended
  Add,
  /// Report the file and leave it untouched
  Check,
}

/// Processor for handling license operations on files.
pub struct Processor {
  config: HeaderConfig,
  mode: Mode,
  file_filter: CompositeFilter,
  license_detector: Box<dyn LicenseDetector>,
  content_transformer: ContentTransformer,
  diff_manager: DiffManager,
}

impl Processor {
  /// Creates a processor for the given configuration and mode.
  pub fn new(config: HeaderConfig, mode: Mode) -> Self {
    let file_filter = create_eligibility_filter(&config);
    let license_detector = Box::new(PatternLicenseDetector::new(config.detection_patterns.clone()));
    let content_transformer = ContentTransformer::new(&config);

    Self {
      config,
      mode,
      file_filter,
      license_detector,
      content_transformer,
      diff_manager: DiffManager::default(),
    }
  }

  /// Replaces the license detector.
  pub fn with_license_detector(mut self, detector: Box<dyn LicenseDetector>) -> Self {
    self.license_detector = detector;
    self
  }

  /// Sets how check mode reports the change it would make.
  pub fn with_diff_manager(mut self, diff_manager: DiffManager) -> Self {
    self.diff_manager = diff_manager;
    self
  }

  pub const fn mode(&self) -> Mode {
    self.mode
  }

  /// Whether the path is excluded or has an unrecognized extension.
  pub fn is_eligible(&self, path: &Path) -> bool {
    self.file_filter.should_process(path).should_process
  }

  /// Whether any line already carries an acceptable license.
  pub fn already_licensed(&self, lines: &[&str]) -> bool {
    self.license_detector.already_licensed(lines)
  }

  /// Processes a single file.
  ///
  /// Eligibility is judged on the path exactly as given.
  pub fn process_file(&self, path: &Path) -> Result<FileReport> {
    let filter_result = self.file_filter.should_process(path);
    if !filter_result.should_process {
      let reason = filter_result.reason.unwrap_or_default();
      trace!("Skipping: {} ({})", path.display(), reason);
      return Ok(FileReport::skipped(path.to_path_buf(), reason));
    }

    let extension = dotted_extension(path);
    let Some(marker) = self.config.marker_for(&extension) else {
      return Ok(FileReport::skipped(path.to_path_buf(), "Unknown file extension"));
    };

    let content = FileIO::read_full_content(path)?;
    let lines = split_lines(&content);
    if lines.is_empty() {
      trace!("Skipping: {} (empty file)", path.display());
      return Ok(FileReport::skipped(path.to_path_buf(), "Empty file"));
    }

    if self.already_licensed(&lines) {
      trace!("{} already licensed", path.display());
      return Ok(FileReport::new(path.to_path_buf(), FileAction::AlreadyLicensed));
    }

    let header = render_header(marker);
    let new_content = self.content_transformer.insert_header(&lines, &extension, &header);

    match self.mode {
      Mode::Add => {
        FileIO::write_file(path, &new_content)?;
        verbose_log!("added license header to {}", path.display());
        Ok(FileReport::new(path.to_path_buf(), FileAction::Added))
      }
      Mode::Check => {
        if self.diff_manager.is_enabled() {
          self.diff_manager.display_diff(path, &content, &new_content)?;
        }
        Ok(FileReport::new(path.to_path_buf(), FileAction::Missing))
      }
    }
  }

  /// Processes every regular file under `root`, in traversal order.
  ///
  /// Each file is judged on its full walked path, `root` included, so an
  /// exclusion such as `src/operator/mkl/` still applies when `root` is a
  /// subdirectory of the repository.
  pub fn process_tree(&self, root: &Path) -> Result<Vec<FileReport>> {
    let files = FileCollector::traverse_directory(root)?;
    debug!("Processing {} files under {}", files.len(), root.display());

    files.iter().map(|path| self.process_file(path)).collect()
  }
}

/// Paths from a set of reports that carry the given action.
pub fn paths_with_action(reports: &[FileReport], action: FileAction) -> Vec<PathBuf> {
  reports
    .iter()
    .filter(|r| r.action == action)
    .map(|r| r.path.clone())
    .collect()
}

#[cfg(test)]
mod tests {
  use std::fs;

  use tempfile::tempdir;

  use super::*;
  use crate::templates::CommentMarker;

  struct AlwaysLicensed;

  impl LicenseDetector for AlwaysLicensed {
    fn already_licensed(&self, _lines: &[&str]) -> bool {
      true
    }
  }

  #[test]
  fn test_is_eligible() {
    let processor = Processor::new(HeaderConfig::default(), Mode::Check);

    assert!(processor.is_eligible(Path::new("src/ndarray/ndarray.cc")));
    assert!(processor.is_eligible(Path::new("tools/launch.sh")));
    assert!(!processor.is_eligible(Path::new("src/operator/mkl/mkl_util.h")));
    assert!(!processor.is_eligible(Path::new("docs/index.md")));
    assert!(!processor.is_eligible(Path::new("Makefile")));
  }

  #[test]
  fn test_process_file_adds_star_header() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("op.cu");
    fs::write(&path, "__global__ void k() {}\n").unwrap();

    let processor = Processor::new(HeaderConfig::default(), Mode::Add);
    let report = processor.process_file(&path).unwrap();

    assert_eq!(report.action, FileAction::Added);
    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(
      content,
      format!("{}__global__ void k() {{}}\n", render_header(CommentMarker::Star))
    );
  }

  #[test]
  fn test_check_mode_does_not_write() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("run.sh");
    fs::write(&path, "echo hi\n").unwrap();

    let processor = Processor::new(HeaderConfig::default(), Mode::Check);
    let report = processor.process_file(&path).unwrap();

    assert_eq!(report.action, FileAction::Missing);
    assert_eq!(fs::read_to_string(&path).unwrap(), "echo hi\n");
  }

  #[test]
  fn test_empty_file_is_skipped() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("__init__.py");
    fs::write(&path, "").unwrap();

    let processor = Processor::new(HeaderConfig::default(), Mode::Add);
    let report = processor.process_file(&path).unwrap();

    assert_eq!(report.action, FileAction::Skipped);
    assert_eq!(report.reason.as_deref(), Some("Empty file"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "");
  }

  #[test]
  fn test_custom_detector() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("a.py");
    fs::write(&path, "x = 1\n").unwrap();

    let processor = Processor::new(HeaderConfig::default(), Mode::Add).with_license_detector(Box::new(AlwaysLicensed));
    let report = processor.process_file(&path).unwrap();

    assert_eq!(report.action, FileAction::AlreadyLicensed);
    assert_eq!(fs::read_to_string(&path).unwrap(), "x = 1\n");
  }

  #[test]
  fn test_missing_file_errors() {
    let dir = tempdir().unwrap();
    let processor = Processor::new(HeaderConfig::default(), Mode::Add);
    assert!(processor.process_file(&dir.path().join("gone.py")).is_err());
  }

  #[test]
  fn test_process_tree_keeps_exclusions_under_subdirectory_root() {
    let dir = tempdir().unwrap();
    let src = dir.path().join("src");
    fs::create_dir_all(src.join("operator/mkl")).unwrap();
    fs::write(src.join("operator/mkl/mkl_conv.h"), "int conv();\n").unwrap();
    fs::write(src.join("engine.cc"), "int run() {}\n").unwrap();

    let processor = Processor::new(HeaderConfig::default(), Mode::Add);
    let reports = processor.process_tree(&src).unwrap();

    assert_eq!(paths_with_action(&reports, FileAction::Added), vec![src.join("engine.cc")]);
    assert_eq!(
      paths_with_action(&reports, FileAction::Skipped),
      vec![src.join("operator/mkl/mkl_conv.h")]
    );
    assert_eq!(fs::read_to_string(src.join("operator/mkl/mkl_conv.h")).unwrap(), "int conv();\n");
  }

  #[test]
  fn test_check_mode_save_diff_failure_aborts() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("a.py");
    fs::write(&path, "x = 1\n").unwrap();

    let diff_manager = DiffManager::new(false, Some(dir.path().join("no-such-dir/license.diff")));
    let processor = Processor::new(HeaderConfig::default(), Mode::Check).with_diff_manager(diff_manager);

    assert!(processor.process_file(&path).is_err());
    assert_eq!(fs::read_to_string(&path).unwrap(), "x = 1\n");
  }
}
