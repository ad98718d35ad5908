//! # File Filter Module
//!
//! Eligibility rules. A file is eligible when its path matches no exclusion
//! pattern and its extension has a comment marker. Each rule is a
//! [`FileFilter`] that reports why a file was skipped.

use std::path::Path;

use crate::config::HeaderConfig;

/// Result of a file filtering operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterResult {
  /// Whether the file should be processed
  pub should_process: bool,
  /// Reason why the file should not be processed (if any)
  pub reason: Option<String>,
}

impl FilterResult {
  pub const fn process() -> Self {
    Self {
      should_process: true,
      reason: None,
    }
  }

  pub fn skip(reason: impl Into<String>) -> Self {
    Self {
      should_process: false,
      reason: Some(reason.into()),
    }
  }
}

/// Trait for components that filter files based on certain criteria.
pub trait FileFilter: Send + Sync {
  fn should_process(&self, path: &Path) -> FilterResult;
}

/// Returns the extension of a path including the leading dot, or an empty
/// string when the file name has none.
///
/// Dotfiles such as `.bashrc` have no extension.
pub fn dotted_extension(path: &Path) -> String {
  path
    .extension()
    .and_then(|ext| ext.to_str())
    .map(|ext| format!(".{ext}"))
    .unwrap_or_default()
}

/// Skips any path containing one of the exclusion substrings.
pub struct ExclusionFilter {
  patterns: Vec<String>,
}

impl ExclusionFilter {
  pub const fn new(patterns: Vec<String>) -> Self {
    Self { patterns }
  }
}

impl FileFilter for ExclusionFilter {
  fn should_process(&self, path: &Path) -> FilterResult {
    let path_str = path.to_string_lossy();
    if self.patterns.iter().any(|p| path_str.contains(p.as_str())) {
      FilterResult::skip("Matches exclusion list")
    } else {
      FilterResult::process()
    }
  }
}

/// Skips files whose extension has no comment marker.
pub struct ExtensionFilter {
  extensions: Vec<String>,
}

impl ExtensionFilter {
  pub const fn new(extensions: Vec<String>) -> Self {
    Self { extensions }
  }
}

impl FileFilter for ExtensionFilter {
  fn should_process(&self, path: &Path) -> FilterResult {
    let ext = dotted_extension(path);
    if self.extensions.iter().any(|known| *known == ext) {
      FilterResult::process()
    } else {
      FilterResult::skip("Unknown file extension")
    }
  }
}

/// Filter that combines multiple filters; the first skip wins.
pub struct CompositeFilter {
  filters: Vec<Box<dyn FileFilter>>,
}

impl CompositeFilter {
  pub fn new(filters: Vec<Box<dyn FileFilter>>) -> Self {
    Self { filters }
  }
}

impl FileFilter for CompositeFilter {
  fn should_process(&self, path: &Path) -> FilterResult {
    for filter in &self.filters {
      let result = filter.should_process(path);
      if !result.should_process {
        return result;
      }
    }
    FilterResult::process()
  }
}

/// Builds the eligibility filter for a configuration: exclusions first, then
/// recognized extensions.
pub fn create_eligibility_filter(config: &HeaderConfig) -> CompositeFilter {
  CompositeFilter::new(vec![
    Box::new(ExclusionFilter::new(config.exclusions.clone())),
    Box::new(ExtensionFilter::new(config.languages.keys().cloned().collect())),
  ])
}
