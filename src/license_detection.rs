//! # License Detection Module
//!
//! Decides whether a file already carries an acceptable license. The
//! [`LicenseDetector`] trait keeps the processor independent of the
//! detection rule.

/// Trait for license detectors.
pub trait LicenseDetector: Send + Sync {
  /// Returns `true` if the file, given as its lines, already has a license.
  fn already_licensed(&self, lines: &[&str]) -> bool;
}

/// Substring detector.
///
/// A file is licensed when any line contains any of the configured patterns.
/// Every line is checked, not only the top of the file, so a header placed
/// after a long preamble still counts.
#[derive(Debug, Clone)]
pub struct PatternLicenseDetector {
  patterns: Vec<String>,
}

impl PatternLicenseDetector {
  pub const fn new(patterns: Vec<String>) -> Self {
    Self { patterns }
  }
}

impl LicenseDetector for PatternLicenseDetector {
  fn already_licensed(&self, lines: &[&str]) -> bool {
    lines
      .iter()
      .any(|line| self.patterns.iter().any(|pattern| line.contains(pattern.as_str())))
  }
}
