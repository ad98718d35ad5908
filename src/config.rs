//! # Configuration Module
//!
//! This module holds the static tables that drive header processing: which
//! extensions are eligible and how they are commented, which paths are
//! excluded, how an existing license is recognized, and which legacy header
//! line gets replaced.
//!
//! [`HeaderConfig::default`] carries the built-in tables. A
//! `.license-header.toml` file in the root directory (or a file named via
//! `--config` or the `LICENSE_HEADER_CONFIG` environment variable) can extend
//! them:
//!
//! ```toml
//! exclude = ["third_party/"]
//! detect = ["SPDX-License-Identifier: Apache-2.0"]
//!
//! [languages]
//! java = "*"
//! rb = "#"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use regex::Regex;
use serde::Deserialize;

use crate::templates::CommentMarker;
use crate::verbose_log;

/// The default config file name.
pub const DEFAULT_CONFIG_FILENAME: &str = ".license-header.toml";

/// Environment variable for specifying config file path.
pub const CONFIG_ENV_VAR: &str = "LICENSE_HEADER_CONFIG";

/// Extensions and the comment marker used for their header.
const DEFAULT_LANGUAGES: &[(&str, CommentMarker)] = &[
  (".cc", CommentMarker::Star),
  (".h", CommentMarker::Star),
  (".cu", CommentMarker::Star),
  (".cuh", CommentMarker::Star),
  (".py", CommentMarker::Hash),
  (".pm", CommentMarker::Hash),
  (".scala", CommentMarker::Star),
  (".sh", CommentMarker::Hash),
  (".cmake", CommentMarker::Hash),
];

/// Vendored and third-party directories that are never touched.
const DEFAULT_EXCLUSIONS: &[&str] = &[
  "R-package/",
  "cub/",
  "dlpack/",
  "dmlc-core/",
  "mshadow/",
  "nnvm",
  "ps-lite",
  "src/operator/mkl/",
  "src/operator/contrib/ctc_include/",
];

/// A file containing any of these is considered licensed.
const DEFAULT_DETECTION_PATTERNS: &[&str] = &["Licensed to the Apache Software Foundation"];

/// Obsolete attribution line removed before the header is inserted.
const DEFAULT_LEGACY_HEADER: &str = ".*Copyright.*by Contributors";

/// Extensions the legacy header is stripped from.
const DEFAULT_LEGACY_EXTENSIONS: &[&str] = &[".h", ".cc", ".cu"];

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
  /// The config file could not be read.
  #[error("Failed to read config file '{path}': {source}")]
  ReadError { path: PathBuf, source: std::io::Error },

  /// The config file contains invalid TOML.
  #[error("Failed to parse config file '{path}': {source}")]
  ParseError { path: PathBuf, source: toml::de::Error },

  /// An extension key is malformed.
  #[error("Invalid extension '{extension}': {message}")]
  InvalidExtension { extension: String, message: String },

  /// The legacy header pattern is not a valid regular expression.
  #[error("Invalid legacy header pattern '{pattern}': {source}")]
  InvalidLegacyPattern { pattern: String, source: regex::Error },
}

/// On-disk configuration overlay.
///
/// Every field is optional; whatever is present is merged on top of the
/// built-in tables.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
  /// Extra or overriding extension to comment marker entries. Keys are
  /// extensions without the leading dot.
  #[serde(default)]
  pub languages: BTreeMap<String, CommentMarker>,

  /// Additional path substrings to exclude.
  #[serde(default)]
  pub exclude: Vec<String>,

  /// Additional substrings that mark a file as already licensed.
  #[serde(default)]
  pub detect: Vec<String>,

  /// Replacement for the legacy header regular expression.
  #[serde(default, rename = "legacy-header")]
  pub legacy_header: Option<String>,

  /// Replacement for the list of extensions the legacy header is stripped
  /// from, without leading dots.
  #[serde(default, rename = "legacy-extensions")]
  pub legacy_extensions: Option<Vec<String>>,
}

impl FileConfig {
  /// Load a configuration overlay from a file.
  pub fn load(path: &Path) -> Result<Self, ConfigError> {
    verbose_log!("Loading config from: {}", path.display());

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
      path: path.to_path_buf(),
      source: e,
    })?;

    Self::parse(&content, path)
  }

  fn parse(content: &str, path: &Path) -> Result<Self, ConfigError> {
    let config: Self = toml::from_str(content).map_err(|e| ConfigError::ParseError {
      path: path.to_path_buf(),
      source: e,
    })?;
    config.validate()?;
    Ok(config)
  }

  /// Extension keys must be bare (`java`, not `.java`) and non-empty.
  fn validate(&self) -> Result<(), ConfigError> {
    let legacy = self.legacy_extensions.iter().flatten();
    for ext in self.languages.keys().chain(legacy) {
      if ext.is_empty() {
        return Err(ConfigError::InvalidExtension {
          extension: ext.clone(),
          message: "extension cannot be empty".to_string(),
        });
      }
      if ext.starts_with('.') {
        return Err(ConfigError::InvalidExtension {
          extension: ext.clone(),
          message: "extension should not include leading dot".to_string(),
        });
      }
    }
    Ok(())
  }
}

/// The complete, immutable set of rules for one run.
#[derive(Debug, Clone)]
pub struct HeaderConfig {
  /// Extension (with leading dot) to comment marker.
  pub languages: BTreeMap<String, CommentMarker>,
  /// A path containing any of these is skipped.
  pub exclusions: Vec<String>,
  /// A file with a line containing any of these already has a license.
  pub detection_patterns: Vec<String>,
  /// Matches the obsolete header line, anchored at the start of the line.
  pub legacy_header: Regex,
  /// Extensions (with leading dot) the legacy header is stripped from.
  pub legacy_extensions: Vec<String>,
}

impl Default for HeaderConfig {
  fn default() -> Self {
    Self {
      languages: DEFAULT_LANGUAGES
        .iter()
        .map(|(ext, marker)| ((*ext).to_string(), *marker))
        .collect(),
      exclusions: DEFAULT_EXCLUSIONS.iter().map(|s| (*s).to_string()).collect(),
      detection_patterns: DEFAULT_DETECTION_PATTERNS.iter().map(|s| (*s).to_string()).collect(),
      legacy_header: Regex::new(DEFAULT_LEGACY_HEADER).expect("legacy header regex must compile"),
      legacy_extensions: DEFAULT_LEGACY_EXTENSIONS.iter().map(|s| (*s).to_string()).collect(),
    }
  }
}

impl HeaderConfig {
  /// Merge an on-disk overlay into this configuration.
  pub fn merge(mut self, overlay: FileConfig) -> Result<Self, ConfigError> {
    for (ext, marker) in overlay.languages {
      self.languages.insert(format!(".{ext}"), marker);
    }
    self.exclusions.extend(overlay.exclude);
    self.detection_patterns.extend(overlay.detect);

    if let Some(pattern) = overlay.legacy_header {
      self.legacy_header = Regex::new(&pattern).map_err(|e| ConfigError::InvalidLegacyPattern {
        pattern: pattern.clone(),
        source: e,
      })?;
    }
    if let Some(exts) = overlay.legacy_extensions {
      self.legacy_extensions = exts.into_iter().map(|ext| format!(".{ext}")).collect();
    }

    Ok(self)
  }

  /// Comment marker for a dotted extension, if the extension is recognized.
  pub fn marker_for(&self, extension: &str) -> Option<CommentMarker> {
    self.languages.get(extension).copied()
  }
}

/// Discover the configuration file path.
///
/// Looked up in order:
/// 1. `--config` (passed as `explicit_path`)
/// 2. the `LICENSE_HEADER_CONFIG` environment variable
/// 3. `.license-header.toml` in the root directory
pub fn discover_config_path(explicit_path: Option<&Path>, root: &Path) -> Option<PathBuf> {
  if let Some(path) = explicit_path {
    if path.exists() {
      verbose_log!("Using explicit config path: {}", path.display());
      return Some(path.to_path_buf());
    }
    verbose_log!("Explicit config path does not exist: {}", path.display());
    return None;
  }

  if let Ok(env_path) = std::env::var(CONFIG_ENV_VAR) {
    let path = PathBuf::from(&env_path);
    if path.exists() {
      verbose_log!("Using config from {}: {}", CONFIG_ENV_VAR, path.display());
      return Some(path);
    }
    verbose_log!("{} path does not exist: {}", CONFIG_ENV_VAR, env_path);
  }

  let root_config = root.join(DEFAULT_CONFIG_FILENAME);
  if root_config.exists() {
    verbose_log!("Using root config: {}", root_config.display());
    return Some(root_config);
  }

  verbose_log!("No config file found");
  None
}

/// Build the configuration for a run: the built-in tables, overlaid with the
/// discovered config file unless `no_config` is set.
pub fn load_config(explicit_path: Option<&Path>, root: &Path, no_config: bool) -> Result<HeaderConfig> {
  let config = HeaderConfig::default();

  if no_config {
    verbose_log!("Config file discovery disabled (--no-config)");
    return Ok(config);
  }

  match discover_config_path(explicit_path, root) {
    Some(path) => {
      let overlay = FileConfig::load(&path).with_context(|| format!("Failed to load config from {}", path.display()))?;
      Ok(config.merge(overlay)?)
    }
    None => Ok(config),
  }
}

#[cfg(test)]
mod tests {
  use tempfile::TempDir;

  use super::*;

  #[test]
  fn test_default_tables() {
    let config = HeaderConfig::default();

    assert_eq!(config.languages.len(), 9);
    assert_eq!(config.marker_for(".cc"), Some(CommentMarker::Star));
    assert_eq!(config.marker_for(".cmake"), Some(CommentMarker::Hash));
    assert_eq!(config.marker_for(".rs"), None);
    assert!(config.exclusions.iter().any(|e| e == "dmlc-core/"));
    assert_eq!(config.legacy_extensions, vec![".h", ".cc", ".cu"]);
  }

  #[test]
  fn test_parse_valid_config() {
    let content = concat!(
      "exclude = [\"third_party/\"]\n",
      "detect = [\"SPDX-License-Identifier\"]\n",
      "\n",
      "[languages]\n",
      "java = \"*\"\n",
      "py = \"*\"\n",
    );
    let overlay = FileConfig::parse(content, Path::new("test.toml")).unwrap();
    let config = HeaderConfig::default().merge(overlay).unwrap();

    assert_eq!(config.marker_for(".java"), Some(CommentMarker::Star));
    assert_eq!(config.marker_for(".py"), Some(CommentMarker::Star));
    assert!(config.exclusions.contains(&"third_party/".to_string()));
    assert!(config.exclusions.contains(&"cub/".to_string()));
    assert_eq!(config.detection_patterns.len(), 2);
  }

  #[test]
  fn test_parse_empty_config() {
    let overlay = FileConfig::parse("", Path::new("test.toml")).unwrap();
    let config = HeaderConfig::default().merge(overlay).unwrap();
    assert_eq!(config.languages.len(), 9);
  }

  #[test]
  fn test_invalid_marker_rejected() {
    let result = FileConfig::parse("[languages]\nrs = \"//\"\n", Path::new("test.toml"));
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
  }

  #[test]
  fn test_validate_leading_dot() {
    let result = FileConfig::parse("[languages]\n\".java\" = \"*\"\n", Path::new("test.toml"));
    assert!(matches!(result, Err(ConfigError::InvalidExtension { .. })));
  }

  #[test]
  fn test_invalid_legacy_pattern() {
    let overlay = FileConfig::parse("legacy-header = \"(unclosed\"\n", Path::new("test.toml")).unwrap();
    let result = HeaderConfig::default().merge(overlay);
    assert!(matches!(result, Err(ConfigError::InvalidLegacyPattern { .. })));
  }

  #[test]
  fn test_legacy_extensions_override() {
    let overlay = FileConfig::parse("legacy-extensions = [\"cuh\"]\n", Path::new("test.toml")).unwrap();
    let config = HeaderConfig::default().merge(overlay).unwrap();
    assert_eq!(config.legacy_extensions, vec![".cuh"]);
  }

  #[test]
  fn test_load_config_from_root() {
    let temp_dir = TempDir::new().unwrap();
    std::fs::write(temp_dir.path().join(DEFAULT_CONFIG_FILENAME), "exclude = [\"gen/\"]\n").unwrap();

    let config = load_config(None, temp_dir.path(), false).unwrap();
    assert!(config.exclusions.contains(&"gen/".to_string()));

    let config = load_config(None, temp_dir.path(), true).unwrap();
    assert!(!config.exclusions.contains(&"gen/".to_string()));
  }

  #[test]
  fn test_discover_config_explicit_missing() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.toml");
    assert!(discover_config_path(Some(&missing), temp_dir.path()).is_none());
  }
}
