//! # Templates Module
//!
//! This module holds the canonical license text and renders it into a header
//! block for a given comment style.
//!
//! ## Example
//!
//! ```rust
//! use license_header::templates::{CommentMarker, render_header};
//!
//! let header = render_header(CommentMarker::Hash);
//! assert!(header.starts_with("# Licensed to the Apache Software Foundation (ASF) under one\n"));
//! assert!(header.ends_with("# under the License.\n\n"));
//! ```

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// The Apache License 2.0 header text, one entry per line, without any
/// comment syntax.
pub const LICENSE_LINES: &[&str] = &[
  "Licensed to the Apache Software Foundation (ASF) under one",
  "or more contributor license agreements.  See the NOTICE file",
  "distributed with this work for additional information",
  "regarding copyright ownership.  The ASF licenses this file",
  "to you under the Apache License, Version 2.0 (the",
  "\"License\"); you may not use this file except in compliance",
  "with the License.  You may obtain a copy of the License at",
  "",
  "  http://www.apache.org/licenses/LICENSE-2.0",
  "",
  "Unless required by applicable law or agreed to in writing,",
  "software distributed under the License is distributed on an",
  "\"AS IS\" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY",
  "KIND, either express or implied.  See the License for the",
  "specific language governing permissions and limitations",
  "under the License.",
];

/// Comment style used to wrap the license text for a file type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum CommentMarker {
  /// `#` line comments (Python, shell, Perl, CMake)
  Hash,
  /// `/* ... */` block comments with ` * ` line prefixes (C, C++, CUDA, Scala)
  Star,
}

impl CommentMarker {
  /// The marker character as it appears in the configuration table.
  pub const fn as_str(self) -> &'static str {
    match self {
      Self::Hash => "#",
      Self::Star => "*",
    }
  }
}

impl fmt::Display for CommentMarker {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Error returned when a string is not a known comment marker.
#[derive(Debug, thiserror::Error)]
#[error("unknown comment marker '{0}', expected '#' or '*'")]
pub struct ParseCommentMarkerError(pub String);

impl FromStr for CommentMarker {
  type Err = ParseCommentMarkerError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim() {
      "#" => Ok(Self::Hash),
      "*" => Ok(Self::Star),
      other => Err(ParseCommentMarkerError(other.to_string())),
    }
  }
}

impl TryFrom<String> for CommentMarker {
  type Error = ParseCommentMarkerError;

  fn try_from(value: String) -> Result<Self, Self::Error> {
    value.parse()
  }
}

/// Renders the license header block for the given comment marker.
///
/// Every line ends with `\n` and the block is followed by one blank line, so
/// the result can be prepended directly to the original file content.
pub fn render_header(marker: CommentMarker) -> String {
  let mut body = String::new();

  if marker == CommentMarker::Star {
    body.push_str("/*\n");
  }

  for line in LICENSE_LINES {
    if marker == CommentMarker::Star {
      body.push(' ');
    }
    body.push_str(marker.as_str());
    if !line.is_empty() {
      body.push(' ');
      body.push_str(line);
    }
    body.push('\n');
  }

  if marker == CommentMarker::Star {
    body.push_str(" */\n");
  }
  body.push('\n');

  body
}
