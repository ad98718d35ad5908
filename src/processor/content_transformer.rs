//! # Content Transformer Module
//!
//! Pure text operations on a file's lines: removing the legacy attribution
//! line, setting aside a shebang, and assembling the rewritten content.

use regex::Regex;

use crate::config::HeaderConfig;

/// Splits content into lines, keeping each line's terminator.
///
/// Joining the result gives back the input byte for byte.
pub fn split_lines(content: &str) -> Vec<&str> {
  content.split_inclusive('\n').collect()
}

/// Rewrites a file's lines so they start with a license header.
pub struct ContentTransformer {
  legacy_header: Regex,
  legacy_extensions: Vec<String>,
}

impl ContentTransformer {
  pub fn new(config: &HeaderConfig) -> Self {
    Self {
      legacy_header: config.legacy_header.clone(),
      legacy_extensions: config.legacy_extensions.clone(),
    }
  }

  fn is_legacy_header(&self, line: &str) -> bool {
    self.legacy_header.find(line).is_some_and(|m| m.start() == 0)
  }

  /// Removes the first legacy header line, if the extension calls for it.
  ///
  /// At most one line is removed. Returns the removed line.
  pub fn strip_legacy_header<'a>(&self, lines: &mut Vec<&'a str>, extension: &str) -> Option<&'a str> {
    if !self.legacy_extensions.iter().any(|ext| ext == extension) {
      return None;
    }
    let index = lines.iter().position(|line| self.is_legacy_header(line))?;
    Some(lines.remove(index))
  }

  /// Splits off a leading `#!` line.
  ///
  /// The returned shebang always ends with a newline so the header can follow
  /// it directly.
  pub fn extract_shebang<'a, 'b>(&self, lines: &'b [&'a str]) -> (Option<String>, &'b [&'a str]) {
    match lines.split_first() {
      Some((first, rest)) if first.starts_with("#!") => {
        let mut shebang = (*first).to_string();
        if !shebang.ends_with('\n') {
          shebang.push('\n');
        }
        (Some(shebang), rest)
      }
      _ => (None, lines),
    }
  }

  /// Builds the new file content: shebang, header, then the remaining lines
  /// in their original order.
  pub fn insert_header(&self, lines: &[&str], extension: &str, header: &str) -> String {
    let mut lines = lines.to_vec();
    self.strip_legacy_header(&mut lines, extension);
    let (shebang, body) = self.extract_shebang(&lines);

    let body_len: usize = body.iter().map(|line| line.len()).sum();
    let mut content = String::with_capacity(shebang.as_ref().map_or(0, String::len) + header.len() + body_len);
    if let Some(shebang) = shebang {
      content.push_str(&shebang);
    }
    content.push_str(header);
    for line in body {
      content.push_str(line);
    }
    content
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  const HEADER: &str = "# LICENSE\n\n";

  fn transformer() -> ContentTransformer {
    ContentTransformer::new(&HeaderConfig::default())
  }

  #[test]
  fn test_split_lines_preserves_terminators() {
    let content = "a\r\nb\n\nc";
    let lines = split_lines(content);
    assert_eq!(lines, vec!["a\r\n", "b\n", "\n", "c"]);
    assert_eq!(lines.concat(), content);
    assert!(split_lines("").is_empty());
  }

  #[test]
  fn test_strip_legacy_header_once() {
    let transformer = transformer();
    let mut lines = vec![
      "/*!\n",
      " *  Copyright (c) 2015 by Contributors\n",
      " *  Copyright (c) 2016 by Contributors\n",
      " */\n",
    ];

    let removed = transformer.strip_legacy_header(&mut lines, ".h");
    assert_eq!(removed, Some(" *  Copyright (c) 2015 by Contributors\n"));
    assert_eq!(lines, vec!["/*!\n", " *  Copyright (c) 2016 by Contributors\n", " */\n"]);
  }

  #[test]
  fn test_strip_legacy_header_only_for_listed_extensions() {
    let transformer = transformer();
    let mut lines = vec!["# Copyright (c) 2015 by Contributors\n", "import os\n"];

    assert_eq!(transformer.strip_legacy_header(&mut lines, ".py"), None);
    assert_eq!(transformer.strip_legacy_header(&mut lines, ".cuh"), None);
    assert_eq!(lines.len(), 2);
  }

  #[test]
  fn test_extract_shebang() {
    let transformer = transformer();

    let lines = ["#!/usr/bin/env python\n", "import os\n"];
    let (shebang, rest) = transformer.extract_shebang(&lines);
    assert_eq!(shebang.as_deref(), Some("#!/usr/bin/env python\n"));
    assert_eq!(rest, &["import os\n"]);

    let lines = ["#!/bin/sh"];
    let (shebang, rest) = transformer.extract_shebang(&lines);
    assert_eq!(shebang.as_deref(), Some("#!/bin/sh\n"));
    assert!(rest.is_empty());

    let lines = ["# comment\n"];
    let (shebang, rest) = transformer.extract_shebang(&lines);
    assert!(shebang.is_none());
    assert_eq!(rest.len(), 1);
  }

  #[test]
  fn test_insert_header_plain() {
    let transformer = transformer();
    let lines = ["import os\n", "print(os.getcwd())\n"];
    assert_eq!(
      transformer.insert_header(&lines, ".py", HEADER),
      "# LICENSE\n\nimport os\nprint(os.getcwd())\n"
    );
  }

  #[test]
  fn test_insert_header_after_shebang() {
    let transformer = transformer();
    let lines = ["#!/bin/bash\n", "echo hi\n"];
    assert_eq!(
      transformer.insert_header(&lines, ".sh", HEADER),
      "#!/bin/bash\n# LICENSE\n\necho hi\n"
    );
  }

  #[test]
  fn test_insert_header_replaces_legacy_line() {
    let transformer = transformer();
    let lines = ["// Copyright (c) 2017 by Contributors\n", "#include <vector>\n"];
    assert_eq!(
      transformer.insert_header(&lines, ".cc", "/* H */\n\n"),
      "/* H */\n\n#include <vector>\n"
    );
  }

  #[test]
  fn test_insert_header_when_only_legacy_line() {
    let transformer = transformer();
    let lines = [" * Copyright 2017 by Contributors"];
    assert_eq!(transformer.insert_header(&lines, ".cu", HEADER), HEADER);
  }
}
