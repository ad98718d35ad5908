//! # Output Module
//!
//! All user-facing output. In quiet mode only the bare list of files missing
//! a header is printed, one per line, for scripting.

use std::path::Path;

use owo_colors::{OwoColorize, Stream};

use crate::logging::{is_quiet, is_verbose};
use crate::processor::Mode;
use crate::report::{FileReport, ProcessingSummary};

/// Symbols used in output
pub mod symbols {
  pub const SUCCESS: &str = "\u{2713}"; // ✓
  pub const FAILURE: &str = "\u{2717}"; // ✗
}

/// Print the initial "Checking <root>..." or "Adding headers under <root>..."
/// line.
pub fn print_start_message(root: &Path, mode: Mode) {
  if is_quiet() {
    return;
  }

  match mode {
    Mode::Add => println!("Adding license headers under {}...", root.display()),
    Mode::Check => println!("Checking license headers under {}...", root.display()),
  }
}

/// Print a blank line for visual separation (respects quiet mode).
pub fn print_blank_line() {
  if !is_quiet() {
    println!();
  }
}

/// Print the files missing license headers, sorted by path.
pub fn print_missing_files(files: &[&FileReport], root: &Path) {
  if files.is_empty() {
    return;
  }

  let mut sorted_files: Vec<_> = files.to_vec();
  sorted_files.sort_by(|a, b| a.path.cmp(&b.path));

  if is_quiet() {
    for file in &sorted_files {
      println!("{}", make_relative_path(&file.path, root));
    }
    return;
  }

  let count = sorted_files.len();
  println!(
    "{} {} {} missing license headers:",
    symbols::FAILURE.if_supports_color(Stream::Stdout, |s| s.red()),
    count,
    if count == 1 { "file" } else { "files" }
  );
  for file in &sorted_files {
    println!("  {}", make_relative_path(&file.path, root));
  }
}

/// Print the files a license header was added to, in processing order.
pub fn print_added_files(files: &[&FileReport], root: &Path) {
  if is_quiet() || files.is_empty() {
    return;
  }

  let count = files.len();
  println!(
    "{} Added license header to {} {}:",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
    count,
    if count == 1 { "file" } else { "files" }
  );
  for file in files {
    println!("  {}", make_relative_path(&file.path, root));
  }
}

/// Print the skipped files and why. Only shown in verbose mode.
pub fn print_skipped_files(files: &[&FileReport], root: &Path) {
  if !is_verbose() || files.is_empty() {
    return;
  }

  println!("Skipped {} files:", files.len());
  for file in files {
    println!(
      "  {} ({})",
      make_relative_path(&file.path, root).if_supports_color(Stream::Stdout, |s| s.dimmed()),
      file.reason.as_deref().unwrap_or("unknown reason")
    );
  }
}

/// Print the success message when all files have license headers.
pub fn print_all_files_ok() {
  if is_quiet() {
    return;
  }

  println!(
    "{} All files have license headers.",
    symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green())
  );
}

/// Print the summary line; verbose mode adds timing.
pub fn print_summary(summary: &ProcessingSummary, mode: Mode) {
  if is_quiet() {
    return;
  }

  let ok_str = summary.files_with_license.if_supports_color(Stream::Stdout, |s| s.cyan());
  let ignored_str = summary.files_ignored.if_supports_color(Stream::Stdout, |s| s.dimmed());

  let mut summary_line = match mode {
    Mode::Add => format!(
      "Summary: {} OK, {} added, {} ignored",
      ok_str,
      summary.files_added.if_supports_color(Stream::Stdout, |s| s.green()),
      ignored_str
    ),
    Mode::Check => {
      let missing = summary.files_missing;
      let missing_str = if missing > 0 {
        missing.if_supports_color(Stream::Stdout, |s| s.red()).to_string()
      } else {
        missing.if_supports_color(Stream::Stdout, |s| s.cyan()).to_string()
      };
      format!("Summary: {} OK, {} missing, {} ignored", ok_str, missing_str, ignored_str)
    }
  };

  if is_verbose() {
    summary_line.push_str(&format!(" ({:.2}s)", summary.processing_time.as_secs_f64()));
  }

  println!("{}", summary_line);
}

/// Print a hint for the user about what to do next.
pub fn print_hint(message: &str) {
  if is_quiet() {
    return;
  }

  println!("{}", message.if_supports_color(Stream::Stdout, |s| s.yellow()));
}

/// Make a path relative to the root for display.
fn make_relative_path(path: &Path, root: &Path) -> String {
  path
    .strip_prefix(root)
    .map(|p| p.to_string_lossy().to_string())
    .unwrap_or_else(|_| path.to_string_lossy().to_string())
}
