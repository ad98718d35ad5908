//! Shared driver for the `add` and `check` subcommands.

use std::process::ExitCode;
use std::time::Instant;

use anyhow::Result;
use tracing::debug;

use super::{CommonArgs, Command};
use crate::config::load_config;
use crate::diff::DiffManager;
use crate::info_log;
use crate::logging::{init_tracing, set_quiet, set_verbose};
use crate::output::{
  print_added_files, print_all_files_ok, print_blank_line, print_hint, print_missing_files, print_skipped_files,
  print_start_message, print_summary,
};
use crate::processor::{Mode, Processor};
use crate::report::{FileAction, ProcessingSummary};
use crate::workspace::resolve_workspace;

/// Run a subcommand.
///
/// Returns a failure exit code when `check` finds files missing a header.
pub fn run(command: Command) -> Result<ExitCode> {
  let (mode, common, diff_manager) = match command {
    Command::Add(args) => (Mode::Add, args.common, DiffManager::default()),
    Command::Check(args) => (
      Mode::Check,
      args.common,
      DiffManager::new(args.show_diff, args.save_diff),
    ),
  };
  let save_diff_path = diff_manager.save_diff_path.clone();

  setup_output(&common);

  let workspace = resolve_workspace(common.root.as_deref())?;
  let root = workspace.root().to_path_buf();
  debug!("Using root: {} (git: {})", root.display(), workspace.is_git());

  let config = load_config(common.config.as_deref(), &root, common.no_config)?;
  diff_manager.init()?;

  let processor = Processor::new(config, mode).with_diff_manager(diff_manager);

  print_start_message(&root, mode);
  let start_time = Instant::now();
  let reports = processor.process_tree(&root)?;
  let summary = ProcessingSummary::from_reports(&reports, start_time.elapsed());

  let by_action = |action: FileAction| reports.iter().filter(|r| r.action == action).collect::<Vec<_>>();
  let missing = by_action(FileAction::Missing);
  let added = by_action(FileAction::Added);
  let skipped = by_action(FileAction::Skipped);

  print_blank_line();
  print_skipped_files(&skipped, &root);

  match mode {
    Mode::Add => {
      if added.is_empty() {
        print_all_files_ok();
      } else {
        print_added_files(&added, &root);
      }
    }
    Mode::Check => {
      if missing.is_empty() {
        print_all_files_ok();
      } else {
        print_missing_files(&missing, &root);
      }
    }
  }

  print_blank_line();
  print_summary(&summary, mode);

  if let Some(path) = save_diff_path
    && !missing.is_empty()
  {
    info_log!("Saved diff to {}", path.display());
  }

  if mode == Mode::Check && !missing.is_empty() {
    print_blank_line();
    print_hint("Run `license-header add` to add missing headers.");
    return Ok(ExitCode::FAILURE);
  }

  Ok(ExitCode::SUCCESS)
}

fn setup_output(common: &CommonArgs) {
  init_tracing(common.quiet, common.verbose);

  if common.verbose > 0 {
    set_verbose();
  } else if common.quiet {
    set_quiet();
  }
  common.colors.apply();
}
