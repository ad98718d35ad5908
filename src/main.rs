//! # license-header
//!
//! Adds or checks the Apache license header on every source file in a tree.

use std::process::ExitCode;

use anyhow::Result;
use license_header::cli::{Cli, run};

fn main() -> Result<ExitCode> {
  let cli = Cli::parse_args();
  run(cli.command)
}
