//! # CLI Module
//!
//! Command-line interface: `add` rewrites files missing a license header,
//! `check` only reports them.

mod run;

use std::path::PathBuf;

use clap::builder::styling::{AnsiColor, Color, Style, Styles};
use clap::{Args, Parser, Subcommand};
pub use run::run;

use crate::logging::ColorMode;

const CUSTOM_STYLES: Styles = Styles::styled()
  .header(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .usage(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))).bold())
  .literal(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Blue))).bold())
  .placeholder(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Cyan))))
  .error(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Red))).bold())
  .valid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Green))))
  .invalid(Style::new().fg_color(Some(Color::Ansi(AnsiColor::Yellow))));

/// Top-level CLI arguments
#[derive(Parser, Debug)]
#[command(
  author,
  version,
  about,
  styles = CUSTOM_STYLES,
  after_help = "Examples:
  # Report files without the Apache license header
  license-header check

  # Add the header to every eligible file under src/
  license-header add src/

  # Show what add would change
  license-header check --show-diff
"
)]
pub struct Cli {
  #[command(subcommand)]
  pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
  /// Add the license header to eligible files that lack one
  Add(AddArgs),
  /// Report eligible files that lack the license header without modifying them
  Check(CheckArgs),
}

/// Options shared by every subcommand.
#[derive(Args, Debug, Default)]
pub struct CommonArgs {
  /// Directory to process recursively (default: the enclosing git
  /// repository, or the current directory)
  pub root: Option<PathBuf>,

  /// Path to config file (default: .license-header.toml in the root)
  #[arg(long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  /// Ignore config file even if present
  #[arg(long)]
  pub no_config: bool,

  /// Increase verbosity (-v info, -vv debug, -vvv trace)
  #[arg(short, long, action = clap::ArgAction::Count)]
  pub verbose: u8,

  /// Suppress all output except errors and the list of missing files
  #[arg(short, long, conflicts_with = "verbose")]
  pub quiet: bool,

  /// Control when to use colored output (auto, never, always)
  #[arg(
    long,
    value_name = "WHEN",
    num_args = 0..=1,
    default_value_t = ColorMode::Auto,
    default_missing_value = "always",
    value_enum
  )]
  pub colors: ColorMode,
}

/// Arguments for the add command
#[derive(Args, Debug, Default)]
pub struct AddArgs {
  #[command(flatten)]
  pub common: CommonArgs,
}

/// Arguments for the check command
#[derive(Args, Debug, Default)]
pub struct CheckArgs {
  #[command(flatten)]
  pub common: CommonArgs,

  /// Print the change add would make to each file
  #[arg(long)]
  pub show_diff: bool,

  /// Save the change add would make to a file
  #[arg(long, short = 'o', value_name = "FILE")]
  pub save_diff: Option<PathBuf>,
}

impl Cli {
  /// Parse CLI arguments and return the Cli struct
  pub fn parse_args() -> Self {
    Self::parse()
  }
}
