use std::sync::atomic::{AtomicU8, Ordering};

use clap::ValueEnum;
use tracing_subscriber::EnvFilter;

/// Global output mode shared by the logging macros and the output module.
static OUTPUT_MODE: AtomicU8 = AtomicU8::new(0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
  Normal = 0,
  Quiet = 1,
  Verbose = 2,
}

impl OutputMode {
  const fn from_u8(value: u8) -> Self {
    match value {
      1 => OutputMode::Quiet,
      2 => OutputMode::Verbose,
      _ => OutputMode::Normal,
    }
  }
}

/// When to use colored output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorMode {
  /// Use colors when the output stream supports them
  #[default]
  Auto,
  /// Never use colors
  Never,
  /// Always use colors
  Always,
}

impl ColorMode {
  /// Install this mode as the process-wide color override for `owo-colors`.
  pub fn apply(self) {
    match self {
      ColorMode::Auto => owo_colors::unset_override(),
      ColorMode::Never => owo_colors::set_override(false),
      ColorMode::Always => owo_colors::set_override(true),
    }
  }
}

/// Sets the global verbose logging flag.
///
/// When verbose logging is enabled, the [`verbose_log!`](crate::verbose_log)
/// macro writes its messages to stderr.
pub fn set_verbose() {
  OUTPUT_MODE.store(OutputMode::Verbose as u8, Ordering::SeqCst);
}

/// Suppress everything except errors and the bare list of offending paths.
pub fn set_quiet() {
  OUTPUT_MODE.store(OutputMode::Quiet as u8, Ordering::SeqCst);
}

/// Restore the default output mode.
pub fn set_normal() {
  OUTPUT_MODE.store(OutputMode::Normal as u8, Ordering::SeqCst);
}

pub fn is_verbose() -> bool {
  OutputMode::from_u8(OUTPUT_MODE.load(Ordering::SeqCst)) == OutputMode::Verbose
}

pub fn is_quiet() -> bool {
  OutputMode::from_u8(OUTPUT_MODE.load(Ordering::SeqCst)) == OutputMode::Quiet
}

/// Default filter directive for a verbosity level.
fn default_directive(quiet: bool, verbose: u8) -> &'static str {
  if quiet {
    return "warn";
  }
  match verbose {
    0 => "warn",
    1 => "info",
    2 => "debug",
    _ => "trace",
  }
}

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence over the level derived from `-v`/`-q`. Events
/// go to stderr so stdout stays scriptable. Calling this more than once is
/// harmless; later calls are ignored.
pub fn init_tracing(quiet: bool, verbose: u8) {
  let filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive(quiet, verbose)));

  let _ = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .without_time()
    .compact()
    .try_init();
}
