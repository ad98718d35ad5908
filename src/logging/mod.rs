//! # Logging Module
//!
//! Output plumbing for the tool:
//! - a global output mode (normal, quiet, verbose) consulted by the macros
//!   below and by [`crate::output`]
//! - color control for `owo-colors`
//! - the `tracing` subscriber used for diagnostics
//!
//! Verbose logs go to stderr and info logs to stdout, so the list of paths a
//! run reports can be piped.
//!
//! ## Example
//!
//! ```rust
//! use license_header::logging::{ColorMode, set_verbose};
//! use license_header::{info_log, verbose_log};
//!
//! set_verbose();
//! ColorMode::Never.apply();
//!
//! verbose_log!("skip {}, unknown file extension", "README.md");
//! info_log!("added license header to {}", "tools/run.sh");
//! ```

mod modes;

pub use modes::{ColorMode, init_tracing, is_quiet, is_verbose, set_normal, set_quiet, set_verbose};
use owo_colors::{OwoColorize, Stream};

/// Logs a message to stderr if verbose mode is enabled.
#[macro_export]
macro_rules! verbose_log {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            eprintln!($($arg)*);
        }
    };
}

/// Logs a message to stdout unless quiet mode is enabled.
#[macro_export]
macro_rules! info_log {
    ($($arg:tt)*) => {
        if !$crate::logging::is_quiet() {
            $crate::logging::print_info_log(&format!($($arg)*));
        }
    };
}

/// Used by [`info_log!`]; prints the message in yellow when colors are on.
pub fn print_info_log(message: &str) {
  println!("{}", message.if_supports_color(Stream::Stdout, |m| m.yellow()));
}
