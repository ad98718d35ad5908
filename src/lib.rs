//! # license-header
//!
//! Ensures every source file in a tree carries the Apache License 2.0 header.
//!
//! For each regular file under a root directory the tool:
//!
//! * skips it if its path contains an excluded (vendored) directory or its
//!   extension is not recognized
//! * skips it if any line already mentions the Apache Software Foundation
//!   license attribution
//! * removes an old `Copyright ... by Contributors` line from C/C++/CUDA
//!   sources
//! * prepends the header in the file's comment style, after any `#!` line
//!
//! ## Usage as a Library
//!
//! ```rust,no_run
//! use std::path::Path;
//!
//! use license_header::config::HeaderConfig;
//! use license_header::processor::{Mode, Processor};
//! use license_header::report::FileAction;
//!
//! fn main() -> anyhow::Result<()> {
//!     let processor = Processor::new(HeaderConfig::default(), Mode::Check);
//!     let reports = processor.process_tree(Path::new("."))?;
//!
//!     for report in reports.iter().filter(|r| r.action == FileAction::Missing) {
//!         println!("{}", report.path.display());
//!     }
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod diff;
pub mod file_filter;
pub mod license_detection;
pub mod logging;
pub mod output;
pub mod processor;
pub mod report;
pub mod templates;
pub mod workspace;
