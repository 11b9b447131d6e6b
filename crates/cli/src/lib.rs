//! Shared driver pieces for the dns-bench binaries.
pub mod args;
pub mod bootstrap;
pub mod report;

pub use args::{parse_bench_args, CliError};
pub use report::format_report;
