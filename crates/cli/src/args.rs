use clap::Parser;
use dns_bench_domain::{BenchRequest, DnsQuery, RecordType};
use std::str::FromStr;
use thiserror::Error;

/// Validation failures for the benchmark CLIs. Each maps to exit code 1
/// with its message on stderr. The usage line carries argv[0], since both
/// `dns-bench` and `sync-bench` share the same argument contract.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("Usage: {0} <name> <type> <N> [server]")]
    Usage(String),

    #[error("Unknown record type: {0}")]
    UnknownRecordType(String),

    #[error("N must be a positive integer")]
    InvalidCount,
}

/// Raw positional tokens. Help/version flags are disabled: the contract
/// is exactly 3 or 4 positional arguments, anything else is a usage
/// error. Semantic validation lives in `parse_bench_args` so the error
/// messages stay exact.
#[derive(Parser, Debug)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct BenchCli {
    name: String,
    record_type: String,
    #[arg(allow_hyphen_values = true)]
    count: String,
    server: Option<String>,
}

/// Validate argv into a `BenchRequest`. Checked in the same order the
/// tools have always done it: argument shape, record type, then N.
pub fn parse_bench_args<I>(args: I) -> Result<BenchRequest, CliError>
where
    I: IntoIterator<Item = String>,
{
    let args: Vec<String> = args.into_iter().collect();
    let program = args
        .first()
        .cloned()
        .unwrap_or_else(|| "dns-bench".to_string());

    let cli = BenchCli::try_parse_from(args.iter().map(String::as_str))
        .map_err(|_| CliError::Usage(program.clone()))?;

    if cli.name.is_empty() {
        return Err(CliError::Usage(program));
    }

    let record_type = RecordType::from_str(&cli.record_type)
        .map_err(|_| CliError::UnknownRecordType(cli.record_type.clone()))?;

    let count = match cli.count.parse::<i64>() {
        Ok(n) if n > 0 => n as usize,
        _ => return Err(CliError::InvalidCount),
    };

    Ok(BenchRequest::new(
        DnsQuery::new(cli.name, record_type),
        count,
        cli.server,
    ))
}
