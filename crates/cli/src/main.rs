//! dns-bench: time N concurrent DNS resolutions of one name.
//!
//! Usage: dns-bench <name> <type> <N> [server]

use dns_bench::args::parse_bench_args;
use dns_bench::bootstrap::init_logging;
use dns_bench::report::format_report;
use dns_bench_application::RunBenchmarkUseCase;
use dns_bench_infrastructure::dns::HickoryDnsResolver;
use std::process::ExitCode;
use std::sync::Arc;

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    match run().await {
        Ok(line) => {
            println!("{line}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<String> {
    // Validation first: no resolver is built, and no query sent, until
    // the arguments are known good.
    let request = parse_bench_args(std::env::args())?;

    let resolver = HickoryDnsResolver::build(request.upstream.as_deref())?;

    let report = RunBenchmarkUseCase::new(Arc::new(resolver))
        .execute(request.query, request.count)
        .await?;

    Ok(format_report(&report))
}
