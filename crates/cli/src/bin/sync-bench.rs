//! sync-bench: time N sequential DNS resolutions of one name.
//!
//! Same arguments and report line as dns-bench, but the resolutions are
//! issued one at a time. Useful as the serialized baseline.
//!
//! Usage: sync-bench <name> <type> <N> [server]

use dns_bench::args::parse_bench_args;
use dns_bench::bootstrap::init_logging;
use dns_bench::report::format_report;
use dns_bench_application::RunSequentialUseCase;
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
    let request = parse_bench_args(std::env::args())?;

    let resolver = HickoryDnsResolver::build(request.upstream.as_deref())?;

    let report = RunSequentialUseCase::new(Arc::new(resolver))
        .execute(request.query, request.count)
        .await?;

    Ok(format_report(&report))
}
