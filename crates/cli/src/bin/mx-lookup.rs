//! mx-lookup: one-shot MX lookup, answers ordered by preference.
//!
//! Usage: mx-lookup <name>

use anyhow::bail;
use dns_bench::bootstrap::init_logging;
use dns_bench_application::ports::DnsResolver;
use dns_bench_domain::MxRecord;
use dns_bench_infrastructure::dns::HickoryDnsResolver;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    match run(std::env::args().collect()).await {
        Ok(records) => {
            for record in records {
                println!("{record}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Vec<String>) -> anyhow::Result<Vec<MxRecord>> {
    if args.len() != 2 {
        bail!("Usage: mx-lookup <name>");
    }

    let resolver = HickoryDnsResolver::from_system()?;
    let records = resolver.lookup_mx(&args[1]).await;
    resolver.close().await;

    Ok(records?)
}
