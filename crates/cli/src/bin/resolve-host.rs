//! resolve-host: one-shot address lookup via the system resolver.
//!
//! Usage: resolve-host <name> [A|AAAA]

use anyhow::bail;
use dns_bench::bootstrap::init_logging;
use dns_bench_application::ports::DnsResolver;
use dns_bench_domain::{DnsQuery, RecordType};
use dns_bench_infrastructure::dns::HickoryDnsResolver;
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    match run(std::env::args().collect()).await {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Vec<String>) -> anyhow::Result<Vec<String>> {
    if args.len() != 2 && args.len() != 3 {
        bail!("Usage: resolve-host <name> [A|AAAA]");
    }

    let record_type = match args.get(2).map(|t| t.to_uppercase()) {
        None => RecordType::A,
        Some(t) if t == "A" => RecordType::A,
        Some(t) if t == "AAAA" => RecordType::AAAA,
        Some(_) => bail!("Type must be A or AAAA."),
    };

    let resolver = HickoryDnsResolver::from_system()?;
    let resolution = resolver
        .resolve(&DnsQuery::new(args[1].as_str(), record_type))
        .await;
    resolver.close().await;

    let mut lines: Vec<String> = Vec::new();
    for addr in resolution?.addresses.iter() {
        let line = addr.to_string();
        if !lines.contains(&line) {
            lines.push(line);
        }
    }
    Ok(lines)
}
