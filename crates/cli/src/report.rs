use dns_bench_domain::BenchmarkReport;

/// The single success line printed by dns-bench.
pub fn format_report(report: &BenchmarkReport) -> String {
    format!(
        "Total time: {:.6} s ({} resolutions)",
        report.elapsed_secs(),
        report.count
    )
}
