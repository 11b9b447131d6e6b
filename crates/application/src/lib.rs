//! DNS benchmark application layer: resolver port and use cases.
pub mod ports;
pub mod use_cases;

pub use ports::{DnsResolver, Resolution};
pub use use_cases::{RunBenchmarkUseCase, RunSequentialUseCase};
