pub mod run_benchmark;
pub mod run_sequential;

pub use run_benchmark::RunBenchmarkUseCase;
pub use run_sequential::RunSequentialUseCase;
