use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Unknown record type: {0}")]
    InvalidRecordType(String),

    #[error("N must be a positive integer")]
    InvalidCount,

    #[error("Failed to initialize resolver: {0}")]
    ResolverInit(String),

    #[error("Resolver has been closed")]
    ResolverClosed,

    #[error("Resolution failed: {0}")]
    Resolution(String),
}
