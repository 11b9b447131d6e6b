//! DNS benchmark domain layer
pub mod benchmark;
pub mod dns_query;
pub mod errors;
pub mod mx_record;
pub mod record_type;

pub use benchmark::{BenchRequest, BenchmarkReport};
pub use dns_query::DnsQuery;
pub use errors::DomainError;
pub use mx_record::MxRecord;
pub use record_type::RecordType;
