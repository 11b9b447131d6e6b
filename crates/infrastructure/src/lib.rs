//! Infrastructure adapters for the DNS benchmark tools.
pub mod dns;
