
pub use dns_server_mock::MockDnsServer;
