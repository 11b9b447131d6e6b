use std::fmt;

/// One MX answer: preference plus exchange hostname (no trailing root dot).
/// Lower preference sorts first, matching delivery order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct MxRecord {
    pub preference: u16,
    pub exchange: String,
}

impl MxRecord {
    pub fn new(preference: u16, exchange: impl Into<String>) -> Self {
        let exchange = exchange.into();
        let exchange = exchange.trim_end_matches('.').to_string();
        Self {
            preference,
            exchange,
        }
    }
}

impl fmt::Display for MxRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.preference, self.exchange)
    }
}
