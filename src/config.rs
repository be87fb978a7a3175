use crate::domain::decision::DEFAULT_LIMIT;
use rust_decimal::Decimal;

pub const DEFAULT_RESULT_TOPIC: &str = "transactions_result";

/// Settings the processor needs, passed in explicitly at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessorConfig {
    /// Topic that receives one outcome event per processed request.
    pub result_topic: String,
    /// Highest amount the limit rule approves.
    pub limit: Decimal,
}

impl ProcessorConfig {
    pub fn new(result_topic: impl Into<String>, limit: Decimal) -> Self {
        Self {
            result_topic: result_topic.into(),
            limit,
        }
    }
}

impl Default for ProcessorConfig {
    fn default() -> Self {
        Self::new(DEFAULT_RESULT_TOPIC, DEFAULT_LIMIT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_defaults() {
        let config = ProcessorConfig::default();
        assert_eq!(config.result_topic, "transactions_result");
        assert_eq!(config.limit, dec!(1000));
    }
}
