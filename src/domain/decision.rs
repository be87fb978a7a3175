use crate::domain::transaction::Amount;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

pub const LIMIT_EXCEEDED_MESSAGE: &str = "you dont have limit for this transaction";

/// Default approval ceiling, in the request's currency unit.
pub const DEFAULT_LIMIT: Decimal = dec!(1000);

/// Result of evaluating a business rule against a structurally valid request.
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum Decision {
    Approved,
    Rejected(String),
}

/// A business rule evaluated after card validation passes.
///
/// Rules are total: every amount maps to exactly one decision and there is no
/// error path. New rules (velocity checks, per-account limits) plug into the
/// processor through this trait without touching its I/O sequencing.
pub trait DecisionRule: Send + Sync {
    fn decide(&self, amount: Amount) -> Decision;
}

pub type DecisionRuleBox = Box<dyn DecisionRule>;

/// Approves amounts up to and including `limit`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LimitRule {
    limit: Decimal,
}

impl LimitRule {
    pub fn new(limit: Decimal) -> Self {
        Self { limit }
    }

    pub fn limit(&self) -> Decimal {
        self.limit
    }
}

impl Default for LimitRule {
    fn default() -> Self {
        Self::new(DEFAULT_LIMIT)
    }
}

impl DecisionRule for LimitRule {
    fn decide(&self, amount: Amount) -> Decision {
        if amount.value() <= self.limit {
            Decision::Approved
        } else {
            Decision::Rejected(LIMIT_EXCEEDED_MESSAGE.to_string())
        }
    }
}
