use crate::domain::transaction::TransactionOutcome;
use crate::error::Result;

/// Renders an outcome into the bytes carried by a bus message.
pub trait OutcomePresenter: Send + Sync {
    fn present(&self, outcome: &TransactionOutcome) -> Result<Vec<u8>>;
}

/// JSON wire format: `{"ID": ..., "Status": "approved"|"rejected", "ErrorMessage": ...}`.
#[derive(Debug, Default, Clone, Copy)]
pub struct JsonOutcomePresenter;

impl OutcomePresenter for JsonOutcomePresenter {
    fn present(&self, outcome: &TransactionOutcome) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(outcome)?)
    }
}
