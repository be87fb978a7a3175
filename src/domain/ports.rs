use super::transaction::{Amount, Status, TransactionOutcome};
use crate::error::Result;
use async_trait::async_trait;

/// Durable record of every processed transaction.
///
/// `insert` must only return once the record is durable. Records are
/// write-once: inserting an ID that already exists is an error.
#[async_trait]
pub trait TransactionStore: Send + Sync {
    async fn insert(
        &self,
        id: &str,
        account_id: &str,
        amount: Amount,
        status: Status,
        error_message: &str,
    ) -> Result<()>;
}

/// Delivers an outcome as a keyed message to a named destination.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    async fn publish(
        &self,
        outcome: &TransactionOutcome,
        key: &[u8],
        destination: &str,
    ) -> Result<()>;
}

pub type TransactionStoreBox = Box<dyn TransactionStore>;
pub type EventPublisherBox = Box<dyn EventPublisher>;

pub type TransactionStoreFactory = Box<dyn Fn() -> TransactionStoreBox + Send + Sync>;
