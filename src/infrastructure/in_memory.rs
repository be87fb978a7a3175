use crate::domain::ports::TransactionStore;
use crate::domain::transaction::{Amount, Status, StoredTransaction};
use crate::error::{GatewayError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory store for processed transactions.
///
/// Uses `Arc<RwLock<HashMap<String, StoredTransaction>>>` so clones share the
/// same records. Ideal for testing or runs where persistence is not required.
#[derive(Default, Clone)]
pub struct InMemoryTransactionStore {
    transactions: Arc<RwLock<HashMap<String, StoredTransaction>>>,
}

impl InMemoryTransactionStore {
    /// Creates a new, empty in-memory transaction store.
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, id: &str) -> Option<StoredTransaction> {
        let transactions = self.transactions.read().await;
        transactions.get(id).cloned()
    }

    pub async fn len(&self) -> usize {
        self.transactions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.transactions.read().await.is_empty()
    }
}

#[async_trait]
impl TransactionStore for InMemoryTransactionStore {
    async fn insert(
        &self,
        id: &str,
        account_id: &str,
        amount: Amount,
        status: Status,
        error_message: &str,
    ) -> Result<()> {
        let mut transactions = self.transactions.write().await;
        match transactions.entry(id.to_string()) {
            Entry::Occupied(_) => Err(GatewayError::PersistenceError(format!(
                "transaction {id} already exists"
            ))),
            Entry::Vacant(slot) => {
                slot.insert(StoredTransaction::new(
                    id,
                    account_id,
                    amount,
                    status,
                    error_message,
                ));
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_in_memory_transaction_store() {
        let store = InMemoryTransactionStore::new();
        let amount = Amount::new(dec!(100.0)).unwrap();

        store
            .insert("1", "acc-1", amount, Status::Approved, "")
            .await
            .unwrap();

        let retrieved = store.get("1").await.unwrap();
        assert_eq!(retrieved.account_id, "acc-1");
        assert_eq!(retrieved.amount, dec!(100.0));
        assert_eq!(retrieved.status, Status::Approved);
        assert!(store.get("2").await.is_none());
    }

    #[tokio::test]
    async fn test_records_are_write_once() {
        let store = InMemoryTransactionStore::new();
        let amount = Amount::new(dec!(10)).unwrap();

        store
            .insert("1", "acc-1", amount, Status::Approved, "")
            .await
            .unwrap();
        let again = store
            .insert("1", "acc-1", amount, Status::Rejected, "changed")
            .await;

        assert!(matches!(again, Err(GatewayError::PersistenceError(_))));
        assert_eq!(store.get("1").await.unwrap().status, Status::Approved);
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_clones_share_records() {
        let store = InMemoryTransactionStore::new();
        let clone = store.clone();
        assert!(store.is_empty().await);

        clone
            .insert("9", "acc-9", Amount::new(dec!(1)).unwrap(), Status::Approved, "")
            .await
            .unwrap();

        assert!(store.get("9").await.is_some());
    }
}
