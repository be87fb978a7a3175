use crate::domain::ports::TransactionStore;
use crate::domain::transaction::{Amount, Status, StoredTransaction};
use crate::error::{GatewayError, Result};
use async_trait::async_trait;
use rocksdb::{ColumnFamily, ColumnFamilyDescriptor, DB, Options, WriteOptions};
use std::path::Path;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Column Family for storing processed transactions.
pub const CF_TRANSACTIONS: &str = "transactions";

/// A persistent store implementation using RocksDB.
///
/// Records are JSON-encoded `StoredTransaction` values keyed by the
/// transaction ID bytes. Writes are synced to disk before `insert` returns.
///
/// This struct is thread-safe (`Clone` shares the underlying `Arc<DB>`).
#[derive(Clone)]
pub struct RocksDBStore {
    db: Arc<DB>,
    // Serializes the exists-then-put sequence so IDs stay write-once.
    write_lock: Arc<Mutex<()>>,
}

impl RocksDBStore {
    /// Opens or creates a RocksDB instance at the specified path.
    ///
    /// Ensures that the "transactions" column family exists.
    ///
    /// # Arguments
    ///
    /// * `path` - The filesystem path where the database will be stored.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut opts = Options::default();
        opts.create_if_missing(true);
        opts.create_missing_column_families(true);

        let cf_transactions = ColumnFamilyDescriptor::new(CF_TRANSACTIONS, Options::default());
        let db = DB::open_cf_descriptors(&opts, path, vec![cf_transactions])?;

        Ok(Self {
            db: Arc::new(db),
            write_lock: Arc::new(Mutex::new(())),
        })
    }

    fn transactions_cf(&self) -> Result<&ColumnFamily> {
        self.db.cf_handle(CF_TRANSACTIONS).ok_or_else(|| {
            GatewayError::InternalError(Box::new(std::io::Error::other(
                "Transactions column family not found",
            )))
        })
    }

    /// Reads back a stored transaction.
    pub fn get(&self, id: &str) -> Result<Option<StoredTransaction>> {
        let cf = self.transactions_cf()?;
        match self.db.get_pinned_cf(cf, id.as_bytes())? {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl TransactionStore for RocksDBStore {
    async fn insert(
        &self,
        id: &str,
        account_id: &str,
        amount: Amount,
        status: Status,
        error_message: &str,
    ) -> Result<()> {
        let _guard = self.write_lock.lock().await;
        let cf = self.transactions_cf()?;

        if self.db.get_pinned_cf(cf, id.as_bytes())?.is_some() {
            return Err(GatewayError::PersistenceError(format!(
                "transaction {id} already exists"
            )));
        }

        let record = StoredTransaction::new(id, account_id, amount, status, error_message);
        let value = serde_json::to_vec(&record)?;

        let mut write_opts = WriteOptions::default();
        write_opts.set_sync(true);
        self.db.put_cf_opt(cf, id.as_bytes(), value, &write_opts)?;

        Ok(())
    }
}
