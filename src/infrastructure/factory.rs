use crate::domain::ports::{TransactionStoreBox, TransactionStoreFactory};
use crate::error::Result;
use crate::infrastructure::in_memory::InMemoryTransactionStore;
use std::path::PathBuf;

/// Builds the factory the binary wires its transaction store from.
///
/// With a `db_path` and the `storage-rocksdb` feature the database is opened
/// once up front, so open errors surface here rather than on first use. Every
/// store the factory yields shares the same underlying records.
pub fn transaction_store_factory(db_path: Option<PathBuf>) -> Result<TransactionStoreFactory> {
    match db_path {
        #[cfg(feature = "storage-rocksdb")]
        Some(path) => {
            let store = crate::infrastructure::rocksdb::RocksDBStore::open(path)?;
            Ok(Box::new(move || Box::new(store.clone()) as TransactionStoreBox))
        }
        #[cfg(not(feature = "storage-rocksdb"))]
        Some(path) => {
            tracing::warn!(
                db_path = %path.display(),
                "Persistent storage requested via --db-path, but 'storage-rocksdb' feature is not enabled. Falling back to In-Memory storage."
            );
            Ok(in_memory_factory())
        }
        None => Ok(in_memory_factory()),
    }
}

fn in_memory_factory() -> TransactionStoreFactory {
    let store = InMemoryTransactionStore::new();
    Box::new(move || Box::new(store.clone()) as TransactionStoreBox)
}
