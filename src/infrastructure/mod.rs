pub mod broker;
pub mod factory;
pub mod in_memory;
pub mod producer;
#[cfg(feature = "storage-rocksdb")]
pub mod rocksdb;
