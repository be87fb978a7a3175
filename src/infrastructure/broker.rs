//! Message-bus client contract and an in-process partitioned broker.

use crate::error::{GatewayError, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

pub const DEFAULT_PARTITIONS: u32 = 3;

/// A keyed message addressed to a topic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub topic: String,
    pub key: Vec<u8>,
    pub payload: Vec<u8>,
}

/// Broker acknowledgment for a delivered message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub topic: String,
    pub partition: u32,
    pub offset: u64,
}

/// Client side of a message bus.
///
/// `send` resolves once the broker has acknowledged the message, so delivery
/// failures surface to the caller.
#[async_trait]
pub trait MessageBus: Send + Sync {
    async fn send(&self, message: Message) -> Result<Delivery>;
}

/// A partitioned topic log kept in memory.
///
/// Messages with the same key always land on the same partition, which gives
/// per-key ordering without global ordering. Clones share the same log.
#[derive(Clone)]
pub struct InMemoryBroker {
    partitions: u32,
    topics: Arc<RwLock<HashMap<String, Vec<Vec<Message>>>>>,
}

impl InMemoryBroker {
    /// Creates a broker with `DEFAULT_PARTITIONS` partitions per topic.
    pub fn new() -> Self {
        Self::with_partitions(DEFAULT_PARTITIONS)
    }

    /// Creates a broker with `partitions` partitions per topic (at least one).
    pub fn with_partitions(partitions: u32) -> Self {
        Self {
            partitions: partitions.max(1),
            topics: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    pub fn partitions(&self) -> u32 {
        self.partitions
    }

    /// Chooses the partition for a key. Deterministic for the lifetime of the process.
    pub fn partition_for(&self, key: &[u8]) -> u32 {
        let mut hasher = DefaultHasher::new();
        key.hash(&mut hasher);
        (hasher.finish() % u64::from(self.partitions)) as u32
    }

    /// All messages of a topic, partition by partition, each in offset order.
    pub async fn messages(&self, topic: &str) -> Vec<Message> {
        let topics = self.topics.read().await;
        topics
            .get(topic)
            .map(|partitions| partitions.iter().flatten().cloned().collect())
            .unwrap_or_default()
    }

    /// Messages of a single partition in offset order.
    pub async fn partition_messages(&self, topic: &str, partition: u32) -> Vec<Message> {
        let topics = self.topics.read().await;
        topics
            .get(topic)
            .and_then(|partitions| partitions.get(partition as usize))
            .cloned()
            .unwrap_or_default()
    }
}

impl Default for InMemoryBroker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MessageBus for InMemoryBroker {
    async fn send(&self, message: Message) -> Result<Delivery> {
        if message.topic.is_empty() {
            return Err(GatewayError::PublishError(
                "topic name must not be empty".to_string(),
            ));
        }

        let partition = self.partition_for(&message.key);
        let mut topics = self.topics.write().await;
        let log = topics
            .entry(message.topic.clone())
            .or_insert_with(|| vec![Vec::new(); self.partitions as usize]);
        let queue = &mut log[partition as usize];
        let offset = queue.len() as u64;

        debug!(topic = %message.topic, partition, offset, "message delivered");
        let topic = message.topic.clone();
        queue.push(message);

        Ok(Delivery {
            topic,
            partition,
            offset,
        })
    }
}
