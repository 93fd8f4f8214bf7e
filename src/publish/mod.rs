//! Event publishing
//!
//! Records are encoded as JSON and keyed by entity id so that a partitioned
//! bus keeps each creator's and each post's events in order.

pub mod dry_run;
pub mod nats;

use async_trait::async_trait;
use bytes::Bytes;

use crate::core::config::Topics;
use crate::core::error::Result;
use crate::model::{Content, Creator};

pub use self::dry_run::LogSink;
pub use self::nats::NatsSink;

/// One encoded event ready for the bus
#[derive(Debug, Clone, PartialEq)]
pub struct EventRecord {
    pub topic: String,
    /// Entity id, used as the partition/ordering key
    pub key: String,
    pub payload: Bytes,
}

impl EventRecord {
    pub fn content(topic: &str, content: &Content) -> Result<Self> {
        Ok(Self {
            topic: topic.to_string(),
            key: content.id.to_string(),
            payload: Bytes::from(serde_json::to_vec(content)?),
        })
    }

    pub fn creator(topic: &str, creator: &Creator) -> Result<Self> {
        Ok(Self {
            topic: topic.to_string(),
            key: creator.id.to_string(),
            payload: Bytes::from(serde_json::to_vec(creator)?),
        })
    }
}

/// Encode one tick's output as a single mixed batch, content first
pub fn encode_batch(topics: &Topics, contents: &[Content], creators: &[Creator]) -> Result<Vec<EventRecord>> {
    let mut records = Vec::with_capacity(contents.len() + creators.len());

    for content in contents {
        records.push(EventRecord::content(&topics.content, content)?);
    }

    for creator in creators {
        records.push(EventRecord::creator(&topics.creator, creator)?);
    }

    Ok(records)
}

/// Destination for encoded events
#[async_trait]
pub trait EventSink: Send + Sync {
    /// Deliver a batch; any failure fails the whole batch
    async fn publish_batch(&self, records: Vec<EventRecord>) -> Result<()>;

    /// Flush and release the connection
    async fn close(&self) {}
}
