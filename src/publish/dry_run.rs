//! Dry-run sink that writes events to the log instead of a bus

use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use tracing::info;

use crate::core::error::Result;
use crate::publish::{EventRecord, EventSink};

#[derive(Debug, Default)]
pub struct LogSink {
    published: AtomicU64,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records seen so far
    pub fn published(&self) -> u64 {
        self.published.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl EventSink for LogSink {
    async fn publish_batch(&self, records: Vec<EventRecord>) -> Result<()> {
        for record in &records {
            info!(
                topic = %record.topic,
                key = %record.key,
                payload = %String::from_utf8_lossy(&record.payload),
                "event"
            );
        }
        self.published.fetch_add(records.len() as u64, Ordering::Relaxed);
        Ok(())
    }
}
