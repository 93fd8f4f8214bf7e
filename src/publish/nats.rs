//! NATS event sink
//!
//! Each record goes to the subject named by its topic, with the entity id in
//! an `Event-Key` header.

use std::time::Duration;

use async_nats::{Client, ConnectOptions, HeaderMap};
use async_trait::async_trait;
use tracing::{debug, info};

use crate::core::error::{PulseError, Result};
use crate::publish::{EventRecord, EventSink};

/// Header carrying the partition key
pub const EVENT_KEY_HEADER: &str = "Event-Key";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const PING_INTERVAL: Duration = Duration::from_secs(120);

#[derive(Clone)]
pub struct NatsSink {
    client: Client,
}

impl NatsSink {
    /// Connect to the broker, failing fast if it is unreachable
    pub async fn connect(url: &str, user: Option<&str>, password: Option<&str>) -> Result<Self> {
        info!("Connecting to NATS at {}", url);

        let mut options = ConnectOptions::new()
            .name("creator-pulse")
            .ping_interval(PING_INTERVAL)
            .connection_timeout(CONNECT_TIMEOUT);

        if let (Some(user), Some(password)) = (user, password) {
            options = options.user_and_password(user.to_string(), password.to_string());
        }

        let client = options
            .connect(url)
            .await
            .map_err(|e| PulseError::Connect(format!("Failed to connect to {}: {}", url, e)))?;

        info!("Connected to NATS at {}", url);
        Ok(Self { client })
    }
}

#[async_trait]
impl EventSink for NatsSink {
    async fn publish_batch(&self, records: Vec<EventRecord>) -> Result<()> {
        if records.is_empty() {
            return Ok(());
        }

        let count = records.len();
        for record in records {
            let mut headers = HeaderMap::new();
            headers.insert(EVENT_KEY_HEADER, record.key.as_str());

            self.client
                .publish_with_headers(record.topic, headers, record.payload)
                .await
                .map_err(|e| PulseError::Publish(format!("Publish failed: {}", e)))?;
        }

        self.client
            .flush()
            .await
            .map_err(|e| PulseError::Publish(format!("Flush failed: {}", e)))?;

        debug!(records = count, "Published batch to NATS");
        Ok(())
    }

    async fn close(&self) {
        if let Err(e) = self.client.flush().await {
            debug!("Final flush failed: {}", e);
        }
    }
}
