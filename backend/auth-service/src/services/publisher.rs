/// Direct message publishing to the broker
///
/// Exchanges map to Kafka topics and routing keys to record keys, so a
/// consumer bound to `(exchange, routing_key)` reads one topic and filters
/// by key.
use crate::error::{AuthError, AuthResult};
use async_trait::async_trait;
use rdkafka::config::ClientConfig;
use rdkafka::producer::{FutureProducer, FutureRecord};
use std::time::Duration;
use tracing::{info, warn};

const DELIVERY_TIMEOUT: Duration = Duration::from_secs(30);

#[async_trait]
pub trait MessagePublisher: Send + Sync {
    /// Publish `message` and log `log_message` once the broker acknowledged it
    async fn publish_direct_message(
        &self,
        exchange: &str,
        routing_key: &str,
        message: &str,
        log_message: &str,
    ) -> AuthResult<()>;
}

#[derive(Clone)]
pub struct KafkaMessagePublisher {
    producer: FutureProducer,
    topic_prefix: Option<String>,
}

impl KafkaMessagePublisher {
    pub fn new(brokers: &str, topic_prefix: Option<&str>) -> AuthResult<Self> {
        let producer = ClientConfig::new()
            .set("bootstrap.servers", brokers)
            .set("client.id", "auth-service")
            .set("message.timeout.ms", "10000")
            .create::<FutureProducer>()
            .map_err(|e| AuthError::Internal(format!("Failed to create Kafka producer: {}", e)))?;

        Ok(Self {
            producer,
            topic_prefix: topic_prefix.map(str::to_string),
        })
    }

    fn topic(&self, exchange: &str) -> String {
        topic_name(self.topic_prefix.as_deref(), exchange)
    }
}

/// Kafka topic for an exchange, with the optional environment prefix
pub fn topic_name(prefix: Option<&str>, exchange: &str) -> String {
    match prefix {
        Some(prefix) => format!("{}{}", prefix, exchange),
        None => exchange.to_string(),
    }
}

#[async_trait]
impl MessagePublisher for KafkaMessagePublisher {
    async fn publish_direct_message(
        &self,
        exchange: &str,
        routing_key: &str,
        message: &str,
        log_message: &str,
    ) -> AuthResult<()> {
        let topic = self.topic(exchange);
        let record = FutureRecord::to(&topic).key(routing_key).payload(message);

        self.producer
            .send(record, DELIVERY_TIMEOUT)
            .await
            .map_err(|(error, _)| {
                warn!(topic = %topic, routing_key, "Failed to send Kafka message: {:?}", error);
                AuthError::Publish(error.to_string())
            })?;

        info!(topic = %topic, routing_key, "{}", log_message);
        Ok(())
    }
}
