//! In-process fan-out of domain events over a tokio broadcast channel

use async_trait::async_trait;
use tokio::sync::broadcast;
use tracing::debug;

use tutora_core::{DomainEvent, EventPublisher};

/// Default number of events buffered per subscriber
pub const DEFAULT_EVENT_CAPACITY: usize = 256;

/// Event publisher backed by `tokio::sync::broadcast`
///
/// Subscribers that fall behind by more than the capacity miss the oldest
/// events. Publishing with no subscriber succeeds and drops the event.
#[derive(Clone)]
pub struct BroadcastEventPublisher {
    sender: broadcast::Sender<DomainEvent>,
}

impl BroadcastEventPublisher {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<DomainEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for BroadcastEventPublisher {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_CAPACITY)
    }
}

#[async_trait]
impl EventPublisher for BroadcastEventPublisher {
    async fn publish(&self, event: DomainEvent) -> Result<(), String> {
        let name = event.name();
        match self.sender.send(event) {
            Ok(receivers) => debug!(event = name, receivers, "Domain event published"),
            Err(_) => debug!(event = name, "Domain event dropped, no subscribers"),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use tutora_core::PhoneVerified;
    use uuid::Uuid;

    fn sample_event() -> DomainEvent {
        PhoneVerified {
            user_id: Uuid::new_v4(),
            phone: "+224600000000".to_string(),
            verified_at: Utc::now(),
        }
        .into()
    }

    #[tokio::test]
    async fn test_subscriber_receives_event() {
        let publisher = BroadcastEventPublisher::default();
        let mut receiver = publisher.subscribe();
        let event = sample_event();

        publisher.publish(event.clone()).await.unwrap();

        assert_eq!(receiver.recv().await.unwrap(), event);
    }

    #[tokio::test]
    async fn test_publish_without_subscribers_succeeds() {
        let publisher = BroadcastEventPublisher::new(4);
        assert_eq!(publisher.subscriber_count(), 0);
        assert!(publisher.publish(sample_event()).await.is_ok());
    }
}
