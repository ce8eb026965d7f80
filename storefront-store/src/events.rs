use tokio::sync::broadcast;
use tracing::{debug, info, warn};
use storefront_shared::StorefrontEvent;

/// Fans storefront notifications out to whoever is listening.
#[derive(Clone)]
pub struct EventPublisher {
    sender: broadcast::Sender<StorefrontEvent>,
}

impl EventPublisher {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StorefrontEvent> {
        self.sender.subscribe()
    }

    /// Fire-and-forget. Having no subscribers is not an error.
    pub fn publish(&self, event: StorefrontEvent) {
        match serde_json::to_string(&event) {
            Ok(payload) => debug!("Publishing event {}", payload),
            Err(e) => warn!("Failed to serialize event {}: {}", event.event_id(), e),
        }

        let title = event.title();
        match self.sender.send(event) {
            Ok(receivers) => info!("Sent '{}' notification to {} subscribers", title, receivers),
            Err(_) => debug!("No subscribers for '{}' notification", title),
        }
    }
}

impl Default for EventPublisher {
    fn default() -> Self {
        Self::new(100)
    }
}
