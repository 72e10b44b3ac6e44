//! Outbound notifier implementations.

use async_trait::async_trait;
use tracing::info;

use parkhub_core::AppResult;
use parkhub_core::events::DomainEvent;
use parkhub_core::traits::ParkingNotifier;

/// Notifier that logs every event through tracing.
///
/// Stands in for the external statistics and user-notification
/// collaborators; a push/webhook notifier would implement the same trait.
#[derive(Debug, Clone, Default)]
pub struct TracingNotifier;

impl TracingNotifier {
    /// Create a new tracing notifier.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ParkingNotifier for TracingNotifier {
    async fn publish(&self, event: DomainEvent) -> AppResult<()> {
        let payload = serde_json::to_string(&event.payload)?;
        info!(event_id = %event.id, %payload, "Domain event");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use parkhub_core::events::{EventPayload, QueueEvent};
    use parkhub_core::types::id::VehicleId;

    #[tokio::test]
    async fn test_publish_never_fails_on_plain_events() {
        let notifier = TracingNotifier::new();
        let event = DomainEvent::new(EventPayload::Queue(QueueEvent::OfferAttempted {
            vehicle_id: VehicleId::new("KA01AB1234"),
            offered_slot: None,
        }));
        notifier.publish(event).await.expect("publish");
    }
}
