//! Outbound notification trait.

use async_trait::async_trait;

use crate::events::DomainEvent;
use crate::result::AppResult;

/// Trait for delivering domain events to external collaborators
/// (statistics sinks, user notification channels).
///
/// Delivery is best-effort: the session manager logs and continues when a
/// notifier fails, so implementations must not be load-bearing for state.
#[async_trait]
pub trait ParkingNotifier: Send + Sync + 'static {
    /// Deliver a single domain event.
    async fn publish(&self, event: DomainEvent) -> AppResult<()>;
}
