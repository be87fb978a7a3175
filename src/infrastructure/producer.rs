use crate::domain::ports::EventPublisher;
use crate::domain::transaction::TransactionOutcome;
use crate::error::{GatewayError, Result};
use crate::infrastructure::broker::{Message, MessageBus};
use crate::interfaces::presenter::{JsonOutcomePresenter, OutcomePresenter};
use async_trait::async_trait;
use tracing::debug;

/// Publishes outcomes through a message-bus client.
///
/// The payload is produced by the presenter, the key is attached unchanged
/// for partition assignment, and the call waits for the broker's
/// acknowledgment. Any bus failure is reported as a `PublishError`.
pub struct BusProducer<B, P = JsonOutcomePresenter> {
    bus: B,
    presenter: P,
}

impl<B: MessageBus> BusProducer<B> {
    /// Creates a producer using the JSON wire format.
    pub fn json(bus: B) -> Self {
        Self::new(bus, JsonOutcomePresenter)
    }
}

impl<B: MessageBus, P: OutcomePresenter> BusProducer<B, P> {
    pub fn new(bus: B, presenter: P) -> Self {
        Self { bus, presenter }
    }
}

#[async_trait]
impl<B, P> EventPublisher for BusProducer<B, P>
where
    B: MessageBus,
    P: OutcomePresenter,
{
    async fn publish(
        &self,
        outcome: &TransactionOutcome,
        key: &[u8],
        destination: &str,
    ) -> Result<()> {
        let payload = self.presenter.present(outcome)?;
        let message = Message {
            topic: destination.to_string(),
            key: key.to_vec(),
            payload,
        };

        let delivery = self.bus.send(message).await.map_err(|e| match e {
            GatewayError::PublishError(_) => e,
            other => GatewayError::PublishError(other.to_string()),
        })?;

        debug!(
            id = %outcome.id,
            topic = %delivery.topic,
            partition = delivery.partition,
            offset = delivery.offset,
            "outcome published"
        );
        Ok(())
    }
}
