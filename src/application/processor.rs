use crate::config::ProcessorConfig;
use crate::domain::credit_card::{INVALID_CARD_MESSAGE, is_valid_card_number};
use crate::domain::decision::{DecisionRuleBox, LimitRule};
use crate::domain::ports::{EventPublisherBox, TransactionStoreBox};
use crate::domain::transaction::{TransactionOutcome, TransactionRequest};
use crate::error::Result;
use tracing::{error, info};

/// Runs a single payment request through the gateway pipeline.
///
/// Each call validates the card, applies the decision rule, persists the
/// outcome and publishes it, strictly in that order. The processor keeps no
/// state between calls, so `execute` may run concurrently for different
/// requests; the store and publisher own their own synchronization.
pub struct TransactionProcessor {
    store: TransactionStoreBox,
    publisher: EventPublisherBox,
    rule: DecisionRuleBox,
    result_topic: String,
}

impl TransactionProcessor {
    /// Creates a processor from explicit collaborators.
    ///
    /// # Arguments
    ///
    /// * `store` - Durable record of processed transactions.
    /// * `publisher` - Delivers outcome events to the message bus.
    /// * `rule` - Business rule applied to requests with a valid card.
    /// * `result_topic` - Destination for outcome events.
    pub fn new(
        store: TransactionStoreBox,
        publisher: EventPublisherBox,
        rule: DecisionRuleBox,
        result_topic: impl Into<String>,
    ) -> Self {
        Self {
            store,
            publisher,
            rule,
            result_topic: result_topic.into(),
        }
    }

    /// Creates a processor applying the limit rule from `config`.
    pub fn with_config(
        store: TransactionStoreBox,
        publisher: EventPublisherBox,
        config: &ProcessorConfig,
    ) -> Self {
        Self::new(
            store,
            publisher,
            Box::new(LimitRule::new(config.limit)),
            config.result_topic.clone(),
        )
    }

    pub fn result_topic(&self) -> &str {
        &self.result_topic
    }

    /// Processes one request end to end.
    ///
    /// A rejection is a normal outcome, not an error. Errors come only from the
    /// store or the publisher and are returned unchanged. A store failure
    /// stops the pipeline before anything is published; a publish failure
    /// leaves the stored record in place.
    pub async fn execute(&self, request: TransactionRequest) -> Result<TransactionOutcome> {
        let outcome = self.decide(&request);
        info!(id = %outcome.id, status = %outcome.status, "transaction decided");

        self.store
            .insert(
                &request.id,
                &request.account_id,
                request.amount,
                outcome.status,
                &outcome.error_message,
            )
            .await
            .inspect_err(|e| {
                error!(id = %request.id, error = %e, "failed to persist transaction");
            })?;

        self.publisher
            .publish(&outcome, request.id.as_bytes(), &self.result_topic)
            .await
            .inspect_err(|e| {
                error!(id = %request.id, error = %e, "failed to publish outcome");
            })?;

        Ok(outcome)
    }

    fn decide(&self, request: &TransactionRequest) -> TransactionOutcome {
        if !is_valid_card_number(&request.credit_card_number) {
            return TransactionOutcome::rejected(request.id.clone(), INVALID_CARD_MESSAGE);
        }
        TransactionOutcome::from_decision(request.id.clone(), self.rule.decide(request.amount))
    }
}
