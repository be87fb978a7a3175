#![allow(dead_code)]

use async_trait::async_trait;
use payment_gateway::domain::decision::{Decision, DecisionRule, LimitRule};
use payment_gateway::domain::ports::{EventPublisher, TransactionStore};
use payment_gateway::domain::transaction::{
    Amount, Status, TransactionOutcome, TransactionRequest,
};
use payment_gateway::error::{GatewayError, Result};
use rust_decimal::Decimal;
use std::io::Error;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub const VALID_CARD: &str = "4193523830170205";
pub const INVALID_CARD: &str = "400000000000000";
pub const RESULT_TOPIC: &str = "transactions_result";

pub const CSV_HEADER: [&str; 8] = [
    "ID",
    "AccountID",
    "CreditCardNumber",
    "CreditCardName",
    "CreditCardExpirationMonth",
    "CreditCardExpirationYear",
    "CreditCardCVV",
    "Amount",
];

pub fn request(id: &str, card: &str, amount: Decimal) -> TransactionRequest {
    TransactionRequest {
        id: id.to_string(),
        account_id: "1".to_string(),
        credit_card_number: card.to_string(),
        credit_card_holder_name: "Teste da Silva".to_string(),
        expiration_month: 12,
        expiration_year: 2030,
        cvv: 123,
        amount: Amount::new(amount).unwrap(),
    }
}

/// One collaborator call, in the order the processor made it.
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Insert {
        id: String,
        account_id: String,
        amount: Decimal,
        status: Status,
        error_message: String,
    },
    Publish {
        outcome: TransactionOutcome,
        key: Vec<u8>,
        destination: String,
    },
}

pub type CallLog = Arc<Mutex<Vec<Call>>>;

pub fn call_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

#[derive(Clone)]
pub struct RecordingStore {
    pub log: CallLog,
    pub fail_with: Option<String>,
}

impl RecordingStore {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            fail_with: None,
        }
    }

    pub fn failing(log: CallLog, message: &str) -> Self {
        Self {
            log,
            fail_with: Some(message.to_string()),
        }
    }
}

#[async_trait]
impl TransactionStore for RecordingStore {
    async fn insert(
        &self,
        id: &str,
        account_id: &str,
        amount: Amount,
        status: Status,
        error_message: &str,
    ) -> Result<()> {
        self.log.lock().unwrap().push(Call::Insert {
            id: id.to_string(),
            account_id: account_id.to_string(),
            amount: amount.value(),
            status,
            error_message: error_message.to_string(),
        });
        match &self.fail_with {
            Some(message) => Err(GatewayError::PersistenceError(message.clone())),
            None => Ok(()),
        }
    }
}

#[derive(Clone)]
pub struct RecordingPublisher {
    pub log: CallLog,
    pub fail_with: Option<String>,
}

impl RecordingPublisher {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            fail_with: None,
        }
    }

    pub fn failing(log: CallLog, message: &str) -> Self {
        Self {
            log,
            fail_with: Some(message.to_string()),
        }
    }
}

#[async_trait]
impl EventPublisher for RecordingPublisher {
    async fn publish(
        &self,
        outcome: &TransactionOutcome,
        key: &[u8],
        destination: &str,
    ) -> Result<()> {
        self.log.lock().unwrap().push(Call::Publish {
            outcome: outcome.clone(),
            key: key.to_vec(),
            destination: destination.to_string(),
        });
        match &self.fail_with {
            Some(message) => Err(GatewayError::PublishError(message.clone())),
            None => Ok(()),
        }
    }
}

/// Limit rule that counts how often it is consulted.
#[derive(Clone, Default)]
pub struct SpyRule {
    inner: LimitRule,
    pub calls: Arc<AtomicUsize>,
}

impl SpyRule {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl DecisionRule for SpyRule {
    fn decide(&self, amount: Amount) -> Decision {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.decide(amount)
    }
}

pub fn write_requests_csv(path: &Path, rows: &[[&str; 8]]) -> std::result::Result<(), Error> {
    let mut wtr = csv::WriterBuilder::new().from_path(path)?;
    wtr.write_record(CSV_HEADER)?;
    for row in rows {
        wtr.write_record(row)?;
    }
    wtr.flush()?;
    Ok(())
}
