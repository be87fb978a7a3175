use crate::domain::decision::Decision;
use crate::error::GatewayError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a positive monetary amount for transactions.
///
/// Ensures that transaction amounts are always positive, so the decision rules
/// only ever see values from their documented domain. Decoding goes through the
/// field's text so no float parsing happens on the way in.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "String", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self, GatewayError> {
        if value > Decimal::ZERO {
            Ok(Self(value))
        } else {
            Err(GatewayError::ValidationError(
                "Amount must be positive".to_string(),
            ))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = GatewayError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for Amount {
    type Error = GatewayError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let decimal = Decimal::from_str_exact(value.trim()).map_err(|e| {
            GatewayError::ValidationError(format!("Invalid amount '{value}': {e}"))
        })?;
        Self::new(decimal)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

pub const DEFAULT_REJECTION_MESSAGE: &str = "transaction rejected";

/// Terminal result of a transaction. There are no intermediate states.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Approved,
    Rejected,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Approved => "approved",
            Status::Rejected => "rejected",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single payment request as handed over by the boundary layer.
///
/// Field names on the wire follow the gateway's message format, so the same
/// type is read from CSV rows and from JSON payloads.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct TransactionRequest {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "AccountID")]
    pub account_id: String,
    #[serde(rename = "CreditCardNumber")]
    pub credit_card_number: String,
    #[serde(rename = "CreditCardName")]
    pub credit_card_holder_name: String,
    #[serde(rename = "CreditCardExpirationMonth")]
    pub expiration_month: u8,
    #[serde(rename = "CreditCardExpirationYear")]
    pub expiration_year: u16,
    #[serde(rename = "CreditCardCVV")]
    pub cvv: u16,
    #[serde(rename = "Amount")]
    pub amount: Amount,
}

/// The decision produced for one request.
///
/// `status == Approved` holds exactly when `error_message` is empty; the
/// constructors are the only way the gateway builds one.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct TransactionOutcome {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Status")]
    pub status: Status,
    #[serde(rename = "ErrorMessage")]
    pub error_message: String,
}

impl TransactionOutcome {
    pub fn approved(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            status: Status::Approved,
            error_message: String::new(),
        }
    }

    /// An empty reason is replaced so a rejection never looks like an approval.
    pub fn rejected(id: impl Into<String>, reason: impl Into<String>) -> Self {
        let mut error_message = reason.into();
        if error_message.is_empty() {
            error_message = DEFAULT_REJECTION_MESSAGE.to_string();
        }
        Self {
            id: id.into(),
            status: Status::Rejected,
            error_message,
        }
    }

    pub fn from_decision(id: impl Into<String>, decision: Decision) -> Self {
        match decision {
            Decision::Approved => Self::approved(id),
            Decision::Rejected(reason) => Self::rejected(id, reason),
        }
    }

    pub fn is_approved(&self) -> bool {
        self.status == Status::Approved
    }
}

/// The row a store keeps for each processed transaction.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone)]
pub struct StoredTransaction {
    pub id: String,
    pub account_id: String,
    pub amount: Decimal,
    pub status: Status,
    pub error_message: String,
}

impl StoredTransaction {
    pub fn new(
        id: &str,
        account_id: &str,
        amount: Amount,
        status: Status,
        error_message: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            account_id: account_id.to_string(),
            amount: amount.value(),
            status,
            error_message: error_message.to_string(),
        }
    }
}
