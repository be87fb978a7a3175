use crate::domain::transaction::TransactionRequest;
use crate::error::{GatewayError, Result};
use std::io::Read;

/// Reads transaction requests from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over
/// `Result<TransactionRequest>`. Headers must use the gateway's wire names
/// (`ID`, `AccountID`, `CreditCardNumber`, ...). Whitespace around fields is trimmed.
pub struct RequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RequestReader<R> {
    /// Creates a new `RequestReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes requests.
    ///
    /// A malformed row yields an error item; later rows are still read.
    pub fn requests(self) -> impl Iterator<Item = Result<TransactionRequest>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(GatewayError::from))
    }
}
