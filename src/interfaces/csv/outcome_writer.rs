use crate::domain::transaction::TransactionOutcome;
use crate::error::Result;
use std::io::Write;

/// Writes outcomes as CSV rows with the header `ID,Status,ErrorMessage`.
pub struct OutcomeWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> OutcomeWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_outcome(&mut self, outcome: &TransactionOutcome) -> Result<()> {
        self.writer.serialize(outcome)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
