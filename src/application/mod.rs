//! Application layer containing the gateway's orchestration logic.
//!
//! This module defines the `TransactionProcessor`, which sequences card
//! validation, the decision rule, persistence and event publication for a
//! single request.

pub mod processor;
