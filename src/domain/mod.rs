pub mod credit_card;
pub mod decision;
pub mod ports;
pub mod transaction;
