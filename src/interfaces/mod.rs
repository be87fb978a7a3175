pub mod csv;
pub mod presenter;
