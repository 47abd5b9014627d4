//! Data models for receipt classification and extraction.

pub mod receipt;

pub use receipt::{FieldValue, Institution, Outcome, ReceiptData, Report, TransferKind};
