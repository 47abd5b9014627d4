//! Core library for Mexican bank transfer receipt reading.
//!
//! This crate provides:
//! - Text normalization for noisy OCR output
//! - Ordered-signature bank/transaction-type classification
//! - Per-institution field rule sets (amounts, dates, accounts, references)
//! - A single orchestrator composing the three into one outcome envelope
//!
//! Text acquisition (OCR, PDF text layers) lives outside this crate; any
//! provider that yields a UTF-8 string can be plugged in through
//! [`TextSource`].

pub mod banks;
pub mod classify;
pub mod error;
pub mod models;
pub mod reader;
pub mod rules;
pub mod text;

pub use classify::{Registry, Signature};
pub use error::{AcquireError, ReciboError, Result};
pub use models::receipt::{FieldValue, Institution, Outcome, ReceiptData, Report, TransferKind};
pub use reader::{ReceiptReader, TextSource};
pub use rules::{FieldRule, RuleSet};
pub use text::normalize;
