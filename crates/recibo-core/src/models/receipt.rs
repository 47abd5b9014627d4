//! Receipt data models and the outcome envelope.

use std::collections::BTreeMap;
use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Issuing institution of a transfer receipt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Institution {
    Afirme,
    Banbajio,
    Banorte,
    Banregio,
    Bbva,
    Hsbc,
    Santander,
    Scotiabank,
}

impl Institution {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Afirme => "afirme",
            Self::Banbajio => "banbajio",
            Self::Banorte => "banorte",
            Self::Banregio => "banregio",
            Self::Bbva => "bbva",
            Self::Hsbc => "hsbc",
            Self::Santander => "santander",
            Self::Scotiabank => "scotiabank",
        }
    }
}

impl fmt::Display for Institution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Transaction subtype of a receipt template.
///
/// Institutions issue distinct templates for interbank SPEI transfers and
/// same-bank third-party transfers; both classify and extract separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferKind {
    Spei,
    ThirdParty,
}

impl TransferKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Spei => "spei",
            Self::ThirdParty => "third_party",
        }
    }
}

impl fmt::Display for TransferKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single extracted field value.
///
/// Amounts carry two fractional digits; everything else is text.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Amount(Decimal),
    Text(String),
}

impl FieldValue {
    pub fn as_amount(&self) -> Option<Decimal> {
        match self {
            Self::Amount(amount) => Some(*amount),
            Self::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Amount(_) => None,
            Self::Text(text) => Some(text),
        }
    }
}

impl From<Decimal> for FieldValue {
    fn from(amount: Decimal) -> Self {
        Self::Amount(amount)
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

/// Structured data extracted from one identified receipt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReceiptData {
    /// Issuing institution.
    pub institution: Institution,

    /// Transaction subtype of the matched template.
    pub transfer_kind: TransferKind,

    /// Resolved fields, keyed by rule name. A field whose rule found no
    /// match is omitted entirely; absence encodes "not found".
    pub fields: BTreeMap<String, FieldValue>,
}

impl ReceiptData {
    /// Look up a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }
}

/// Terminal result of one receipt-reading invocation.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// A signature matched and its rule set ran.
    Identified(ReceiptData),
    /// No signature trigger fired. A valid terminal state, not an error.
    Unidentified,
    /// An unexpected fault outside normal rule evaluation (bad input,
    /// acquisition failure).
    Failure(String),
}

impl Outcome {
    pub fn is_identified(&self) -> bool {
        matches!(self, Self::Identified(_))
    }

    /// The extracted data, when identified.
    pub fn data(&self) -> Option<&ReceiptData> {
        match self {
            Self::Identified(data) => Some(data),
            _ => None,
        }
    }

    /// Flatten into the serializable envelope consumed by presentation
    /// layers.
    pub fn report(&self) -> Report {
        match self {
            Self::Identified(data) => Report {
                success: true,
                institution: Some(data.institution),
                transaction_type: Some(data.transfer_kind),
                fields: Some(data.fields.clone()),
                error: None,
            },
            // Unidentified keeps `error` empty so it stays distinguishable
            // from a true fault.
            Self::Unidentified => Report {
                success: false,
                institution: None,
                transaction_type: None,
                fields: None,
                error: None,
            },
            Self::Failure(message) => Report {
                success: false,
                institution: None,
                transaction_type: None,
                fields: None,
                error: Some(message.clone()),
            },
        }
    }
}

/// Flat outcome record for downstream consumers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub success: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub institution: Option<Institution>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<TransferKind>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<BTreeMap<String, FieldValue>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
