//! The receipt reader: normalization, classification and extraction
//! composed behind one entry point.

use tracing::{debug, info};

use crate::classify::Registry;
use crate::error::{AcquireError, ReciboError};
use crate::models::receipt::{Outcome, ReceiptData};
use crate::text::normalize;

/// A provider of receipt text: OCR output, a PDF text layer, a fixture.
///
/// Acquisition is the only slow, fallible, environment-specific step of
/// the pipeline and lives entirely outside this crate; any closure
/// returning a `String` qualifies as a source.
pub trait TextSource {
    fn acquire(&self) -> Result<String, AcquireError>;
}

impl<F> TextSource for F
where
    F: Fn() -> Result<String, AcquireError>,
{
    fn acquire(&self) -> Result<String, AcquireError> {
        self()
    }
}

/// Receipt reader bound to an immutable signature registry.
///
/// Every call is an independent pure computation over the shared table, so
/// one reader can serve any number of threads.
pub struct ReceiptReader<'r> {
    registry: &'r Registry,
}

impl ReceiptReader<'static> {
    /// Reader over the process-wide curated registry.
    pub fn new() -> Self {
        Self {
            registry: Registry::shared(),
        }
    }
}

impl Default for ReceiptReader<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'r> ReceiptReader<'r> {
    /// Reader over a caller-supplied registry.
    pub fn with_registry(registry: &'r Registry) -> Self {
        Self { registry }
    }

    /// Classify and extract one receipt text.
    ///
    /// Text that matches no signature (including the empty string) is
    /// [`Outcome::Unidentified`]; that is a valid terminal state, not a
    /// failure.
    pub fn process(&self, text: &str) -> Outcome {
        let normalized = normalize(text);

        let Some(signature) = self.registry.classify(&normalized) else {
            debug!(chars = normalized.len(), "no signature matched");
            return Outcome::Unidentified;
        };

        let fields = signature.rules().extract(&normalized);
        info!(
            institution = %signature.institution(),
            kind = %signature.kind(),
            fields = fields.len(),
            "receipt identified"
        );

        Outcome::Identified(ReceiptData {
            institution: signature.institution(),
            transfer_kind: signature.kind(),
            fields,
        })
    }

    /// Classify and extract from raw bytes.
    ///
    /// Bytes that are not valid UTF-8 are not receipt text at all; they
    /// surface as [`Outcome::Failure`], never silently coerced.
    pub fn process_bytes(&self, bytes: &[u8]) -> Outcome {
        match std::str::from_utf8(bytes) {
            Ok(text) => self.process(text),
            Err(error) => {
                Outcome::Failure(ReciboError::InvalidInput(error.to_string()).to_string())
            }
        }
    }

    /// Acquire text from `source`, then classify and extract it.
    ///
    /// An acquisition failure becomes [`Outcome::Failure`] so callers see
    /// the same three-way envelope regardless of where things went wrong.
    pub fn read_from<S: TextSource>(&self, source: &S) -> Outcome {
        match source.acquire() {
            Ok(text) => self.process(&text),
            Err(error) => Outcome::Failure(ReciboError::Acquire(error).to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::banks;
    use crate::classify::Signature;
    use crate::models::receipt::{FieldValue, Institution, TransferKind};
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_end_to_end_bbva_third_party() {
        let reader = ReceiptReader::new();
        let outcome = reader.process(
            "Comprobante de transferencia a terceros\n\
             Importe de la operación: $500.00\n\
             Folio de internet: 987654321\n",
        );

        let data = outcome.data().expect("receipt should identify");
        assert_eq!(data.institution, Institution::Bbva);
        assert_eq!(data.transfer_kind, TransferKind::ThirdParty);
        assert_eq!(
            data.field("amount"),
            Some(&FieldValue::Amount(Decimal::from_str("500.00").unwrap()))
        );
        assert_eq!(
            data.field("reference"),
            Some(&FieldValue::Text("987654321".to_string()))
        );
    }

    #[test]
    fn test_end_to_end_afirme_spei() {
        let reader = ReceiptReader::new();
        let outcome = reader.process(
            "Banca Afirme\r\n\r\nImporte de traspaso $1,200.00 MXP\r\nFecha: 15/03/24\r\n",
        );

        let data = outcome.data().expect("receipt should identify");
        assert_eq!(data.institution, Institution::Afirme);
        assert_eq!(data.transfer_kind, TransferKind::Spei);
        assert_eq!(
            data.field("amount"),
            Some(&FieldValue::Amount(Decimal::from_str("1200.00").unwrap()))
        );
        assert_eq!(
            data.field("date"),
            Some(&FieldValue::Text("15/03/2024".to_string()))
        );
    }

    #[test]
    fn test_unrelated_text_is_unidentified() {
        let reader = ReceiptReader::new();
        assert_eq!(reader.process("lista de compras: pan, leche"), Outcome::Unidentified);
        assert_eq!(reader.process(""), Outcome::Unidentified);
    }

    #[test]
    fn test_same_text_same_outcome() {
        let reader = ReceiptReader::new();
        let text = "transferencia a terceros  Importe de la operación: $99.00";
        assert_eq!(reader.process(text), reader.process(text));
    }

    #[test]
    fn test_custom_registry_order_decides() {
        let registry = Registry::new(vec![
            Signature::new(
                Institution::Scotiabank,
                TransferKind::Spei,
                &[r"comprobante"],
                banks::scotiabank::spei(),
            ),
            Signature::new(
                Institution::Hsbc,
                TransferKind::Spei,
                &[r"comprobante"],
                banks::hsbc::spei(),
            ),
        ]);
        let reader = ReceiptReader::with_registry(&registry);

        let data = reader.process("Comprobante de pago").data().cloned().unwrap();
        assert_eq!(data.institution, Institution::Scotiabank);
    }

    #[test]
    fn test_read_from_source() {
        let reader = ReceiptReader::new();

        let source = || Ok("transferencia a terceros  Folio de internet: 42".to_string());
        let outcome = reader.read_from(&source);
        assert!(outcome.is_identified());

        let failing = || Err(AcquireError::new("scanner unplugged"));
        let outcome = reader.read_from(&failing);
        assert_eq!(
            outcome,
            Outcome::Failure("text acquisition failed: scanner unplugged".to_string())
        );
    }

    #[test]
    fn test_invalid_bytes_fail() {
        let reader = ReceiptReader::new();
        let outcome = reader.process_bytes(&[0xff, 0xfe, 0x00]);
        match outcome {
            Outcome::Failure(message) => assert!(message.starts_with("invalid input:")),
            other => panic!("expected failure, got {other:?}"),
        }
    }

    #[test]
    fn test_report_round_trip_shapes() {
        let reader = ReceiptReader::new();

        let identified = reader
            .process("transferencia a terceros  Importe de la operación: $500.00")
            .report();
        assert!(identified.success);
        assert_eq!(identified.institution, Some(Institution::Bbva));

        let unidentified = reader.process("nada que ver").report();
        assert!(!unidentified.success);
        assert_eq!(unidentified.error, None);
    }

    #[test]
    fn test_rule_sets_are_reentrant() {
        // Running the same extraction twice over the same text is a pure
        // re-derivation.
        let text = "Importe de la operación: $500.00";
        let set = banks::bbva::third_party();
        assert_eq!(set.extract(text), set.extract(text));
    }
}
