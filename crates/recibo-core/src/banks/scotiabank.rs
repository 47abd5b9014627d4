//! Scotiabank SPEI transfer receipts.
//!
//! Scotiabank quotes operation dates year-first (`2025/10/07`).

use crate::rules::{DateFormat, FieldRule, RuleSet};

/// Rule set for the Scotiabank SPEI template.
pub fn spei() -> RuleSet {
    RuleSet::new(vec![
        FieldRule::capture(
            "account_id",
            &[
                r"Cuenta de cargo\s*([A-Z0-9-]+)",
                r"Cuenta de cargo:\s*([A-Z0-9-]+)",
            ],
        ),
        FieldRule::amount(
            "amount",
            &[
                r"Importe\s*([\d,]+\.?\d{2})",
                r"Importe:\s*([\d,]+\.?\d{2})",
            ],
        ),
        FieldRule::capture(
            "reference",
            &[
                r"Referencia \(Numérica\):\s*(\d+)",
                r"Referencia:\s*(\d+)",
                r"Folio:\s*(\d+)",
            ],
        ),
        FieldRule::capture(
            "tracking_key",
            &[
                r"Clave de Rastreo:\s*([A-Za-z0-9]+)",
                r"Clave de Rastreo\s*([A-Za-z0-9]+)",
            ],
        ),
        FieldRule::date(
            "operation_date",
            &[
                r"Fecha de Operación:\s*(\d{4}/\d{2}/\d{2})",
                r"Fecha de aplicación:\s*(\d{4}/\d{2}/\d{2})",
            ],
            DateFormat::YearMonthDay,
        ),
        FieldRule::capture(
            "destination_account",
            &[r"Cuenta de Abono:\s*(\d+)", r"Cuenta de Abono\s*(\d+)"],
        ),
        FieldRule::capture(
            "beneficiary_name",
            &[
                r"Nombre Beneficiario/Razón Social:\s*([^\n\r]+)",
                r"Nombre Beneficiario:\s*([^\n\r]+)",
            ],
        ),
        FieldRule::capture(
            "concept",
            &[r"Concepto:\s*([^\n\r]+)", r"Concepto\s*([^\n\r]+)"],
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::receipt::FieldValue;
    use crate::text::normalize;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_extract_scotiabank_spei() {
        let receipt = "\
Transferencia SPEI
Cuenta de cargo 00105566778-8
Cuenta de Abono: 044180001122334455
Nombre Beneficiario/Razón Social: TRANSPORTES DEL BAJIO SA
Importe 6,300.00
Concepto: FLETE OCTUBRE
Referencia (Numérica): 778899
Clave de Rastreo: SCOT2510070011223344
Fecha de Operación: 2025/10/07";

        let fields = spei().extract(&normalize(receipt));

        assert_eq!(
            fields.get("amount"),
            Some(&FieldValue::Amount(Decimal::from_str("6300.00").unwrap()))
        );
        assert_eq!(
            fields.get("account_id"),
            Some(&FieldValue::Text("00105566778-8".to_string()))
        );
        assert_eq!(
            fields.get("operation_date"),
            Some(&FieldValue::Text("07/10/2025".to_string()))
        );
        assert_eq!(
            fields.get("reference"),
            Some(&FieldValue::Text("778899".to_string()))
        );
        assert_eq!(
            fields.get("beneficiary_name"),
            Some(&FieldValue::Text("TRANSPORTES DEL BAJIO SA".to_string()))
        );
        assert_eq!(
            fields.get("concept"),
            Some(&FieldValue::Text("FLETE OCTUBRE".to_string()))
        );
    }
}
