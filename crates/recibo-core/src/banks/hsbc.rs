//! HSBC SPEI transfer receipts.
//!
//! HSBC vouchers separate label words with uneven whitespace, so every
//! label is matched word-by-word with `\s+`. Settlement dates arrive as
//! `D Mmm YYYY` with Spanish or English month abbreviations.

use crate::rules::{DateFormat, FieldRule, RuleSet};

/// Rule set for the HSBC SPEI template.
pub fn spei() -> RuleSet {
    RuleSet::new(vec![
        FieldRule::capture(
            "account_id",
            &[
                r"Número\s+de\s+cuenta\s*(\d+)",
                r"CLABE\s+emisor\s*(\d+)",
            ],
        ),
        FieldRule::amount(
            "amount",
            &[
                r"Monto\s*bruto\s*MXN\s*([\d,]+\.?\d{2})",
                r"Monto\s*MXN\s*([\d,]+\.?\d{2})",
                r"Moneda/\s*Monto\s*MXN\s*([\d,]+\.?\d{2})",
            ],
        ),
        FieldRule::capture(
            "reference",
            &[
                r"Referencia\s+de\s+cliente\s*(\d+)",
                r"Referencia\s+numérica\s*(\d+)",
            ],
        ),
        FieldRule::date(
            "operation_date",
            &[
                r"Fecha\s+de\s+liquidación\s*(\d{1,2}\s+\w{3}\s+\d{4})",
                r"Fecha\s+y\s+hora\s+de\s+liquidación\s*(\d{1,2}\s+\w{3}\s+\d{4})",
            ],
            DateFormat::DayMonthYear,
        ),
        FieldRule::capture(
            "destination_account",
            &[
                r"Cuenta\s+beneficiaria\s*(\d+)",
                r"Código\s+del\s+banco\s+receptor\s*(\d+)",
            ],
        ),
        FieldRule::capture(
            "beneficiary_name",
            &[r"SEPSA\s+([A-Z\s]+?)\s{2,}Dirección", r"SEPSA\s+([A-Z\s]+)"],
        )
        .collapsed(),
        FieldRule::capture(
            "concept",
            &[
                r"Concepto\s+de\s+pago\s*([^:\n\r]+?)\s{2,}Referencia\s+numérica",
                r"Concepto\s+de\s+pago\s*([^:\n\r]+)",
            ],
        )
        .collapsed(),
        FieldRule::capture(
            "tracking_key",
            &[
                r"Clave\s+de\s+rastreo\s*([A-Za-z0-9]+)",
                r"Clave\s+de\s+rastreo\s*(\w+)",
            ],
        ),
        FieldRule::capture(
            "bank_reference",
            &[
                r"Referencia\s+bancaria\s*(\d+)",
                r"Referencia\s+relacionada\s*(\d+)",
            ],
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
    fn test_extract_hsbc_spei() {
        let receipt = "\
Comprobante de pago SPEI
Número de  cuenta 021180040012345678
Cuenta beneficiaria 012180001122334455
Monto bruto MXN 25,000.00
Fecha de liquidación 12 Oct 2025
Concepto de pago PAGO  NOMINA   Referencia numérica 777888
Clave de rastreo HSBC051025XK992211
Referencia bancaria 445522";

        let fields = spei().extract(&normalize(receipt));

        assert_eq!(
            fields.get("amount"),
            Some(&FieldValue::Amount(Decimal::from_str("25000.00").unwrap()))
        );
        assert_eq!(
            fields.get("operation_date"),
            Some(&FieldValue::Text("12/10/2025".to_string()))
        );
        assert_eq!(
            fields.get("account_id"),
            Some(&FieldValue::Text("021180040012345678".to_string()))
        );
        assert_eq!(
            fields.get("concept"),
            Some(&FieldValue::Text("PAGO NOMINA".to_string()))
        );
        assert_eq!(
            fields.get("tracking_key"),
            Some(&FieldValue::Text("HSBC051025XK992211".to_string()))
        );
        assert_eq!(
            fields.get("bank_reference"),
            Some(&FieldValue::Text("445522".to_string()))
        );
    }

    #[test]
    fn test_english_month_abbreviation() {
        let fields = spei().extract("Fecha de liquidación 3 Aug 2025");
        assert_eq!(
            fields.get("operation_date"),
            Some(&FieldValue::Text("03/08/2025".to_string()))
        );
    }
}
