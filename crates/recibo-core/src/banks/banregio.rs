//! Banregio transfer receipts.
//!
//! Banregio vouchers carry little labeling: accounts appear as
//! `NOMBRE - *NNNN` pairs and the third-party template shows the reference
//! and date joined as `REF12345 - 07-10-2025`. Rules lean on those shapes
//! rather than on field labels.

use crate::rules::{DateFormat, FieldRule, RuleSet};

/// Rule set for the Banregio SPEI template.
pub fn spei() -> RuleSet {
    RuleSet::new(vec![
        FieldRule::capture(
            "account_id",
            &[
                r"Cuenta Origen[\s\S]*?-\s*(\*?\d+)",
                r"ASESORES[\s\S]*?-\s*(\*?\d+)",
            ],
        ),
        FieldRule::amount(
            "amount",
            &[
                r"\$([\d,]+\.?\d{2})",
                r"Cantidad a Transferir[\s\S]*?\$([\d,]+\.?\d{2})",
            ],
        ),
        FieldRule::capture(
            "reference",
            &[r"Número de referencia\s*(\d+)", r"Transferencia\s*(\d+)"],
        ),
        FieldRule::date(
            "operation_date",
            &[
                r"Fecha de operación SPEI\s*(\d{1,2}\s+\w+\s+\d{4})",
                r"Recibo de la transferencia\s*(\d{1,2}\s+\w+\s+\d{4})",
            ],
            DateFormat::DayMonthYear,
        ),
        FieldRule::capture(
            "destination_account",
            &[
                r"Cuenta Destino[\s\S]*?-\s*(\d+)",
                r"MATERIALES[\s\S]*?-\s*(\d+)",
            ],
        ),
        FieldRule::capture(
            "beneficiary_name",
            &[
                r"Cuenta Destino[\s\S]*?-\s*([A-Z\s\.]+?)\s+\d+",
                r"(MATERIALES[\s\S]*?SA DE CV)",
            ],
        ),
        FieldRule::capture(
            "concept",
            &[
                r"Concepto de pago\s*([^\n\r]+?)\s{2,}\w+",
                r"Concepto de pago\s*([^\n\r]+)",
            ],
        ),
        FieldRule::capture("tracking_key", &[r"Tu clave de rastreo\s*([A-Za-z0-9]+)"]),
    ])
}

/// Rule set for the Banregio third-party transfer template.
pub fn third_party() -> RuleSet {
    RuleSet::new(vec![
        FieldRule::capture(
            "account_id",
            &[
                r"Cuenta Origen[\s\S]*?-\s*(\*?\d+)",
                r"ASESORES[\s\S]*?-\s*(\*?\d+)",
            ],
        ),
        FieldRule::amount("amount", &[r"\$([\d,]+\.?\d{2})"]),
        FieldRule::capture(
            "reference",
            &[
                r"Datos\s+de\s+tu\s+operaci[oó]n[\s\S]*?([A-Za-z0-9]{6,})\s*-\s*\d{2}-\d{2}-\d{4}",
                r"([A-Za-z0-9]{6,})\s*-\s*\d{2}-\d{2}-\d{4}(?:\s+\d{2}:\d{2})?",
            ],
        ),
        FieldRule::date(
            "operation_date",
            &[
                r"[A-Za-z0-9]{6,}\s*-\s*(\d{2}-\d{2}-\d{4})",
                r"(\d{2}-\d{2}-\d{4})\s+\d{2}:\d{2}",
            ],
            DateFormat::DayMonthYear,
        ),
        FieldRule::capture(
            "destination_account",
            &[
                r"Cuenta Destino[\s\S]*?-\s*(\*?\d+)",
                r"MATERIALES[\s\S]*?-\s*(\*?\d+)",
            ],
        ),
        FieldRule::capture(
            "beneficiary_name",
            &[
                r"Cuenta Destino[\s\S]*?-\s*([A-Z\s\.]+?)\s+\*",
                r"(MATERIALES[\s\S]*?SA DE CV)",
            ],
        ),
        FieldRule::capture(
            "concept",
            &[
                r"Descripcion\s*([^\n\r]+?)\s{2,}",
                r"Descripcion\s*([^\n\r]+)",
            ],
        ),
        FieldRule::constant("operation_type", &[""], "third_party"),
    ])
}
