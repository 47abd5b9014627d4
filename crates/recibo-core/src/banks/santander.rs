//! Santander transfer receipts.
//!
//! Both Santander templates render as `Etiqueta: valor` pairs that OCR
//! merges onto shared lines, so rules anchor on the next label via
//! `\s{2,}` before falling back to an open-ended capture. The third-party
//! template timestamps operations year-first (`2025-10-07`).

use crate::rules::{DateFormat, FieldRule, RuleSet};

/// Rule set for the Santander SPEI template.
pub fn spei() -> RuleSet {
    RuleSet::new(vec![
        FieldRule::capture(
            "account_id",
            &[
                r"Cuenta Cargo:\s*([^:\n\r]+?)\s{2,}Cuenta Abono:",
                r"Cuenta Cargo:\s*(\d+)",
            ],
        ),
        FieldRule::amount(
            "amount",
            &[
                r"Importe:\s*\$\s*([\d,]+\.?\d{2})",
                r"Importe:\s*\$?\s*([\d,]+\.?\d{2})\s*MXN",
            ],
        ),
        FieldRule::capture(
            "reference",
            &[
                r"Referencia:\s*([^:\n\r]+?)\s{2,}Referencias del Movimiento:",
                r"Referencia:\s*([^:\n\r]+)",
            ],
        ),
        FieldRule::date(
            "operation_date",
            &[
                r"Fecha aplicación:\s*([^:\n\r]+?)\s{2,}RFC Beneficiario:",
                r"Fecha aplicación:\s*(\d{2}/\d{2}/\d{4})",
            ],
            DateFormat::DayMonthYear,
        ),
        FieldRule::capture(
            "destination_account",
            &[
                r"Cuenta Abono:\s*([^:\n\r]+?)\s{2,}Importe:",
                r"Cuenta Abono:\s*(\d+)",
            ],
        ),
        FieldRule::capture(
            "beneficiary_name",
            &[
                r"Cuenta Abono:\s*\d+\s*-\s*([^:\n\r]+?)\s{2,}Importe:",
                r"Cuenta Abono:[^-]+-\s*([^\n\r]+)",
            ],
        ),
        FieldRule::capture(
            "concept",
            &[
                r"Concepto:\s*([^:\n\r]+?)\s{2,}Fecha aplicación:",
                r"Concepto:\s*([^:\n\r]+)",
            ],
        ),
        FieldRule::capture(
            "status",
            &[
                r"Estado:\s*([^:\n\r]+?)\s{2,}Divisa:",
                r"Estado:\s*([^:\n\r]+)",
            ],
        ),
        FieldRule::capture(
            "operation_type",
            &[
                r"Tipo de Operación:\s*([^:\n\r]+?)\s{2,}Contrato:",
                r"Tipo de Operación:\s*([^:\n\r]+)",
            ],
        ),
    ])
}

/// Rule set for the Santander third-party transfer template.
pub fn third_party() -> RuleSet {
    RuleSet::new(vec![
        FieldRule::capture(
            "account_id",
            &[
                r"Cuenta de Cargo:\s*([^:\n\r]+?)\s{2,}Fecha y Hora Operación:",
                r"Cuenta de Cargo:\s*([^:\n\r]+)",
            ],
        ),
        FieldRule::amount(
            "amount",
            &[
                r"Importe:\s*-?\$?([\d,]+\.?\d{2})",
                r"Importe:\s*-?([\d,]+\.?\d{2})\s*MXP",
            ],
        ),
        FieldRule::capture(
            "reference",
            &[
                r"Referencia:\s*([^:\n\r]+?)\s{2,}Referencia numérica del Emisor:",
                r"Referencia:\s*([^:\n\r]+)",
            ],
        ),
        FieldRule::date(
            "operation_date",
            &[
                r"Fecha y Hora Operación:\s*([^:\n\r]+?)\s{2,}Fecha y Hora contable:",
                r"Fecha y Hora Operación:\s*(\d{4}-\d{2}-\d{2})",
            ],
            DateFormat::YearMonthDay,
        ),
        FieldRule::capture(
            "concept",
            &[
                r"Concepto:\s*([^:\n\r]+?)\s{2,}Banco Participante:",
                r"Concepto:\s*([^:\n\r]+)",
            ],
        ),
        FieldRule::capture(
            "operation_type",
            &[
                r"Tipo de Operación:\s*([^:\n\r]+?)\s{2,}Cuenta de Cargo:",
                r"Tipo de Operación:\s*([^:\n\r]+)",
            ],
        ),
    ])
}
