//! BBVA transfer receipts.
//!
//! BBVA emits two templates: the interbank SPEI voucher (recognizable by
//! its `BNET…` tracking keys) and the same-bank third-party transfer
//! voucher. Labels frequently run into the next field on one OCR line, so
//! most text rules anchor on the following label via `\s{2,}` before
//! falling back to an open-ended capture.

use crate::rules::{DateFormat, FieldRule, RuleSet};

/// Rule set for the BBVA SPEI template.
pub fn spei() -> RuleSet {
    RuleSet::new(vec![
        FieldRule::capture(
            "account_id",
            &[
                r"Cuenta de retiro\.?\s*(\d+)",
                r"Cuenta de retiro[\s\S]*?(\d{10,})",
                r"Cuenta Retiro:\s*(\d+)",
            ],
        ),
        FieldRule::amount(
            "amount",
            &[
                r"Importe\s*\$\s*([\d,]+\.?\d{2})",
                r"Importe:\s*\$\s*([\d,]+\.?\d{2})",
                r"Importe:\s*\$?\s*([\d,]+\.?\d{2})",
            ],
        ),
        FieldRule::capture(
            "reference",
            &[
                r"Referencia numérica\s*(\d+)",
                r"Referencia.*Numérica\s*(\d+)",
                r"Referencia Numérica:\s*(\d+)",
            ],
        ),
        FieldRule::date(
            "date",
            &[
                r"Fecha de Operación:\s*(\d{2}/\d{2}/\d{4})",
                r"Fecha de Operación:\s*(\d{1,2}/\d{1,2}/\d{4})",
            ],
            DateFormat::DayMonthYear,
        ),
        FieldRule::capture(
            "destination_bank",
            &[
                r"Banco Destino:\s*([^:\n\r]+?)\s{2,}Cuenta Asociada:",
                r"Banco Destino:\s*([^:\n\r]+?)\s{2,}[A-Za-záéíóúñ]+\s*:",
                r"Banco Destino:\s*([^:\n\r]+)",
            ],
        ),
        FieldRule::capture(
            "destination_account",
            &[r"Cuenta Asociada:\s*(\d+)"],
        ),
        FieldRule::capture(
            "beneficiary_name",
            &[
                r"Nombre del beneficiario:\s*([^:\n\r(]+?)\s{2,}\(",
                r"Nombre del beneficiario:\s*([^:\n\r(]+?)\s{2,}[A-Za-záéíóúñ]+\s*:",
                r"Nombre del beneficiario:\s*([^:\n\r(]+)",
            ],
        ),
        FieldRule::capture(
            "tracking_key",
            &[
                r"Clave de Rastreo:\s*([A-Za-z0-9]+)",
                r"Clave de Rastreo:\s*(\w{20,})",
            ],
        ),
        FieldRule::capture(
            "status",
            &[
                r"Estatus:\s*([^:\n\r]+?)\s{2,}Clave de Rastreo:",
                r"Estatus:\s*([^:\n\r]+?)\s{2,}[A-Za-záéíóúñ]+\s*:",
                r"Estatus:\s*([^:\n\r]+)",
            ],
        ),
        FieldRule::capture(
            "concept",
            &[
                r"Concepto de Pago:\s*([^:\n\r]+?)\s{2,}[A-Za-záéíóúñ]+\s*:",
                r"Concepto de Pago:\s*([^:\n\r]+?)\s{2,}Referencia Numérica:",
                r"Concepto de Pago:\s*([^:\n\r]+?)\s{2,}Estatus:",
                r"Concepto de Pago:\s*([^:\n\r]+)",
            ],
        ),
    ])
}

/// Rule set for the BBVA third-party transfer template.
pub fn third_party() -> RuleSet {
    RuleSet::new(vec![
        FieldRule::capture(
            "account_id",
            &[r"Cuenta de retiro:\s*(\d+)", r"Cuenta de retiro\.?\s*(\d+)"],
        ),
        FieldRule::amount(
            "amount",
            &[
                r"Importe de la operación:\s*\$\s*([\d,]+\.?\d{2})",
                r"Importe de la operación\s*\$\s*([\d,]+\.?\d{2})",
            ],
        ),
        FieldRule::capture(
            "reference",
            &[r"Folio de internet:\s*(\d+)", r"Folio de internet\.?\s*(\d+)"],
        ),
        FieldRule::date(
            "operation_date",
            &[
                r"Fecha de la operación:\s*(\d{2}/\d{2}/\d{4})",
                r"Fecha de la operación\s*(\d{1,2}/\d{1,2}/\d{4})",
            ],
            DateFormat::DayMonthYear,
        ),
        FieldRule::capture(
            "destination_account",
            &[r"Cuenta asociada:\s*(\d+)", r"Cuenta asociada\.?\s*(\d+)"],
        ),
        FieldRule::capture(
            "concept",
            &[
                r"Concepto de pago:\s*([^:\n\r]+?)\s{2,}Fecha de la operación:",
                r"Concepto de pago:\s*([^:\n\r]+?)\s{2,}[A-Za-záéíóúñ]+\s*:",
                r"Concepto de pago:\s*([^:\n\r]+)",
            ],
        ),
        FieldRule::capture(
            "operation_type",
            &[
                r"Tipo de operación:\s*([^:\n\r]+?)\s{2,}Cuenta de retiro:",
                r"Tipo de operación:\s*([^:\n\r]+?)\s{2,}[A-Za-záéíóúñ]+\s*:",
                r"Tipo de operación:\s*([^:\n\r]+)",
            ],
        ),
    ])
}
