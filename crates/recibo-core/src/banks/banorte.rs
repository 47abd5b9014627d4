//! Banorte transfer receipts.
//!
//! Banorte dates use dotted lowercase month abbreviations
//! (`07/oct./2025`).

use crate::rules::{DateFormat, FieldRule, RuleSet};

/// Rule set for the Banorte SPEI template.
pub fn spei() -> RuleSet {
    RuleSet::new(vec![
        FieldRule::capture(
            "account_id",
            &[
                r"Cuenta/ CLABE Ordenante\s*(\d+)",
                r"Cuenta Ordenante\s*(\d+)",
            ],
        ),
        FieldRule::amount("amount", &[r"Importe\s*\$\s*([\d,]+\.?\d{2})"]),
        FieldRule::capture("reference", &[r"Referencia numérica\s*(\d+)"]),
        FieldRule::date(
            "operation_date",
            &[
                r"Fecha Aplicación\s*(\d{1,2}/\w+\./\d{4})",
                r"Fecha de Operación\s*(\d{1,2}/\w+\./\d{4})",
            ],
            DateFormat::DayMonthYear,
        ),
        FieldRule::capture(
            "destination_account",
            &[
                r"Cuenta/ CLABE Beneficiario\s*(\d+)",
                r"Cuenta Beneficiario\s*(\d+)",
            ],
        ),
        FieldRule::capture(
            "beneficiary_name",
            &[r"Nombre del Beneficiario\s*([^\n\r]+)"],
        ),
        FieldRule::capture("destination_bank", &[r"Banco Receptor\s*([^\n\r]+)"]),
        FieldRule::capture("concept", &[r"Propósito de la Transferencia\s*([^\n\r]+)"]),
        FieldRule::capture("tracking_key", &[r"Clave de Rastreo\s*([A-Za-z0-9]+)"]),
    ])
}

/// Rule set for the Banorte third-party transfer template.
pub fn third_party() -> RuleSet {
    RuleSet::new(vec![
        FieldRule::capture(
            "account_id",
            &[
                r"Cuenta/ CLABE Ordenante\s*(\d+)",
                r"Cuenta Ordenante\s*(\d+)",
            ],
        ),
        FieldRule::amount(
            "amount",
            &[r"Importe a Transferir\s*\$\s*([\d,]+\.?\d{2})"],
        ),
        FieldRule::capture("reference", &[r"Referencia numérica\s*(\d+)"]),
        FieldRule::date(
            "operation_date",
            &[r"Fecha Aplicación\s*(\d{1,2}/\w+\./\d{4})"],
            DateFormat::DayMonthYear,
        ),
        FieldRule::capture(
            "destination_account",
            &[
                r"Cuenta/ CLABE Beneficiario\s*(\d+)",
                r"Cuenta Beneficiario\s*(\d+)",
            ],
        ),
        FieldRule::capture(
            "beneficiary_name",
            &[r"Nombre del Beneficiario\s*([^\n\r]+)"],
        ),
        FieldRule::capture("concept", &[r"Propósito de la Transferencia\s*([^\n\r]+)"]),
        FieldRule::capture("tracking_key", &[r"Clave de Rastreo\s*([A-Za-z0-9]+)"]),
        // The template itself names the operation; no label survives OCR
        // reliably enough to capture it.
        FieldRule::constant("operation_type", &[""], "Transferencia a Terceros Banorte"),
    ])
}
