//! BanBajío SPEI transfer receipts.

use crate::rules::{DateFormat, FieldRule, RuleSet};

/// Rule set for the BanBajío SPEI template. Dates arrive as
/// `DD-Mmm-YYYY` with Spanish or English month abbreviations.
pub fn spei() -> RuleSet {
    RuleSet::new(vec![
        FieldRule::capture("account_id", &[r"Cuenta Origen:\s*(\d+)"]),
        FieldRule::amount("amount", &[r"Importe:\s*\$\s*([\d,]+\.?\d{2})"]),
        FieldRule::capture("reference", &[r"Referencia:\s*(\d+)"]),
        FieldRule::date(
            "operation_date",
            &[r"Fecha de Operación:\s*(\d{2}-\w{3}-\d{4})"],
            DateFormat::DayMonthYear,
        ),
        FieldRule::capture("destination_account", &[r"Cuenta Destino:\s*(\d+)"]),
        FieldRule::capture(
            "beneficiary_name",
            &[
                r"Nombre del Beneficiario:\s*([A-Z\s]+?)\s{2,}[A-Z]",
                r"Nombre del Beneficiario:\s*([A-Z\s]+)",
            ],
        ),
        FieldRule::capture(
            "concept",
            &[
                r"Concepto de Pago:\s*([A-Z\s]+?)\s{2,}Referencia:",
                r"Concepto de Pago:\s*([A-Z\s]+)",
            ],
        ),
        FieldRule::capture("tracking_key", &[r"Clave de Rastreo:\s*([A-Za-z0-9]+)"]),
        FieldRule::capture(
            "destination_bank",
            &[
                r"Banco Destino:\s*([A-Z]+?)\s{2,}Nombre del Beneficiario:",
                r"Banco Destino:\s*([A-Z]+)",
            ],
        ),
    ])
}
