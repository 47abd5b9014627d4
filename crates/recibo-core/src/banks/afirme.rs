//! Afirme SPEI transfer receipts.
//!
//! Afirme templates label the masked source/destination accounts with
//! `(****NNNN)` suffixes and quote amounts as `$ N,NNN.NN MXP`.

use crate::rules::{DateFormat, FieldRule, RuleSet};

/// Rule set for the Afirme SPEI template.
pub fn spei() -> RuleSet {
    RuleSet::new(vec![
        FieldRule::capture(
            "account_id",
            &[
                r"Cuenta origen\s*[A-Za-z0-9\s\-]+?\(\*\*\*\*(\d+)\)",
                r"Cuenta origen[^\(]*\(\*\*\*\*(\d+)\)",
                r"\(\*\*\*\*(\d+)\)",
            ],
        ),
        FieldRule::amount(
            "amount",
            &[
                r"Importe de traspaso\s*\$\s*([0-9,]+\.\d{2})\s*MXP",
                r"Importe.*\$\s*([0-9,]+\.\d{2})\s*MXP",
                r"\$\s*([0-9,]+\.\d{2})\s*MXP\.",
                r"Importe.*\$([0-9,]+\.\d{2})",
            ],
        ),
        FieldRule::capture(
            "reference",
            &[
                r"Referencia SPE\s*(\d+)",
                r"Referencia.*?(\d{9})",
                r"Referencia numérica\s*(\d+)",
            ],
        ),
        FieldRule::capture(
            "tracking_key",
            &[
                r"Clave de rastreo\s*(\d+)",
                r"Clave.*rastreo\s*(\d{25,30})",
                r"Exitosa\s*(\d+)",
            ],
        ),
        FieldRule::date(
            "date",
            &[
                r"Fecha:\s*(\d{2}/\d{2}/\d{2})",
                r"Día:\s*(\d{2}/\d{2}/\d{2})",
                r"Fecha.*?(\d{2}/\d{2}/\d{2})",
            ],
            DateFormat::DayMonthYear,
        ),
        FieldRule::capture(
            "beneficiary",
            &[
                r"Cuenta destino\s*([A-Za-z0-9\s\-]+?)\s*\(\*\*\*\*\d+\)",
                r"Cuenta destino\s*([^\(]+)",
                r"SEPSA COMISIONES[^\(]*\(\*\*\*\*(\d+)\)",
            ],
        )
        .collapsed()
        .strip_trailing(&[r"\s*-\s*\(\*\*\*\*\d+\)\s*-\s*[A-Z]+$", r"\s*-\s*$"]),
        FieldRule::capture(
            "concept",
            &[
                r"Concepto del pago\s*([A-Za-z0-9\s]+?)(?:Comisión|Referencia|$)",
                r"Concepto del pago\s*([^\n]+)",
                r"(PAGO DE SERVICIO)",
            ],
        ),
        FieldRule::capture(
            "status",
            &[r"(Exitosa)", r"(Fallida)", r"(Rechazada)", r"(Pendiente)"],
        ),
    ])
}
