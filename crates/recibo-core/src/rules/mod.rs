//! Field rule framework: declared, auditable extraction rules per template.
//!
//! Every institution's extractor is a plain list of [`FieldRule`]s over the
//! shared ordered-pattern matcher: data, not a type hierarchy. Rules are
//! evaluated independently; no rule may depend on another rule's result.

pub mod amounts;
pub mod dates;
pub mod matcher;

pub use amounts::parse_amount;
pub use dates::{canonicalize_date, DateFormat};
pub use matcher::{compile_patterns, first_match};

use std::collections::BTreeMap;

use regex::Regex;
use tracing::debug;

use crate::models::receipt::FieldValue;

/// How a resolved raw value becomes a field value.
#[derive(Debug, Clone)]
enum PostProcess {
    /// Trimmed capture, unchanged.
    Verbatim,
    /// Text cleanup: whitespace collapsing and trailing-artifact stripping.
    Text {
        collapse_whitespace: bool,
        trailing: Vec<Regex>,
    },
    /// Money value with two fractional digits.
    Amount,
    /// Date reassembled as `DD/MM/YYYY`.
    Date(DateFormat),
}

/// What a rule matches on.
#[derive(Debug, Clone)]
enum RuleKind {
    /// Ordered candidate patterns; the first non-empty capture wins.
    Capture(Vec<Regex>),
    /// Fixed label emitted when any trigger matches. Used where a template
    /// always implies one known value.
    Constant {
        triggers: Vec<Regex>,
        value: &'static str,
    },
}

/// A named extraction rule producing at most one value per invocation.
#[derive(Debug, Clone)]
pub struct FieldRule {
    name: &'static str,
    kind: RuleKind,
    post: PostProcess,
}

impl FieldRule {
    /// Capture rule returning the matched substring as trimmed text.
    pub fn capture(name: &'static str, patterns: &[&str]) -> Self {
        Self {
            name,
            kind: RuleKind::Capture(compile_patterns(patterns)),
            post: PostProcess::Verbatim,
        }
    }

    /// Capture rule parsed as a money amount.
    pub fn amount(name: &'static str, patterns: &[&str]) -> Self {
        Self {
            name,
            kind: RuleKind::Capture(compile_patterns(patterns)),
            post: PostProcess::Amount,
        }
    }

    /// Capture rule canonicalized as a `DD/MM/YYYY` date.
    pub fn date(name: &'static str, patterns: &[&str], format: DateFormat) -> Self {
        Self {
            name,
            kind: RuleKind::Capture(compile_patterns(patterns)),
            post: PostProcess::Date(format),
        }
    }

    /// Constant rule emitting `value` when any trigger matches.
    ///
    /// An empty trigger pattern (`""`) matches every text and makes the
    /// label unconditional for the template.
    pub fn constant(name: &'static str, triggers: &[&str], value: &'static str) -> Self {
        Self {
            name,
            kind: RuleKind::Constant {
                triggers: compile_patterns(triggers),
                value,
            },
            post: PostProcess::Verbatim,
        }
    }

    /// Collapse internal whitespace runs in the resolved text to single
    /// spaces.
    pub fn collapsed(mut self) -> Self {
        let trailing = match self.post {
            PostProcess::Text { trailing, .. } => trailing,
            _ => Vec::new(),
        };
        self.post = PostProcess::Text {
            collapse_whitespace: true,
            trailing,
        };
        self
    }

    /// Strip trailing template artifacts matching any of `patterns`: label
    /// fragments bleeding in from the next field when OCR merges lines.
    pub fn strip_trailing(mut self, patterns: &[&str]) -> Self {
        let collapse = matches!(
            self.post,
            PostProcess::Text {
                collapse_whitespace: true,
                ..
            }
        );
        self.post = PostProcess::Text {
            collapse_whitespace: collapse,
            trailing: compile_patterns(patterns),
        };
        self
    }

    /// The field name this rule resolves into.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Evaluate the rule against normalized text.
    pub fn apply(&self, text: &str) -> Option<FieldValue> {
        match &self.kind {
            RuleKind::Capture(patterns) => {
                let raw = first_match(text, patterns)?;
                self.post_process(raw)
            }
            RuleKind::Constant { triggers, value } => triggers
                .iter()
                .any(|trigger| trigger.is_match(text))
                .then(|| FieldValue::Text((*value).to_string())),
        }
    }

    fn post_process(&self, raw: String) -> Option<FieldValue> {
        match &self.post {
            PostProcess::Verbatim => Some(FieldValue::Text(raw)),
            PostProcess::Text {
                collapse_whitespace,
                trailing,
            } => {
                let mut value = raw;
                if *collapse_whitespace {
                    value = value.split_whitespace().collect::<Vec<_>>().join(" ");
                }
                for artifact in trailing {
                    value = artifact.replace(&value, "").trim().to_string();
                }
                if value.is_empty() {
                    return None;
                }
                Some(FieldValue::Text(value))
            }
            PostProcess::Amount => match parse_amount(&raw) {
                Some(amount) => Some(FieldValue::Amount(amount)),
                None => {
                    debug!(field = self.name, value = %raw, "captured amount failed to parse");
                    None
                }
            },
            PostProcess::Date(format) => {
                Some(FieldValue::Text(canonicalize_date(&raw, *format)))
            }
        }
    }
}

/// An institution's declared, ordered rule set.
#[derive(Debug, Clone)]
pub struct RuleSet {
    rules: Vec<FieldRule>,
}

impl RuleSet {
    pub fn new(rules: Vec<FieldRule>) -> Self {
        Self { rules }
    }

    /// The declared rules, in evaluation order.
    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    /// Run every rule independently against the same normalized text.
    ///
    /// Fields that resolve nothing are omitted from the map; a bad parse in
    /// one rule never interrupts the others.
    pub fn extract(&self, text: &str) -> BTreeMap<String, FieldValue> {
        let mut fields = BTreeMap::new();
        for rule in &self.rules {
            if let Some(value) = rule.apply(text) {
                fields.insert(rule.name.to_string(), value);
            }
        }
        fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_capture_order_is_declaration_order() {
        let rule = FieldRule::capture(
            "reference",
            &[r"Referencia SPE\s*(\d+)", r"Referencia.*?(\d{9})"],
        );
        let value = rule.apply("Referencia SPE 42 y luego 123456789");
        assert_eq!(value, Some(FieldValue::Text("42".to_string())));
    }

    #[test]
    fn test_amount_parse_failure_is_absent() {
        let rule = FieldRule::amount("amount", &[r"Importe\s*(\S+)"]);
        assert_eq!(rule.apply("Importe 12.34.56"), None);
    }

    #[test]
    fn test_amount_resolves_decimal() {
        let rule = FieldRule::amount("amount", &[r"Importe\s*\$\s*([\d,]+\.\d{2})"]);
        assert_eq!(
            rule.apply("Importe $1,200.00 MXP"),
            Some(FieldValue::Amount(Decimal::from_str("1200.00").unwrap()))
        );
    }

    #[test]
    fn test_constant_fires_on_trigger() {
        let rule = FieldRule::constant("concept", &[r"PAGO DE SERVICIO"], "PAGO DE SERVICIO");
        assert_eq!(
            rule.apply("recibo PAGO DE SERVICIO exitoso"),
            Some(FieldValue::Text("PAGO DE SERVICIO".to_string()))
        );
        assert_eq!(rule.apply("otra cosa"), None);
    }

    #[test]
    fn test_unconditional_constant() {
        let rule = FieldRule::constant("operation_type", &[""], "third_party");
        assert_eq!(
            rule.apply("cualquier texto"),
            Some(FieldValue::Text("third_party".to_string()))
        );
    }

    #[test]
    fn test_collapsed_and_trailing_strip() {
        let rule = FieldRule::capture(
            "beneficiary",
            &[r"Cuenta destino\s*([^\(]+)"],
        )
        .collapsed()
        .strip_trailing(&[r"\s*-\s*$"]);

        let value = rule.apply("Cuenta destino SEPSA   COMISIONES - ");
        assert_eq!(value, Some(FieldValue::Text("SEPSA COMISIONES".to_string())));
    }

    #[test]
    fn test_ruleset_omits_unresolved_fields() {
        let set = RuleSet::new(vec![
            FieldRule::capture("reference", &[r"Referencia:\s*(\d+)"]),
            FieldRule::capture("tracking_key", &[r"Clave de Rastreo:\s*(\w+)"]),
        ]);

        let fields = set.extract("Referencia: 555");
        assert_eq!(fields.len(), 1);
        assert!(fields.contains_key("reference"));
        assert!(!fields.contains_key("tracking_key"));
    }

    #[test]
    fn test_rules_are_independent() {
        let set = RuleSet::new(vec![
            FieldRule::amount("amount", &[r"Importe\s*(\S+)"]),
            FieldRule::capture("status", &[r"(Exitosa)"]),
        ]);

        // A bad amount capture must not block the status rule.
        let fields = set.extract("Importe garbage... Exitosa");
        assert!(!fields.contains_key("amount"));
        assert_eq!(
            fields.get("status"),
            Some(&FieldValue::Text("Exitosa".to_string()))
        );
    }
}
