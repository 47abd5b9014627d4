//! Ordered-signature classification of receipt text.

use lazy_static::lazy_static;
use regex::Regex;
use tracing::debug;

use crate::banks;
use crate::models::receipt::{Institution, TransferKind};
use crate::rules::{compile_patterns, RuleSet};

/// One entry of the classification table: an institution/template pair,
/// the trigger patterns that select it, and the rule set it binds.
#[derive(Debug, Clone)]
pub struct Signature {
    institution: Institution,
    kind: TransferKind,
    triggers: Vec<Regex>,
    rules: RuleSet,
}

impl Signature {
    pub fn new(
        institution: Institution,
        kind: TransferKind,
        triggers: &[&str],
        rules: RuleSet,
    ) -> Self {
        Self {
            institution,
            kind,
            triggers: compile_patterns(triggers),
            rules,
        }
    }

    pub fn institution(&self) -> Institution {
        self.institution
    }

    pub fn kind(&self) -> TransferKind {
        self.kind
    }

    /// The rule set bound to this template.
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Whether any trigger matches anywhere in the text. A signature with
    /// no triggers never matches.
    pub fn matches(&self, text: &str) -> bool {
        self.triggers.iter().any(|trigger| trigger.is_match(text))
    }
}

/// The ordered, immutable signature table.
///
/// Classification is a pure function of the text and this table; there is
/// no scoring or multi-candidate resolution. Order is the sole
/// disambiguation mechanism, so distinctive triggers must be registered
/// before generic ones that could also fire on another institution's text.
#[derive(Debug)]
pub struct Registry {
    signatures: Vec<Signature>,
}

impl Registry {
    pub fn new(signatures: Vec<Signature>) -> Self {
        Self { signatures }
    }

    /// The process-wide curated table, built once and shared by reference.
    pub fn shared() -> &'static Registry {
        &REGISTRY
    }

    /// The registered signatures, in classification order.
    pub fn signatures(&self) -> &[Signature] {
        &self.signatures
    }

    /// Select the first signature with a trigger matching `text`.
    pub fn classify(&self, text: &str) -> Option<&Signature> {
        for signature in &self.signatures {
            if signature.matches(text) {
                debug!(
                    institution = %signature.institution(),
                    kind = %signature.kind(),
                    "signature matched"
                );
                return Some(signature);
            }
        }
        None
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new(curated_signatures())
    }
}

lazy_static! {
    static ref REGISTRY: Registry = Registry::default();
}

/// The hand-curated signature table.
///
/// Several templates share vocabulary (`Clave de Rastreo`, `SPEI`), so a
/// template is only selectable through a phrase distinctive enough not to
/// fire on another institution's text. Entries with an empty trigger list
/// are registered-but-dormant placeholders: the rule set exists, but no
/// distinctive phrase has been curated yet, and the entry stays
/// unreachable rather than guessing one.
fn curated_signatures() -> Vec<Signature> {
    vec![
        Signature::new(
            Institution::Afirme,
            TransferKind::Spei,
            &[r"el banco de hoy", r"banca afirme"],
            banks::afirme::spei(),
        ),
        Signature::new(
            Institution::Banbajio,
            TransferKind::Spei,
            &[],
            banks::banbajio::spei(),
        ),
        Signature::new(
            Institution::Banorte,
            TransferKind::Spei,
            &[],
            banks::banorte::spei(),
        ),
        Signature::new(
            Institution::Banorte,
            TransferKind::ThirdParty,
            &[],
            banks::banorte::third_party(),
        ),
        Signature::new(
            Institution::Banregio,
            TransferKind::Spei,
            &[],
            banks::banregio::spei(),
        ),
        Signature::new(
            Institution::Banregio,
            TransferKind::ThirdParty,
            &[],
            banks::banregio::third_party(),
        ),
        Signature::new(
            Institution::Bbva,
            TransferKind::Spei,
            &[r"BNET[0-9A-Za-z]{20}"],
            banks::bbva::spei(),
        ),
        Signature::new(
            Institution::Bbva,
            TransferKind::ThirdParty,
            &[r"transferencia a terceros"],
            banks::bbva::third_party(),
        ),
        Signature::new(
            Institution::Hsbc,
            TransferKind::Spei,
            &[],
            banks::hsbc::spei(),
        ),
        Signature::new(
            Institution::Santander,
            TransferKind::Spei,
            &[],
            banks::santander::spei(),
        ),
        Signature::new(
            Institution::Santander,
            TransferKind::ThirdParty,
            &[],
            banks::santander::third_party(),
        ),
        Signature::new(
            Institution::Scotiabank,
            TransferKind::Spei,
            &[],
            banks::scotiabank::spei(),
        ),
    ]
}
