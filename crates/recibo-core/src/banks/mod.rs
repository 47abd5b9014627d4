//! Per-institution rule sets.
//!
//! One module per issuing institution; each declares rule sets for the
//! receipt templates that institution emits. Rule sets are plain data over
//! the shared matcher, so adding an institution means adding a module and
//! registering its signature. The classifier itself never changes.

pub mod afirme;
pub mod banbajio;
pub mod banorte;
pub mod banregio;
pub mod bbva;
pub mod hsbc;
pub mod santander;
pub mod scotiabank;
