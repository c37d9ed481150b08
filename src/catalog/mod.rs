//! Rule catalog: grammar rule types, loading and validation.
//!
//! ## Key Types
//!
//! - [`GrammarRule`]: id, token steps and learner note
//! - [`RuleStep`]: constraint on one token
//! - [`RuleCatalog`]: validated rules in priority order
//! - [`CatalogError`]: why a catalog was rejected
//!
//! ## Loading
//!
//! ```text
//! in-code rules ─────────────────────────┐
//! JSON / YAML ── definition::parse ──────┤
//!                                        ▼
//!                              RuleCatalog::load  (validate, keep order)
//! ```

mod builtin;
pub mod definition;
mod error;
mod rule;
mod store;

pub use builtin::n5_rules;
pub use definition::DefinitionFormat;
pub use error::CatalogError;
pub use rule::{FieldConstraint, GrammarNote, GrammarRule, Level, RuleStep};
pub use store::RuleCatalog;
