//! # bunpo
//!
//! Grammar-pattern matching over morphologically analyzed Japanese sentences.
//!
//! Given the tokens an external analyzer (kuromoji/IPADIC style) produced for a
//! sentence, bunpo finds the multi-token constructions it contains (polite
//! verb endings, adjective conjugations, copula forms, particle pairs) and
//! returns them as ordered, non-overlapping spans. At each position the
//! longest matching rule wins; ties go to the rule declared first.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! matcher   → constraint evaluation, candidates, longest-match resolution
//!   ↓
//! catalog   → GrammarRule/RuleStep, validated RuleCatalog, JSON/YAML definitions
//!   ↓
//! base      → Token, TokenSpan
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! use bunpo::{RuleCatalog, find_matches};
//!
//! let catalog = RuleCatalog::builtin()?;
//! let tokens: Vec<bunpo::Token> = serde_json::from_str(analyzer_output)?;
//! for m in find_matches(&tokens, &catalog) {
//!     println!("{} {}..{} {}", m.rule_id, m.start(), m.end(), m.surface());
//! }
//! ```

// ============================================================================
// MODULES (dependency order: base → catalog → matcher)
// ============================================================================

/// Foundation types: Token, TokenSpan
pub mod base;

/// Rule types, catalog loading and validation
pub mod catalog;

/// Constraint evaluation and longest-match resolution
pub mod matcher;

// Re-export the common entry points
pub use base::{Token, TokenSpan};
pub use catalog::{
    CatalogError, FieldConstraint, GrammarNote, GrammarRule, Level, RuleCatalog, RuleStep,
};
pub use matcher::{
    GrammarMatch, MatchOptions, Matcher, Segment, all_occurrences, candidates_at, find_matches,
    satisfies, segment,
};
