//! Longest-match resolution over a token sequence.
//!
//! ```text
//! i = 0
//! while i < len:
//!     candidates(i) ── none ──► i += 1              (token stays unmatched)
//!          │
//!          └─ some ──► longest (earliest declared on ties) ──► commit, i = end
//! ```
//!
//! Constructions often share a prefix with shorter ones (`V-MASEN` starts like
//! `V-MASU`'s stem, `V-TE-KUDASAI` starts with `V-TE`), so every rule is
//! evaluated at a position before anything is committed.

use crate::base::Token;
use crate::catalog::{GrammarRule, RuleCatalog};

use super::candidates::candidates;
use super::grammar_match::GrammarMatch;

/// Find the non-overlapping grammar matches of a sentence.
///
/// Matches are ordered by start position and never overlap. Tokens not
/// covered by any match are simply absent from the result.
pub fn find_matches<'t>(tokens: &'t [Token], catalog: &RuleCatalog) -> Vec<GrammarMatch<'t>> {
    resolve(tokens, catalog)
}

/// Run the longest-match scan over `rules`, which must be in priority order.
pub(crate) fn resolve<'t, 'r, R>(tokens: &'t [Token], rules: R) -> Vec<GrammarMatch<'t>>
where
    R: IntoIterator<Item = &'r GrammarRule> + Clone,
{
    let mut matches = Vec::new();
    let mut cursor = 0;

    while cursor < tokens.len() {
        match longest(candidates(tokens, cursor, rules.clone())) {
            Some(best) => {
                tracing::trace!(
                    "committed '{}' at {}..{}",
                    best.rule_id,
                    best.start(),
                    best.end()
                );
                cursor = best.end();
                matches.push(best);
            }
            None => cursor += 1,
        }
    }

    matches
}

/// Pick the candidate covering the most tokens.
///
/// Only a strictly longer candidate displaces the current best, so among equal
/// lengths the first one seen (the earliest declared rule) is kept.
pub(crate) fn longest<'t>(
    candidates: impl IntoIterator<Item = GrammarMatch<'t>>,
) -> Option<GrammarMatch<'t>> {
    candidates
        .into_iter()
        .reduce(|best, candidate| if candidate.len() > best.len() { candidate } else { best })
}
