//! Unresolved scan: every rule match at every position.

use crate::base::Token;
use crate::catalog::{GrammarRule, RuleCatalog};

use super::candidates::candidates;
use super::grammar_match::GrammarMatch;

/// Every full match of every rule, overlaps included.
///
/// Ordered by start position, then catalog order. Unlike [`find_matches`],
/// nothing is committed or skipped, which makes this the view to use when
/// checking how catalog rules interact on a sentence.
///
/// [`find_matches`]: super::find_matches
pub fn all_occurrences<'t>(tokens: &'t [Token], catalog: &RuleCatalog) -> Vec<GrammarMatch<'t>> {
    scan(tokens, catalog)
}

pub(crate) fn scan<'t, 'r, R>(tokens: &'t [Token], rules: R) -> Vec<GrammarMatch<'t>>
where
    R: IntoIterator<Item = &'r GrammarRule> + Clone,
{
    (0..tokens.len())
        .flat_map(|position| candidates(tokens, position, rules.clone()))
        .collect()
}
