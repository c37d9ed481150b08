//! Candidate collection: which rules fully match at a scan position.

use crate::base::Token;
use crate::catalog::{GrammarRule, RuleCatalog};

use super::evaluate::satisfies;
use super::grammar_match::GrammarMatch;

/// Every catalog rule whose steps all match starting at `position`.
///
/// Candidates come back in catalog order. Rules that would run past the end of
/// the sequence are skipped before any step is evaluated.
pub fn candidates_at<'t>(
    tokens: &'t [Token],
    position: usize,
    catalog: &RuleCatalog,
) -> Vec<GrammarMatch<'t>> {
    candidates(tokens, position, catalog.iter()).collect()
}

/// Lazily match `rules` at `position`, in the order given.
pub(crate) fn candidates<'t, 'r, I>(
    tokens: &'t [Token],
    position: usize,
    rules: I,
) -> impl Iterator<Item = GrammarMatch<'t>>
where
    I: IntoIterator<Item = &'r GrammarRule>,
{
    rules
        .into_iter()
        .filter_map(move |rule| match_rule_at(tokens, position, rule))
}

/// Match a single rule at `position`, stopping at the first failing step.
pub(crate) fn match_rule_at<'t>(
    tokens: &'t [Token],
    position: usize,
    rule: &GrammarRule,
) -> Option<GrammarMatch<'t>> {
    let end = position.checked_add(rule.steps.len())?;
    let window = tokens.get(position..end)?;
    rule.steps
        .iter()
        .zip(window)
        .all(|(step, token)| satisfies(token, step))
        .then(|| GrammarMatch::new(rule, position, window))
}
