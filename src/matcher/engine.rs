//! Configured matcher over a catalog.

use rayon::prelude::*;

use crate::base::Token;
use crate::catalog::{GrammarRule, RuleCatalog};

use super::candidates::candidates;
use super::grammar_match::GrammarMatch;
use super::occurrences::scan;
use super::options::MatchOptions;
use super::resolve::resolve;

/// A catalog paired with [`MatchOptions`].
///
/// The set of active rules is computed once, in catalog order, so repeated
/// calls only pay for the scan. A `Matcher` holds no mutable state and can be
/// shared across threads.
#[derive(Debug, Clone)]
pub struct Matcher<'c> {
    catalog: &'c RuleCatalog,
    options: MatchOptions,
    active: Vec<&'c GrammarRule>,
}

impl<'c> Matcher<'c> {
    /// Match with every rule of `catalog`.
    pub fn new(catalog: &'c RuleCatalog) -> Self {
        Self {
            catalog,
            options: MatchOptions::default(),
            active: catalog.iter().collect(),
        }
    }

    /// Restrict the active rules.
    pub fn with_options(mut self, options: MatchOptions) -> Self {
        self.active = self
            .catalog
            .iter()
            .filter(|rule| options.allows(rule))
            .collect();
        tracing::debug!(
            "matcher uses {} of {} rule(s)",
            self.active.len(),
            self.catalog.len()
        );
        self.options = options;
        self
    }

    pub fn catalog(&self) -> &'c RuleCatalog {
        self.catalog
    }

    pub fn options(&self) -> &MatchOptions {
        &self.options
    }

    /// Active rules in priority order.
    pub fn rules(&self) -> &[&'c GrammarRule] {
        &self.active
    }

    /// Longest-match resolution over the active rules.
    pub fn find<'t>(&self, tokens: &'t [Token]) -> Vec<GrammarMatch<'t>> {
        resolve(tokens, self.active.iter().copied())
    }

    /// Active rules fully matching at `position`, in priority order.
    pub fn candidates_at<'t>(&self, tokens: &'t [Token], position: usize) -> Vec<GrammarMatch<'t>> {
        candidates(tokens, position, self.active.iter().copied()).collect()
    }

    /// Every match of every active rule, overlaps included.
    pub fn occurrences<'t>(&self, tokens: &'t [Token]) -> Vec<GrammarMatch<'t>> {
        scan(tokens, self.active.iter().copied())
    }

    /// Match independent sentences in parallel.
    ///
    /// Results are in the order of `sentences`, and each equals what
    /// [`find`](Self::find) returns for that sentence.
    pub fn find_batch<'t, S>(&self, sentences: &'t [S]) -> Vec<Vec<GrammarMatch<'t>>>
    where
        S: AsRef<[Token]> + Sync,
    {
        sentences
            .par_iter()
            .map(|sentence| self.find(sentence.as_ref()))
            .collect()
    }
}
