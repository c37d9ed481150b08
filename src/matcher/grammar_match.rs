use serde::Serialize;
use smol_str::SmolStr;

use crate::base::{Token, TokenSpan};
use crate::catalog::{GrammarRule, RuleCatalog};

/// A committed span of the token sequence attributed to one rule.
///
/// The matched tokens are borrowed from the caller's sequence, so
/// `tokens.len() == span.len()` always holds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GrammarMatch<'t> {
    pub rule_id: SmolStr,
    pub span: TokenSpan,
    pub tokens: &'t [Token],
}

impl<'t> GrammarMatch<'t> {
    pub(crate) fn new(rule: &GrammarRule, start: usize, tokens: &'t [Token]) -> Self {
        Self {
            rule_id: rule.id.clone(),
            span: TokenSpan::at(start, tokens.len()),
            tokens,
        }
    }

    pub fn start(&self) -> usize {
        self.span.start()
    }

    pub fn end(&self) -> usize {
        self.span.end()
    }

    /// Number of matched tokens.
    pub fn len(&self) -> usize {
        self.span.len()
    }

    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    /// The matched text as it appears in the sentence.
    pub fn surface(&self) -> String {
        self.tokens.iter().map(|t| t.surface_form.as_str()).collect()
    }

    /// The rule this match belongs to.
    pub fn rule<'c>(&self, catalog: &'c RuleCatalog) -> Option<&'c GrammarRule> {
        catalog.lookup(&self.rule_id)
    }
}
