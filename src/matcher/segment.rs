//! Sentence segmentation for display.
//!
//! Renderers show matched constructions as groups and everything else token by
//! token. [`segment`] produces that sequence so every token appears exactly
//! once, in sentence order.

use crate::base::{Token, TokenSpan};

use super::grammar_match::GrammarMatch;

/// One displayable unit of a sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'m, 't> {
    /// A matched construction.
    Grammar(&'m GrammarMatch<'t>),
    /// A token no rule covers.
    Word { index: usize, token: &'t Token },
}

impl Segment<'_, '_> {
    pub fn span(&self) -> TokenSpan {
        match self {
            Segment::Grammar(m) => m.span,
            Segment::Word { index, .. } => TokenSpan::at(*index, 1),
        }
    }

    /// Text of the segment as it appears in the sentence.
    pub fn surface(&self) -> String {
        match self {
            Segment::Grammar(m) => m.surface(),
            Segment::Word { token, .. } => token.surface_form.to_string(),
        }
    }

    pub fn is_grammar(&self) -> bool {
        matches!(self, Segment::Grammar(_))
    }
}

/// Interleave `matches` with the unmatched tokens between them.
///
/// `matches` should be ordered by start, as [`find_matches`] returns them.
/// A match starting inside an earlier committed one is ignored, so the output
/// never covers a token twice even for overlapping input.
///
/// [`find_matches`]: super::find_matches
pub fn segment<'m, 't>(
    tokens: &'t [Token],
    matches: &'m [GrammarMatch<'t>],
) -> Vec<Segment<'m, 't>> {
    let mut segments = Vec::with_capacity(tokens.len());
    let mut pending = matches.iter().peekable();
    let mut index = 0;

    while index < tokens.len() {
        while pending.next_if(|m| m.start() < index).is_some() {}

        match pending.next_if(|m| m.start() == index && m.end() <= tokens.len()) {
            Some(m) => {
                segments.push(Segment::Grammar(m));
                index = m.end();
            }
            None => {
                segments.push(Segment::Word {
                    index,
                    token: &tokens[index],
                });
                index += 1;
            }
        }
    }

    segments
}
