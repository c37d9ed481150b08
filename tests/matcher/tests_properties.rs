//! Properties that hold for every sentence and every valid catalog.

use bunpo::{
    GrammarRule, Matcher, RuleCatalog, RuleStep, Token, all_occurrences, candidates_at,
    find_matches, segment,
};
use proptest::prelude::*;

use crate::helpers::match_assertions::{assert_well_formed, spans};
use crate::helpers::token_fixtures::tok;

const VOCAB: &[(&str, &str, &str)] = &[
    ("食べ", "動詞", "食べる"),
    ("ませ", "助動詞", "ます"),
    ("ん", "助動詞", "ん"),
    ("ます", "助動詞", "ます"),
    ("て", "助詞", "て"),
    ("本", "名詞", "本"),
    ("が", "助詞", "が"),
];

fn token_strategy() -> impl Strategy<Value = Token> {
    prop::sample::select(VOCAB).prop_map(|(surface, pos, basic)| tok(surface, pos, basic))
}

fn sentence_strategy() -> impl Strategy<Value = Vec<Token>> {
    prop::collection::vec(token_strategy(), 0..14)
}

fn step_strategy() -> impl Strategy<Value = RuleStep> {
    prop_oneof![
        Just(RuleStep::any()),
        prop::sample::select(vec!["動詞", "助動詞", "助詞", "名詞"])
            .prop_map(|pos| RuleStep::any().pos(pos)),
        prop::sample::select(vec!["ます", "ん", "て", "が", "食べる"])
            .prop_map(|basic| RuleStep::any().basic(basic)),
        prop::sample::select(vec!["ませ", "ます"])
            .prop_map(|surface| RuleStep::any().surface(surface)),
    ]
}

fn catalog_strategy() -> impl Strategy<Value = RuleCatalog> {
    prop::collection::vec(prop::collection::vec(step_strategy(), 1..5), 0..7).prop_map(|rules| {
        let rules = rules
            .into_iter()
            .enumerate()
            .map(|(i, steps)| GrammarRule::new(format!("R{i}"), steps));
        RuleCatalog::load(rules).expect("generated rules are valid")
    })
}

proptest! {
    #[test]
    fn prop_matches_are_ordered_and_disjoint(
        tokens in sentence_strategy(),
        catalog in catalog_strategy(),
    ) {
        let matches = find_matches(&tokens, &catalog);
        assert_well_formed(&tokens, &catalog, &matches);
    }

    #[test]
    fn prop_matching_is_idempotent(tokens in sentence_strategy(), catalog in catalog_strategy()) {
        let first = find_matches(&tokens, &catalog);
        let second = find_matches(&tokens, &catalog);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_committed_match_is_longest_then_earliest(
        tokens in sentence_strategy(),
        catalog in catalog_strategy(),
    ) {
        for m in find_matches(&tokens, &catalog) {
            let candidates = candidates_at(&tokens, m.start(), &catalog);
            let longest = candidates.iter().map(|c| c.len()).max().unwrap_or(0);
            prop_assert_eq!(m.len(), longest);

            let chosen = candidates.iter().find(|c| c.len() == longest).map(|c| c.rule_id.clone());
            prop_assert_eq!(chosen, Some(m.rule_id.clone()));
        }
    }

    #[test]
    fn prop_uncovered_positions_have_no_candidates(
        tokens in sentence_strategy(),
        catalog in catalog_strategy(),
    ) {
        let matches = find_matches(&tokens, &catalog);
        for position in 0..tokens.len() {
            if matches.iter().any(|m| m.span.contains(position)) {
                continue;
            }
            prop_assert!(candidates_at(&tokens, position, &catalog).is_empty());
        }
    }

    #[test]
    fn prop_committed_matches_are_occurrences(
        tokens in sentence_strategy(),
        catalog in catalog_strategy(),
    ) {
        let occurrences = spans(&all_occurrences(&tokens, &catalog));
        for m in spans(&find_matches(&tokens, &catalog)) {
            prop_assert!(occurrences.contains(&m));
        }
    }

    #[test]
    fn prop_segments_cover_every_token_once(
        tokens in sentence_strategy(),
        catalog in catalog_strategy(),
    ) {
        let matches = find_matches(&tokens, &catalog);
        let segments = segment(&tokens, &matches);

        let mut next = 0;
        for s in &segments {
            prop_assert_eq!(s.span().start(), next);
            next = s.span().end();
        }
        prop_assert_eq!(next, tokens.len());

        let text: String = segments.iter().map(|s| s.surface()).collect();
        let expected: String = tokens.iter().map(|t| t.surface_form.as_str()).collect();
        prop_assert_eq!(text, expected);
    }

    #[test]
    fn prop_batch_equals_sequential(
        sentences in prop::collection::vec(sentence_strategy(), 0..6),
        catalog in catalog_strategy(),
    ) {
        let matcher = Matcher::new(&catalog);
        let batch = matcher.find_batch(&sentences);
        prop_assert_eq!(batch.len(), sentences.len());
        for (sentence, result) in sentences.iter().zip(batch) {
            prop_assert_eq!(result, find_matches(sentence, &catalog));
        }
    }
}
