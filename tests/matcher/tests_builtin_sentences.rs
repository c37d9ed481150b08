//! Real sentences against the bundled N5 catalog.

use std::collections::BTreeSet;

use bunpo::{Level, MatchOptions, Matcher, RuleCatalog, Segment, Token, find_matches, segment};
use once_cell::sync::Lazy;
use rstest::rstest;

use crate::helpers::match_assertions::{assert_spans, assert_well_formed};
use crate::helpers::token_fixtures::*;

static N5: Lazy<RuleCatalog> =
    Lazy::new(|| RuleCatalog::builtin().expect("builtin catalog is valid"));

#[rstest]
#[case::te_kudasai(tabete_kudasai(), &[("V-TE-KUDASAI", 0, 3)])]
#[case::existence(hon_ga_arimasu(), &[("NOUN-GA-ARIMASU", 0, 3)])]
#[case::formal_copula(gakusei_dewa_arimasen_deshita(), &[("COPULA-DEWA-ARIMASEN-DESHITA", 0, 8)])]
#[case::i_adjective(takaku_nakatta(), &[("I-ADJ-KUNAKATTA", 0, 3)])]
#[case::volitional(issho_ni_ikimashou(), &[("V-MASHOU", 2, 5)])]
fn test_builtin_sentence(#[case] tokens: Vec<Token>, #[case] expected: &[(&str, usize, usize)]) {
    let matches = find_matches(&tokens, &N5);
    assert_spans(&matches, expected);
    assert_well_formed(&tokens, &N5, &matches);
}

#[rstest]
#[case::masen_deshita(NANIMO_TABEMASEN_DESHITA, &[("V-MASEN-DESHITA", 2, 7)])]
#[case::mashita(KOOHII_WO_KAIMASHITA, &[("V-MASHITA", 2, 5)])]
#[case::masen(NIKU_WO_TABEMASEN, &[("V-MASEN", 2, 5)])]
#[case::mashou(ISSHO_NI_IKIMASHOU, &[("V-MASHOU", 2, 5)])]
#[case::masu(MAIASA_PAN_WO_TABEMASU, &[("V-MASU", 3, 5)])]
#[case::voiced_te_kudasai(HON_WO_YONDE_KUDASAI, &[("V-TE-KUDASAI", 2, 5)])]
#[case::voiced_te_imasu(IMA_OYOIDE_IMASU, &[("V-TE-IMASU", 1, 4)])]
#[case::purpose(EIGA_WO_MI_NI_IKU, &[("V-PURPOSE-NI-IKU", 2, 5)])]
#[case::tsumori(NIHON_E_IKU_TSUMORI_DESU, &[("V-TSUMORI", 2, 5)])]
#[case::te(MADO_WO_AKETE_NERU, &[("V-TE", 2, 4)])]
#[case::voiced_te_after_case_de(KOUEN_DE_ASONDE_KAETTA, &[("V-TE", 2, 4)])]
#[case::tai(MIZU_GA_NOMITAI, &[("V-TAI", 2, 4)])]
#[case::nai(KYOU_WA_IKANAI, &[("V-NAI", 2, 4)])]
#[case::kunakatta(EIGA_WA_OMOSHIROKUNAKATTA, &[("I-ADJ-KUNAKATTA", 2, 5)])]
#[case::katta(KINOU_WA_SAMUKATTA, &[("I-ADJ-KATTA", 2, 4)])]
#[case::kunai(KONO_HON_WA_TAKAKUNAI, &[("I-ADJ-KUNAI", 3, 5)])]
#[case::kute(YASUKUTE_OISHII, &[("I-ADJ-KUTE", 0, 2)])]
#[case::dewa_arimasen_deshita(
    KARE_WA_GAKUSEI_DEWA_ARIMASEN_DESHITA,
    &[("COPULA-DEWA-ARIMASEN-DESHITA", 2, 10)]
)]
#[case::ja_nakatta_desu(
    MUKASHI_WA_SHIZUKA_JA_NAKATTA_DESU,
    &[("COPULA-JA-NAKATTA-DESU", 2, 7)]
)]
#[case::deshita(KINOU_WA_AME_DESHITA, &[("COPULA-DESHITA", 2, 5)])]
#[case::na_adjective_predicate(KONO_HEYA_WA_KIREI_DESU, &[("NA-ADJ-PREDICATE", 3, 5)])]
#[case::na_adjective_modifier(KIREI_NA_HANA, &[("NA-ADJ-NOUN-MODIFIER", 0, 2)])]
#[case::na_adjective_both(
    KIREI_NA_HANA_GA_SUKI_DESU,
    &[("NA-ADJ-NOUN-MODIFIER", 0, 2), ("NA-ADJ-PREDICATE", 4, 6)]
)]
#[case::plain_noun_desu_is_not_na_adjective(GAKUSEI_DESU, &[])]
#[case::ga_arimasu(TSUKUE_NO_UE_NI_HON_GA_ARIMASU, &[("NOUN-GA-ARIMASU", 4, 7)])]
#[case::ga_imasu(NIWA_NI_NEKO_GA_IMASU, &[("NOUN-GA-IMASU", 2, 5)])]
#[case::node(AME_NA_NODE_IKIMASEN, &[("REASON-NODE", 2, 3), ("V-MASEN", 4, 7)])]
#[case::kara(ATSUI_KARA_MADO_WO_AKETA, &[("REASON-KARA", 1, 2)])]
#[case::case_particle_kara_is_not_a_reason(GAKKOU_KARA_KAERU, &[])]
#[case::nai_existence(OKANE_GA_NAI, &[("ARU-NAI", 2, 3)])]
fn test_builtin_ipadic_sentence(
    #[case] ipadic: &str,
    #[case] expected: &[(&str, usize, usize)],
) {
    let tokens = tokens_from_ipadic(ipadic);
    let matches = find_matches(&tokens, &N5);
    assert_spans(&matches, expected);
    assert_well_formed(&tokens, &N5, &matches);
}

#[test]
fn test_every_builtin_rule_matches_an_ipadic_sentence() {
    let mut unmatched: BTreeSet<&str> = N5.ids().map(|id| id.as_str()).collect();
    for sentence in N5_SENTENCES {
        let tokens = tokens_from_ipadic(sentence);
        for m in find_matches(&tokens, &N5) {
            unmatched.remove(m.rule_id.as_str());
        }
    }
    assert!(unmatched.is_empty(), "rules with no matching sentence: {unmatched:?}");
}

#[test]
fn test_voiced_te_without_subcategories() {
    let tokens = vec![
        tok("読ん", "動詞", "読む"),
        tok("で", "助詞", "で"),
        tok("ください", "動詞", "くださる"),
    ];
    assert_spans(&find_matches(&tokens, &N5), &[("V-TE-KUDASAI", 0, 3)]);
}

#[test]
fn test_ipadic_fixture_fields() {
    let tokens = tokens_from_ipadic(KIREI_NA_HANA);
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[0].pos_detail_1, "形容動詞語幹");
    assert_eq!(tokens[1].basic_form, "だ");
    assert_eq!(tokens[1].conjugated_form, "体言接続");
    assert_eq!(tokens[2].pronunciation, "ハナ");
}

#[test]
fn test_analyzer_json_sentence() {
    let tokens = tokens_from_json(TABEMASEN_DESHITA_JSON);
    assert_eq!(tokens.len(), 10);
    assert_eq!(tokens[5].conjugated_type, "特殊・マス");

    let matches = find_matches(&tokens, &N5);
    assert_spans(&matches, &[("V-MASEN-DESHITA", 4, 9)]);
    assert_eq!(matches[0].surface(), "食べませんでした");

    let rule = matches[0].rule(&N5).unwrap();
    assert_eq!(rule.note.structure, "Verb Stem + ませんでした");
    assert_eq!(rule.level(), Level::N5);
}

#[test]
fn test_analyzer_json_missing_fields_default_to_empty() {
    let tokens = tokens_from_json(r#"[ { "surface_form": "ね", "pos": "助詞" } ]"#);
    assert_eq!(tokens[0].basic_form, "");
    assert!(find_matches(&tokens, &N5).is_empty());
}

#[test]
fn test_segments_for_rendering() {
    let tokens = tokens_from_json(TABEMASEN_DESHITA_JSON);
    let matches = find_matches(&tokens, &N5);
    let segments = segment(&tokens, &matches);

    let words: Vec<String> = segments.iter().map(Segment::surface).collect();
    assert_eq!(words, vec!["昨日", "は", "何", "も", "食べませんでした", "。"]);
    assert!(matches!(segments[4], Segment::Grammar(m) if m.rule_id == "V-MASEN-DESHITA"));
}

#[test]
fn test_te_form_alone_when_nothing_follows() {
    let tokens = tabete_kudasai()[..2].to_vec();
    assert_spans(&find_matches(&tokens, &N5), &[("V-TE", 0, 2)]);
}

#[test]
fn test_excluding_a_rule_exposes_the_shorter_one() {
    let matcher = Matcher::new(&N5).with_options(MatchOptions::new().exclude("V-TE-KUDASAI"));
    assert_spans(&matcher.find(&tabete_kudasai()), &[("V-TE", 0, 2)]);
}

#[test]
fn test_n5_level_keeps_whole_builtin_catalog() {
    let matcher = Matcher::new(&N5).with_options(MatchOptions::new().with_max_level(Level::N5));
    assert_eq!(matcher.rules().len(), N5.len());
}

#[test]
fn test_batch_over_builtin_sentences() {
    let sentences = vec![
        tabete_kudasai(),
        hon_ga_arimasu(),
        takaku_nakatta(),
        tokens_from_json(TABEMASEN_DESHITA_JSON),
    ];
    let matcher = Matcher::new(&N5);

    let ids: Vec<Vec<String>> = matcher
        .find_batch(&sentences)
        .iter()
        .map(|matches| matches.iter().map(|m| m.rule_id.to_string()).collect())
        .collect();
    assert_eq!(
        ids,
        vec![
            vec!["V-TE-KUDASAI"],
            vec!["NOUN-GA-ARIMASU"],
            vec!["I-ADJ-KUNAKATTA"],
            vec!["V-MASEN-DESHITA"],
        ]
    );
}
