//! The bundled JLPT N5 rule set.
//!
//! Step values follow IPADIC tagging as produced by kuromoji: polite `ます`
//! appears as `ます`/`まし`/`ませ`/`ましょ` with basic form `ます`, the polite
//! copula `でし` has basic form `です`, the て-form particle is voiced to `で`
//! after some verbs, and attributive `な` is the copula `だ`. な-adjective
//! stems are tagged `名詞` with subcategory `形容動詞語幹`; copula rules also
//! accept a `形容動詞` tag for dictionaries that use one.
//!
//! Rules are listed from most specific to most general within each group.

use super::error::CatalogError;
use super::rule::{GrammarNote, GrammarRule, Level, RuleStep};
use super::store::RuleCatalog;

const VERB: &str = "動詞";
const PARTICLE: &str = "助詞";
const AUX: &str = "助動詞";
const NOUN: &str = "名詞";
const I_ADJ: &str = "形容詞";
const NA_ADJ: &str = "形容動詞";
const NA_ADJ_STEM: &str = "形容動詞語幹";
const CONJUNCTIVE: &str = "接続助詞";
const INDEPENDENT: &str = "自立";

fn verb() -> RuleStep {
    RuleStep::any().pos(VERB)
}

fn basic(form: &str) -> RuleStep {
    RuleStep::any().basic(form)
}

fn surface(form: &str) -> RuleStep {
    RuleStep::any().surface(form)
}

fn form(basic_form: &str, surface_form: &str) -> RuleStep {
    RuleStep::any().basic(basic_form).surface(surface_form)
}

/// て or its voiced form で (読んで, 泳いで).
fn te() -> RuleStep {
    RuleStep::any().pos(PARTICLE).basic_any_of(["て", "で"])
}

fn nominal() -> RuleStep {
    RuleStep::any().pos_any_of([NOUN, NA_ADJ])
}

fn na_adjective() -> RuleStep {
    RuleStep::any().pos(NOUN).pos_detail(NA_ADJ_STEM)
}

fn rule(id: &str, steps: Vec<RuleStep>, note: GrammarNote) -> GrammarRule {
    GrammarRule::new(id, steps).with_note(note.with_level(Level::N5))
}

impl RuleCatalog {
    /// The bundled N5 catalog.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::load(n5_rules())
    }
}

/// Rule definitions of the bundled N5 catalog, in priority order.
pub fn n5_rules() -> Vec<GrammarRule> {
    let mut rules = Vec::new();
    rules.extend(polite_verb_rules());
    rules.extend(verb_form_rules());
    rules.extend(i_adjective_rules());
    rules.extend(copula_rules());
    rules.extend(other_rules());
    rules
}

fn polite_verb_rules() -> Vec<GrammarRule> {
    vec![
        rule(
            "V-MASEN-DESHITA",
            vec![verb(), form("ます", "ませ"), surface("ん"), form("です", "でし"), basic("た")],
            GrammarNote::new("Past Negative Polite Verb", "Verb Stem + ませんでした")
                .with_summary("An action that did not happen, said politely. Polite counterpart of ～なかった.")
                .with_example("昨日は何も食べませんでした。")
                .with_related("V-MASEN")
                .with_related("V-MASHITA"),
        ),
        rule(
            "V-MASHITA",
            vec![verb(), form("ます", "まし"), basic("た")],
            GrammarNote::new("Past Polite Verb", "Verb Stem + ました")
                .with_summary("A completed action, said politely. Polite counterpart of ～た.")
                .with_example("コーヒーを買いました。")
                .with_related("V-MASU"),
        ),
        rule(
            "V-MASEN",
            vec![verb(), form("ます", "ませ"), surface("ん")],
            GrammarNote::new("Present Negative Polite Verb", "Verb Stem + ません")
                .with_summary("An action that does not or will not happen, said politely. Polite counterpart of ～ない.")
                .with_related("V-MASU")
                .with_related("V-NAI"),
        ),
        rule(
            "V-MASHOU",
            vec![verb(), form("ます", "ましょ"), basic("う")],
            GrammarNote::new("Polite Volitional ('Let's...')", "Verb Stem + ましょう")
                .with_summary("Suggests doing something together with the listener.")
                .with_example("一緒に行きましょう。"),
        ),
        rule(
            "V-MASU",
            vec![verb(), form("ます", "ます")],
            GrammarNote::new("Present Polite Verb", "Verb Stem + ます")
                .with_summary("A habitual or future action, said politely. Polite counterpart of the dictionary form.")
                .with_example("毎朝パンを食べます。")
                .with_related("V-MASHITA")
                .with_related("V-MASEN"),
        ),
    ]
}

fn verb_form_rules() -> Vec<GrammarRule> {
    vec![
        rule(
            "V-TE-KUDASAI",
            vec![verb(), te(), RuleStep::any().pos(VERB).basic("くださる")],
            GrammarNote::new("Polite Request", "Verb て-form + ください")
                .with_summary("Asks the listener to do something: 'Please (do)...'.")
                .with_example("ちょっと待ってください。")
                .with_related("V-TE"),
        ),
        rule(
            "V-TE-IMASU",
            vec![verb(), te(), RuleStep::any().pos(VERB).basic("いる")],
            GrammarNote::new("Continuous Action", "Verb て-form + います")
                .with_summary("An ongoing action ('I am eating') or a resulting state ('I am married').")
                .with_related("V-TE"),
        ),
        rule(
            "V-PURPOSE-NI-IKU",
            vec![
                verb(),
                RuleStep::any().pos(PARTICLE).surface("に"),
                RuleStep::any().pos(VERB).basic("行く"),
            ],
            GrammarNote::new("Purpose of Movement", "Verb Stem + に + 行く")
                .with_summary("Going somewhere in order to do something.")
                .with_example("映画を見に行く。"),
        ),
        rule(
            "V-TSUMORI",
            vec![
                verb(),
                RuleStep::any().pos(NOUN).surface("つもり"),
                RuleStep::any().pos(AUX).basic("です"),
            ],
            GrammarNote::new("Intention", "Verb (dictionary form) + つもりです")
                .with_summary("States what the speaker intends to do."),
        ),
        rule(
            "V-TE",
            vec![verb(), te()],
            GrammarNote::new("Verb て-form", "Verb て-form")
                .with_summary("Links actions in sequence and forms the base of many other patterns.")
                .with_related("V-TE-KUDASAI")
                .with_related("V-TE-IMASU"),
        ),
        rule(
            "V-TAI",
            vec![verb(), basic("たい")],
            GrammarNote::new("Desire ('Want to...')", "Verb Stem + たい")
                .with_summary("The speaker wants to do something. Conjugates like an い-adjective."),
        ),
        rule(
            "V-NAI",
            vec![verb(), basic("ない")],
            GrammarNote::new("Plain Negative Verb", "Verb ない-form")
                .with_summary("The plain negative, used in casual speech and inside larger patterns.")
                .with_related("V-MASEN"),
        ),
    ]
}

fn i_adjective_rules() -> Vec<GrammarRule> {
    let adjective = || RuleStep::any().pos(I_ADJ);
    vec![
        rule(
            "I-ADJ-KUNAKATTA",
            vec![adjective(), basic("ない"), basic("た")],
            GrammarNote::new("Past Negative い-Adjective", "(Stem) + くなかった")
                .with_summary("It was not so. 高くなかった: it was not expensive."),
        ),
        rule(
            "I-ADJ-KATTA",
            vec![adjective(), basic("た")],
            GrammarNote::new("Past い-Adjective", "(Stem) + かった")
                .with_summary("It was so. 高かった: it was expensive."),
        ),
        rule(
            "I-ADJ-KUNAI",
            vec![adjective(), basic("ない")],
            GrammarNote::new("Negative い-Adjective", "(Stem) + くない")
                .with_summary("It is not so. 高くない: it is not expensive."),
        ),
        rule(
            "I-ADJ-KUTE",
            vec![adjective(), te()],
            GrammarNote::new("Connecting い-Adjective", "(Stem) + くて")
                .with_summary("Joins an い-adjective to a following adjective or clause."),
        ),
    ]
}

fn copula_rules() -> Vec<GrammarRule> {
    vec![
        rule(
            "COPULA-DEWA-ARIMASEN-DESHITA",
            vec![
                nominal(),
                surface("で"),
                surface("は"),
                form("ある", "あり"),
                form("ます", "ませ"),
                surface("ん"),
                form("です", "でし"),
                basic("た"),
            ],
            GrammarNote::new(
                "Past Negative Polite Copula (Formal)",
                "Noun/な-Adj + ではありませんでした",
            )
                .with_summary("Formal 'was not'.")
                .with_example("学生ではありませんでした。")
                .with_related("COPULA-JA-NAKATTA-DESU"),
        ),
        rule(
            "COPULA-JA-NAKATTA-DESU",
            vec![nominal(), surface("じゃ"), form("ない", "なかっ"), basic("た"), basic("です")],
            GrammarNote::new(
                "Past Negative Polite Copula (Colloquial)",
                "Noun/な-Adj + じゃなかったです",
            )
                .with_summary("Spoken 'was not'; more common in conversation than ではありませんでした.")
                .with_related("COPULA-DEWA-ARIMASEN-DESHITA"),
        ),
        rule(
            "COPULA-DESHITA",
            vec![nominal(), form("です", "でし"), basic("た")],
            GrammarNote::new("Past Polite Copula", "Noun/な-Adj + でした")
                .with_summary("Polite 'was'.")
                .with_example("雨でした。"),
        ),
        rule(
            "NA-ADJ-PREDICATE",
            vec![na_adjective(), form("です", "です")],
            GrammarNote::new("な-Adjective Predicate", "な-Adj + です")
                .with_summary("A な-adjective closing the sentence.")
                .with_example("この部屋はきれいです。"),
        ),
        rule(
            "NA-ADJ-NOUN-MODIFIER",
            vec![na_adjective(), RuleStep::any().pos(AUX).basic("だ").surface("な")],
            GrammarNote::new("な-Adjective Modifying a Noun", "な-Adj + な + Noun")
                .with_summary("A な-adjective before a noun takes な.")
                .with_example("きれいな花"),
        ),
    ]
}

fn other_rules() -> Vec<GrammarRule> {
    vec![
        rule(
            "NOUN-GA-ARIMASU",
            vec![RuleStep::any().pos(NOUN), surface("が"), basic("ある")],
            GrammarNote::new("Existence (Inanimate)", "Noun + が + あります")
                .with_summary("There is/are (things).")
                .with_related("NOUN-GA-IMASU"),
        ),
        rule(
            "NOUN-GA-IMASU",
            vec![RuleStep::any().pos(NOUN), surface("が"), basic("いる")],
            GrammarNote::new("Existence (Animate)", "Noun + が + います")
                .with_summary("There is/are (people or animals).")
                .with_related("NOUN-GA-ARIMASU"),
        ),
        rule(
            "REASON-NODE",
            vec![RuleStep::any().pos(PARTICLE).pos_detail(CONJUNCTIVE).basic("ので")],
            GrammarNote::new("Reason (ので)", "Plain Form + ので")
                .with_summary("Gives a reason as a natural consequence; softer than から.")
                .with_related("REASON-KARA"),
        ),
        rule(
            "REASON-KARA",
            vec![RuleStep::any().pos(PARTICLE).pos_detail(CONJUNCTIVE).surface("から")],
            GrammarNote::new("Reason (から)", "Clause + から")
                .with_summary("Gives a reason, often the speaker's own judgment.")
                .with_related("REASON-NODE"),
        ),
        rule(
            "ARU-NAI",
            vec![RuleStep::any().pos(I_ADJ).pos_detail(INDEPENDENT).basic("ない")],
            GrammarNote::new("Non-existence (Plain)", "ない")
                .with_summary("Plain negative of ある: does not exist, do not have."),
        ),
    ]
}
