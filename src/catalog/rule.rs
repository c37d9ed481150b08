//! Grammar rule types.
//!
//! A [`GrammarRule`] is an ordered list of [`RuleStep`]s, one per token, plus a
//! [`GrammarNote`] describing the construction for learners.

use std::fmt;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

// ============================================================================
// PROFICIENCY LEVEL
// ============================================================================

/// JLPT proficiency level, ordered from easiest (`N5`) to hardest (`N1`).
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Level {
    #[default]
    N5,
    N4,
    N3,
    N2,
    N1,
}

impl Level {
    pub fn as_str(&self) -> &'static str {
        match self {
            Level::N5 => "N5",
            Level::N4 => "N4",
            Level::N3 => "N3",
            Level::N2 => "N2",
            Level::N1 => "N1",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// RULE STEP
// ============================================================================

/// Constraint on one string field of a step: a single value or a list of
/// alternatives.
///
/// Written in definitions as a plain string or as an array of strings.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldConstraint {
    /// The token's field must equal this value.
    One(SmolStr),
    /// The token's field must equal one of these values.
    AnyOf(Vec<SmolStr>),
}

impl FieldConstraint {
    /// Whether `value` satisfies this constraint.
    pub fn accepts(&self, value: &str) -> bool {
        match self {
            FieldConstraint::One(expected) => expected == value,
            FieldConstraint::AnyOf(options) => options.iter().any(|o| o == value),
        }
    }

    /// The single required value, if this is not an alternative list.
    pub fn as_single(&self) -> Option<&str> {
        match self {
            FieldConstraint::One(value) => Some(value.as_str()),
            FieldConstraint::AnyOf(_) => None,
        }
    }

    /// True for an alternative list with nothing in it.
    pub fn is_empty(&self) -> bool {
        matches!(self, FieldConstraint::AnyOf(options) if options.is_empty())
    }

    fn any_of<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        FieldConstraint::AnyOf(values.into_iter().map(Into::into).collect())
    }
}

impl From<&str> for FieldConstraint {
    fn from(value: &str) -> Self {
        FieldConstraint::One(value.into())
    }
}

/// Constraint on the token at one position of a rule.
///
/// Unset fields are wildcards. `pos` and `basic_form` may list alternatives.
/// When `exact` is set, `pos`, `basic_form`, `surface_form` and
/// `conjugated_form` must each name a single value equal to the token's; the
/// catalog rejects exact steps that leave one of them open. `pos_detail_1`
/// refines `pos` (e.g. `形容動詞語幹` under `名詞`) and is checked in both
/// modes when set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RuleStep {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos: Option<FieldConstraint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pos_detail_1: Option<SmolStr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basic_form: Option<FieldConstraint>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub surface_form: Option<SmolStr>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conjugated_form: Option<SmolStr>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub exact: bool,
}

impl RuleStep {
    /// A step that accepts any token.
    pub fn any() -> Self {
        Self::default()
    }

    /// A fully specified exact step.
    pub fn exact(
        pos: impl Into<SmolStr>,
        basic_form: impl Into<SmolStr>,
        surface_form: impl Into<SmolStr>,
        conjugated_form: impl Into<SmolStr>,
    ) -> Self {
        Self {
            pos: Some(FieldConstraint::One(pos.into())),
            pos_detail_1: None,
            basic_form: Some(FieldConstraint::One(basic_form.into())),
            surface_form: Some(surface_form.into()),
            conjugated_form: Some(conjugated_form.into()),
            exact: true,
        }
    }

    pub fn pos(mut self, pos: impl Into<SmolStr>) -> Self {
        self.pos = Some(FieldConstraint::One(pos.into()));
        self
    }

    /// Accept any of the listed part-of-speech tags.
    pub fn pos_any_of<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        self.pos = Some(FieldConstraint::any_of(tags));
        self
    }

    /// Require the first part-of-speech subcategory.
    pub fn pos_detail(mut self, detail: impl Into<SmolStr>) -> Self {
        self.pos_detail_1 = Some(detail.into());
        self
    }

    pub fn basic(mut self, basic_form: impl Into<SmolStr>) -> Self {
        self.basic_form = Some(FieldConstraint::One(basic_form.into()));
        self
    }

    /// Accept any of the listed dictionary forms.
    pub fn basic_any_of<I, S>(mut self, forms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SmolStr>,
    {
        self.basic_form = Some(FieldConstraint::any_of(forms));
        self
    }

    pub fn surface(mut self, surface_form: impl Into<SmolStr>) -> Self {
        self.surface_form = Some(surface_form.into());
        self
    }

    pub fn conjugated(mut self, conjugated_form: impl Into<SmolStr>) -> Self {
        self.conjugated_form = Some(conjugated_form.into());
        self
    }

    /// True when no field constrains the token.
    pub fn is_wildcard(&self) -> bool {
        self.pos.is_none()
            && self.pos_detail_1.is_none()
            && self.basic_form.is_none()
            && self.surface_form.is_none()
            && self.conjugated_form.is_none()
    }

    /// Name of the first field an alternative list leaves empty, if any.
    pub(crate) fn first_empty_alternatives(&self) -> Option<&'static str> {
        if self.pos.as_ref().is_some_and(FieldConstraint::is_empty) {
            Some("pos")
        } else if self.basic_form.as_ref().is_some_and(FieldConstraint::is_empty) {
            Some("basic_form")
        } else {
            None
        }
    }

    /// Name of the first field an exact step leaves open, if any.
    pub(crate) fn first_open_exact_field(&self) -> Option<&'static str> {
        if self.pos.as_ref().and_then(FieldConstraint::as_single).is_none() {
            Some("pos")
        } else if self.basic_form.as_ref().and_then(FieldConstraint::as_single).is_none() {
            Some("basic_form")
        } else if self.surface_form.is_none() {
            Some("surface_form")
        } else if self.conjugated_form.is_none() {
            Some("conjugated_form")
        } else {
            None
        }
    }
}

// ============================================================================
// GRAMMAR RULE
// ============================================================================

/// Learner-facing explanation of a grammar rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarNote {
    /// Short title (e.g. "Past Polite Verb").
    pub title: String,
    /// Structural formula (e.g. "Verb Stem + ました").
    #[serde(default)]
    pub structure: String,
    /// Usage and nuance.
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub level: Level,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,
    /// Ids of related rules (e.g. `V-MASU` -> `V-MASHITA`).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub related: Vec<SmolStr>,
}

impl GrammarNote {
    pub fn new(title: impl Into<String>, structure: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            structure: structure.into(),
            ..Self::default()
        }
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = summary.into();
        self
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    pub fn with_example(mut self, example: impl Into<String>) -> Self {
        self.examples.push(example.into());
        self
    }

    pub fn with_related(mut self, id: impl Into<SmolStr>) -> Self {
        self.related.push(id.into());
        self
    }
}

/// One grammatical construction: an id, its token steps and its note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarRule {
    pub id: SmolStr,
    pub steps: Vec<RuleStep>,
    pub note: GrammarNote,
}

impl GrammarRule {
    pub fn new(id: impl Into<SmolStr>, steps: Vec<RuleStep>) -> Self {
        Self {
            id: id.into(),
            steps,
            note: GrammarNote::default(),
        }
    }

    pub fn with_note(mut self, note: GrammarNote) -> Self {
        self.note = note;
        self
    }

    /// Number of tokens a match of this rule covers.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn level(&self) -> Level {
        self.note.level
    }
}
