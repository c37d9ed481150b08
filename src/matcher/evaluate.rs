//! Constraint evaluation: does one token satisfy one rule step?

use smol_str::SmolStr;

use crate::base::Token;
use crate::catalog::{FieldConstraint, RuleStep};

/// Check whether `token` satisfies `step`.
///
/// In the default mode every field set on the step must equal the token's
/// field (or one of its alternatives) and unset fields are ignored, so an empty
/// step accepts any token. In exact mode `pos`, `basic_form`, `surface_form`
/// and `conjugated_form` are all compared and none may be unset or a list.
/// A `pos_detail_1` refinement applies in both modes.
///
/// Empty token fields are ordinary values: they only satisfy a step field that
/// is unset or also empty.
pub fn satisfies(token: &Token, step: &RuleStep) -> bool {
    let core = if step.exact {
        satisfies_exact(token, step)
    } else {
        constraint_matches(&step.pos, &token.pos)
            && constraint_matches(&step.basic_form, &token.basic_form)
            && field_matches(&step.surface_form, &token.surface_form)
            && field_matches(&step.conjugated_form, &token.conjugated_form)
    };
    core && field_matches(&step.pos_detail_1, &token.pos_detail_1)
}

fn satisfies_exact(token: &Token, step: &RuleStep) -> bool {
    // An exact step must name single values; the catalog rejects anything else.
    single_equals(&step.pos, &token.pos)
        && single_equals(&step.basic_form, &token.basic_form)
        && field_equals(&step.surface_form, &token.surface_form)
        && field_equals(&step.conjugated_form, &token.conjugated_form)
}

#[inline]
fn constraint_matches(expected: &Option<FieldConstraint>, actual: &str) -> bool {
    expected.as_ref().is_none_or(|c| c.accepts(actual))
}

#[inline]
fn single_equals(expected: &Option<FieldConstraint>, actual: &str) -> bool {
    expected.as_ref().and_then(FieldConstraint::as_single) == Some(actual)
}

#[inline]
fn field_matches(expected: &Option<SmolStr>, actual: &str) -> bool {
    expected.as_deref().is_none_or(|value| value == actual)
}

#[inline]
fn field_equals(expected: &Option<SmolStr>, actual: &str) -> bool {
    expected.as_deref() == Some(actual)
}
