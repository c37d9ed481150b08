//! Raw rule definitions and their normalization.
//!
//! Definition files come in two historical shapes, which are unified here
//! before the catalog validates them:
//!
//! ```text
//! { "id": "V-MASU", "match": [ { "pos": "動詞" }, { "basic_form": "ます" } ], "notes": {..} }
//! { "id": "reason", "pattern": [ { "pattern": { "surface_form": "ので" } } ], "explanation": "" }
//! ```
//!
//! Steps may be written flat or nested under `pattern`; the step list may be
//! called `match` or `pattern`; metadata is either a `notes` object or a
//! one-line `explanation`. A document is either a bare list of rules or an
//! object with a `rules` list.

use std::path::Path;

use serde::Deserialize;
use smol_str::SmolStr;

use super::error::CatalogError;
use super::rule::{GrammarNote, GrammarRule, RuleStep};

/// Supported definition file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DefinitionFormat {
    Json,
    Yaml,
}

impl DefinitionFormat {
    /// Supported file extensions.
    pub fn extensions() -> &'static [&'static str] {
        &["json", "yaml", "yml"]
    }

    /// Detect format from file extension.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "json" => Ok(Self::Json),
            "yaml" | "yml" => Ok(Self::Yaml),
            _ => Err(CatalogError::UnsupportedFormat(path.display().to_string())),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }
}

/// A rule as written in a definition file.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRule {
    pub id: SmolStr,
    #[serde(rename = "match", alias = "pattern", default)]
    pub steps: Vec<RawStep>,
    #[serde(default)]
    pub notes: Option<GrammarNote>,
    #[serde(default)]
    pub explanation: Option<String>,
}

/// A step written either flat or nested under `pattern`.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawStep {
    Nested(NestedStep),
    Flat(RuleStep),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NestedStep {
    pub pattern: RuleStep,
}

impl RawStep {
    pub fn into_step(self) -> RuleStep {
        match self {
            RawStep::Nested(nested) => nested.pattern,
            RawStep::Flat(step) => step,
        }
    }
}

impl RawRule {
    /// Normalize into the catalog's rule shape.
    ///
    /// A structured `notes` object wins over a legacy `explanation`; with
    /// neither, the note is titled by the rule id.
    pub fn into_rule(self) -> GrammarRule {
        let note = match (self.notes, self.explanation) {
            (Some(notes), _) => notes,
            (None, Some(explanation)) => GrammarNote {
                title: explanation.clone(),
                summary: explanation,
                ..GrammarNote::default()
            },
            (None, None) => GrammarNote {
                title: self.id.to_string(),
                ..GrammarNote::default()
            },
        };
        let steps = self.steps.into_iter().map(RawStep::into_step).collect();
        GrammarRule::new(self.id, steps).with_note(note)
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawDocument {
    List(Vec<RawRule>),
    Wrapped { rules: Vec<RawRule> },
}

impl RawDocument {
    fn into_rules(self) -> Vec<RawRule> {
        match self {
            RawDocument::List(rules) | RawDocument::Wrapped { rules } => rules,
        }
    }
}

/// Parse a definition document into normalized rules.
///
/// The rules are not validated here; pass them to
/// [`RuleCatalog::load`](super::RuleCatalog::load).
pub fn parse(input: &str, format: DefinitionFormat) -> Result<Vec<GrammarRule>, CatalogError> {
    let document: RawDocument = match format {
        DefinitionFormat::Json => serde_json::from_str(input)?,
        DefinitionFormat::Yaml => serde_yaml::from_str(input)?,
    };
    Ok(document
        .into_rules()
        .into_iter()
        .map(RawRule::into_rule)
        .collect())
}
