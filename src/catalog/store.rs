//! The validated, ordered rule catalog.

use std::path::Path;

use indexmap::IndexMap;
use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use super::definition::{self, DefinitionFormat};
use super::error::CatalogError;
use super::rule::GrammarRule;

/// An immutable, ordered collection of grammar rules.
///
/// Declaration order is meaningful: when two rules of the same length match at
/// the same position, the one declared first wins. Catalogs should therefore
/// list specific constructions before the general ones they overlap.
#[derive(Clone, Debug, Default)]
pub struct RuleCatalog {
    /// Rules by id (IndexMap preserves declaration order).
    rules: IndexMap<SmolStr, GrammarRule>,
}

impl RuleCatalog {
    /// Validate and load rules, preserving their order.
    ///
    /// Fails on the first defect found; a catalog with any invalid rule is
    /// rejected as a whole.
    pub fn load<I>(rules: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = GrammarRule>,
    {
        let mut by_id: IndexMap<SmolStr, GrammarRule> = IndexMap::new();

        for (index, rule) in rules.into_iter().enumerate() {
            validate_rule(index, &rule)?;
            if let Some(first) = by_id.get_index_of(&rule.id) {
                return Err(CatalogError::duplicate(rule.id, first, index));
            }
            by_id.insert(rule.id.clone(), rule);
        }

        let catalog = Self { rules: by_id };
        catalog.warn_unresolved_related();
        tracing::debug!("loaded rule catalog with {} rule(s)", catalog.len());
        Ok(catalog)
    }

    /// Parse JSON rule definitions and load them.
    pub fn from_json_str(input: &str) -> Result<Self, CatalogError> {
        Self::load(definition::parse(input, DefinitionFormat::Json)?)
    }

    /// Parse YAML rule definitions and load them.
    pub fn from_yaml_str(input: &str) -> Result<Self, CatalogError> {
        Self::load(definition::parse(input, DefinitionFormat::Yaml)?)
    }

    /// Read a definition file, picking the format from its extension.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let format = DefinitionFormat::from_path(path)?;
        let input = std::fs::read_to_string(path).map_err(|e| CatalogError::io(path, e))?;
        tracing::debug!("reading {} rule definitions from {}", format.name(), path.display());
        Self::load(definition::parse(&input, format)?)
    }

    /// Find a rule by id.
    pub fn lookup(&self, id: &str) -> Option<&GrammarRule> {
        self.rules.get(id)
    }

    /// Declaration index of a rule; lower means higher tie-break priority.
    pub fn priority(&self, id: &str) -> Option<usize> {
        self.rules.get_index_of(id)
    }

    /// Rule at a declaration index.
    pub fn get_index(&self, index: usize) -> Option<&GrammarRule> {
        self.rules.get_index(index).map(|(_, rule)| rule)
    }

    /// Rules in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &GrammarRule> + '_ {
        self.rules.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = &SmolStr> + '_ {
        self.rules.keys()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.rules.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Length of the longest rule, or 0 for an empty catalog.
    pub fn max_rule_len(&self) -> usize {
        self.iter().map(GrammarRule::len).max().unwrap_or(0)
    }

    fn warn_unresolved_related(&self) {
        let known: FxHashSet<&str> = self.rules.keys().map(SmolStr::as_str).collect();
        for rule in self.iter() {
            for related in &rule.note.related {
                if !known.contains(related.as_str()) {
                    tracing::warn!(
                        "rule '{}' lists unknown related rule '{}'",
                        rule.id,
                        related
                    );
                }
            }
        }
    }
}

impl<'a> IntoIterator for &'a RuleCatalog {
    type Item = &'a GrammarRule;
    type IntoIter = indexmap::map::Values<'a, SmolStr, GrammarRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.values()
    }
}

fn validate_rule(index: usize, rule: &GrammarRule) -> Result<(), CatalogError> {
    if rule.id.is_empty() {
        return Err(CatalogError::EmptyId { index });
    }
    if rule.steps.is_empty() {
        return Err(CatalogError::EmptySteps {
            id: rule.id.clone(),
        });
    }
    for (step_index, step) in rule.steps.iter().enumerate() {
        if let Some(field) = step.first_empty_alternatives() {
            return Err(CatalogError::EmptyAlternatives {
                id: rule.id.clone(),
                step: step_index,
                field,
            });
        }
        if step.exact {
            if let Some(field) = step.first_open_exact_field() {
                return Err(CatalogError::incomplete_exact(
                    rule.id.clone(),
                    step_index,
                    field,
                ));
            }
        }
    }
    Ok(())
}
