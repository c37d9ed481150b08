//! Matching options

use rustc_hash::FxHashSet;
use smol_str::SmolStr;

use crate::catalog::{GrammarRule, Level};

/// Which catalog rules take part in matching.
///
/// The default admits every rule.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchOptions {
    /// Ignore rules above this level (e.g. `N5` keeps only N5 rules)
    pub max_level: Option<Level>,
    /// Rule ids to leave out
    pub excluded: FxHashSet<SmolStr>,
}

impl MatchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_level(mut self, level: Level) -> Self {
        self.max_level = Some(level);
        self
    }

    pub fn exclude(mut self, id: impl Into<SmolStr>) -> Self {
        self.excluded.insert(id.into());
        self
    }

    /// Whether `rule` takes part under these options
    pub fn allows(&self, rule: &GrammarRule) -> bool {
        self.max_level.is_none_or(|max| rule.level() <= max) && !self.excluded.contains(&rule.id)
    }
}
