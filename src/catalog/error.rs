//! Error types for catalog loading.

use std::path::PathBuf;

use smol_str::SmolStr;
use thiserror::Error;

/// Errors that reject a rule catalog.
///
/// Any one of these makes the whole catalog unusable; rules are never
/// accepted piecemeal.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A rule was declared without an identifier.
    #[error("rule #{index} has an empty id")]
    EmptyId { index: usize },

    /// A rule has no steps to match.
    #[error("rule '{id}' has no steps")]
    EmptySteps { id: SmolStr },

    /// Two rules share an identifier.
    #[error("duplicate rule id '{id}' (declared at #{first} and #{second})")]
    DuplicateId {
        id: SmolStr,
        first: usize,
        second: usize,
    },

    /// An exact step leaves one of its fields unset.
    #[error("rule '{id}' step {step} is exact but {field} is not a single value")]
    IncompleteExactStep {
        id: SmolStr,
        step: usize,
        field: &'static str,
    },

    /// An alternative list with nothing in it.
    #[error("rule '{id}' step {step} lists no {field} alternatives")]
    EmptyAlternatives {
        id: SmolStr,
        step: usize,
        field: &'static str,
    },

    /// IO error while reading a definition file.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON definitions failed to parse.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML definitions failed to parse.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// The file extension names no known definition format.
    #[error("Unsupported catalog format: {0}")]
    UnsupportedFormat(String),
}

impl CatalogError {
    /// Create a duplicate id error.
    pub fn duplicate(id: impl Into<SmolStr>, first: usize, second: usize) -> Self {
        Self::DuplicateId {
            id: id.into(),
            first,
            second,
        }
    }

    /// Create an incomplete exact step error.
    pub fn incomplete_exact(id: impl Into<SmolStr>, step: usize, field: &'static str) -> Self {
        Self::IncompleteExactStep {
            id: id.into(),
            step,
            field,
        }
    }

    /// Create an IO error for a definition file.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Whether this error came from validating rules rather than reading them.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::EmptyId { .. }
                | Self::EmptySteps { .. }
                | Self::DuplicateId { .. }
                | Self::IncompleteExactStep { .. }
                | Self::EmptyAlternatives { .. }
        )
    }
}
