//! Matcher: finding grammar constructions in token sequences.
//!
//! ## Layers
//!
//! ```text
//! satisfies(token, step)              ← one token vs one step
//!     │
//!     ▼
//! candidates_at(tokens, i, catalog)   ← every rule matching at i
//!     │
//!     ▼
//! find_matches(tokens, catalog)       ← longest match, left to right
//!     │
//!     ▼
//! segment(tokens, matches)            ← groups and gap tokens for display
//! ```
//!
//! [`Matcher`] wraps the same operations with [`MatchOptions`] and batch
//! matching. Nothing here fails: a sentence with no constructions simply
//! yields no matches.

mod candidates;
mod engine;
mod evaluate;
mod grammar_match;
mod occurrences;
mod options;
mod resolve;
mod segment;

pub use candidates::candidates_at;
pub use engine::Matcher;
pub use evaluate::satisfies;
pub use grammar_match::GrammarMatch;
pub use occurrences::all_occurrences;
pub use options::MatchOptions;
pub use resolve::find_matches;
pub use segment::{Segment, segment};
