//! Token records produced by the external morphological analyzer.
//!
//! Field names follow the analyzer's JSON output (kuromoji/IPADIC style) so a
//! token array can be deserialized directly with `serde_json`.

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

/// One morphologically analyzed unit of a sentence.
///
/// Tokens have no identity of their own; they are addressed by their index in
/// the sequence handed to the matcher. Missing fields deserialize as empty
/// strings and compare like any other value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct Token {
    /// Text as it appears in the sentence (e.g. `ませ`).
    pub surface_form: SmolStr,
    /// Part-of-speech tag (e.g. `動詞`, `助動詞`, `助詞`).
    pub pos: SmolStr,
    pub pos_detail_1: SmolStr,
    pub pos_detail_2: SmolStr,
    pub pos_detail_3: SmolStr,
    /// Conjugation class (e.g. `一段`, `特殊・マス`).
    pub conjugated_type: SmolStr,
    /// Conjugated form (e.g. `連用形`, `未然形`).
    pub conjugated_form: SmolStr,
    /// Dictionary form (e.g. `ます` for `ませ`).
    pub basic_form: SmolStr,
    pub reading: SmolStr,
    pub pronunciation: SmolStr,
}

impl Token {
    /// Create a token with the given surface text and every other field empty.
    pub fn new(surface_form: impl Into<SmolStr>) -> Self {
        Self {
            surface_form: surface_form.into(),
            ..Self::default()
        }
    }

    /// Set the part-of-speech tag.
    pub fn with_pos(mut self, pos: impl Into<SmolStr>) -> Self {
        self.pos = pos.into();
        self
    }

    /// Set the dictionary form.
    pub fn with_basic_form(mut self, basic_form: impl Into<SmolStr>) -> Self {
        self.basic_form = basic_form.into();
        self
    }

    /// Set the conjugated form.
    pub fn with_conjugated_form(mut self, conjugated_form: impl Into<SmolStr>) -> Self {
        self.conjugated_form = conjugated_form.into();
        self
    }

    /// Set the conjugation class.
    pub fn with_conjugated_type(mut self, conjugated_type: impl Into<SmolStr>) -> Self {
        self.conjugated_type = conjugated_type.into();
        self
    }

    /// Set the part-of-speech detail tags, most general first.
    pub fn with_pos_details(
        mut self,
        detail_1: impl Into<SmolStr>,
        detail_2: impl Into<SmolStr>,
        detail_3: impl Into<SmolStr>,
    ) -> Self {
        self.pos_detail_1 = detail_1.into();
        self.pos_detail_2 = detail_2.into();
        self.pos_detail_3 = detail_3.into();
        self
    }

    /// Set the phonetic reading and pronunciation.
    pub fn with_reading(
        mut self,
        reading: impl Into<SmolStr>,
        pronunciation: impl Into<SmolStr>,
    ) -> Self {
        self.reading = reading.into();
        self.pronunciation = pronunciation.into();
        self
    }
}
