//! Caller-supplied lexicon overrides.
//!
//! A [`LexiconOverrides`] value replaces whole category sets without
//! touching the engine: the three categories the public contract exposes
//! (`stopwords`, `generic_single`, `risk_terms`) each accept an optional
//! word list. Unrecognized category names are captured rather than
//! silently dropped, and [`LexiconOverrides::validate`] reports them as
//! diagnostics — errors under strict mode, warnings otherwise.
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "stopwords": ["the", "a", "of"],
//!   "generic_single": ["mug", "tee"],
//!   "risk_terms": ["logo", "decal"]
//! }
//! ```

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::Lexicons;

/// Per-call lexicon overrides. Omitted categories keep their defaults;
/// present categories are replaced wholesale.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LexiconOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stopwords: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generic_single: Option<Vec<String>>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub risk_terms: Option<Vec<String>>,

    /// Captures any category names not recognized by the schema.
    /// Consumed by [`LexiconOverrides::validate`].
    #[serde(flatten)]
    pub unknown_categories: HashMap<String, serde_json::Value>,
}

/// Severity of an override diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// One finding from override validation.
#[derive(Debug, Clone)]
pub struct OverrideDiagnostic {
    pub severity: Severity,
    /// The offending category name.
    pub category: String,
    pub message: String,
}

impl fmt::Display for OverrideDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self.severity {
            Severity::Warning => "warning",
            Severity::Error => "error",
        };
        write!(f, "{tag}: category `{}`: {}", self.category, self.message)
    }
}

impl std::error::Error for OverrideDiagnostic {}

impl LexiconOverrides {
    /// Check the overrides for unknown category names.
    ///
    /// Under `strict`, unknown categories are errors; otherwise warnings.
    /// Known categories never produce diagnostics.
    pub fn validate(&self, strict: bool) -> Vec<OverrideDiagnostic> {
        let severity = if strict { Severity::Error } else { Severity::Warning };
        let mut names: Vec<&String> = self.unknown_categories.keys().collect();
        names.sort();
        names
            .into_iter()
            .map(|name| OverrideDiagnostic {
                severity,
                category: name.clone(),
                message: "not an overridable lexicon category \
                          (expected stopwords, generic_single, or risk_terms)"
                    .to_string(),
            })
            .collect()
    }

    /// Apply the overrides on top of `base`, replacing present categories.
    pub fn apply(&self, base: &Lexicons) -> Lexicons {
        let mut lex = base.clone();
        if let Some(words) = &self.stopwords {
            lex.stopwords = words.iter().map(|w| w.to_lowercase()).collect();
        }
        if let Some(words) = &self.generic_single {
            lex.generic_single = words.iter().map(|w| w.to_lowercase()).collect();
        }
        if let Some(words) = &self.risk_terms {
            lex.risk_terms = words.iter().map(|w| w.to_lowercase()).collect();
        }
        lex
    }
}
