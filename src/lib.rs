//! markscan — trademark-risk phrase extraction for product-listing titles.
//!
//! Given one listing title, the engine returns an ordered, deduplicated
//! list of phrases worth screening against a trademark database: brand
//! mentions, proper-noun spans, and generic-plus-risk word pairs. The
//! whole computation is lexical — capitalisation shapes, adjacency, and
//! a handful of category word lists — with no model inference and no
//! network access, so the same title always produces the same list.
//!
//! ```
//! use markscan::extract_phrases;
//!
//! let phrases = extract_phrases("Call of Duty gaming mat");
//! assert_eq!(phrases, vec!["Call of Duty", "gaming mat"]);
//! ```
//!
//! Callers needing custom word lists construct a [`PhraseExtractor`]
//! with their own [`Lexicons`], or deserialize [`LexiconOverrides`] from
//! JSON and validate them before applying.

pub mod extract;
pub mod lexicon;
pub mod tokenize;
pub mod types;

pub use extract::PhraseExtractor;
pub use lexicon::overrides::{LexiconOverrides, OverrideDiagnostic, Severity};
pub use lexicon::Lexicons;
pub use types::{Token, TokenShape};

/// Extract phrases from one title with the built-in lexicons.
///
/// Convenience wrapper over [`PhraseExtractor::extract`]; construct an
/// extractor once instead when processing many titles with custom
/// lexicons.
pub fn extract_phrases(text: &str) -> Vec<String> {
    PhraseExtractor::new().extract(text)
}
