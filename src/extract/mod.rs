//! Phrase extraction engine — orchestrates the rule stages.
//!
//! [`PhraseExtractor::extract`] runs the stages in a fixed order and
//! collects phrases in emission order:
//!
//! 1. Quote extraction (quoted spans held back, appended last)
//! 2. Tokenization
//! 3. Capitalized `X of/the Y` triples
//! 4. Capitalisation-run detection (run singles are deferred)
//! 5. Single-token pass
//! 6. Adjacent-bigram pass
//! 7. Deferred run singles
//! 8. `X vs Y` phrases
//! 9. Quoted phrases
//!
//! The final list is filtered of bare stopwords and deduplicated
//! case-insensitively, keeping first occurrences. The whole computation
//! is a deterministic pure function of the input text and the lexicons;
//! degenerate inputs (empty, whitespace, punctuation-only) yield `[]`.

mod bigrams;
mod runs;
mod singles;

use rustc_hash::FxHashSet;

use crate::lexicon::overrides::LexiconOverrides;
use crate::lexicon::Lexicons;
use crate::tokenize::{strip_quoted, tokenize};
use crate::types::Token;

// ---------------------------------------------------------------------------
// Conditional tracing support
// ---------------------------------------------------------------------------

/// Enter a tracing span for an extraction stage (when the `tracing`
/// feature is enabled). When disabled, this is a no-op and the compiler
/// eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("extract_stage", stage = $name).entered();
    };
}

// ---------------------------------------------------------------------------
// PhraseExtractor
// ---------------------------------------------------------------------------

/// The trademark-risk phrase extraction engine.
///
/// Holds the immutable [`Lexicons`] consulted by every rule. Construction
/// is cheap enough to do per request, but a single extractor is reusable
/// and shareable: extraction never mutates it.
#[derive(Debug, Clone, Default)]
pub struct PhraseExtractor {
    lexicons: Lexicons,
}

impl PhraseExtractor {
    /// Extractor with the built-in lexicons.
    pub fn new() -> Self {
        Self::default()
    }

    /// Extractor with caller-provided lexicons.
    pub fn with_lexicons(lexicons: Lexicons) -> Self {
        PhraseExtractor { lexicons }
    }

    /// Extractor with the built-in lexicons plus per-call overrides.
    pub fn with_overrides(overrides: &LexiconOverrides) -> Self {
        PhraseExtractor {
            lexicons: overrides.apply(&Lexicons::default()),
        }
    }

    /// The lexicons this extractor consults.
    pub fn lexicons(&self) -> &Lexicons {
        &self.lexicons
    }

    /// Extract candidate trademark-risk phrases from one title.
    ///
    /// Returns an ordered list with no two entries equal under
    /// case-insensitive comparison.
    pub fn extract(&self, text: &str) -> Vec<String> {
        let lex = &self.lexicons;

        trace_stage!("tokenize");
        let (working, quoted) = strip_quoted(text);
        let tokens = tokenize(&working);

        let mut out = PhraseList::new(lex);
        let mut consumed = vec![false; tokens.len()];
        // Digit-run members additionally block bigrams starting at them,
        // so fragments like `Max wallet` cannot leak out of
        // `iPhone 15 Pro Max wallet case`.
        let mut pair_blocked = vec![false; tokens.len()];
        let mut deferred: Vec<String> = Vec::new();

        trace_stage!("triples");
        runs::emit_capitalized_triples(&tokens, &mut consumed, &mut out);

        trace_stage!("runs");
        runs::emit_runs(
            &tokens,
            lex,
            &mut consumed,
            &mut pair_blocked,
            &mut out,
            &mut deferred,
        );

        trace_stage!("singles");
        singles::emit_singles(&tokens, lex, &consumed, &mut out);

        trace_stage!("bigrams");
        bigrams::emit_bigrams(&tokens, lex, &consumed, &pair_blocked, &mut out);

        for phrase in deferred {
            out.push(phrase);
        }

        trace_stage!("vs");
        bigrams::emit_vs_phrases(&tokens, &mut out);

        for phrase in quoted {
            out.push(phrase);
        }

        out.into_vec()
    }
}

// ---------------------------------------------------------------------------
// Ordered, deduplicated phrase sink
// ---------------------------------------------------------------------------

/// Collects phrases in emission order, dropping bare stopwords and
/// case-insensitive duplicates.
pub(crate) struct PhraseList<'a> {
    lex: &'a Lexicons,
    phrases: Vec<String>,
    seen: FxHashSet<String>,
}

impl<'a> PhraseList<'a> {
    fn new(lex: &'a Lexicons) -> Self {
        PhraseList {
            lex,
            phrases: Vec::new(),
            seen: FxHashSet::default(),
        }
    }

    pub(crate) fn push(&mut self, phrase: String) {
        if phrase.is_empty() {
            return;
        }
        let key = phrase.to_lowercase();
        if self.lex.is_stopword(&key) {
            return;
        }
        if self.seen.insert(key) {
            self.phrases.push(phrase);
        }
    }

    /// Push a single token's normalized text, plus its hyphenated
    /// all-caps prefix when present (`AI-generated` also yields `AI`).
    pub(crate) fn push_single(&mut self, token: &Token) {
        self.push(token.norm.clone());
        if let Some(prefix) = token.acronym_prefix() {
            self.push(prefix.to_string());
        }
    }

    fn into_vec(self) -> Vec<String> {
        self.phrases
    }
}

/// Join a span of tokens into one phrase on their normalized text.
pub(crate) fn join_norm(span: &[Token]) -> String {
    span.iter()
        .map(|t| t.norm.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degenerate_inputs() {
        let ex = PhraseExtractor::new();
        assert!(ex.extract("").is_empty());
        assert!(ex.extract("   ").is_empty());
        assert!(ex.extract("?! --- ...").is_empty());
    }

    #[test]
    fn test_determinism() {
        let ex = PhraseExtractor::new();
        let a = ex.extract("APPLE logo decal for MacBook");
        let b = ex.extract("APPLE logo decal for MacBook");
        assert_eq!(a, b);
    }

    #[test]
    fn test_case_insensitive_dedup_keeps_first() {
        let lex = Lexicons::default();
        let mut list = PhraseList::new(&lex);
        list.push("Apple".to_string());
        list.push("APPLE".to_string());
        list.push("apple".to_string());
        assert_eq!(list.into_vec(), vec!["Apple"]);
    }

    #[test]
    fn test_bare_stopwords_filtered() {
        let lex = Lexicons::default();
        let mut list = PhraseList::new(&lex);
        list.push("the".to_string());
        list.push("The Beatles".to_string());
        assert_eq!(list.into_vec(), vec!["The Beatles"]);
    }

    #[test]
    fn test_quoted_phrase_passthrough() {
        let ex = PhraseExtractor::new();
        let phrases = ex.extract("He wears an \"Apple Inc\" shirt");
        assert!(phrases.contains(&"Apple Inc".to_string()));
        // Quoted phrases come last.
        assert_eq!(phrases.last().map(String::as_str), Some("Apple Inc"));
    }

    #[test]
    fn test_overrides_change_classification() {
        let ov = LexiconOverrides {
            risk_terms: Some(vec!["sleeve".to_string()]),
            ..Default::default()
        };
        let ex = PhraseExtractor::with_overrides(&ov);
        let phrases = ex.extract("dragon sleeve print");
        assert!(phrases.contains(&"dragon sleeve".to_string()));
    }
}
