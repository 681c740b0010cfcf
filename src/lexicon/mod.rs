//! Lexicon category sets.
//!
//! Seven immutable word sets drive every classification decision in the
//! engine. They are loaded once, owned by the [`PhraseExtractor`], and
//! never mutated during extraction — callers customize behavior by
//! constructing a modified [`Lexicons`] value up front (see
//! [`overrides::LexiconOverrides`] for the serde-friendly route).
//!
//! [`PhraseExtractor`]: crate::extract::PhraseExtractor

pub mod defaults;
pub mod overrides;

use rustc_hash::FxHashSet;

/// The category word sets consulted by the extraction rules.
///
/// All sets hold lowercase entries; lookups go through the `is_*` methods
/// which lowercase-normalize on the caller side.
#[derive(Debug, Clone)]
pub struct Lexicons {
    /// Function words: ignored as singles, barred from pair tails,
    /// filtered from final output.
    pub stopwords: FxHashSet<String>,
    /// Words too common to stand alone.
    pub generic_single: FxHashSet<String>,
    /// Words that are weak in leading position.
    pub generic_first: FxHashSet<String>,
    /// Words that make a pair's trailing position interesting.
    pub risk_terms: FxHashSet<String>,
    /// Words that suppress single-token emission from a preceding run.
    pub run_followers: FxHashSet<String>,
    /// Words barred from leading an emitted pair.
    pub bigram_skip_first: FxHashSet<String>,
    /// Proper nouns allowed to stand alone inside runs.
    pub allow_single_proper: FxHashSet<String>,
}

fn to_set(words: &[&str]) -> FxHashSet<String> {
    words.iter().map(|w| w.to_lowercase()).collect()
}

impl Default for Lexicons {
    fn default() -> Self {
        Lexicons {
            stopwords: to_set(defaults::STOPWORDS),
            generic_single: to_set(defaults::GENERIC_SINGLE),
            generic_first: to_set(defaults::GENERIC_FIRST),
            risk_terms: to_set(defaults::RISK_TERMS),
            run_followers: to_set(defaults::RUN_FOLLOWERS),
            bigram_skip_first: to_set(defaults::BIGRAM_SKIP_FIRST),
            allow_single_proper: to_set(defaults::ALLOW_SINGLE_PROPER),
        }
    }
}

impl Lexicons {
    /// Merge the `stop-words` crate's English list into the stopword set.
    ///
    /// Opt-in: the built-in stopword list is deliberately small so that
    /// classification stays predictable; callers that want aggressive
    /// function-word filtering can widen it with this. English only — the
    /// engine's tokenization rules are English-oriented.
    pub fn with_extended_stopwords(mut self) -> Self {
        for word in stop_words::get(stop_words::LANGUAGE::English) {
            self.stopwords.insert(word.to_lowercase());
        }
        self
    }

    pub fn is_stopword(&self, lower: &str) -> bool {
        self.stopwords.contains(lower)
    }

    /// Generic-single membership, tested on the word itself and on its
    /// naive singular form. Singularization never alters emitted text.
    pub fn is_generic_single(&self, lower: &str) -> bool {
        self.generic_single.contains(lower)
            || self.generic_single.contains(singularize(lower))
    }

    pub fn is_generic_first(&self, lower: &str) -> bool {
        self.generic_first.contains(lower)
    }

    pub fn is_risk_term(&self, lower: &str) -> bool {
        self.risk_terms.contains(lower)
    }

    pub fn is_run_follower(&self, lower: &str) -> bool {
        self.run_followers.contains(lower)
    }

    pub fn is_bigram_skip_first(&self, lower: &str) -> bool {
        self.bigram_skip_first.contains(lower)
    }

    pub fn is_allowed_single_proper(&self, lower: &str) -> bool {
        self.allow_single_proper.contains(lower)
    }
}

/// Naive singular form: strip one trailing `s` unless the word ends in
/// `ss`. Used only for lexicon membership tests.
pub fn singularize(lower: &str) -> &str {
    if lower.ends_with("ss") {
        return lower;
    }
    lower.strip_suffix('s').unwrap_or(lower)
}
