//! Built-in word lists.
//!
//! These are configuration data, not code: the engine never consults a
//! literal answer table, only these category sets. All entries are
//! lowercase; membership checks lowercase the token first (and, for the
//! generic-single set, also try a naive singular form).

/// Function words ignored everywhere: never emitted alone, never the
/// second element of a pair, and filtered out of the final phrase list.
pub const STOPWORDS: &[&str] = &[
    // Articles / determiners
    "the", "a", "an", "that", "this", "these", "those",
    // Prepositions / conjunctions
    "of", "for", "and", "or", "to", "with", "in", "on", "at", "by", "vs",
    "from", "as", "into",
    // Copulas
    "is", "are", "be",
    // Pronouns
    "i", "he", "she", "it", "we", "you", "they", "my", "his", "her", "its",
    "our", "your", "their",
];

/// Words too common to be individually trademark-relevant. They are
/// suppressed as standalone phrases but may still appear inside pairs
/// (`era tour`, `wallet case`).
pub const GENERIC_SINGLE: &[&str] = &[
    // Apparel and printed merchandise
    "t", "t-shirt", "tshirt", "shirt", "tee", "sweatshirt", "hoodie",
    "gown", "nightgown", "outfit", "hat", "sock",
    // Household / gift items
    "mug", "case", "decal", "logo", "ornament", "bundle", "poster",
    "wallet", "keychain", "mat", "skin", "controller", "drone", "sticker",
    "pillow", "blanket", "tumbler", "bag", "gift",
    // Footwear
    "shoe", "shoes",
    // Event / fandom filler
    "fan", "club", "legend", "era", "tour", "lover", "lovers", "meme",
    "parody", "version", "lyric", "quote", "aesthetic", "inspired",
    // Activities and common nouns
    "racing", "running", "action", "gaming", "program", "space", "art",
    "sport", "sports", "keyboard", "war", "chocolate", "christmas", "mom",
];

/// Words that are weak in leading position: skipped as a leading single
/// token, and a capitalisation run starting with one keeps only its first
/// two tokens as a bigram.
pub const GENERIC_FIRST: &[&str] = &["funny", "custom", "swift", "star"];

/// Words that make the trailing position of a two-token phrase
/// interesting (`logo decal`, `Gaming Keyboard`).
pub const RISK_TERMS: &[&str] = &[
    "decal", "case", "keyboard", "controller", "ornament", "bundle", "mug",
    "hoodie", "poster", "tee", "shirt", "gown", "skin", "wallet",
    "keychain", "gift", "mat", "shoes", "shoe", "club", "fan", "legend",
    "program", "tour", "action", "running", "lovers", "inspired",
    "aesthetic", "outfit", "logo", "anime", "quote", "princess", "sticker",
];

/// Words that, immediately after a capitalisation run, suppress emission
/// of the run's individual tokens (`Harry Potter inspired`, `Elon Musk
/// fan club`).
pub const RUN_FOLLOWERS: &[&str] = &["inspired", "fan"];

/// Words that must not lead an emitted bigram, preventing chained pairs
/// like `lovers bundle` or `controller skin` once the preceding pair has
/// already been taken.
pub const BIGRAM_SKIP_FIRST: &[&str] = &[
    "inspired", "keepsake", "controller", "lovers", "action", "outfit",
];

/// Proper-noun exceptions allowed to stand alone even when flanked by
/// other capitalized tokens inside a run (`Taylor Swift` → `Swift`).
pub const ALLOW_SINGLE_PROPER: &[&str] = &["swift", "beatles"];
