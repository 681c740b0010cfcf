//! Tokenization and quoted-span handling.
//!
//! Splits a product title into [`Token`]s: maximal runs of Unicode
//! letters/digits optionally joined internally by apostrophe or hyphen,
//! so `Coca-Cola`, `Taylor's` and `Nestlé` each come out as one unit.
//!
//! Double-quoted substrings are lifted out *before* tokenization: each
//! non-empty trimmed quoted span is a candidate phrase in its own right
//! and is removed from the working text so its contents are not also
//! tokenized independently. An unterminated quote simply fails to match
//! and its content is tokenized normally.

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::Token;

lazy_static! {
    /// Word pattern: alphanumeric runs joined by `'`, `’` or `-`.
    static ref WORD: Regex =
        Regex::new(r"[\p{Alphabetic}\p{N}]+(?:['’\-][\p{Alphabetic}\p{N}]+)*")
            .unwrap();

    /// Double-quoted span on a single line.
    static ref QUOTED: Regex = Regex::new("\"([^\"\n]+)\"").unwrap();
}

/// Extract quoted spans and return the working text with them removed.
///
/// The returned phrases are trimmed and non-empty, in order of appearance.
pub fn strip_quoted(text: &str) -> (String, Vec<String>) {
    let mut quoted = Vec::new();
    for cap in QUOTED.captures_iter(text) {
        let inner = cap[1].trim();
        if !inner.is_empty() {
            quoted.push(inner.to_string());
        }
    }
    let stripped = QUOTED.replace_all(text, " ").into_owned();
    (stripped, quoted)
}

/// Tokenize the working text into shaped tokens.
pub fn tokenize(text: &str) -> Vec<Token> {
    WORD.find_iter(text).map(|m| Token::new(m.as_str())).collect()
}
