//! Token types and shape classification.
//!
//! A [`Token`] is a maximal run of alphanumeric characters, optionally
//! joined internally by apostrophe or hyphen (`Coca-Cola`, `Taylor's`).
//! Every token carries both its raw surface text and a normalized form
//! with any trailing possessive suffix stripped; classification and
//! emission work on the normalized form, while a few rules (quoted spans,
//! the leading `X inspired`/`X version` pair) emit raw text verbatim.

/// Shape class of a token, derived from its normalized text.
///
/// Classes are mutually exclusive; the first matching class wins in the
/// order listed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenShape {
    /// Entirely digits (`2025`). Never emitted standalone.
    Numeric,
    /// Contains at least one letter and every letter is uppercase
    /// (`NASA`, `F1`, `GOAT`).
    AllCaps,
    /// First character uppercase, at least one lowercase letter
    /// (`Disney`, `Coca-Cola`, `AI-generated`).
    Capitalized,
    /// First character lowercase with an uppercase letter later
    /// (`iPhone`, `eBay`).
    InnerCaps,
    /// Everything else (`mug`, `funny`).
    Lower,
}

/// A single tokenized word from the input title.
#[derive(Debug, Clone)]
pub struct Token {
    /// Surface text exactly as matched.
    pub raw: String,
    /// Surface text with a trailing `'s`/`’s` stripped.
    pub norm: String,
    /// Lowercased normalized text, precomputed for lexicon lookups.
    pub lower: String,
    /// Shape class of the normalized text.
    pub shape: TokenShape,
}

impl Token {
    /// Build a token from one regex match of the word pattern.
    pub fn new(raw: &str) -> Self {
        let norm = strip_possessive(raw).to_string();
        let lower = norm.to_lowercase();
        let shape = classify(&norm);
        Token {
            raw: raw.to_string(),
            norm,
            lower,
            shape,
        }
    }

    /// True when the first character is uppercase (covers both the
    /// `AllCaps` and `Capitalized` shapes). This is the "capitalized"
    /// predicate used by run extension and the single-token rules.
    pub fn leads_upper(&self) -> bool {
        matches!(self.shape, TokenShape::AllCaps | TokenShape::Capitalized)
    }

    /// True when the token may appear inside a capitalisation run
    /// (capitalized or numeric).
    pub fn run_member_shape(&self) -> bool {
        self.leads_upper() || self.shape == TokenShape::Numeric
    }

    /// True when any character is a digit. Used to pick the digit policy
    /// for capitalisation runs (`iPhone 15 Pro Max`).
    pub fn has_digit(&self) -> bool {
        self.norm.chars().any(|c| c.is_numeric())
    }

    /// The all-uppercase prefix before the first hyphen, if any
    /// (`AI-generated` → `AI`). The prefix must contain no lowercase
    /// letters, at least one letter, and at least two characters, so
    /// `F1-style` yields `F1` but `T-shirt` yields nothing.
    pub fn acronym_prefix(&self) -> Option<&str> {
        let (prefix, _) = self.norm.split_once('-')?;
        let mut saw_letter = false;
        for c in prefix.chars() {
            if c.is_alphabetic() {
                if c.is_lowercase() {
                    return None;
                }
                saw_letter = true;
            }
        }
        if saw_letter && prefix.chars().count() >= 2 {
            Some(prefix)
        } else {
            None
        }
    }
}

/// Strip a trailing possessive suffix (`'s`, `’s`, and uppercase forms).
pub fn strip_possessive(raw: &str) -> &str {
    for suffix in ["'s", "’s", "'S", "’S"] {
        if let Some(stripped) = raw.strip_suffix(suffix) {
            return stripped;
        }
    }
    raw
}

/// Classify the shape of a normalized token.
fn classify(norm: &str) -> TokenShape {
    let mut chars = norm.chars();
    let first = match chars.next() {
        Some(c) => c,
        None => return TokenShape::Lower,
    };

    if norm.chars().all(|c| c.is_numeric()) {
        return TokenShape::Numeric;
    }

    let letters = norm.chars().filter(|c| c.is_alphabetic());
    let mut saw_letter = false;
    let mut all_upper = true;
    for c in letters {
        saw_letter = true;
        if c.is_lowercase() {
            all_upper = false;
        }
    }
    if saw_letter && all_upper {
        return TokenShape::AllCaps;
    }

    if first.is_uppercase() {
        TokenShape::Capitalized
    } else if norm.chars().skip(1).any(|c| c.is_uppercase()) {
        TokenShape::InnerCaps
    } else {
        TokenShape::Lower
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_classes() {
        assert_eq!(Token::new("2025").shape, TokenShape::Numeric);
        assert_eq!(Token::new("NASA").shape, TokenShape::AllCaps);
        assert_eq!(Token::new("F1").shape, TokenShape::AllCaps);
        assert_eq!(Token::new("GOAT").shape, TokenShape::AllCaps);
        assert_eq!(Token::new("Disney").shape, TokenShape::Capitalized);
        assert_eq!(Token::new("Coca-Cola").shape, TokenShape::Capitalized);
        assert_eq!(Token::new("AI-generated").shape, TokenShape::Capitalized);
        assert_eq!(Token::new("iPhone").shape, TokenShape::InnerCaps);
        assert_eq!(Token::new("mug").shape, TokenShape::Lower);
    }

    #[test]
    fn test_possessive_stripping() {
        let t = Token::new("Taylor’s");
        assert_eq!(t.raw, "Taylor’s");
        assert_eq!(t.norm, "Taylor");
        assert_eq!(t.lower, "taylor");

        let t = Token::new("Nestlé’s");
        assert_eq!(t.norm, "Nestlé");
        assert_eq!(t.shape, TokenShape::Capitalized);

        let t = Token::new("Taylor's");
        assert_eq!(t.norm, "Taylor");
    }

    #[test]
    fn test_leads_upper() {
        assert!(Token::new("NASA").leads_upper());
        assert!(Token::new("Disney").leads_upper());
        assert!(!Token::new("iPhone").leads_upper());
        assert!(!Token::new("2025").leads_upper());
        assert!(!Token::new("mug").leads_upper());
    }

    #[test]
    fn test_acronym_prefix() {
        assert_eq!(Token::new("AI-generated").acronym_prefix(), Some("AI"));
        assert_eq!(Token::new("Coca-Cola").acronym_prefix(), None);
        assert_eq!(Token::new("T-shirt").acronym_prefix(), None);
        assert_eq!(Token::new("plain").acronym_prefix(), None);
    }

    #[test]
    fn test_has_digit() {
        assert!(Token::new("15").has_digit());
        assert!(Token::new("F1").has_digit());
        assert!(!Token::new("Pro").has_digit());
    }
}
