//! Adjacent-pair and `X vs Y` emission rules.
//!
//! The bigram pass walks every adjacent token pair, including pairs that
//! straddle a consumed run boundary (`Jedi hoodie`), but never a pair
//! wholly inside one (`Taylor Swift` is the run's job). A pair is worth
//! emitting when its second token is a risk term, or when a capitalized
//! word is followed by a bare number (`Duty 2`); a small special case
//! keeps title-leading `X inspired` / `X's version` pairs, lowercased
//! when the leading word is generic.

use super::PhraseList;
use crate::lexicon::Lexicons;
use crate::types::{Token, TokenShape};

pub(crate) fn emit_bigrams(
    tokens: &[Token],
    lex: &Lexicons,
    consumed: &[bool],
    pair_blocked: &[bool],
    out: &mut PhraseList<'_>,
) {
    for i in 0..tokens.len().saturating_sub(1) {
        // Both tokens inside consumed spans: the span already owns them.
        if consumed[i] && consumed[i + 1] {
            continue;
        }
        if pair_blocked[i] {
            continue;
        }
        let a = &tokens[i];
        let b = &tokens[i + 1];

        if lex.is_stopword(&a.lower) || lex.is_bigram_skip_first(&a.lower) {
            continue;
        }
        if lex.is_stopword(&b.lower) {
            continue;
        }

        // Title-leading `Anime inspired` / `Taylor's version`: keep the
        // pair as written, lowercased when the lead is generic.
        if i == 0
            && matches!(b.lower.as_str(), "inspired" | "version")
            && a.leads_upper()
        {
            let pair = format!("{} {}", a.raw, b.raw);
            if lex.is_generic_single(&a.lower) {
                out.push(pair.to_lowercase());
            } else {
                out.push(pair);
            }
            continue;
        }

        if lex.is_risk_term(&b.lower) {
            // `tour tee`, `club tee`: a generic lowercase word plus the
            // single most common merch noun says nothing.
            let generic_tee =
                b.lower == "tee" && !a.leads_upper() && lex.is_generic_single(&a.lower);
            if !generic_tee {
                out.push(format!("{} {}", a.norm, b.norm));
            }
            continue;
        }

        // Capitalized word followed by a bare number (`Duty 2`), again
        // lowercased when a generic word leads the title.
        if a.leads_upper() && b.shape == TokenShape::Numeric {
            let pair = format!("{} {}", a.norm, b.norm);
            if i == 0 && lex.is_generic_single(&a.lower) {
                out.push(pair.to_lowercase());
            } else {
                out.push(pair);
            }
        }
    }
}

/// Emit `A vs B` phrases: a capitalized span on the left, one
/// capitalized token on the right, joined on the raw text.
pub(crate) fn emit_vs_phrases(tokens: &[Token], out: &mut PhraseList<'_>) {
    for i in 1..tokens.len() {
        if tokens[i].lower != "vs" {
            continue;
        }
        let Some(right) = tokens.get(i + 1) else {
            continue;
        };
        if !right.leads_upper() {
            continue;
        }
        let mut s = i;
        while s > 0 && tokens[s - 1].shape == TokenShape::Capitalized {
            s -= 1;
        }
        if s < i {
            let left = tokens[s..i]
                .iter()
                .map(|t| t.raw.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            out.push(format!("{left} vs {}", right.raw));
        }
    }
}
