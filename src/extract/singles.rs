//! Single-token emission rules.
//!
//! Runs over every position the earlier stages did not consume. The
//! rules form a fixed-order chain: category skips first, then the
//! generic-successor shortcut, then the shape/context predicates. A
//! token that survives is emitted on its normalized (possessive-stripped)
//! text, with hyphenated all-caps prefixes split off as extra phrases.

use super::PhraseList;
use crate::lexicon::Lexicons;
use crate::types::{Token, TokenShape};

pub(crate) fn emit_singles(
    tokens: &[Token],
    lex: &Lexicons,
    consumed: &[bool],
    out: &mut PhraseList<'_>,
) {
    for i in 0..tokens.len() {
        if consumed[i] {
            continue;
        }
        let t = &tokens[i];

        // Category skips.
        if t.shape == TokenShape::Numeric {
            continue;
        }
        if lex.is_stopword(&t.lower) || lex.is_generic_single(&t.lower) {
            continue;
        }

        // A generic, non-risk, lowercase successor vouches for this
        // token: emit it directly, skipping the generic neighbor
        // (`DJI drone …` → `DJI`). Checked before the leading-position
        // skip so `funny t-shirt` still yields `funny`.
        let generic_successor = tokens.get(i + 1).is_some_and(|next| {
            lex.is_generic_single(&next.lower)
                && !lex.is_risk_term(&next.lower)
                && !next.leads_upper()
        });
        if generic_successor {
            out.push_single(t);
            continue;
        }

        if i == 0 && lex.is_generic_first(&t.lower) {
            continue;
        }

        let emit = match t.shape {
            // Acronyms and iPhone-style internal capitals always stand.
            TokenShape::AllCaps | TokenShape::InnerCaps => true,
            // A leading token stands only when nothing after it carries
            // a capital (`funny …`, `Disney princess nightgown`).
            _ if i == 0 => no_later_capitals(&tokens[1..]),
            _ => {
                let prev = &tokens[i - 1];
                matches!(prev.lower.as_str(), "for" | "and" | "vs" | "by")
                    || prev.leads_upper()
                    || prev.shape == TokenShape::Numeric
                    || (t.leads_upper() && !prev.leads_upper())
            }
        };
        if emit {
            out.push_single(t);
        }
    }
}

fn no_later_capitals(rest: &[Token]) -> bool {
    rest.iter()
        .all(|t| !t.norm.chars().any(char::is_uppercase))
}
