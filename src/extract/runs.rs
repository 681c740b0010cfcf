//! Capitalized-triple and capitalisation-run detection.
//!
//! A capitalisation run is a contiguous sequence of capitalized-or-numeric
//! tokens — the engine's proxy for a proper-noun phrase (`Harry Potter`,
//! `Super Bowl 2025`). Runs are found in a single left-to-right scan;
//! every accepted run consumes its positions so later stages do not
//! re-fragment it.
//!
//! Two sequences deliberately fail run detection and fall through to the
//! later passes:
//! - a 2-token sequence whose first token is generic-single and whose
//!   second is a risk term (`Gaming Keyboard` is a product pair, not a
//!   proper noun), and
//! - a digit-free sequence starting with an all-caps token (`LED RGB USB
//!   Gaming Keyboard` is an acronym chain, handled token by token).

use super::{join_norm, PhraseList};
use crate::lexicon::Lexicons;
use crate::types::{Token, TokenShape};

/// Emit `Cap (of|the) Cap` spans verbatim and consume them, so titles
/// like `Call of Duty` survive as one phrase.
pub(crate) fn emit_capitalized_triples(
    tokens: &[Token],
    consumed: &mut [bool],
    out: &mut PhraseList<'_>,
) {
    if tokens.len() < 3 {
        return;
    }
    for i in 0..tokens.len() - 2 {
        if consumed[i] || consumed[i + 1] || consumed[i + 2] {
            continue;
        }
        let connector = matches!(tokens[i + 1].lower.as_str(), "of" | "the");
        if connector && tokens[i].leads_upper() && tokens[i + 2].leads_upper() {
            out.push(format!(
                "{} {} {}",
                tokens[i].raw,
                tokens[i + 1].raw,
                tokens[i + 2].raw
            ));
            consumed[i] = true;
            consumed[i + 1] = true;
            consumed[i + 2] = true;
        }
    }
}

/// Scan for capitalisation runs and emit their phrases.
///
/// Qualifying individual tokens from non-digit runs go to `deferred`
/// (emitted after the bigram pass). Digit runs emit phrases only, and
/// their positions are marked in `pair_blocked`.
pub(crate) fn emit_runs(
    tokens: &[Token],
    lex: &Lexicons,
    consumed: &mut [bool],
    pair_blocked: &mut [bool],
    out: &mut PhraseList<'_>,
    deferred: &mut Vec<String>,
) {
    let n = tokens.len();
    let mut i = 0;
    while i + 1 < n {
        if consumed[i] || !can_start(&tokens[i]) {
            i += 1;
            continue;
        }
        // A run needs at least one extension token.
        if consumed[i + 1] || !can_extend(&tokens[i + 1], lex) {
            i += 1;
            continue;
        }
        let mut j = i + 2;
        while j < n && !consumed[j] && can_extend(&tokens[j], lex) {
            j += 1;
        }
        let run = &tokens[i..j];

        // Generic word + risk term only looks like a proper noun; the
        // bigram pass owns it.
        if run.len() == 2
            && lex.is_generic_single(&run[0].lower)
            && lex.is_risk_term(&run[1].lower)
        {
            i += 1;
            continue;
        }

        let has_digit = run.iter().any(Token::has_digit);

        // Acronym chains are not runs; retry from the next token.
        if !has_digit && run[0].shape == TokenShape::AllCaps {
            i += 1;
            continue;
        }

        if has_digit {
            emit_digit_run(run, out);
        } else {
            emit_plain_run(run, lex, out);
            let after_by = i > 0 && tokens[i - 1].lower == "by";
            let follower = j < n && lex.is_run_follower(&tokens[j].lower);
            if !after_by && !follower {
                defer_run_singles(run, lex, deferred);
            }
            if follower {
                // The follower goes with the run; it may still close a
                // bigram (`fan club`) but cannot open one.
                consumed[j] = true;
            }
        }

        for k in i..j {
            consumed[k] = true;
            if has_digit {
                pair_blocked[k] = true;
            }
        }
        i = j;
    }
}

/// A run may start at any capitalized or internally-capitalized token —
/// including a capitalized stopword, so title-leading `The Beatles`
/// holds together.
fn can_start(t: &Token) -> bool {
    t.leads_upper() || t.shape == TokenShape::InnerCaps
}

/// Extension tokens must be capitalized-or-numeric and not stopwords.
fn can_extend(t: &Token, lex: &Lexicons) -> bool {
    t.run_member_shape() && !lex.is_stopword(&t.lower)
}

/// Digit-bearing run policy (`iPhone 15 Pro Max`, `NFL Super Bowl 2025`).
fn emit_digit_run(run: &[Token], out: &mut PhraseList<'_>) {
    if run[0].shape == TokenShape::AllCaps && run.len() >= 3 {
        // Leading acronym: split it off, then treat the rest as the
        // product phrase.
        if let Some(prefix) = run[0].acronym_prefix() {
            out.push(prefix.to_string());
        }
        out.push(run[0].norm.clone());
        let sub = &run[1..];
        out.push(join_norm(sub));
        if sub.len() >= 2 {
            out.push(join_norm(&sub[..2]));
        }
    } else {
        out.push(join_norm(run));
    }
}

/// Digit-free run policy: pairs only, the length deciding which pair.
fn emit_plain_run(run: &[Token], lex: &Lexicons, out: &mut PhraseList<'_>) {
    if run.len() == 2 {
        if !lex.is_generic_single(&run[0].lower) {
            out.push(join_norm(run));
        }
        return;
    }
    let weak_lead =
        lex.is_generic_first(&run[0].lower) || lex.is_generic_single(&run[0].lower);
    if weak_lead {
        // `Star Wars Jedi` → `Star Wars`
        if !lex.is_stopword(&run[run.len() - 1].lower) {
            out.push(join_norm(&run[..2]));
        }
    } else {
        // `Marvel Avengers Endgame` → `Avengers Endgame`
        out.push(join_norm(&run[run.len() - 2..]));
    }
}

/// Individual tokens from a non-digit run that may stand alone.
fn defer_run_singles(run: &[Token], lex: &Lexicons, deferred: &mut Vec<String>) {
    if run.len() == 2 {
        let t = &run[1];
        if !lex.is_generic_single(&t.lower) && lex.is_allowed_single_proper(&t.lower) {
            push_single_deferred(t, deferred);
        }
        return;
    }
    for (k, t) in run.iter().enumerate() {
        if t.shape == TokenShape::Numeric {
            continue;
        }
        if lex.is_generic_single(&t.lower) {
            continue;
        }
        if k == 0 && lex.is_generic_first(&t.lower) {
            continue;
        }
        push_single_deferred(t, deferred);
    }
}

fn push_single_deferred(t: &Token, deferred: &mut Vec<String>) {
    deferred.push(t.norm.clone());
    if let Some(prefix) = t.acronym_prefix() {
        deferred.push(prefix.to_string());
    }
}
