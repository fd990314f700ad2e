//! Splits raw input into maximal same-class runs, in one left-to-right pass.
//!
//! Classification order is fixed: URL, then email, then hashtag, then
//! mention, then the base character-class rules (Hangul
//! syllable, Hangul jamo, ASCII letter, digit, punctuation, whitespace,
//! other). A run only breaks when the class changes, so `"abc123"` is two
//! chunks (`Foreign`, `Number`), not six.

use hanmal_core::{Pos, Token};
use once_cell::sync::Lazy;
use regex::Regex;

static URL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:https?://|www\.)\S+").unwrap());
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[[:word:].+-]+@[[:word:]-]+\.[[:word:].-]+").unwrap());
static HASHTAG_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^#[[:word:]가-힣]+").unwrap());
static MENTION_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^@[[:word:]가-힣]+").unwrap());

const TRAILING_PUNCTUATION: &[char] = &['…', '·', '‘', '’', '“', '”', '—', '–'];

fn is_hangul_syllable(c: char) -> bool {
    ('\u{AC00}'..='\u{D7A3}').contains(&c)
}

fn is_hangul_jamo(c: char) -> bool {
    ('\u{1100}'..='\u{11FF}').contains(&c) || ('\u{3130}'..='\u{318F}').contains(&c)
}

fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation() || TRAILING_PUNCTUATION.contains(&c)
}

/// The base classification of a single character, ignoring the multi-char
/// URL/email/hashtag/mention rules handled separately in [`chunk`].
fn classify(c: char) -> Pos {
    if c.is_whitespace() {
        Pos::Space
    } else if is_hangul_syllable(c) {
        Pos::Korean
    } else if is_hangul_jamo(c) {
        Pos::KoreanParticle
    } else if c.is_ascii_digit() {
        Pos::Number
    } else if is_punctuation(c) {
        Pos::Punctuation
    } else {
        // Alphabetic (Latin, etc.) and any other remaining symbol both
        // fall back to Foreign; there's no separate "symbol" tag.
        Pos::Foreign
    }
}

/// Tries each special-form regex at `rest`'s start, longest-priority order.
/// Returns the matched text and its tag if one fires.
fn match_special_form(rest: &str) -> Option<(&str, Pos)> {
    if let Some(m) = URL_RE.find(rest) {
        return Some((m.as_str(), Pos::Url));
    }
    if let Some(m) = EMAIL_RE.find(rest) {
        return Some((m.as_str(), Pos::Email));
    }
    if let Some(m) = HASHTAG_RE.find(rest) {
        return Some((m.as_str(), Pos::Hashtag));
    }
    if let Some(m) = MENTION_RE.find(rest) {
        return Some((m.as_str(), Pos::ScreenName));
    }
    None
}

/// Classifies and segments `text` into maximal runs, covering it exactly.
/// Offsets and lengths are in characters, matching [`Token`]'s contract.
pub fn chunk(text: &str) -> Vec<Token> {
    let chars: Vec<char> = text.chars().collect();
    let mut byte_offsets: Vec<usize> = Vec::with_capacity(chars.len() + 1);
    let mut byte_pos = 0;
    for &c in &chars {
        byte_offsets.push(byte_pos);
        byte_pos += c.len_utf8();
    }
    byte_offsets.push(byte_pos);

    let mut tokens = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        let rest = &text[byte_offsets[i]..];
        if let Some((matched, pos)) = match_special_form(rest) {
            let char_len = matched.chars().count();
            tokens.push(Token::new(matched, pos, i, char_len));
            i += char_len;
            continue;
        }

        let run_start = i;
        let class = classify(chars[i]);
        i += 1;
        while i < chars.len() && classify(chars[i]) == class {
            i += 1;
        }
        let run: String = chars[run_start..i].iter().collect();
        tokens.push(Token::new(run, class, run_start, i - run_start));
    }
    tokens
}
