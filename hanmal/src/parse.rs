//! The dynamic-programming parser that segments one Korean chunk into a
//! scored sequence of dictionary-attested morphemes admitted by the POS
//! trie.
//!
//! Candidates are kept as a persistent parent-pointer list (`Rc<ParseNode>`)
//! so that the up-to-5 survivors at each end-position share their common
//! prefix instead of each carrying an owned copy of it.

use std::collections::BTreeSet;
use std::rc::Rc;

use hanmal_core::grammar::{NodeId, Trie};
use hanmal_core::{HanmalResult, Pos, Token, TokenizerProfile};
use hanmal_dictionary::DictionaryProvider;
use log::trace;

const TOP_N_PER_STATE: usize = 5;
const MAX_TRACE_BACK: usize = 8;

/// Every POS the fast path may match a whole chunk against, scanned in this
/// fixed order so a chunk attested under more than one POS resolves
/// deterministically.
const FAST_PATH_POS: [Pos; 15] = [
    Pos::Noun,
    Pos::ProperNoun,
    Pos::Verb,
    Pos::Adjective,
    Pos::Adverb,
    Pos::Determiner,
    Pos::Exclamation,
    Pos::Conjunction,
    Pos::Josa,
    Pos::AdverbialJosa,
    Pos::Eomi,
    Pos::PreEomi,
    Pos::NounPrefix,
    Pos::VerbPrefix,
    Pos::Suffix,
];

struct ParseNode {
    parent: Option<Rc<ParseNode>>,
    token: Token,
}

fn collect_tokens(tail: &Option<Rc<ParseNode>>) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut cur = tail.clone();
    while let Some(node) = cur {
        tokens.push(node.token.clone());
        cur = node.parent.clone();
    }
    tokens.reverse();
    tokens
}

#[derive(Clone)]
struct CandidateParse {
    tail: Option<Rc<ParseNode>>,
    cur_trie: Vec<NodeId>,
    ending: Option<Pos>,
    words: u32,
}

/// Weighted sum of the derived counters named by the scoring design, plus a
/// tiebreaker used only when two candidates' scores are exactly equal.
/// Lower is better for both.
fn score_parse(tokens: &[Token], words: u32, dictionary: &dyn DictionaryProvider, profile: &TokenizerProfile) -> (f64, i64) {
    let unknown_count = tokens.iter().filter(|t| t.unknown).count() as f64;
    let unknown_coverage: f64 = tokens.iter().filter(|t| t.unknown).map(|t| t.length as f64).sum();
    let freq: f64 = tokens
        .iter()
        .filter(|t| t.pos == Pos::Noun)
        .map(|t| 1.0 - dictionary.noun_frequency(&t.text))
        .sum();
    let unknown_pos_count = tokens
        .iter()
        .filter(|t| t.unknown)
        .map(|t| t.pos)
        .collect::<BTreeSet<_>>()
        .len() as f64;
    let words_term = (words + 1) as f64;
    let initial_pos_arr = match tokens.first() {
        Some(t) if matches!(t.pos, Pos::Josa | Pos::AdverbialJosa | Pos::Eomi | Pos::PreEomi | Pos::Suffix) => 1.0,
        _ => 0.0,
    };
    let has_space = tokens.iter().filter(|t| t.pos == Pos::Space).count() as f64;
    let non_preferred_pos = tokens
        .iter()
        .filter(|t| !matches!(t.pos, Pos::Noun | Pos::Verb | Pos::Adjective))
        .count() as f64;
    let pos_count = tokens.len() as f64;

    let score = profile.unknown_weight * unknown_count
        + profile.unknown_coverage_weight * unknown_coverage
        + profile.freq_weight * freq
        + profile.unknown_pos_count_weight * unknown_pos_count
        + profile.words_weight * words_term
        + profile.initial_pos_arr_weight * initial_pos_arr
        + profile.space_guide_weight * has_space
        + profile.preferred_pos_weight * non_preferred_pos
        + profile.pos_count_weight * pos_count;

    let pos_tie_breaker = tokens
        .iter()
        .filter(|t| t.unknown && t.pos == Pos::ProperNoun)
        .count() as i64;

    (score, pos_tie_breaker)
}

/// Refines a dictionary-miss `Noun` candidate word into its final POS and
/// unknown-ness, per the tokenizer's unknown-noun disambiguation rule.
fn classify_unknown_noun(word: &str, dictionary: &dyn DictionaryProvider) -> (Pos, bool) {
    let is_name = dictionary.is_name(word);
    let is_name_variation = dictionary.is_korean_name_variation(word);
    let is_number = dictionary.is_korean_number(word);
    let unknown = !(is_name || is_name_variation || is_number);
    let pos = if unknown || is_name || is_name_variation {
        Pos::ProperNoun
    } else {
        Pos::Noun
    };
    (pos, unknown)
}

/// Segments one Korean chunk starting at `chunk_offset` (in characters of
/// the overall input) into a scored token sequence. Never fails: an
/// unsegmentable chunk falls back to a single unknown `Noun` token.
pub fn parse_chunk(
    chunk_text: &str,
    chunk_offset: usize,
    trie: &Trie,
    dictionary: &dyn DictionaryProvider,
    profile: &TokenizerProfile,
) -> HanmalResult<Vec<Token>> {
    let chars: Vec<char> = chunk_text.chars().collect();
    let length = chars.len();
    if length == 0 {
        return Ok(Vec::new());
    }

    for &pos in &FAST_PATH_POS {
        if dictionary.contains(pos, chunk_text) {
            trace!("fast-path hit for chunk \"{}\" as {}", chunk_text, pos);
            return Ok(vec![Token::new(chunk_text, pos, chunk_offset, length)]);
        }
    }

    let solutions = build_solutions(&chars, chunk_offset, trie, dictionary, profile);

    match solutions[length].iter().find(|c| c.ending.is_some()) {
        Some(best) => Ok(collect_tokens(&best.tail)),
        None => Ok(vec![Token::unknown(chunk_text, Pos::Noun, chunk_offset, length)]),
    }
}

/// Runs the DP itself, bucket by end position. Split out from [`parse_chunk`]
/// so tests can inspect bucket sizes directly instead of only the parser's
/// final pick.
fn build_solutions(
    chars: &[char],
    chunk_offset: usize,
    trie: &Trie,
    dictionary: &dyn DictionaryProvider,
    profile: &TokenizerProfile,
) -> Vec<Vec<CandidateParse>> {
    let length = chars.len();
    let mut solutions: Vec<Vec<CandidateParse>> = vec![Vec::new(); length + 1];
    solutions[0].push(CandidateParse {
        tail: None,
        cur_trie: trie.roots().to_vec(),
        ending: None,
        words: 0,
    });

    for end in 1..=length {
        let min_start = end.saturating_sub(MAX_TRACE_BACK);
        let mut extended = Vec::new();
        for start in (min_start..end).rev() {
            let word: String = chars[start..end].iter().collect();
            for candidate in &solutions[start] {
                let mut frontier: Vec<(NodeId, u32)> = Vec::new();
                if candidate.ending.is_some() {
                    frontier.extend(candidate.cur_trie.iter().map(|&n| (n, 0)));
                    frontier.extend(trie.roots().iter().map(|&r| (r, 1)));
                } else {
                    frontier.extend(candidate.cur_trie.iter().map(|&n| (n, 0)));
                }

                for (node_id, words_delta) in frontier {
                    let node = trie.node(node_id);
                    let accepted = node.pos == Pos::Noun || dictionary.contains(node.pos, &word);
                    if !accepted {
                        continue;
                    }

                    let (token_pos, unknown) = if node.pos == Pos::Noun && !dictionary.contains(Pos::Noun, &word) {
                        classify_unknown_noun(&word, dictionary)
                    } else if node.pos == Pos::Noun && dictionary.contains(Pos::ProperNoun, &word) {
                        (Pos::ProperNoun, false)
                    } else {
                        (node.pos, false)
                    };

                    let token = if unknown {
                        Token::unknown(word.clone(), token_pos, chunk_offset + start, end - start)
                    } else {
                        Token::new(word.clone(), token_pos, chunk_offset + start, end - start)
                    };

                    let new_tail = Some(Rc::new(ParseNode {
                        parent: candidate.tail.clone(),
                        token,
                    }));
                    extended.push(CandidateParse {
                        tail: new_tail,
                        cur_trie: trie.advance(node_id),
                        ending: node.ending,
                        words: candidate.words + words_delta,
                    });
                }
            }
        }

        let mut scored: Vec<(f64, i64, CandidateParse)> = extended
            .into_iter()
            .map(|c| {
                let tokens = collect_tokens(&c.tail);
                let (score, tie) = score_parse(&tokens, c.words, dictionary, profile);
                (score, tie, c)
            })
            .collect();
        scored.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap().then(a.1.cmp(&b.1)));
        scored.truncate(TOP_N_PER_STATE);
        solutions[end] = scored.into_iter().map(|(_, _, c)| c).collect();
    }

    solutions
}
