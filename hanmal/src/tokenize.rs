//! The crate's single entry point: wires normalization, chunking, DP parsing
//! and noun collapsing together.

use std::borrow::Cow;

use hanmal_core::grammar::{build_trie, default_grammar, Trie};
use hanmal_core::{Pos, Token, TokenizerProfile};
use hanmal_dictionary::DictionaryProvider;
use once_cell::sync::Lazy;

use crate::chunk::chunk;
use crate::collapse::collapse_nouns;
use crate::error::TokenizeError;
use crate::parse::parse_chunk;

/// The default grammar compiled once and shared by every call that doesn't
/// supply its own trie. Building never fails for the bundled default
/// grammar, so a build failure here is treated as unrecoverable.
static DEFAULT_TRIE: Lazy<Trie> =
    Lazy::new(|| build_trie(&default_grammar()).expect("default grammar must compile"));

/// Identity pass-through. Extension point for a deployment that wants to
/// fold typos or colloquial spellings before chunking; this workspace does
/// not implement that folding.
pub fn normalize(text: &str) -> Cow<'_, str> {
    Cow::Borrowed(text)
}

/// Tokenizes `text` with the default grammar and profile.
pub fn tokenize(text: &str, dictionary: &dyn DictionaryProvider) -> Result<Vec<Token>, TokenizeError> {
    tokenize_with_profile(text, dictionary, &TokenizerProfile::default())
}

/// Tokenizes `text`, using `profile` to weight the DP parser's scoring
/// function. Chunks that are not Korean (numbers, punctuation, foreign
/// text, URLs, ...) pass through unchanged; only `Korean`-classified chunks
/// are parsed and noun-collapsed.
pub fn tokenize_with_profile(
    text: &str,
    dictionary: &dyn DictionaryProvider,
    profile: &TokenizerProfile,
) -> Result<Vec<Token>, TokenizeError> {
    let normalized = normalize(text);
    let chunks = chunk(&normalized);

    let mut tokens = Vec::new();
    for raw_chunk in chunks {
        if raw_chunk.pos != Pos::Korean {
            tokens.push(raw_chunk);
            continue;
        }
        let parsed = parse_chunk(&raw_chunk.text, raw_chunk.offset, &DEFAULT_TRIE, dictionary, profile)
            .map_err(|e| TokenizeError::new(raw_chunk.text.clone(), raw_chunk.offset, e))?;
        tokens.extend(collapse_nouns(parsed));
    }
    Ok(tokens)
}
