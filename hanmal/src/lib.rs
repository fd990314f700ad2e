//! A Korean morphological analysis library: chunking by script family,
//! POS-trie-guided dynamic-programming segmentation of Korean chunks, and
//! scoring-based parse selection.
//!
//! [`tokenize`] is the single entry point most callers need; [`chunk`],
//! [`parse_chunk`] and [`collapse_nouns`] are exposed individually for
//! callers building a custom pipeline (e.g. the CLI's `--output` modes, or
//! tests that want to inspect one stage in isolation).

pub mod chunk;
pub mod collapse;
pub mod error;
pub mod format;
pub mod parse;
pub mod tokenize;

pub use chunk::chunk;
pub use collapse::collapse_nouns;
pub use error::TokenizeError;
pub use format::{format_json, format_text};
pub use parse::parse_chunk;
pub use tokenize::{normalize, tokenize, tokenize_with_profile};

pub use hanmal_core::{Pos, Token, TokenizerProfile};
pub use hanmal_dictionary::DictionaryProvider;
