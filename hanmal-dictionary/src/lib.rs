//! A concrete, in-process [`DictionaryProvider`] for the hanmal tokenizer.
//!
//! Dictionary loading and storage are explicitly out of scope for the
//! tokenizer's core (`hanmal-core`/`hanmal`); this crate is the ambient,
//! swappable default the core consumes through the trait, not a
//! requirement. Any other implementation of [`DictionaryProvider`] works
//! equally well as input to `hanmal::tokenize`.

pub mod heuristics;
pub mod provider;
pub mod word_list;

pub use provider::DictionaryProvider;
pub use word_list::WordListDictionary;
