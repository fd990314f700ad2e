use hanmal_core::Pos;

/// The dictionary contract the chunk parser consumes, per the tokenizer's
/// component design: constant-time membership tests per POS, a handful of
/// total deterministic predicates used to refine unknown nouns, and a
/// frequency lookup used by the scoring function. Implementations must
/// tolerate concurrent [`DictionaryProvider::add_words`] calls interleaved
/// with reads; the parser never calls `add_words` itself.
pub trait DictionaryProvider: Send + Sync {
    /// Whether `word` is attested in the dictionary for `pos`.
    fn contains(&self, pos: Pos, word: &str) -> bool;

    /// Whether `word` is a recognizable personal name.
    fn is_name(&self, word: &str) -> bool;

    /// Whether `word` is a plausible phonetic variation of a Korean name
    /// (e.g. informal spellings of a given name).
    fn is_korean_name_variation(&self, word: &str) -> bool;

    /// Whether `word` is a Korean numeral (Sino-Korean or native).
    fn is_korean_number(&self, word: &str) -> bool;

    /// A `[0.0, 1.0]` commonness score for a noun; unattested nouns score
    /// `0.0`. Higher means more common (cheaper to include in a parse).
    fn noun_frequency(&self, word: &str) -> f64;

    /// Inserts `words` into the dictionary under `pos`. Visible to every
    /// subsequent `contains` call, including ones already in flight on
    /// other threads racing this call.
    fn add_words(&self, pos: Pos, words: &[String]);
}
