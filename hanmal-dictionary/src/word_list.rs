use std::collections::HashMap;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use dashmap::{DashMap, DashSet};
use hanmal_core::error::HanmalErrorKind;
use hanmal_core::{HanmalResult, Pos};
use log::warn;

use crate::heuristics;
use crate::provider::DictionaryProvider;

const NOUNS: &str = include_str!("resources/nouns.txt");
const PROPER_NOUNS: &str = include_str!("resources/proper_nouns.txt");
const VERBS: &str = include_str!("resources/verbs.txt");
const ADJECTIVES: &str = include_str!("resources/adjectives.txt");
const ADVERBS: &str = include_str!("resources/adverbs.txt");
const DETERMINERS: &str = include_str!("resources/determiners.txt");
const EXCLAMATIONS: &str = include_str!("resources/exclamations.txt");
const CONJUNCTIONS: &str = include_str!("resources/conjunctions.txt");
const JOSA: &str = include_str!("resources/josa.txt");
const ADVERBIAL_JOSA: &str = include_str!("resources/adverbial_josa.txt");
const EOMI: &str = include_str!("resources/eomi.txt");
const PRE_EOMI: &str = include_str!("resources/pre_eomi.txt");
const NOUN_PREFIX: &str = include_str!("resources/noun_prefix.txt");
const VERB_PREFIX: &str = include_str!("resources/verb_prefix.txt");
const SUFFIX: &str = include_str!("resources/suffix.txt");
const SURNAMES: &str = include_str!("resources/surnames.txt");
const GIVEN_NAME_CHARS: &str = include_str!("resources/given_name_chars.txt");
const NUMBER_SYLLABLES: &str = include_str!("resources/number_syllables.txt");
const NATIVE_NUMBERS: &str = include_str!("resources/native_numbers.txt");
const NOUN_FREQUENCY: &str = include_str!("resources/noun_frequency.tsv");

fn parse_word_list(data: &str) -> HashSet<String> {
    data.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

fn parse_frequency_table(data: &str) -> HashMap<String, u32> {
    let mut table = HashMap::new();
    for line in data.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        if let Some((word, rank)) = line.split_once('\t') {
            if let Ok(rank) = rank.trim().parse::<u32>() {
                table.insert(word.trim().to_string(), rank);
            }
        }
    }
    table
}

/// Every POS the bundled word lists populate. `ProperNoun` has its own list
/// even though the grammar never reaches it directly (the DP parser assigns
/// it to dictionary-miss nouns per §4.4); see [`WordListDictionary::contains`].
const WORD_LIST_POS: [Pos; 15] = [
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

/// A concurrent, in-process [`DictionaryProvider`]. Per-POS membership sets
/// are sharded `DashSet`s so [`DictionaryProvider::add_words`] never blocks
/// a concurrent `contains` on an unrelated POS, matching the tokenizer's
/// concurrency model (read-mostly, safe under live mutation).
pub struct WordListDictionary {
    by_pos: DashMap<Pos, DashSet<String>>,
    surnames: HashSet<String>,
    given_name_chars: HashSet<String>,
    number_syllables: HashSet<String>,
    native_numbers: HashSet<String>,
    noun_rank: HashMap<String, u32>,
}

impl WordListDictionary {
    /// Builds the dictionary from the word lists embedded in this crate at
    /// compile time. Infallible: there is no I/O on this path.
    pub fn new() -> Self {
        let by_pos = DashMap::new();
        by_pos.insert(Pos::Noun, parse_word_list(NOUNS).into_iter().collect());
        by_pos.insert(Pos::ProperNoun, parse_word_list(PROPER_NOUNS).into_iter().collect());
        by_pos.insert(Pos::Verb, parse_word_list(VERBS).into_iter().collect());
        by_pos.insert(Pos::Adjective, parse_word_list(ADJECTIVES).into_iter().collect());
        by_pos.insert(Pos::Adverb, parse_word_list(ADVERBS).into_iter().collect());
        by_pos.insert(Pos::Determiner, parse_word_list(DETERMINERS).into_iter().collect());
        by_pos.insert(Pos::Exclamation, parse_word_list(EXCLAMATIONS).into_iter().collect());
        by_pos.insert(Pos::Conjunction, parse_word_list(CONJUNCTIONS).into_iter().collect());
        by_pos.insert(Pos::Josa, parse_word_list(JOSA).into_iter().collect());
        by_pos.insert(Pos::AdverbialJosa, parse_word_list(ADVERBIAL_JOSA).into_iter().collect());
        by_pos.insert(Pos::Eomi, parse_word_list(EOMI).into_iter().collect());
        by_pos.insert(Pos::PreEomi, parse_word_list(PRE_EOMI).into_iter().collect());
        by_pos.insert(Pos::NounPrefix, parse_word_list(NOUN_PREFIX).into_iter().collect());
        by_pos.insert(Pos::VerbPrefix, parse_word_list(VERB_PREFIX).into_iter().collect());
        by_pos.insert(Pos::Suffix, parse_word_list(SUFFIX).into_iter().collect());

        WordListDictionary {
            by_pos,
            surnames: parse_word_list(SURNAMES),
            given_name_chars: parse_word_list(GIVEN_NAME_CHARS),
            number_syllables: parse_word_list(NUMBER_SYLLABLES),
            native_numbers: parse_word_list(NATIVE_NUMBERS),
            noun_rank: parse_frequency_table(NOUN_FREQUENCY),
        }
    }

    /// Builds an empty dictionary with no words and no name/number tables.
    /// Useful for tests that want full control over what is attested.
    pub fn empty() -> Self {
        WordListDictionary {
            by_pos: DashMap::new(),
            surnames: HashSet::new(),
            given_name_chars: HashSet::new(),
            number_syllables: HashSet::new(),
            native_numbers: HashSet::new(),
            noun_rank: HashMap::new(),
        }
    }

    /// Loads each per-POS word list from `<dir>/<pos>.txt`, one word per
    /// line. Exercises the I/O error path the bundled `new()` constructor
    /// never takes: a missing file is logged and treated as an empty list
    /// rather than failing the whole load, but an unreadable *existing*
    /// file is a hard [`HanmalErrorKind::Io`] error.
    pub fn from_dir(dir: &Path) -> HanmalResult<Self> {
        let by_pos = DashMap::new();
        for &pos in &WORD_LIST_POS {
            let path = dir.join(format!("{}.txt", pos));
            let words = match fs::read_to_string(&path) {
                Ok(contents) => parse_word_list(&contents),
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                    warn!("dictionary resource {} not found, using empty list", path.display());
                    HashSet::new()
                }
                Err(err) => {
                    return Err(HanmalErrorKind::Io
                        .with_error(anyhow::anyhow!(err))
                        .add_context(format!("reading {}", path.display())))
                }
            };
            by_pos.insert(pos, words.into_iter().collect());
        }
        Ok(WordListDictionary {
            by_pos,
            surnames: HashSet::new(),
            given_name_chars: HashSet::new(),
            number_syllables: HashSet::new(),
            native_numbers: HashSet::new(),
            noun_rank: HashMap::new(),
        })
    }

    /// Convenience for tests: an empty dictionary with `words` pre-loaded
    /// under `pos`.
    pub fn with_words(pos: Pos, words: &[&str]) -> Self {
        let dict = WordListDictionary::empty();
        let owned: Vec<String> = words.iter().map(|w| w.to_string()).collect();
        dict.add_words(pos, &owned);
        dict
    }
}

impl Default for WordListDictionary {
    fn default() -> Self {
        WordListDictionary::new()
    }
}

impl DictionaryProvider for WordListDictionary {
    fn contains(&self, pos: Pos, word: &str) -> bool {
        self.by_pos
            .get(&pos)
            .map(|set| set.contains(word))
            .unwrap_or(false)
    }

    fn is_name(&self, word: &str) -> bool {
        heuristics::is_name(word, &self.surnames, &self.given_name_chars)
    }

    fn is_korean_name_variation(&self, word: &str) -> bool {
        heuristics::is_korean_name_variation(word, &self.surnames, &self.given_name_chars)
    }

    fn is_korean_number(&self, word: &str) -> bool {
        heuristics::is_korean_number(word, &self.number_syllables, &self.native_numbers)
    }

    fn noun_frequency(&self, word: &str) -> f64 {
        match self.noun_rank.get(word) {
            Some(&rank) if rank > 0 => 1.0 / rank as f64,
            _ => 0.0,
        }
    }

    fn add_words(&self, pos: Pos, words: &[String]) {
        let entry = self.by_pos.entry(pos).or_insert_with(DashSet::new);
        for word in words {
            entry.insert(word.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_dictionary_knows_scenario_words() {
        let dict = WordListDictionary::new();
        assert!(dict.contains(Pos::Noun, "아버지"));
        assert!(dict.contains(Pos::Noun, "가방"));
        assert!(dict.contains(Pos::Josa, "가"));
        assert!(dict.contains(Pos::Verb, "들어가신다"));
        assert!(!dict.contains(Pos::Noun, "포만감"));
    }

    #[test]
    fn add_words_is_visible_immediately() {
        let dict = WordListDictionary::new();
        assert!(!dict.contains(Pos::Noun, "포만감"));
        dict.add_words(Pos::Noun, &["포만감".to_string()]);
        assert!(dict.contains(Pos::Noun, "포만감"));
    }

    #[test]
    fn empty_dictionary_knows_nothing() {
        let dict = WordListDictionary::empty();
        assert!(!dict.contains(Pos::Noun, "아버지"));
        assert!(!dict.is_korean_number("일"));
    }

    #[test]
    fn unattested_noun_has_zero_frequency() {
        let dict = WordListDictionary::new();
        assert_eq!(dict.noun_frequency("없는단어"), 0.0);
        assert!(dict.noun_frequency("사람") > 0.0);
    }

    #[test]
    fn from_dir_reports_missing_file_as_empty_not_error() {
        let dir = std::env::temp_dir().join("hanmal-dictionary-test-empty-dir");
        let _ = fs::create_dir_all(&dir);
        let dict = WordListDictionary::from_dir(&dir).unwrap();
        assert!(!dict.contains(Pos::Noun, "아버지"));
    }
}
