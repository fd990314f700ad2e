//! Small, total, deterministic predicates used to refine a dictionary-miss
//! noun into `ProperNoun`/`Unknown` vs. a recognized name or number, the way
//! [`crate::word_list::WordListDictionary`] implements the corresponding
//! trait methods.

use std::collections::HashSet;

/// A 2- or 3-syllable word is a plausible Korean personal name if its first
/// syllable is a known surname and every remaining syllable is a common
/// given-name syllable.
pub fn is_name(word: &str, surnames: &HashSet<String>, given_name_chars: &HashSet<String>) -> bool {
    let syllables: Vec<char> = word.chars().collect();
    if syllables.len() < 2 || syllables.len() > 4 {
        return false;
    }
    let surname = syllables[0].to_string();
    if !surnames.contains(&surname) {
        return false;
    }
    syllables[1..]
        .iter()
        .all(|c| given_name_chars.contains(&c.to_string()))
}

/// A name variation is a name with a trailing colloquial vocative/diminutive
/// particle stripped off (`아`/`야`), still resolving to a recognized name.
pub fn is_korean_name_variation(
    word: &str,
    surnames: &HashSet<String>,
    given_name_chars: &HashSet<String>,
) -> bool {
    for suffix in ['아', '야'] {
        if let Some(stripped) = word.strip_suffix(suffix) {
            if !stripped.is_empty() && is_name(stripped, surnames, given_name_chars) {
                return true;
            }
        }
    }
    false
}

/// True if `word` is a native-Korean number word, or every syllable of
/// `word` is a Sino-Korean digit/place-value syllable (so compounds like
/// "이십" = 20 are recognized without enumerating every value).
pub fn is_korean_number(
    word: &str,
    number_syllables: &HashSet<String>,
    native_numbers: &HashSet<String>,
) -> bool {
    if word.is_empty() {
        return false;
    }
    if native_numbers.contains(word) {
        return true;
    }
    word.chars().all(|c| number_syllables.contains(&c.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set(words: &[&str]) -> HashSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn recognizes_surname_plus_given_name() {
        let surnames = set(&["김"]);
        let given = set(&["민", "준"]);
        assert!(is_name("김민준", &surnames, &given));
    }

    #[test]
    fn rejects_unknown_surname() {
        let surnames = set(&["김"]);
        let given = set(&["민", "준"]);
        assert!(!is_name("박민준", &surnames, &given));
    }

    #[test]
    fn name_variation_strips_vocative_particle() {
        let surnames = set(&["김"]);
        let given = set(&["민", "준"]);
        assert!(is_korean_name_variation("김민준아", &surnames, &given));
        assert!(!is_korean_name_variation("김민준", &surnames, &given));
    }

    #[test]
    fn sino_korean_compound_number() {
        let syll = set(&["이", "십"]);
        let native = set(&["열"]);
        assert!(is_korean_number("이십", &syll, &native));
    }

    #[test]
    fn native_number_word() {
        let syll = set(&["이", "십"]);
        let native = set(&["열"]);
        assert!(is_korean_number("열", &syll, &native));
        assert!(!is_korean_number("사과", &syll, &native));
    }
}
