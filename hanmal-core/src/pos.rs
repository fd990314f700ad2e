use serde::{Deserialize, Serialize};
use strum_macros::Display;

/// The closed part-of-speech enumeration. Variants below the `---` marker in
/// source order are grammar letters (they appear in spec strings); variants
/// above it are chunker-only tags that never appear in a grammar spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display)]
pub enum Pos {
    #[strum(serialize = "Korean")]
    Korean,
    #[strum(serialize = "Foreign")]
    Foreign,
    #[strum(serialize = "Number")]
    Number,
    #[strum(serialize = "Punctuation")]
    Punctuation,
    #[strum(serialize = "Space")]
    Space,
    #[strum(serialize = "URL")]
    Url,
    #[strum(serialize = "Email")]
    Email,
    #[strum(serialize = "Hashtag")]
    Hashtag,
    #[strum(serialize = "ScreenName")]
    ScreenName,
    #[strum(serialize = "KoreanParticle")]
    KoreanParticle,
    #[strum(serialize = "Unknown")]
    Unknown,

    #[strum(serialize = "Noun")]
    Noun,
    #[strum(serialize = "ProperNoun")]
    ProperNoun,
    #[strum(serialize = "Verb")]
    Verb,
    #[strum(serialize = "Adjective")]
    Adjective,
    #[strum(serialize = "Adverb")]
    Adverb,
    #[strum(serialize = "Determiner")]
    Determiner,
    #[strum(serialize = "Exclamation")]
    Exclamation,
    #[strum(serialize = "Conjunction")]
    Conjunction,
    #[strum(serialize = "Josa")]
    Josa,
    #[strum(serialize = "AdverbialJosa")]
    AdverbialJosa,
    #[strum(serialize = "Eomi")]
    Eomi,
    #[strum(serialize = "PreEomi")]
    PreEomi,
    #[strum(serialize = "NounPrefix")]
    NounPrefix,
    #[strum(serialize = "VerbPrefix")]
    VerbPrefix,
    #[strum(serialize = "Suffix")]
    Suffix,
}

impl Pos {
    /// The single-letter code used in grammar spec strings, for the POS
    /// categories the grammar DSL can reference. `None` for chunker-only
    /// tags and for `ProperNoun` (which the grammar only ever reaches via
    /// `Noun`, per the parser's unknown-noun refinement rule).
    pub fn grammar_code(self) -> Option<char> {
        match self {
            Pos::Noun => Some('N'),
            Pos::Verb => Some('V'),
            Pos::Adjective => Some('J'),
            Pos::Adverb => Some('A'),
            Pos::Determiner => Some('D'),
            Pos::Exclamation => Some('E'),
            Pos::Conjunction => Some('C'),
            Pos::Josa => Some('j'),
            Pos::AdverbialJosa => Some('l'),
            Pos::Eomi => Some('e'),
            Pos::PreEomi => Some('r'),
            Pos::NounPrefix => Some('p'),
            Pos::VerbPrefix => Some('v'),
            Pos::Suffix => Some('s'),
            _ => None,
        }
    }

    /// Inverse of [`Pos::grammar_code`].
    pub fn from_grammar_code(c: char) -> Option<Pos> {
        match c {
            'N' => Some(Pos::Noun),
            'V' => Some(Pos::Verb),
            'J' => Some(Pos::Adjective),
            'A' => Some(Pos::Adverb),
            'D' => Some(Pos::Determiner),
            'E' => Some(Pos::Exclamation),
            'C' => Some(Pos::Conjunction),
            'j' => Some(Pos::Josa),
            'l' => Some(Pos::AdverbialJosa),
            'e' => Some(Pos::Eomi),
            'r' => Some(Pos::PreEomi),
            'p' => Some(Pos::NounPrefix),
            'v' => Some(Pos::VerbPrefix),
            's' => Some(Pos::Suffix),
            _ => None,
        }
    }

    /// True for the two substantive-root tags the DP parser may assign to a
    /// dictionary miss.
    pub fn is_noun_like(self) -> bool {
        matches!(self, Pos::Noun | Pos::ProperNoun)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grammar_code_round_trips() {
        for pos in [
            Pos::Noun,
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
        ] {
            let code = pos.grammar_code().unwrap();
            assert_eq!(Pos::from_grammar_code(code), Some(pos));
        }
    }

    #[test]
    fn display_matches_long_name() {
        assert_eq!(Pos::ProperNoun.to_string(), "ProperNoun");
        assert_eq!(Pos::Url.to_string(), "URL");
        assert_eq!(Pos::KoreanParticle.to_string(), "KoreanParticle");
    }

    #[test]
    fn non_grammar_tags_have_no_code() {
        assert_eq!(Pos::ProperNoun.grammar_code(), None);
        assert_eq!(Pos::Korean.grammar_code(), None);
        assert_eq!(Pos::Unknown.grammar_code(), None);
    }
}
