//! Fuses runs of single-character noun tokens the DP parser left separate.
//!
//! The parser scores morpheme-by-morpheme and has no notion of "this string
//! of one-character nouns is really a single unknown compound"; this pass
//! cleans that up after the fact.

use hanmal_core::{Pos, Token};

fn is_single_char_noun(t: &Token) -> bool {
    t.length == 1 && matches!(t.pos, Pos::Noun | Pos::ProperNoun)
}

/// Collapses every maximal run of ≥2 consecutive single-character
/// `Noun`/`ProperNoun` tokens into one `unknown=true` `Noun` token spanning
/// the run. Tokens outside such a run pass through unchanged.
pub fn collapse_nouns(tokens: Vec<Token>) -> Vec<Token> {
    let mut result = Vec::with_capacity(tokens.len());
    let mut i = 0;
    while i < tokens.len() {
        if is_single_char_noun(&tokens[i]) {
            let run_start = i;
            i += 1;
            while i < tokens.len() && is_single_char_noun(&tokens[i]) {
                i += 1;
            }
            if i - run_start >= 2 {
                let run = &tokens[run_start..i];
                let text: String = run.iter().map(|t| t.text.as_str()).collect();
                let offset = run[0].offset;
                let length: usize = run.iter().map(|t| t.length).sum();
                result.push(Token::unknown(text, Pos::Noun, offset, length));
            } else {
                result.push(tokens[run_start].clone());
            }
        } else {
            result.push(tokens[i].clone());
            i += 1;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fuses_run_of_single_char_nouns() {
        let tokens = vec![
            Token::new("가", Pos::Noun, 0, 1),
            Token::new("나", Pos::ProperNoun, 1, 1),
            Token::new("다", Pos::Noun, 2, 1),
        ];
        let collapsed = collapse_nouns(tokens);
        assert_eq!(collapsed.len(), 1);
        assert_eq!(collapsed[0].text, "가나다");
        assert_eq!(collapsed[0].pos, Pos::Noun);
        assert!(collapsed[0].unknown);
        assert_eq!(collapsed[0].offset, 0);
        assert_eq!(collapsed[0].length, 3);
    }

    #[test]
    fn leaves_a_single_noun_untouched() {
        let tokens = vec![Token::new("가", Pos::Noun, 0, 1)];
        let collapsed = collapse_nouns(tokens.clone());
        assert_eq!(collapsed, tokens);
    }

    #[test]
    fn does_not_fuse_across_other_tokens() {
        let tokens = vec![
            Token::new("가", Pos::Noun, 0, 1),
            Token::new("는", Pos::Josa, 1, 1),
            Token::new("나", Pos::Noun, 2, 1),
        ];
        let collapsed = collapse_nouns(tokens.clone());
        assert_eq!(collapsed, tokens);
    }

    #[test]
    fn does_not_fuse_multi_char_nouns() {
        let tokens = vec![
            Token::new("아버지", Pos::Noun, 0, 3),
            Token::new("가방", Pos::Noun, 3, 2),
        ];
        let collapsed = collapse_nouns(tokens.clone());
        assert_eq!(collapsed, tokens);
    }
}
