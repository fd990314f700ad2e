//! End-to-end scenarios exercising `tokenize` as a whole.

use hanmal::{format_text, tokenize, Pos};
use hanmal_dictionary::{DictionaryProvider, WordListDictionary};

#[test]
fn spaced_sentence_segments_each_eojeol_independently() {
    let dict = WordListDictionary::new();
    let tokens = tokenize("아버지가 방에 들어가신다", &dict).unwrap();
    assert_eq!(
        format_text(&tokens),
        "아버지/Noun 가/Josa  방/Noun 에/Josa  들어가신다/Verb"
    );
}

#[test]
fn unspaced_sentence_merges_into_a_greedier_noun_chunk() {
    let dict = WordListDictionary::new();
    let tokens = tokenize("아버지가방에들어가신다", &dict).unwrap();
    assert_eq!(format_text(&tokens), "아버지/Noun 가방/Noun 에/Josa 들어가신다/Verb");
}

#[test]
fn unknown_noun_becomes_known_after_add_words() {
    let dict = WordListDictionary::new();

    let before = tokenize("포만감도 괜찮아요", &dict).unwrap();
    assert!(before[0].unknown, "포만감 is not yet attested");

    dict.add_words(Pos::Noun, &["포만감".to_string()]);

    let after = tokenize("포만감도 괜찮아요", &dict).unwrap();
    assert_eq!(after[0].text, "포만감");
    assert_eq!(after[0].pos, Pos::Noun);
    assert!(!after[0].unknown);
}

#[test]
fn lexical_priority_prefers_the_whole_word_dictionary_hit() {
    let dict = WordListDictionary::new();
    let tokens = tokenize("면도 괜찮고", &dict).unwrap();
    assert_eq!(format_text(&tokens), "면도/Noun  괜찮고/Adjective");
}

#[test]
fn jamo_only_input_is_a_single_korean_particle_token() {
    let dict = WordListDictionary::new();
    let tokens = tokenize("ㅋㅋㅋ", &dict).unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens[0].pos, Pos::KoreanParticle);
    assert_eq!(tokens[0].text, "ㅋㅋㅋ");
}

#[test]
fn empty_string_yields_empty_output() {
    let dict = WordListDictionary::new();
    let tokens = tokenize("", &dict).unwrap();
    assert!(tokens.is_empty());
}

#[test]
fn token_offsets_partition_the_input_with_no_gaps_or_overlaps() {
    let dict = WordListDictionary::new();
    let text = "아버지가 방에 들어가신다 #좋아 @친구 123 hello";
    let tokens = tokenize(text, &dict).unwrap();
    let mut expected_offset = 0;
    for token in &tokens {
        assert_eq!(token.offset, expected_offset);
        expected_offset += token.length;
    }
    assert_eq!(expected_offset, text.chars().count());
}

#[test]
fn concatenating_token_text_reproduces_the_input() {
    let dict = WordListDictionary::new();
    let text = "아버지가방에들어가신다 123 hello";
    let tokens = tokenize(text, &dict).unwrap();
    let reassembled: String = tokens.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(reassembled, text);
}

#[test]
fn non_korean_classes_each_yield_a_matching_tag() {
    let dict = WordListDictionary::new();
    let tokens = tokenize("hello 123 #tag @mention https://example.com", &dict).unwrap();
    let tags: Vec<Pos> = tokens.iter().map(|t| t.pos).collect();
    assert!(tags.contains(&Pos::Foreign));
    assert!(tags.contains(&Pos::Number));
    assert!(tags.contains(&Pos::Hashtag));
    assert!(tags.contains(&Pos::ScreenName));
    assert!(tags.contains(&Pos::Url));
}

#[test]
fn collapse_nouns_leaves_no_adjacent_single_char_noun_pair() {
    let dict = WordListDictionary::empty();
    let tokens = tokenize("가나다라마", &dict).unwrap();
    for pair in tokens.windows(2) {
        let both_single_char_nouns = pair.iter().all(|t| t.length == 1 && t.pos.is_noun_like());
        assert!(!both_single_char_nouns);
    }
}
