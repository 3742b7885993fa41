use proptest::prelude::*;

use entropy_mnemonics::{
    from_phrase, to_phrase, Dictionary, Language, Phrase, Registry, DICTIONARY_SIZE, ENGLISH,
    GERMAN,
};

/// A deterministic well-formed word list for registry-injection tests.
fn synthetic_words() -> Vec<String> {
    let mut words = Vec::with_capacity(DICTIONARY_SIZE);
    'outer: for a in b'a'..=b'z' {
        for b in b'a'..=b'z' {
            for c in b'a'..=b'z' {
                words.push(format!("{}{}{}oid", a as char, b as char, c as char));
                if words.len() == DICTIONARY_SIZE {
                    break 'outer;
                }
            }
        }
    }
    words
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn entropy_phrase_roundtrip_english(entropy in prop::collection::vec(any::<u8>(), 1..=32)) {
        let phrase = to_phrase(&entropy, &ENGLISH).unwrap();
        prop_assert!(!phrase.is_empty());
        let recovered = from_phrase(&phrase, &ENGLISH).unwrap();
        prop_assert_eq!(entropy, recovered);
    }

    #[test]
    fn entropy_phrase_roundtrip_german(entropy in prop::collection::vec(any::<u8>(), 1..=32)) {
        let phrase = to_phrase(&entropy, &GERMAN).unwrap();
        let recovered = from_phrase(&phrase, &GERMAN).unwrap();
        prop_assert_eq!(entropy, recovered);
    }

    #[test]
    fn rendered_phrase_survives_transcription(entropy in prop::collection::vec(any::<u8>(), 1..=32)) {
        // Display then re-parse, as a user copying the phrase by hand would.
        let phrase = to_phrase(&entropy, &ENGLISH).unwrap();
        let transcribed: Phrase = phrase.to_string().parse().unwrap();
        let recovered = from_phrase(&transcribed, &ENGLISH).unwrap();
        prop_assert_eq!(entropy, recovered);
    }

    #[test]
    fn phrase_length_matches_across_languages(entropy in prop::collection::vec(any::<u8>(), 1..=32)) {
        let english = to_phrase(&entropy, &ENGLISH).unwrap();
        let german = to_phrase(&entropy, &GERMAN).unwrap();
        prop_assert_eq!(english.len(), german.len());
    }

    #[test]
    fn injected_registry_roundtrip(entropy in prop::collection::vec(any::<u8>(), 1..=16)) {
        let mut registry = Registry::new();
        let language = Language::new("synthetic");
        let dictionary = Dictionary::new(&synthetic_words(), 3).unwrap();
        registry.register(language.clone(), dictionary);

        let phrase = registry.to_phrase(&entropy, &language).unwrap();
        let recovered = registry.from_phrase(&phrase, &language).unwrap();
        prop_assert_eq!(entropy, recovered);
    }
}
