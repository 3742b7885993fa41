//! Reversible conversion between binary entropy and human-friendly phrases.
//!
//! Secrets such as recovery seeds are awkward to transcribe as raw bytes.
//! This crate maps any non-empty byte sequence to an ordered sequence of
//! dictionary words and back, losslessly for every byte length including
//! sequences of leading zero bytes, by routing the bytes through a
//! bijective base-256 integer and re-expanding it in bijective base-1626
//! over a per-language word table.
//!
//! ```
//! use entropy_mnemonics::{from_phrase, to_phrase, ENGLISH};
//!
//! let entropy = [0x1e, 0x5f, 0x09, 0x00];
//! let phrase = to_phrase(&entropy, &ENGLISH).unwrap();
//! let recovered = from_phrase(&phrase, &ENGLISH).unwrap();
//! assert_eq!(recovered, entropy);
//! ```
//!
//! Word order is significant and decoding tolerates arbitrary trailing
//! characters on each word: only the language's unique prefix is matched.

mod codec;
pub mod dictionary;
mod error;
pub mod phrase;

pub use dictionary::{
    Dictionary, Language, Registry, DICTIONARY_SIZE, ENGLISH, ENGLISH_UNIQUE_PREFIX_LEN,
    GERMAN, GERMAN_UNIQUE_PREFIX_LEN,
};
pub use error::{DictionaryError, MnemonicsError};
pub use phrase::Phrase;

/// Convert entropy to a human-friendly phrase using the built-in
/// dictionaries. The conversion is reversible.
///
/// # Arguments
/// * `entropy` - The bytes to encode; must be non-empty.
/// * `language` - Which built-in dictionary to encode with.
///
/// # Returns
/// `Ok(Phrase)` on success, `EmptyInput` for zero-length entropy, or
/// `UnknownLanguage` if no dictionary is registered for `language`.
pub fn to_phrase(entropy: &[u8], language: &Language) -> Result<Phrase, MnemonicsError> {
    Registry::builtin().to_phrase(entropy, language)
}

/// Convert a phrase back to the original entropy bytes using the built-in
/// dictionaries.
///
/// # Arguments
/// * `phrase` - The words to decode; must be non-empty. Each word only
///   needs its language-specific unique prefix intact.
/// * `language` - Which built-in dictionary to decode with.
///
/// # Returns
/// `Ok(Vec<u8>)` with the original bytes, or `EmptyInput`,
/// `UnknownLanguage`, or `UnknownWord` on failure.
pub fn from_phrase(phrase: &Phrase, language: &Language) -> Result<Vec<u8>, MnemonicsError> {
    Registry::builtin().from_phrase(phrase, language)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn english_word(index: usize) -> String {
        Registry::builtin()
            .get(&ENGLISH)
            .unwrap()
            .word(index)
            .to_owned()
    }

    #[test]
    fn test_single_zero_byte_is_word_zero() {
        let phrase = to_phrase(&[0], &ENGLISH).unwrap();
        assert_eq!(phrase.len(), 1);
        assert_eq!(phrase.words()[0], english_word(0));
        assert_eq!(from_phrase(&phrase, &ENGLISH).unwrap(), [0]);
    }

    #[test]
    fn test_two_zero_bytes_are_word_256() {
        // Bijective base-256: [0, 0] accumulates to 256, a single digit in
        // base 1626. A plain positional system would collapse this onto [0].
        let phrase = to_phrase(&[0, 0], &ENGLISH).unwrap();
        assert_eq!(phrase.len(), 1);
        assert_eq!(phrase.words()[0], english_word(256));
        assert_eq!(from_phrase(&phrase, &ENGLISH).unwrap(), [0, 0]);
    }

    #[test]
    fn test_single_byte_boundaries() {
        for (byte, index) in [(1u8, 1usize), (255, 255)] {
            let phrase = to_phrase(&[byte], &ENGLISH).unwrap();
            assert_eq!(phrase.len(), 1);
            assert_eq!(phrase.words()[0], english_word(index));
            assert_eq!(from_phrase(&phrase, &ENGLISH).unwrap(), [byte]);
        }
    }

    #[test]
    fn test_double_word_zero_entropy() {
        // [90, 5] accumulates to exactly 1626: word 0 twice.
        let phrase = to_phrase(&[90, 5], &ENGLISH).unwrap();
        assert_eq!(phrase.len(), 2);
        assert_eq!(phrase.words()[0], english_word(0));
        assert_eq!(phrase.words()[1], english_word(0));
        assert_eq!(from_phrase(&phrase, &ENGLISH).unwrap(), [90, 5]);
    }

    #[test]
    fn test_entropy_roundtrip_one_and_two_bytes() {
        for i in 0..=255u8 {
            let entropy = [i];
            let phrase = to_phrase(&entropy, &ENGLISH).unwrap();
            assert_eq!(from_phrase(&phrase, &ENGLISH).unwrap(), entropy);
        }
        let edges: [u8; 12] = [0, 1, 2, 3, 16, 25, 82, 200, 252, 253, 254, 255];
        for i in 0..=255u8 {
            for &j in &edges {
                let entropy = [i, j];
                let phrase = to_phrase(&entropy, &ENGLISH).unwrap();
                assert_eq!(from_phrase(&phrase, &ENGLISH).unwrap(), entropy);
            }
        }
    }

    #[test]
    fn test_entropy_roundtrip_german() {
        let edges: [u8; 8] = [0, 1, 2, 127, 128, 253, 254, 255];
        for &i in &edges {
            for &j in &edges {
                let entropy = [i, j, 0, 255];
                let phrase = to_phrase(&entropy, &GERMAN).unwrap();
                assert_eq!(from_phrase(&phrase, &GERMAN).unwrap(), entropy);
            }
        }
    }

    #[test]
    fn test_phrase_first_roundtrip_single_words() {
        let dict = Registry::builtin().get(&ENGLISH).unwrap();
        for index in 0..DICTIONARY_SIZE {
            let initial: Phrase = [dict.word(index)].into_iter().collect();
            let entropy = from_phrase(&initial, &ENGLISH).unwrap();
            let rebuilt = to_phrase(&entropy, &ENGLISH).unwrap();
            assert_eq!(initial, rebuilt, "index {}", index);
        }
    }

    #[test]
    fn test_phrase_first_roundtrip_word_pairs() {
        let dict = Registry::builtin().get(&ENGLISH).unwrap();
        let edges: [usize; 12] = [0, 1, 2, 3, 25, 122, 266, 305, 1622, 1623, 1624, 1625];
        for &i in &edges {
            for &j in &edges {
                let initial: Phrase = [dict.word(i), dict.word(j)].into_iter().collect();
                let entropy = from_phrase(&initial, &ENGLISH).unwrap();
                let rebuilt = to_phrase(&entropy, &ENGLISH).unwrap();
                assert_eq!(initial, rebuilt, "indices {} {}", i, j);
            }
        }
    }

    #[test]
    fn test_empty_entropy_is_rejected() {
        assert!(matches!(
            to_phrase(&[], &ENGLISH),
            Err(MnemonicsError::EmptyInput)
        ));
    }

    #[test]
    fn test_empty_phrase_is_rejected() {
        assert!(matches!(
            from_phrase(&Phrase::new(), &ENGLISH),
            Err(MnemonicsError::EmptyInput)
        ));
    }

    #[test]
    fn test_unknown_language_is_rejected() {
        let language = Language::new("klingon");
        assert!(matches!(
            to_phrase(&[1, 2, 3], &language),
            Err(MnemonicsError::UnknownLanguage(name)) if name == "klingon"
        ));
        let phrase: Phrase = ["abbey"].into_iter().collect();
        assert!(matches!(
            from_phrase(&phrase, &language),
            Err(MnemonicsError::UnknownLanguage(_))
        ));
    }

    #[test]
    fn test_unknown_word_is_rejected() {
        let phrase: Phrase = ["zzznotaword"].into_iter().collect();
        assert!(matches!(
            from_phrase(&phrase, &ENGLISH),
            Err(MnemonicsError::UnknownWord(word)) if word == "zzznotaword"
        ));
    }

    #[test]
    fn test_phrase_length_is_language_independent() {
        // Same dictionary size everywhere, so the same entropy always spans
        // the same number of words.
        let entropy = hex::decode("00ff3a7b00c4").unwrap();
        let english = to_phrase(&entropy, &ENGLISH).unwrap();
        let german = to_phrase(&entropy, &GERMAN).unwrap();
        assert_eq!(english.len(), german.len());
    }
}
