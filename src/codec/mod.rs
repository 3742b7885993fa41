//! Bijective numeral conversion between byte sequences, big integers, and
//! dictionary word sequences.
//!
//! A standard positional system cannot represent leading zero bytes
//! unambiguously (`[0x00]` and `[0x00, 0x00]` would collapse to the same
//! integer). The bijective variant shifts every digit up by one, so digits
//! range over `1..=base` and every non-negative integer corresponds to
//! exactly one digit sequence of exactly one length.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, ToPrimitive};

use crate::dictionary::{Dictionary, DICTIONARY_SIZE};
use crate::error::MnemonicsError;
use crate::phrase::Phrase;

const BYTE_BASE: u32 = 256;

/// Interpret a byte sequence as a bijective base-256 number, least
/// significant byte first.
///
/// Each byte value `v` counts as digit `v + 1`; the accumulator starts at
/// -1 so that the combined offsets realize the no-zero-digit numeral
/// system. The result is non-negative for any non-empty input.
pub(crate) fn bytes_to_int(bytes: &[u8]) -> BigInt {
    let base = BigInt::from(BYTE_BASE);
    let mut exp = BigInt::one();
    let mut result = BigInt::from(-1);
    for &b in bytes {
        result += (BigInt::from(b) + BigInt::one()) * &exp;
        exp *= &base;
    }
    result
}

/// Expand a non-negative integer back into bijective base-256 digits,
/// least significant byte first.
///
/// The terminating digit is emitted unconditionally, making this the exact
/// inverse of [`bytes_to_int`] over all non-negative integers: zero decodes
/// to `[0x00]`, never to an empty sequence.
pub(crate) fn int_to_bytes(value: BigInt) -> Vec<u8> {
    let base = BigInt::from(BYTE_BASE);
    let mut value = value;
    let mut bytes = Vec::new();
    while value >= base {
        let (_, rem) = value.div_rem(&base);
        bytes.push(rem.to_u8().unwrap_or(0));
        value -= &base;
        value /= &base;
    }
    bytes.push(value.to_u8().unwrap_or(0));
    bytes
}

/// Expand a non-negative integer into bijective base-1626 digits and map
/// each digit through the dictionary, least significant word first.
pub(crate) fn int_to_phrase(value: BigInt, dictionary: &Dictionary) -> Phrase {
    let base = BigInt::from(DICTIONARY_SIZE);
    let mut value = value;
    let mut words = Vec::new();
    while value >= base {
        let (_, rem) = value.div_rem(&base);
        words.push(dictionary.word(rem.to_usize().unwrap_or(0)).to_owned());
        value -= &base;
        value /= &base;
    }
    words.push(dictionary.word(value.to_usize().unwrap_or(0)).to_owned());
    Phrase::from(words)
}

/// Reassemble the integer from a phrase by looking up each word's
/// dictionary index via its unique prefix.
///
/// Fails with `UnknownWord` for any word whose prefix matches no
/// dictionary entry.
pub(crate) fn phrase_to_int(
    phrase: &Phrase,
    dictionary: &Dictionary,
) -> Result<BigInt, MnemonicsError> {
    let base = BigInt::from(DICTIONARY_SIZE);
    let mut exp = BigInt::one();
    let mut result = BigInt::from(-1);
    for word in phrase.words() {
        let index = dictionary
            .lookup_prefix(word)
            .ok_or_else(|| MnemonicsError::UnknownWord(word.clone()))?;
        result += (BigInt::from(index) + BigInt::one()) * &exp;
        exp *= &base;
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bytes_to_int_exact_values() {
        let tests: Vec<(Vec<u8>, i64)> = vec![
            (vec![0], 0),
            (vec![1], 1),
            (vec![255], 255),
            (vec![0, 0], 256),
            (vec![1, 0], 257),
            (vec![0, 1], 512),
            (vec![1, 1], 513),
            (vec![2, 1], 514),
            (vec![2, 2], 770),
            (vec![0, 255], 65536),
            (vec![0, 0, 0], 65792),
            (vec![1, 0, 0], 65793),
            (vec![0, 1, 0], 66048),
            (vec![0, 0, 1], 131328),
        ];

        for (bytes, expected) in &tests {
            let got = bytes_to_int(bytes);
            assert_eq!(
                got,
                BigInt::from(*expected),
                "bytes_to_int({:02x?}): got {}, want {}",
                bytes,
                got,
                expected
            );
        }
    }

    #[test]
    fn test_int_to_bytes_terminating_digit() {
        // The final digit is emitted unconditionally: integer zero maps to a
        // single zero byte, and 256 (two zero bytes) expands back to both.
        assert_eq!(int_to_bytes(BigInt::from(0)), vec![0]);
        assert_eq!(int_to_bytes(BigInt::from(255)), vec![255]);
        assert_eq!(int_to_bytes(BigInt::from(256)), vec![0, 0]);
        assert_eq!(int_to_bytes(BigInt::from(511)), vec![255, 0]);
        assert_eq!(int_to_bytes(BigInt::from(512)), vec![0, 1]);
        assert_eq!(int_to_bytes(BigInt::from(65792)), vec![0, 0, 0]);
    }

    #[test]
    fn test_byte_int_roundtrip_exhaustive_short() {
        for i in 0..=255u8 {
            let bytes = vec![i];
            assert_eq!(int_to_bytes(bytes_to_int(&bytes)), bytes);
        }
        for i in 0..=255u8 {
            for j in 0..=255u8 {
                let bytes = vec![i, j];
                assert_eq!(int_to_bytes(bytes_to_int(&bytes)), bytes);
            }
        }
    }

    #[test]
    fn test_byte_int_roundtrip_three_bytes_sampled() {
        let edges: [u8; 8] = [0, 1, 2, 127, 128, 253, 254, 255];
        for i in 0..=255u8 {
            for &j in &edges {
                for &k in &edges {
                    let bytes = vec![i, j, k];
                    assert_eq!(int_to_bytes(bytes_to_int(&bytes)), bytes);
                }
            }
        }
    }

    #[test]
    fn test_byte_int_roundtrip_all_zero_seeds() {
        // Leading zero content is the whole reason for the bijective offset.
        for len in 1..=32 {
            let bytes = vec![0u8; len];
            assert_eq!(int_to_bytes(bytes_to_int(&bytes)), bytes);
        }
    }

    #[test]
    fn test_byte_int_roundtrip_32_byte_seed() {
        let seed =
            hex::decode("00f54a5851e9372b87810a8e60cdd2e7cfd80b6e310000000000000000c0ffee")
                .unwrap();
        assert_eq!(seed.len(), 32);
        assert_eq!(int_to_bytes(bytes_to_int(&seed)), seed);
    }
}
