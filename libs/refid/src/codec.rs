//! Text encodings for the 18-byte RefId wire form.
//!
//! The native encoding is Crockford-style base32 over the alphabet
//! `0123456789abcdefghjkmnpqrstvwxyz` without padding, so every RefId renders
//! as exactly [`ENCODED_LEN`] lowercase symbols. Decoding is case-insensitive
//! and forgives the usual transcription mistakes (`i`/`l` for `1`, `o` for
//! `0`).
//!
//! Hex and URL-safe base64 are kept as auxiliary encodings for tooling.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;

use crate::error::RefIdError;
use crate::refid::SIZE;

/// The 32 symbols of the native encoding, in value order.
pub const ALPHABET: &str = "0123456789abcdefghjkmnpqrstvwxyz";

/// Length of the native encoding: `ceil(18 * 8 / 5)`.
pub const ENCODED_LEN: usize = (SIZE * 8).div_ceil(5);

/// Length of the hex encoding.
pub const HEX_LEN: usize = SIZE * 2;

/// Length of the unpadded base64 encoding.
pub const BASE64_LEN: usize = (SIZE * 4).div_ceil(3);

const NATIVE: &str = "native";
const HEX: &str = "hex";
const BASE64: &str = "base64";

/// Encodes the wire bytes in the canonical lowercase base32 form.
pub(crate) fn encode_native(bytes: &[u8; SIZE]) -> String {
    // The Crockford alphabet is the uppercase twin of ours.
    let mut out = base32::encode(base32::Alphabet::Crockford, bytes);
    out.make_ascii_lowercase();
    out
}

/// Number of padding bits in the last native symbol: `29 * 5 - 18 * 8`.
const TRAILING_BITS: usize = ENCODED_LEN * 5 - SIZE * 8;

/// Decodes the native base32 form, normalising ambiguous symbols first.
///
/// Only the canonical shape is accepted: exactly [`ENCODED_LEN`] symbols
/// with zero padding bits, so every accepted string re-encodes to itself
/// (modulo case and ambiguous symbols).
pub(crate) fn decode_native(input: &str) -> Result<[u8; SIZE], RefIdError> {
    let normalized = normalize(input)?;
    if normalized.len() != ENCODED_LEN {
        return Err(RefIdError::SymbolCount {
            expected: ENCODED_LEN,
            actual: normalized.len(),
        });
    }
    if !has_zero_padding(&normalized) {
        return Err(RefIdError::encoding(NATIVE, "non-canonical final symbol"));
    }
    let decoded = base32::decode(base32::Alphabet::Crockford, &normalized)
        .ok_or_else(|| RefIdError::encoding(NATIVE, "malformed base32 input"))?;
    into_wire(NATIVE, &decoded)
}

/// Lowercases, maps `i`/`l` to `1` and `o` to `0`, then rejects anything
/// left outside the alphabet. Returns the uppercase form the base32
/// decoder expects.
fn normalize(input: &str) -> Result<String, RefIdError> {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        let c = match c.to_ascii_lowercase() {
            'i' | 'l' => '1',
            'o' => '0',
            other => other,
        };
        if !ALPHABET.contains(c) {
            return Err(RefIdError::encoding(
                NATIVE,
                format!("unexpected symbol {c:?}"),
            ));
        }
        out.push(c.to_ascii_uppercase());
    }
    Ok(out)
}

/// The padding bits of the last symbol must be zero, otherwise several
/// strings would decode to the same bytes.
fn has_zero_padding(normalized: &str) -> bool {
    let mask = (1usize << TRAILING_BITS) - 1;
    normalized
        .chars()
        .last()
        .and_then(|c| ALPHABET.find(c.to_ascii_lowercase()))
        .is_some_and(|value| value & mask == 0)
}

pub(crate) fn encode_hex(bytes: &[u8; SIZE]) -> String {
    hex::encode(bytes)
}

pub(crate) fn decode_hex(input: &str) -> Result<[u8; SIZE], RefIdError> {
    let decoded = hex::decode(input).map_err(|e| RefIdError::encoding(HEX, e.to_string()))?;
    into_wire(HEX, &decoded)
}

pub(crate) fn encode_base64(bytes: &[u8; SIZE]) -> String {
    URL_SAFE_NO_PAD.encode(bytes)
}

pub(crate) fn decode_base64(input: &str) -> Result<[u8; SIZE], RefIdError> {
    let decoded = URL_SAFE_NO_PAD
        .decode(input)
        .map_err(|e| RefIdError::encoding(BASE64, e.to_string()))?;
    into_wire(BASE64, &decoded)
}

fn into_wire(encoding: &'static str, decoded: &[u8]) -> Result<[u8; SIZE], RefIdError> {
    <[u8; SIZE]>::try_from(decoded).map_err(|_| RefIdError::DecodedLength {
        encoding,
        expected: SIZE,
        actual: decoded.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const CANONICAL: &str = "000baxr70ja4ggc0jbgw5dzx7vb52";
    const CANONICAL_HEX: &str = "0000b57707049448418092e1c2b7fd3ed651";

    fn wire() -> [u8; SIZE] {
        decode_hex(CANONICAL_HEX).unwrap()
    }

    #[test]
    fn test_lengths() {
        assert_eq!(ALPHABET.len(), 32);
        assert_eq!(ENCODED_LEN, 29);
        assert_eq!(HEX_LEN, 36);
        assert_eq!(BASE64_LEN, 24);
    }

    #[test]
    fn test_alphabet_excludes_ambiguous_letters() {
        for c in ['i', 'l', 'o', 'u'] {
            assert!(!ALPHABET.contains(c), "alphabet must not contain {c}");
        }
    }

    #[test]
    fn test_encode_native_matches_known_value() {
        let encoded = encode_native(&wire());
        assert_eq!(encoded, CANONICAL);
        assert_eq!(encoded.len(), ENCODED_LEN);
        assert!(encoded.chars().all(|c| ALPHABET.contains(c)));
    }

    #[test]
    fn test_decode_native_is_case_insensitive() {
        assert_eq!(decode_native(CANONICAL).unwrap(), wire());
        assert_eq!(
            decode_native(&CANONICAL.to_ascii_uppercase()).unwrap(),
            wire()
        );
    }

    #[test]
    fn test_decode_native_normalizes_ambiguous_symbols() {
        let sloppy = CANONICAL.replace('0', "O").replace('1', "l");
        assert_eq!(decode_native(&sloppy).unwrap(), wire());
        let sloppy = CANONICAL.replace('0', "o").replace('1', "I");
        assert_eq!(decode_native(&sloppy).unwrap(), wire());
    }

    #[test]
    fn test_decode_native_rejects_foreign_symbols() {
        for bad in ["000baxr70ja4ggc0jbgw5dzx7vbu2", "000baxr70ja4ggc0jbgw5dzx7vb5!", "é"] {
            let err = decode_native(bad).unwrap_err();
            assert!(
                matches!(err, RefIdError::InvalidEncoding { encoding: "native", .. }),
                "{bad}: {err}"
            );
        }
    }

    #[test]
    fn test_decode_native_rejects_wrong_length() {
        // 26 symbols is a bare UUID, not a RefId.
        let err = decode_native(&CANONICAL[..26]).unwrap_err();
        assert_eq!(
            err,
            RefIdError::SymbolCount {
                expected: ENCODED_LEN,
                actual: 26,
            }
        );
        assert!(decode_native("").unwrap_err().is_length_error());
    }

    #[test]
    fn test_decode_native_rejects_near_miss_lengths() {
        let candidates = [
            CANONICAL[..28].to_string(),
            format!("{CANONICAL}0"),
            format!("{CANONICAL}z"),
            format!("{CANONICAL}7"),
            format!("{CANONICAL}00"),
        ];
        for input in candidates {
            let err = decode_native(&input).unwrap_err();
            assert_eq!(
                err,
                RefIdError::SymbolCount {
                    expected: ENCODED_LEN,
                    actual: input.len(),
                },
                "{input}"
            );
        }
    }

    #[test]
    fn test_decode_native_rejects_nonzero_padding_bit() {
        // Same bytes as CANONICAL if the padding bit were ignored.
        let odd = format!("{}3", &CANONICAL[..28]);
        let err = decode_native(&odd).unwrap_err();
        assert!(
            matches!(err, RefIdError::InvalidEncoding { encoding: "native", .. }),
            "{err}"
        );
    }

    #[test]
    fn test_hex_round_trip() {
        assert_eq!(encode_hex(&wire()), CANONICAL_HEX);
        assert_eq!(decode_hex(&CANONICAL_HEX.to_uppercase()).unwrap(), wire());
        assert!(decode_hex("zz").unwrap_err().is_decode_error());
        assert!(decode_hex("00ff").unwrap_err().is_length_error());
    }

    #[test]
    fn test_base64_round_trip() {
        let encoded = encode_base64(&wire());
        assert_eq!(encoded.len(), BASE64_LEN);
        assert!(!encoded.contains('='));
        assert_eq!(decode_base64(&encoded).unwrap(), wire());
        assert!(decode_base64("***").unwrap_err().is_decode_error());
        assert!(decode_base64("AAAA").unwrap_err().is_length_error());
    }
}
