use base64::alphabet;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD};
use base64::engine::DecodePaddingMode;
use base64::Engine as _;

use crate::parser::DecodeError;

/// Lenient engine: subscription providers routinely emit unpadded text and
/// non-zero trailing bits, both of which the strict engine rejects.
const LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_allow_trailing_bits(true)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Encodes a string to Base64 format.
pub fn base64_encode(input: &str) -> String {
    STANDARD.encode(input)
}

/// Reverses a URL-safe Base64 string to standard Base64 format.
pub fn url_safe_base64_reverse(input: &str) -> String {
    input.replace('-', "+").replace('_', "/")
}

/// Decodes a base64 blob of unknown provenance into text.
///
/// All whitespace is dropped, the URL-safe alphabet is mapped back onto the
/// standard one and the result is padded to a multiple of four before
/// decoding. Bytes that are not valid UTF-8 are widened one-to-one into
/// chars (Latin-1) instead of failing.
///
/// # Examples
/// ```
/// use clash_sub::utils::base64::base64_decode;
///
/// assert_eq!(base64_decode("aGVsbG8").unwrap(), "hello");
/// ```
pub fn base64_decode(input: &str) -> Result<String, DecodeError> {
    let compact: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let mut normalized = url_safe_base64_reverse(&compact);
    while normalized.len() % 4 != 0 {
        normalized.push('=');
    }

    let bytes = LENIENT
        .decode(normalized.as_bytes())
        .map_err(|e| DecodeError::InvalidEncoding(e.to_string()))?;

    Ok(match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(e) => e.into_bytes().iter().map(|&b| b as char).collect(),
    })
}
