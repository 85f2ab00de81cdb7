//! URL encoding/decoding utilities

use std::collections::HashMap;

/// Decodes a URL-encoded string
///
/// # Returns
/// * String containing the decoded input
/// * Returns the original string if decoding fails
///
/// # Examples
/// ```
/// use clash_sub::utils::url::url_decode;
///
/// let decoded = url_decode("Hello%20World%21");
/// assert_eq!(decoded, "Hello World!");
/// ```
pub fn url_decode(input: &str) -> String {
    urlencoding::decode(input)
        .map(|cow| cow.into_owned())
        .unwrap_or_else(|_| input.to_string())
}

/// Splits a trailing `#fragment` off a share link.
///
/// Returns the link body and the decoded fragment, `None` when the fragment
/// is absent or decodes to an empty string.
pub fn split_fragment(link: &str) -> (&str, Option<String>) {
    match link.split_once('#') {
        Some((body, fragment)) => {
            let name = url_decode(fragment);
            let name = name.trim();
            (body, (!name.is_empty()).then(|| name.to_string()))
        }
        None => (link, None),
    }
}

/// Collects query pairs into a map. Later duplicates win.
pub fn query_map(url: &::url::Url) -> HashMap<String, String> {
    url.query_pairs().into_owned().collect()
}

/// Interprets the usual truthy spellings found in share links.
pub fn is_truthy(value: &str) -> bool {
    value == "1" || value.eq_ignore_ascii_case("true")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_fragment() {
        assert_eq!(
            split_fragment("vless://a@b:1#My%20Node"),
            ("vless://a@b:1", Some("My Node".to_string()))
        );
        assert_eq!(split_fragment("vless://a@b:1#"), ("vless://a@b:1", None));
        assert_eq!(split_fragment("vless://a@b:1"), ("vless://a@b:1", None));
    }

    #[test]
    fn test_is_truthy() {
        assert!(is_truthy("1"));
        assert!(is_truthy("True"));
        assert!(!is_truthy("0"));
        assert!(!is_truthy(""));
    }
}
