//! Percent-encoding for URL components.
//!
//! Used for search terms carried in the route hash and for usernames passed
//! to the avatar endpoint.

/// Percent-encode everything except RFC 3986 unreserved characters.
pub fn encode_component(input: &str) -> String {
    urlencoding::encode(input).into_owned()
}

/// Decode a percent-encoded component.
///
/// Malformed escapes are kept as literal text. Returns `None` when the decoded
/// bytes are not valid UTF-8.
pub fn decode_component(input: &str) -> Option<String> {
    urlencoding::decode(input).ok().map(|s| s.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_unreserved_untouched() {
        assert_eq!(encode_component("jhon"), "jhon");
        assert_eq!(encode_component("a-b_c.d~e"), "a-b_c.d~e");
    }

    #[test]
    fn test_encode_reserved() {
        assert_eq!(encode_component("John Doe"), "John%20Doe");
        assert_eq!(encode_component("a&b=c"), "a%26b%3Dc");
        assert_eq!(encode_component("é"), "%C3%A9");
    }

    #[test]
    fn test_decode() {
        assert_eq!(decode_component("John%20Doe").as_deref(), Some("John Doe"));
        assert_eq!(decode_component("%c3%a9").as_deref(), Some("é"));
    }

    #[test]
    fn test_decode_keeps_malformed_escapes() {
        assert_eq!(decode_component("%+A").as_deref(), Some("%+A"));
        assert_eq!(decode_component("%-1").as_deref(), Some("%-1"));
        assert_eq!(decode_component("100%").as_deref(), Some("100%"));
        assert_eq!(decode_component("%zz").as_deref(), Some("%zz"));
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        assert_eq!(decode_component("%FF"), None);
    }

    #[test]
    fn test_decode_reverses_encode() {
        for s in ["", "Dune", "war & peace", "50% off?", "a+b", "漢字"] {
            assert_eq!(decode_component(&encode_component(s)).as_deref(), Some(s));
        }
    }
}
