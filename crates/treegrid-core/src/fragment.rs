//! Path <-> URL-fragment codec.
//!
//! The navigation path lives after `#` in the URL so that deep links and
//! browser history work without server involvement. The root path is
//! represented by no fragment at all; a bare `#` also means root.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Bytes escaped when building a fragment. This is the complement of the
/// set `encodeURIComponent` leaves intact, so fragments written by older
/// clients keep decoding to the same paths. `#` is always escaped.
const FRAGMENT_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Encode a navigation path for placement after `#`.
///
/// The empty (root) path encodes to the empty fragment.
pub fn encode(path: &str) -> String {
    utf8_percent_encode(path, FRAGMENT_SET).to_string()
}

/// Decode a fragment back into a navigation path.
///
/// Tolerates a leading `#`. Empty input and a bare `#` decode to the root
/// path. Invalid UTF-8 percent sequences decode lossily rather than fail.
pub fn decode(fragment: &str) -> String {
    let raw = fragment.strip_prefix('#').unwrap_or(fragment);
    if raw.is_empty() {
        return String::new();
    }
    percent_decode_str(raw).decode_utf8_lossy().into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        for path in [
            "",
            "docs",
            "docs/a.txt",
            "music/Café Tacvba/Re (1994)",
            "nested/with space & percent %",
            "日本語/ファイル.txt",
            "weird!~*'()-_.chars",
        ] {
            assert_eq!(decode(&encode(path)), path, "path {path:?}");
        }
    }

    #[test]
    fn test_root_is_no_fragment() {
        assert_eq!(encode(""), "");
        assert_eq!(decode(""), "");
        // A stray '#' with nothing after it is root, not a path named "#".
        assert_eq!(decode("#"), "");
    }

    #[test]
    fn test_leading_hash_stripped() {
        assert_eq!(decode("#docs%2Fa.txt"), "docs/a.txt");
        assert_eq!(decode("docs%2Fa.txt"), "docs/a.txt");
    }

    #[test]
    fn test_hash_is_escaped() {
        let encoded = encode("a#b");
        assert!(!encoded.contains('#'));
        assert_eq!(decode(&encoded), "a#b");
    }
}
