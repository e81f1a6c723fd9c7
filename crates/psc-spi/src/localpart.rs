//! Local-part normalization supplied by the host.
//!
//! Providers render a candidate local-part from claims; the host decides
//! which characters are legal in its user IDs.

use std::fmt::Debug;

/// Maps an arbitrary string onto the host's local-part alphabet.
pub trait LocalpartSanitizer: Send + Sync + Debug {
    /// Returns a local-part containing only allowed characters.
    fn sanitize(&self, username: &str) -> String;
}

/// Matrix user ID rules.
///
/// Allowed characters are `a-z`, `0-9` and `_-./+`. Every other byte of the
/// UTF-8 encoding, `=` included, becomes `=xx` (lowercase hex). A leading
/// `_` is escaped as `=5f`.
#[derive(Debug, Clone, Copy, Default)]
pub struct MxidLocalpartSanitizer {
    case_sensitive: bool,
}

impl MxidLocalpartSanitizer {
    /// Creates a sanitizer that lower-cases its input.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            case_sensitive: false,
        }
    }

    /// Creates a sanitizer that preserves case by encoding upper-case
    /// letters as `_` followed by the lower-case letter.
    #[must_use]
    pub const fn case_sensitive() -> Self {
        Self {
            case_sensitive: true,
        }
    }
}

impl LocalpartSanitizer for MxidLocalpartSanitizer {
    fn sanitize(&self, username: &str) -> String {
        let mut localpart = String::with_capacity(username.len());

        for byte in username.bytes() {
            match byte {
                b'A'..=b'Z' if self.case_sensitive => {
                    localpart.push('_');
                    localpart.push(char::from(byte.to_ascii_lowercase()));
                }
                b'_' if self.case_sensitive => localpart.push_str("__"),
                b'A'..=b'Z' => localpart.push(char::from(byte.to_ascii_lowercase())),
                b'a'..=b'z' | b'0'..=b'9' | b'_' | b'-' | b'.' | b'/' | b'+' => {
                    localpart.push(char::from(byte));
                }
                _ => localpart.push_str(&format!("={byte:02x}")),
            }
        }

        if localpart.starts_with('_') {
            localpart.replace_range(..1, "=5f");
        }

        localpart
    }
}
