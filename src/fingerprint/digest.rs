// file: src/fingerprint/digest.rs
// description: deterministic content digest for extracted text
// reference: https://docs.rs/md-5

use md5::{Digest, Md5};

/// Lowercase hex MD5 of the text as-is. Order-, content-, and
/// whitespace-sensitive; identical text yields identical output across runs.
pub fn content_digest(text: &str) -> String {
    let mut hasher = Md5::new();
    hasher.update(text.as_bytes());
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_digest_is_deterministic() {
        let text = "Quarterly report for Acme Corp";
        assert_eq!(content_digest(text), content_digest(text));
    }

    #[test]
    fn test_digest_known_value() {
        // md5("hello")
        assert_eq!(content_digest("hello"), "5d41402abc4b2a76b9719d911017c592");
    }

    #[test]
    fn test_digest_is_whitespace_sensitive() {
        assert_ne!(content_digest("a b"), content_digest("a  b"));
        assert_ne!(content_digest("a\nb"), content_digest("a b"));
    }

    #[test]
    fn test_digest_is_order_sensitive() {
        assert_ne!(content_digest("ab"), content_digest("ba"));
    }
}
