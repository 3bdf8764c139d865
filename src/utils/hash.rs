// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Utility Tools contributors

//! Digest helpers.

use md5::{Digest, Md5};

/// Compute the MD5 digest of `bytes` and return it as lowercase hex.
pub fn md5_hex_bytes(bytes: &[u8]) -> String {
    let mut hasher = Md5::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Compute the MD5 digest of the UTF-8 bytes of `text`.
///
/// # Examples
///
/// ```rust,ignore
/// let digest = utility_tools::utils::md5_hex("");
/// assert_eq!(digest, "d41d8cd98f00b204e9800998ecf8427e");
/// ```
pub fn md5_hex(text: &str) -> String {
    md5_hex_bytes(text.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_has_known_digest() {
        assert_eq!(md5_hex(""), "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn digest_matches_reference_vector() {
        assert_eq!(
            md5_hex("The quick brown fox jumps over the lazy dog"),
            "9e107d9d372bb6826bd81d3542a419d6"
        );
    }

    #[test]
    fn digest_is_32_lowercase_hex_chars() {
        for input in ["a", "hello world", "ünïcödé ✓", &"x".repeat(10_000)] {
            let digest = md5_hex(input);
            assert_eq!(digest.len(), 32);
            assert!(
                digest
                    .chars()
                    .all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c))
            );
            assert_eq!(digest, md5_hex(input), "digest must be deterministic");
        }
    }
}
