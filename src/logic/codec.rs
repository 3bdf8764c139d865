// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2026 Utility Tools contributors

//! Stateless text transforms behind the hash, Base64 and JSON tools.

use base64::engine::general_purpose::STANDARD;
use base64::engine::{GeneralPurpose, GeneralPurposeConfig};
use base64::{Engine, alphabet};

use crate::error::{ToolError, ToolResult};
use crate::utils::md5_hex;

/// Standard alphabet with required padding that ignores non-zero bits in the
/// final symbol, so `"Zm9="` decodes to `"fo"`.
const LENIENT_STANDARD: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

/// Hash `text` with MD5 and return the 32-character hex digest.
pub fn hash_text(text: &str) -> String {
    md5_hex(text)
}

/// Encode raw bytes with the standard, padded Base64 alphabet.
pub fn base64_encode_bytes(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Encode the UTF-8 bytes of `text` as Base64.
pub fn base64_encode(text: &str) -> String {
    base64_encode_bytes(text.as_bytes())
}

/// Decode standard, padded Base64 into raw bytes.
///
/// Line breaks (`\r`, `\n`) are skipped so wrapped input decodes as one
/// block, and unused low bits in the last symbol are ignored.
///
/// # Errors
///
/// Returns [`ToolError::Decode`] for characters outside the alphabet, bad
/// padding, or a truncated final quantum. The parse position is not reported.
pub fn base64_decode_bytes(text: &str) -> ToolResult<Vec<u8>> {
    let unwrapped: String = text.chars().filter(|c| !matches!(c, '\r' | '\n')).collect();
    LENIENT_STANDARD.decode(unwrapped).map_err(|err| {
        tracing::debug!(%err, "base64 decode failed");
        ToolError::Decode
    })
}

/// Decode Base64 and render the bytes as text.
///
/// Invalid UTF-8 sequences in the decoded payload are replaced with U+FFFD
/// rather than treated as a failure.
pub fn base64_decode(text: &str) -> ToolResult<String> {
    let bytes = base64_decode_bytes(text)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Parse a JSON object and re-serialize it with two-space indentation.
///
/// Keys stay in input order and numbers keep their original text.
///
/// # Errors
///
/// Returns [`ToolError::Parse`] when the input is not valid JSON or its top
/// level is not an object.
pub fn format_json(text: &str) -> ToolResult<String> {
    let object: serde_json::Map<String, serde_json::Value> =
        serde_json::from_str(text).map_err(|err| {
            tracing::debug!(%err, "json parse failed");
            ToolError::Parse
        })?;
    serde_json::to_string_pretty(&object).map_err(|err| {
        tracing::warn!(%err, "json re-serialization failed");
        ToolError::Parse
    })
}
