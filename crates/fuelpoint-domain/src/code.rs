//! Verification-code format policy.
//!
//! One fixed policy for the whole network: `"TF"` prefix plus a 6-character
//! suffix over an uppercase alphanumeric alphabet with the visually ambiguous
//! characters (`0 O 1 I L`) removed, so codes stay human-typable from a phone.

/// Fixed prefix of every verification code.
pub const CODE_PREFIX: &str = "TF";

/// Number of random characters after the prefix.
pub const CODE_SUFFIX_LEN: usize = 6;

/// Suffix alphabet. Uppercase alphanumeric minus `0 O 1 I L`.
pub const CODE_ALPHABET: &[u8] = b"ABCDEFGHJKMNPQRSTUVWXYZ23456789";

/// Whether `text` is exactly one well-formed code (already normalized).
pub fn is_code(text: &str) -> bool {
    let Some(suffix) = text.strip_prefix(CODE_PREFIX) else {
        return false;
    };
    suffix.len() == CODE_SUFFIX_LEN && suffix.bytes().all(|b| CODE_ALPHABET.contains(&b))
}

/// Extract a code from a free-text message.
///
/// Trims surrounding whitespace and uppercases before matching. The whole
/// message must be the code; codes embedded in longer sentences are not
/// recognized. Returns the normalized code.
pub fn extract_code(text: &str) -> Option<String> {
    let normalized = text.trim().to_ascii_uppercase();
    is_code(&normalized).then_some(normalized)
}
