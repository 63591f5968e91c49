use crate::error::InvalidCode;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// The fixed length of every generated short code.
pub const CODE_LENGTH: usize = 6;

/// A validated short code identifier for a shortened URL.
///
/// Codes are exactly [`CODE_LENGTH`] characters drawn from the lowercase
/// hex alphabet `[0-9a-f]`, the prefix of a hex-encoded digest.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ShortCode(String);

impl ShortCode {
    /// Creates a new `ShortCode` after validating length and alphabet.
    pub fn new(code: impl Into<String>) -> Result<Self, InvalidCode> {
        let code = code.into();
        Self::validate(&code)?;
        Ok(Self(code))
    }

    /// Creates a `ShortCode` without validation.
    ///
    /// Use this only for codes produced by trusted internal sources
    /// (the hash generator is guaranteed to emit valid output).
    pub fn new_unchecked(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Generates the full shortened URL for the given base URL.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), self.0)
    }

    /// Returns the short code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn validate(code: &str) -> Result<(), InvalidCode> {
        if code.len() != CODE_LENGTH {
            return Err(InvalidCode(format!(
                "length must be exactly {}, got {}",
                CODE_LENGTH,
                code.len()
            )));
        }

        if !code.chars().all(|c| matches!(c, '0'..='9' | 'a'..='f')) {
            return Err(InvalidCode(format!(
                "must contain only lowercase hex characters: '{}'",
                code
            )));
        }

        Ok(())
    }
}

impl Display for ShortCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_codes() {
        assert!(ShortCode::new("abc123").is_ok());
        assert!(ShortCode::new("000000").is_ok());
        assert!(ShortCode::new("ffffff").is_ok());
    }

    #[test]
    fn wrong_length() {
        assert!(ShortCode::new("").is_err());
        assert!(ShortCode::new("abc12").is_err());
        assert!(ShortCode::new("abc1234").is_err());
    }

    #[test]
    fn invalid_characters() {
        assert!(ShortCode::new("ABC123").is_err());
        assert!(ShortCode::new("abcxyz").is_err());
        assert!(ShortCode::new("abc 12").is_err());
        assert!(ShortCode::new("abc-12").is_err());
    }

    #[test]
    fn display_roundtrip() {
        let code = ShortCode::new("deadbe").unwrap();
        assert_eq!(code.to_string(), "deadbe");
        assert_eq!(code.as_str(), "deadbe");
    }

    #[test]
    fn to_url_strips_trailing_slash() {
        let code = ShortCode::new("abc123").unwrap();
        assert_eq!(code.to_url("https://pk.example"), "https://pk.example/abc123");
        assert_eq!(code.to_url("https://pk.example/"), "https://pk.example/abc123");
    }
}
