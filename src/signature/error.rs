// Tue Jan 13 2026 - Alex

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SignatureError {
    #[error("No unused byte available for wildcard marker")]
    NoUnusedByte,
    #[error("Pattern size did not match mask size: pattern {pattern} bytes, mask {mask} entries")]
    LengthMismatch { pattern: usize, mask: usize },
    #[error("Invalid token '{token}' at position {position}")]
    InvalidToken { token: String, position: usize },
}

impl SignatureError {
    /// Every byte value is already taken by a literal.
    pub fn is_range_error(&self) -> bool {
        matches!(self, Self::NoUnusedByte)
    }

    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::LengthMismatch { .. } | Self::InvalidToken { .. })
    }
}
