// Tue Jan 13 2026 - Alex

use crate::signature::hybrid::{self, HybridByte};
use crate::signature::wildcard::{find_wildcard, find_wildcard_masked};
use crate::signature::SignatureError;
use std::fmt;
use std::str::FromStr;

/// A byte pattern in which one reserved value, the wildcard, matches any byte.
///
/// Signatures are immutable once built. Use [`std::mem::take`] to move one out
/// and leave an empty, reusable signature behind.
#[derive(Debug, Clone, Default)]
pub struct Signature {
    pattern: Vec<u8>,
    wildcard: u8,
}

impl Signature {
    /// The empty signature. It never matches anything.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Builds a signature from raw bytes and an explicit wildcard value.
    ///
    /// The bytes are taken verbatim; any byte equal to `wildcard` matches
    /// everything.
    ///
    /// ```
    /// use memory_signature::Signature;
    ///
    /// // 0x11 ?? 0x13 0x14
    /// let sig = Signature::new(&[0x11, 0x12, 0x13, 0x14], 0x12);
    /// assert_eq!(sig.find(&[0x00, 0x11, 0xAB, 0x13, 0x14]), Some(1));
    /// ```
    pub fn new(pattern: &[u8], wildcard: u8) -> Self {
        log::debug!("Direct signature: {} bytes, wildcard 0x{:02x}", pattern.len(), wildcard);
        Self {
            pattern: pattern.to_vec(),
            wildcard,
        }
    }

    /// Builds a signature where every byte is significant.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SignatureError> {
        let wildcard = find_wildcard(bytes.iter().copied())?;
        Ok(Self {
            pattern: bytes.to_vec(),
            wildcard,
        })
    }

    /// Builds a signature from bytes and a textual mask such as `"x?xx"`.
    /// Mask characters equal to `unknown` mark wildcard positions.
    pub fn from_masked_str(pattern: &[u8], mask: &str, unknown: char) -> Result<Self, SignatureError> {
        let mask: Vec<char> = mask.chars().collect();
        Self::from_masked_generic(pattern, &mask, unknown)
    }

    /// [`Signature::from_masked_str`] with `'?'` as the unknown marker.
    pub fn from_mask_str(pattern: &[u8], mask: &str) -> Result<Self, SignatureError> {
        Self::from_masked_str(pattern, mask, '?')
    }

    /// Builds a signature from bytes and a parallel mask list such as
    /// `[1, 0, 1, 1]`. Mask entries equal to `unknown` mark wildcard positions.
    pub fn from_masked(pattern: &[u8], mask: &[u8], unknown: u8) -> Result<Self, SignatureError> {
        Self::from_masked_generic(pattern, mask, unknown)
    }

    /// [`Signature::from_masked`] with `0` as the unknown marker.
    pub fn from_mask(pattern: &[u8], mask: &[u8]) -> Result<Self, SignatureError> {
        Self::from_masked(pattern, mask, 0)
    }

    fn from_masked_generic<M>(pattern: &[u8], mask: &[M], unknown: M) -> Result<Self, SignatureError>
    where
        M: Copy + PartialEq,
    {
        if pattern.len() != mask.len() {
            return Err(SignatureError::LengthMismatch {
                pattern: pattern.len(),
                mask: mask.len(),
            });
        }

        let wildcard = find_wildcard_masked(pattern, mask, unknown)?;
        let pattern: Vec<u8> = pattern.iter()
            .zip(mask.iter())
            .map(|(&b, &m)| if m != unknown { b } else { wildcard })
            .collect();

        log::debug!("Masked signature: {} bytes, wildcard 0x{:02x}", pattern.len(), wildcard);
        Ok(Self { pattern, wildcard })
    }

    /// Builds a signature from IDA-style text: hex tokens and `?` tokens
    /// separated by spaces.
    ///
    /// Malformed hex tokens are read leniently (`"zz"` is `0x00`, `"123"`
    /// is `0x23`). Use [`Signature::from_hybrid_strict`] to reject them.
    ///
    /// ```
    /// use memory_signature::Signature;
    ///
    /// let sig = Signature::from_hybrid("01 ?? 13 14").unwrap();
    /// assert_eq!(sig.find(&[0x01, 0xAA, 0x13, 0x14]), Some(0));
    /// assert_eq!(sig.find(&[0x01, 0xAA, 0x13, 0x15]), None);
    /// ```
    pub fn from_hybrid(pattern: &str) -> Result<Self, SignatureError> {
        Self::from_hybrid_bytes(&hybrid::parse(pattern))
    }

    /// Like [`Signature::from_hybrid`], but every literal token must be one or
    /// two hex digits.
    pub fn from_hybrid_strict(pattern: &str) -> Result<Self, SignatureError> {
        Self::from_hybrid_bytes(&hybrid::parse_strict(pattern)?)
    }

    fn from_hybrid_bytes(parsed: &[HybridByte]) -> Result<Self, SignatureError> {
        let wildcard = find_wildcard(parsed.iter().flatten().copied())?;
        let pattern: Vec<u8> = parsed.iter()
            .map(|b| b.unwrap_or(wildcard))
            .collect();

        log::debug!("Hybrid signature: {} bytes, wildcard 0x{:02x}", pattern.len(), wildcard);
        Ok(Self { pattern, wildcard })
    }

    pub fn len(&self) -> usize {
        self.pattern.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pattern.is_empty()
    }

    pub fn wildcard(&self) -> u8 {
        self.wildcard
    }

    /// The normalized pattern, wildcard positions holding [`Signature::wildcard`].
    pub fn as_bytes(&self) -> &[u8] {
        &self.pattern
    }

    pub fn is_wildcard_at(&self, index: usize) -> bool {
        self.pattern.get(index) == Some(&self.wildcard)
    }

    pub fn literal_count(&self) -> usize {
        self.pattern.iter().filter(|&&b| b != self.wildcard).count()
    }

    pub fn wildcard_count(&self) -> usize {
        self.pattern.iter().filter(|&&b| b == self.wildcard).count()
    }

    /// Literal bytes as `Some`, wildcards as `None`.
    pub fn iter(&self) -> impl Iterator<Item = Option<u8>> + '_ {
        self.pattern.iter()
            .map(move |&b| if b == self.wildcard { None } else { Some(b) })
    }

    pub fn to_hex_string(&self) -> String {
        self.iter()
            .map(|b| match b {
                Some(b) => format!("{:02X}", b),
                None => "??".to_string(),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex_string())
    }
}

impl PartialEq for Signature {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl Eq for Signature {}

impl FromStr for Signature {
    type Err = SignatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_hybrid_strict(s)
    }
}
