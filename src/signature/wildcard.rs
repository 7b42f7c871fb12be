// Tue Jan 13 2026 - Alex

//! Selection of the per-signature wildcard marker.

use crate::signature::SignatureError;

/// Returns the lowest byte value that does not occur in `known`.
pub fn find_wildcard<I>(known: I) -> Result<u8, SignatureError>
where
    I: IntoIterator<Item = u8>,
{
    let mut used = [false; 256];
    for byte in known {
        used[byte as usize] = true;
    }

    used.iter()
        .position(|&taken| !taken)
        .map(|value| value as u8)
        .ok_or(SignatureError::NoUnusedByte)
}

/// Like [`find_wildcard`], but only bytes whose mask entry differs from
/// `unknown` count as known. The slices are walked pairwise; callers check
/// the lengths first.
pub fn find_wildcard_masked<M>(pattern: &[u8], mask: &[M], unknown: M) -> Result<u8, SignatureError>
where
    M: Copy + PartialEq,
{
    find_wildcard(
        pattern.iter()
            .zip(mask.iter())
            .filter(|(_, m)| **m != unknown)
            .map(|(&b, _)| b),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowest_unused_value() {
        assert_eq!(find_wildcard(Vec::<u8>::new()).unwrap(), 0x00);
        assert_eq!(find_wildcard([0x00, 0x01, 0x03]).unwrap(), 0x02);
        assert_eq!(find_wildcard([0x11, 0x12]).unwrap(), 0x00);
    }

    #[test]
    fn test_all_values_taken() {
        let err = find_wildcard(0..=255u8).unwrap_err();
        assert_eq!(err, SignatureError::NoUnusedByte);
        assert!(err.is_range_error());
    }

    #[test]
    fn test_only_last_value_free() {
        assert_eq!(find_wildcard(0..=254u8).unwrap(), 0xFF);
    }

    #[test]
    fn test_masked_ignores_unknown_positions() {
        let pattern = [0x00, 0x01, 0x02];
        let mask = [1u8, 0, 1];
        assert_eq!(find_wildcard_masked(&pattern, &mask, 0).unwrap(), 0x01);
    }

    #[test]
    fn test_masked_duplicate_literal_stays_marked() {
        // 0x00 is known at position 0 even though it reappears under a wildcard.
        let pattern = [0x00, 0x00];
        let mask = [b'x', b'?'];
        assert_eq!(find_wildcard_masked(&pattern, &mask, b'?').unwrap(), 0x01);
    }
}
