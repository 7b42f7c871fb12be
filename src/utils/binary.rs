// Tue Jan 13 2026 - Alex

use std::num::ParseIntError;

/// Parses `"11 12 0x13 14"` into bytes. Unlike the signature text form this
/// has no wildcards and rejects malformed tokens.
pub fn parse_hex_list(s: &str) -> Result<Vec<u8>, ParseIntError> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let digits = part.strip_prefix("0x")
                .or_else(|| part.strip_prefix("0X"))
                .unwrap_or(part);
            u8::from_str_radix(digits, 16)
        })
        .collect()
}
