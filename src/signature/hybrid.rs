// Wed Jan 15 2026 - Alex

//! Tokenizer for the IDA-style text form, e.g. `"48 8B ?? ?? 89"`.

use crate::signature::SignatureError;

/// One parsed token: `None` is a wildcard, `Some` a literal byte.
pub type HybridByte = Option<u8>;

/// Splits on single spaces and skips the empty tokens produced by repeated,
/// leading or trailing spaces.
fn tokens(pattern: &str) -> impl Iterator<Item = (usize, &str)> {
    pattern.split(' ')
        .filter(|token| !token.is_empty())
        .enumerate()
}

fn is_wildcard_token(token: &str) -> bool {
    token.bytes().all(|c| c == b'?')
}

/// Lenient base-16 read of one token: optional `+`/`-` sign, optional `0x`
/// prefix, then the longest run of leading hex digits. The value is
/// truncated to its low byte and a leading `-` negates it modulo 256, so
/// `"-1"` is `0xFF`. Tokens without leading hex digits are 0.
pub fn parse_lenient_byte(token: &str) -> u8 {
    let (negative, unsigned) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };

    let digits = unsigned.strip_prefix("0x")
        .or_else(|| unsigned.strip_prefix("0X"))
        .filter(|rest| rest.starts_with(|c: char| c.is_ascii_hexdigit()))
        .unwrap_or(unsigned);

    let value = digits.chars()
        .map_while(|c| c.to_digit(16))
        .fold(0u8, |acc, digit| acc.wrapping_shl(4) | digit as u8);

    if negative {
        value.wrapping_neg()
    } else {
        value
    }
}

/// Lenient parse: malformed tokens never fail.
pub fn parse(pattern: &str) -> Vec<HybridByte> {
    tokens(pattern)
        .map(|(_, token)| {
            if is_wildcard_token(token) {
                None
            } else {
                Some(parse_lenient_byte(token))
            }
        })
        .collect()
}

/// Strict parse: every literal token must be one or two hex digits.
pub fn parse_strict(pattern: &str) -> Result<Vec<HybridByte>, SignatureError> {
    tokens(pattern)
        .map(|(position, token)| {
            if is_wildcard_token(token) {
                return Ok(None);
            }
            if token.len() > 2 || !token.bytes().all(|c| c.is_ascii_hexdigit()) {
                return Err(SignatureError::InvalidToken {
                    token: token.to_string(),
                    position,
                });
            }
            u8::from_str_radix(token, 16)
                .map(Some)
                .map_err(|_| SignatureError::InvalidToken {
                    token: token.to_string(),
                    position,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic() {
        assert_eq!(parse("01 ?? 13 14"), vec![Some(0x01), None, Some(0x13), Some(0x14)]);
        assert_eq!(parse("1 ? 13 14"), vec![Some(0x01), None, Some(0x13), Some(0x14)]);
    }

    #[test]
    fn test_parse_collapses_question_runs() {
        assert_eq!(parse("???"), vec![None]);
        assert_eq!(parse("?? ??"), vec![None, None]);
    }

    #[test]
    fn test_parse_tolerates_extra_spaces() {
        assert_eq!(parse("  AA   ?  BB "), vec![Some(0xAA), None, Some(0xBB)]);
        assert!(parse("").is_empty());
        assert!(parse("    ").is_empty());
    }

    #[test]
    fn test_lenient_byte() {
        assert_eq!(parse_lenient_byte("ff"), 0xFF);
        assert_eq!(parse_lenient_byte("0x1F"), 0x1F);
        assert_eq!(parse_lenient_byte("123"), 0x23);
        assert_eq!(parse_lenient_byte("1g"), 0x01);
        assert_eq!(parse_lenient_byte("zz"), 0x00);
        assert_eq!(parse_lenient_byte("0x"), 0x00);
    }

    #[test]
    fn test_lenient_byte_sign() {
        assert_eq!(parse_lenient_byte("-1"), 0xFF);
        assert_eq!(parse_lenient_byte("-0x10"), 0xF0);
        assert_eq!(parse_lenient_byte("+7f"), 0x7F);
        assert_eq!(parse_lenient_byte("-"), 0x00);
        assert_eq!(parse("-1 ??"), vec![Some(0xFF), None]);
    }

    #[test]
    fn test_mixed_question_token_is_a_literal() {
        // Only an all-`?` token is a wildcard.
        assert_eq!(parse("?1"), vec![Some(0x00)]);
        assert_eq!(parse("1?"), vec![Some(0x01)]);
    }

    #[test]
    fn test_strict_rejects_malformed() {
        let err = parse_strict("48 0G 89").unwrap_err();
        assert_eq!(err, SignatureError::InvalidToken { token: "0G".to_string(), position: 1 });
        assert!(parse_strict("123").is_err());
        assert!(parse_strict("?1").is_err());
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_strict_accepts_well_formed() {
        assert_eq!(parse_strict("48 8b ?? 9").unwrap(), vec![Some(0x48), Some(0x8B), None, Some(0x09)]);
    }
}
