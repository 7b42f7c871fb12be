// Wed Jan 15 2026 - Alex

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "sigscan")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Find the first occurrence of a byte signature in a file", long_about = None)]
pub struct Args {
    /// File to scan
    pub file: Option<PathBuf>,

    /// IDA-style signature, e.g. "48 8B ?? ?? 89"
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// Raw pattern bytes for the masked or direct form, e.g. "48 8B 05 00"
    #[arg(short, long)]
    pub bytes: Option<String>,

    /// Mask string for --bytes, e.g. "xx??"
    #[arg(short, long, requires = "bytes")]
    pub mask: Option<String>,

    /// Mask character marking unknown bytes
    #[arg(long, requires = "mask")]
    pub unknown: Option<char>,

    /// Explicit wildcard byte (hex) for --bytes
    #[arg(short, long, requires = "bytes", conflicts_with = "mask")]
    pub wildcard: Option<String>,

    /// Reject malformed hex tokens in --pattern
    #[arg(long)]
    pub strict: bool,

    /// Start of the scanned window (decimal or 0x-prefixed hex)
    #[arg(long, value_parser = parse_number)]
    pub offset: Option<usize>,

    /// Length of the scanned window (decimal or 0x-prefixed hex)
    #[arg(long, value_parser = parse_number)]
    pub length: Option<usize>,

    /// Bytes of hex dump to print after a match
    #[arg(long, default_value = "0", value_parser = parse_number)]
    pub context: usize,

    /// JSON file with scan defaults
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[arg(long)]
    pub json: bool,

    #[arg(short, long)]
    pub log_level: Option<String>,

    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    pub fn validate(&self) -> Result<(), String> {
        if self.pattern.is_some() && self.bytes.is_some() {
            return Err("Cannot specify both --pattern and --bytes".to_string());
        }
        if self.pattern.is_none() && self.bytes.is_none() {
            return Err("Either --pattern or --bytes must be specified".to_string());
        }
        if self.bytes.is_some() && self.mask.is_none() && self.wildcard.is_none() {
            return Err("--bytes needs either --mask or --wildcard".to_string());
        }
        Ok(())
    }
}

pub fn parse_number(s: &str) -> Result<usize, String> {
    let result = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(hex) => usize::from_str_radix(hex, 16),
        None => s.parse::<usize>(),
    };
    result.map_err(|e| format!("invalid number '{}': {}", s, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number("16").unwrap(), 16);
        assert_eq!(parse_number("0x10").unwrap(), 16);
        assert!(parse_number("0xzz").is_err());
        assert!(parse_number("-1").is_err());
    }

    #[test]
    fn test_pattern_source() {
        let args = Args::try_parse_from(["sigscan", "dump.bin", "-p", "48 8B ??"]).unwrap();
        assert!(args.validate().is_ok());
        assert_eq!(args.file, Some(PathBuf::from("dump.bin")));
    }

    #[test]
    fn test_masked_source() {
        let args = Args::try_parse_from([
            "sigscan", "dump.bin", "--bytes", "11 12 13", "--mask", "x.x", "--unknown", ".",
        ]).unwrap();
        assert!(args.validate().is_ok());
        assert_eq!(args.unknown, Some('.'));
    }

    #[test]
    fn test_rejects_two_sources() {
        let args = Args::try_parse_from(["sigscan", "-p", "11", "-b", "11", "-w", "00"]).unwrap();
        assert!(args.validate().is_err());
    }

    #[test]
    fn test_bytes_needs_mask_or_wildcard() {
        let args = Args::try_parse_from(["sigscan", "-b", "11 12"]).unwrap();
        assert!(args.validate().is_err());
        assert!(Args::try_parse_from(["sigscan", "-b", "11", "-m", "x", "-w", "00"]).is_err());
    }
}
