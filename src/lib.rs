// Tue Jan 15 2026 - Alex

//! Byte signatures with wildcards, and a first-match search over byte slices.
//!
//! ```
//! use memory_signature::Signature;
//!
//! let sig = Signature::from_mask_str(&[0x48, 0x8B, 0x05, 0x00], "xx?x").unwrap();
//! assert_eq!(sig.to_string(), "48 8B ?? 00");
//! assert_eq!(sig.find(&[0x90, 0x48, 0x8B, 0x77, 0x00]), Some(1));
//! ```

pub mod cli;
pub mod config;
pub mod memory;
pub mod signature;
pub mod utils;

pub use config::ScanConfig;
pub use memory::MappedFile;
pub use signature::{Signature, SignatureError};
