// Tue Jan 13 2026 - Alex

pub mod error;
pub mod hybrid;
pub mod matcher;
pub mod signature;
pub mod wildcard;

pub use error::SignatureError;
pub use signature::Signature;
pub use wildcard::{find_wildcard, find_wildcard_masked};
