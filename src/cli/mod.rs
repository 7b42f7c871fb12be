// Wed Jan 15 2026 - Alex

pub mod args;
pub mod dump;
pub mod handler;

pub use args::Args;
pub use dump::{ByteRole, MatchDump};
pub use handler::{CommandHandler, ScanReport};
