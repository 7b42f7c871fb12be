// Tue Jan 13 2026 - Alex

pub mod binary;
pub mod logging;

pub use binary::parse_hex_list;
pub use logging::init_logger;
