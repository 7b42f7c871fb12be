// Tue Jan 13 2026 - Alex

use log::LevelFilter;

/// Installs `env_logger` at `level`. Later calls are ignored.
pub fn init_logger(level: LevelFilter) {
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .try_init();
}
