//! Logger setup: `console_log` in the browser, `env_logger` natively.

use log::LevelFilter;

/// Install the platform logger at `level`. Calling it twice is harmless.
pub fn init(level: LevelFilter) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(level) = level.to_level() {
            if console_log::init_with_level(level).is_err() {
                log::debug!("Logger already initialized");
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        if env_logger::Builder::new()
            .filter_level(level)
            .parse_default_env()
            .try_init()
            .is_err()
        {
            log::debug!("Logger already initialized");
        }
    }
}
