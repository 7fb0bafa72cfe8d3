//! Logger setup for the stencil binary.

use log::LevelFilter;

/// Initializes `env_logger`. `RUST_LOG` takes precedence over `verbose`.
pub fn init_logger(verbose: bool) {
    env_logger::Builder::new()
        .filter_level(if verbose { LevelFilter::Debug } else { LevelFilter::Info })
        .parse_default_env()
        .format_timestamp(None)
        .init();
}
