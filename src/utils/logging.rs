//! Logging setup
//!
//! Everything goes to `<data_dir>/folio.log`; the terminal belongs to the UI.

use std::{env, fs::File};

use color_eyre::eyre::Result;
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    filter::EnvFilter, fmt, prelude::__tracing_subscriber_SubscriberExt,
    util::SubscriberInitExt, Layer,
};

use super::paths::{get_data_dir, LOG_ENV, LOG_FILE};

/// Filter directives: `RUST_LOG`, then `FOLIO_LOGLEVEL`, then a quiet default
/// that keeps HTTP client chatter out of the log.
pub fn log_directives() -> String {
    env::var("RUST_LOG")
        .or_else(|_| env::var(LOG_ENV.as_str()))
        .unwrap_or_else(|_| format!("{}=info,reqwest=warn,hyper=warn", env!("CARGO_CRATE_NAME")))
}

pub fn initialize_logging() -> Result<()> {
    let directory = get_data_dir();
    std::fs::create_dir_all(&directory)?;
    let log_file = File::create(directory.join(LOG_FILE.as_str()))?;

    let file_layer = fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(log_file)
        .with_target(false)
        .with_ansi(false)
        .with_filter(EnvFilter::try_new(log_directives())?);

    tracing_subscriber::registry()
        .with(file_layer)
        .with(ErrorLayer::default())
        .try_init()?;
    Ok(())
}

/// Like `std::dbg!`, but emits a `tracing` event (DEBUG unless a level is
/// given) instead of printing to stderr.
#[macro_export]
macro_rules! trace_dbg {
    (target: $target:expr, level: $level:expr, $ex:expr) => {{
        match $ex {
            value => {
                tracing::event!(target: $target, $level, ?value, stringify!($ex));
                value
            }
        }
    }};
    (level: $level:expr, $ex:expr) => {
        $crate::trace_dbg!(target: module_path!(), level: $level, $ex)
    };
    (target: $target:expr, $ex:expr) => {
        $crate::trace_dbg!(target: $target, level: tracing::Level::DEBUG, $ex)
    };
    ($ex:expr) => {
        $crate::trace_dbg!(level: tracing::Level::DEBUG, $ex)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_name_the_crate() {
        if env::var("RUST_LOG").is_err() && env::var(LOG_ENV.as_str()).is_err() {
            let directives = log_directives();
            assert!(directives.starts_with("folio=info"));
            assert!(EnvFilter::try_new(directives).is_ok());
        }
    }
}
