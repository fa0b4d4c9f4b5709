//! Logging and tracing initialization.
//!
//! All output goes to stderr; stdout is reserved for the JSON listing.

use tracing::Dispatch;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingConfig;

/// Initialize the global tracing subscriber with the given configuration.
/// `RUST_LOG` takes precedence over `config.level`.
pub fn init_logging(config: &LoggingConfig) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let dispatch = build_dispatch(env_filter, config.json, std::io::stderr);
    tracing::dispatcher::set_global_default(dispatch).ok();
}

/// Build a subscriber writing to `writer`, plain or JSON.
pub fn build_dispatch<W>(env_filter: EnvFilter, json: bool, writer: W) -> Dispatch
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let builder = fmt::Subscriber::builder()
        .with_env_filter(env_filter)
        .with_writer(writer);

    if json {
        Dispatch::new(builder.json().finish())
    } else {
        Dispatch::new(
            builder
                .with_target(true)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .finish(),
        )
    }
}
