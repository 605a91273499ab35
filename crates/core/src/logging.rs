use std::sync::Once;

use tracing_subscriber::{
    EnvFilter, filter::FilterFn, fmt::format::Format, layer::SubscriberExt,
    util::SubscriberInitExt,
};

/// Install the fmt subscriber. Safe to call more than once.
///
/// Only events from this workspace's crates are printed; the level comes from
/// `RUST_LOG` and defaults to `info`.
pub fn setup_logging() {
    static LOGGING_SETUP: Once = Once::new();

    LOGGING_SETUP.call_once(|| {
        let filter = FilterFn::new(|metadata| {
            metadata
                .module_path()
                .unwrap_or_default()
                .starts_with("tube_")
        });
        let layer = tracing_subscriber::fmt::layer()
            .event_format(Format::default().with_target(false).without_time())
            .with_ansi(false);

        // another subscriber may already be installed by the host
        let _ = tracing_subscriber::registry()
            .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
            .with(layer)
            .with(filter)
            .try_init();
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_is_idempotent() {
        setup_logging();
        setup_logging();
        tracing::info!("logging initialised");
    }
}
