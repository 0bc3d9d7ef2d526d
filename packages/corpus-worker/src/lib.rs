//! Process bootstrap shared by the `processor` and `analyzer` binaries.

pub mod config;

pub use config::WorkerConfig;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,corpus=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
