//! Logging initialisation
//!
//! The core crate logs through the `log` facade; the subscriber installed here
//! forwards those records together with native `tracing` events.

use confirmation_dialog_core::error::{DialogError, DialogResult};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a stderr subscriber. `RUST_LOG` directives override `default_level`.
pub fn init_logging(default_level: tracing::Level) -> DialogResult<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true),
        )
        .with(EnvFilter::from_default_env().add_directive(default_level.into()))
        .try_init()
        .map_err(|e| DialogError::ConfigError(format!("failed to initialise logging: {e}")))
}
