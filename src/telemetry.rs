//! Telemetry helpers for applications embedding `chart-builder-rs`.
//!
//! The builder never fails loudly: dropped configuration subtrees surface
//! only as `tracing` events (and in [`crate::builder::BuildReport`]).
//! Hosts that want those events on a console can call
//! [`init_default_tracing`]; everyone else wires their own subscriber.

/// Initializes a default `tracing` subscriber when the `telemetry` feature is enabled.
///
/// The subscriber honors `RUST_LOG` and falls back to `info`. Returns `true`
/// when initialization succeeds, `false` when the feature is disabled or a
/// global subscriber was already installed by the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
