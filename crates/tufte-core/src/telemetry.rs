// File: crates/tufte-core/src/telemetry.rs
// Summary: Opt-in tracing subscriber setup for hosts that do not install their own.

/// Installs a compact `tracing` subscriber filtered by `RUST_LOG` (default `info`).
///
/// Only active with the `telemetry` feature. Returns `false` when the feature is off
/// or a global subscriber is already installed.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
        return tracing_subscriber::fmt().with_env_filter(filter).with_target(false).compact().try_init().is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
