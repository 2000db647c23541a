//! Tracing setup for hosts embedding the engine.
//!
//! Nothing here runs implicitly: a host either calls
//! [`init_default_tracing`] once at startup or installs its own
//! subscriber before creating an engine.

/// Installs a compact `tracing` subscriber scoped to this crate.
///
/// `RUST_LOG` overrides the default `barrace_rs=debug` filter. Returns
/// `false` without the `telemetry` feature, or when another subscriber
/// already claimed the global default.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("barrace_rs=debug"));

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
