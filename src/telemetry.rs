//! Opt-in `tracing` setup for hosts embedding the chart.
//!
//! The engine only emits events; nothing is printed until a subscriber is
//! installed. Hosts with their own subscriber can ignore this module and
//! add [`DEFAULT_FILTER`] to their filter string.

/// Filter used when `RUST_LOG` is unset: chart events at `info`, nothing
/// from other crates.
pub const DEFAULT_FILTER: &str = "bidir_bar_chart=info";

/// Installs a compact fmt subscriber filtered by `RUST_LOG`, falling back to
/// [`DEFAULT_FILTER`].
///
/// Returns `false` when the `telemetry` feature is off or a global
/// subscriber is already set.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
